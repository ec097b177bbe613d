//! Scoreboard - Match Scoreboard Controller Firmware
//!
//! Receives match state from the host over UART and multiplexes it onto a
//! bank of seven-segment digits, with one indicator output per alliance.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use scoreboard_core::{Indicators, Multiplexer};
use scoreboard_hal::{EhPin, PinBank};

mod board;
mod channels;
mod tasks;

use board::{CONFIG, SERIAL};
use channels::DISPLAY;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Scoreboard firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Segments first, driven low, so selecting digits below lights nothing
    let segments = PinBank::active_high([
        EhPin::new(Output::new(p.PIN_2, Level::Low)), // a
        EhPin::new(Output::new(p.PIN_3, Level::Low)), // b
        EhPin::new(Output::new(p.PIN_4, Level::Low)), // c
        EhPin::new(Output::new(p.PIN_5, Level::Low)), // d
        EhPin::new(Output::new(p.PIN_6, Level::Low)), // e
        EhPin::new(Output::new(p.PIN_7, Level::Low)), // f
        EhPin::new(Output::new(p.PIN_8, Level::Low)), // g
    ]);
    let digit_pins = [
        EhPin::new(Output::new(p.PIN_9, Level::Low)),
        EhPin::new(Output::new(p.PIN_10, Level::Low)),
        EhPin::new(Output::new(p.PIN_11, Level::Low)),
        EhPin::new(Output::new(p.PIN_12, Level::Low)),
        EhPin::new(Output::new(p.PIN_13, Level::Low)),
        EhPin::new(Output::new(p.PIN_14, Level::Low)),
    ];
    let digits = PinBank::new(digit_pins, CONFIG.digit_select_active_low);

    let mux = unwrap!(Multiplexer::new(&DISPLAY, segments, digits, CONFIG.layout));
    info!("Display initialized: {:?} layout", CONFIG.layout);

    let indicators = Indicators::new(
        EhPin::new(Output::new(p.PIN_17, Level::Low)),
        EhPin::new(Output::new(p.PIN_18, Level::Low)),
    );

    // Setup UART for the host link
    let uart_config = unwrap!(board::uart_config(&SERIAL));
    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!(
        "UART initialized: {} baud, {} us per byte",
        SERIAL.baudrate,
        SERIAL.byte_time_us()
    );

    spawner.spawn(tasks::multiplex_task(mux)).unwrap();
    spawner.spawn(tasks::reply_tx_task(tx)).unwrap();
    spawner.spawn(tasks::controller_task(rx, indicators)).unwrap();

    info!("All tasks spawned, firmware running");
}
