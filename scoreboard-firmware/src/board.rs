//! Board pin map and peripheral settings
//!
//! Default wiring on an RP2040 board:
//!
//! | Function        | GPIO      |
//! |-----------------|-----------|
//! | UART0 TX / RX   | 0 / 1     |
//! | Segments a..g   | 2 - 8     |
//! | Digit selects   | 9 - 14    |
//! | Red indicator   | 17        |
//! | Blue indicator  | 18        |
//!
//! Digit selects drive the cathode transistors and are active-low.

use embassy_rp::gpio::Output;
use embassy_rp::uart;

use scoreboard_core::{Indicators, Multiplexer, ScoreboardConfig};
use scoreboard_hal::uart::{DataBits, Parity, StopBits};
use scoreboard_hal::{EhPin, PinBank, UartConfig};

/// Controller configuration for this board
pub const CONFIG: ScoreboardConfig = ScoreboardConfig::DEFAULT;

/// Serial link settings
pub const SERIAL: UartConfig = UartConfig::SCOREBOARD;

/// Segment lines a..g
pub const SEGMENT_COUNT: usize = 7;

/// Digit-select lines wired on this board
pub const DIGIT_COUNT: usize = 6;

const _: () = assert!(
    DIGIT_COUNT == CONFIG.layout.slot_count(),
    "digit-select pin count must match the display layout"
);

pub type BoardPin = EhPin<Output<'static>>;
pub type SegmentPort = PinBank<BoardPin, SEGMENT_COUNT>;
pub type DigitPort = PinBank<BoardPin, DIGIT_COUNT>;
pub type DisplayMux = Multiplexer<'static, SegmentPort, DigitPort>;
pub type IndicatorPins = Indicators<BoardPin>;

/// Convert link settings to the RP2040 UART configuration
///
/// Returns `None` for settings the PL011 cannot produce (nine data bits).
pub fn uart_config(config: &UartConfig) -> Option<uart::Config> {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
        DataBits::Nine => return None,
    };
    out.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    Some(out)
}
