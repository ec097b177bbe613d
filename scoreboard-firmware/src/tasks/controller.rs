//! Foreground controller task
//!
//! Receives bytes from the host, runs them through the controller and
//! refreshes the indicator outputs after every wait. Each wait is bounded
//! by the byte timeout so a sender that stalls mid-packet only costs that
//! packet.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{with_timeout, Duration, Instant};
use embedded_io_async::Read;

use scoreboard_core::Controller;

use crate::board::{IndicatorPins, CONFIG};
use crate::channels::{DISPLAY, REPLY_CHANNEL};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// How often link statistics are logged
const STATS_INTERVAL: Duration = Duration::from_secs(10);

/// Controller task - packet receive, dispatch and indicator loop
#[embassy_executor::task]
pub async fn controller_task(mut rx: BufferedUartRx, mut indicators: IndicatorPins) {
    info!("Controller task started");

    let mut controller = Controller::new(&DISPLAY, &CONFIG);
    let timeout = Duration::from_millis(controller.byte_timeout_ms() as u64);
    let mut buf = [0u8; RX_BUF_SIZE];
    let mut last_report = Instant::now();

    loop {
        match with_timeout(timeout, rx.read(&mut buf)).await {
            Ok(Ok(n)) => {
                trace!("RX: {} bytes", n);
                let before = *controller.state();
                let dropped = controller.stats().dropped();

                for &byte in &buf[..n] {
                    if let Some(reply) = controller.feed(byte) {
                        debug!("PING");
                        if REPLY_CHANNEL.try_send(reply).is_err() {
                            warn!("Reply channel full, dropping ACK");
                        }
                    }
                }

                if controller.stats().dropped() != dropped {
                    trace!("Dropped invalid packet");
                }
                if *controller.state() != before {
                    debug!("State: {:?}", controller.state());
                }
            }
            Ok(Err(e)) => {
                warn!("UART read error: {:?}", e);
            }
            Err(_) => {
                if controller.byte_timeout() {
                    trace!("Partial packet abandoned");
                }
            }
        }

        indicators.apply(controller.state());

        if last_report.elapsed() >= STATS_INTERVAL {
            debug!("Link: {:?}", controller.stats());
            last_report = Instant::now();
        }
    }
}
