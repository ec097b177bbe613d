//! Display multiplex task
//!
//! Shows one digit slot per tick. Runs independently of the controller;
//! the only shared data is the display cell.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::board::{DisplayMux, CONFIG};

/// Multiplex task - refreshes one digit every period
#[embassy_executor::task]
pub async fn multiplex_task(mut mux: DisplayMux) {
    info!(
        "Multiplex task started: {} slots, {} Hz refresh",
        mux.slot_count(),
        CONFIG.refresh_rate_hz()
    );

    let mut ticker = Ticker::every(Duration::from_micros(CONFIG.multiplex_period_us as u64));

    loop {
        mux.tick();
        ticker.next().await;
    }
}
