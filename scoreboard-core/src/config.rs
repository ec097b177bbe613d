//! Configuration constants and types
//!
//! Everything here is fixed at build time; there is no persisted
//! configuration on the controller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use scoreboard_protocol::messages::{MAX_MINUTES, MAX_SCORE, MAX_SECONDS};

/// Power-on and post-reset timer minutes
pub const DEFAULT_MINUTES: u8 = 2;

/// Power-on and post-reset timer seconds
pub const DEFAULT_SECONDS: u8 = 30;

/// Longest wait for the next byte before a partial packet is abandoned
///
/// One byte takes about 1.04 ms at 9600 baud.
pub const BYTE_TIMEOUT_MS: u32 = 50;

/// Multiplex period: one digit slot per tick, 1 kHz
pub const MULTIPLEX_PERIOD_US: u32 = 1000;

/// Largest number of digit slots any layout uses
pub const MAX_SLOTS: usize = 8;

/// Number of segment lines (a..g) on the segment port
pub const SEGMENT_LINES: u8 = 7;

/// Which values are wired to physical digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayLayout {
    /// Timer and red score: `[MM, SS, RR]`
    #[default]
    Six,
    /// Timer, red and blue score: `[MM, SS, RR, BB]`
    Eight,
}

impl DisplayLayout {
    /// Number of physical digit slots
    pub const fn slot_count(self) -> usize {
        match self {
            DisplayLayout::Six => 6,
            DisplayLayout::Eight => 8,
        }
    }

    /// Whether the blue score has its own digits
    pub const fn shows_blue(self) -> bool {
        matches!(self, DisplayLayout::Eight)
    }
}

/// Controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreboardConfig {
    /// Digit layout
    pub layout: DisplayLayout,
    /// Per-byte receive timeout (ms)
    pub byte_timeout_ms: u32,
    /// Multiplex tick period (us)
    pub multiplex_period_us: u32,
    /// Digit-select lines are asserted low (common-cathode driver transistors)
    pub digit_select_active_low: bool,
}

impl ScoreboardConfig {
    /// Shipped hardware: six digits, active-low digit selects
    pub const DEFAULT: Self = Self {
        layout: DisplayLayout::Six,
        byte_timeout_ms: BYTE_TIMEOUT_MS,
        multiplex_period_us: MULTIPLEX_PERIOD_US,
        digit_select_active_low: true,
    };

    /// Full refresh rate of the display in Hz (every slot shown once)
    pub const fn refresh_rate_hz(&self) -> u32 {
        let cycle_us = self.multiplex_period_us * self.layout.slot_count() as u32;
        if cycle_us == 0 {
            0
        } else {
            1_000_000 / cycle_us
        }
    }
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
