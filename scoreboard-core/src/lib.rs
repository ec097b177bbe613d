//! Board-agnostic core logic for the match scoreboard controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Match phase state machine and the authoritative match state
//! - Command dispatch and the receive path
//! - Display buffer building, atomic publication and multiplexing
//! - Indicator output logic
//! - Configuration constants and link statistics

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod display;
pub mod indicators;
pub mod state;
pub mod stats;

pub use config::{DisplayLayout, ScoreboardConfig};
pub use controller::Controller;
pub use display::{DisplayBuffer, DisplayCell, Multiplexer};
pub use indicators::{IndicatorOutputs, Indicators};
pub use state::{Event, MatchPhase, MatchState};
pub use stats::LinkStats;
