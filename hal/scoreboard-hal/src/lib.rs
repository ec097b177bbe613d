//! Scoreboard Hardware Abstraction Layer
//!
//! This crate defines the hardware-facing capabilities the controller logic
//! is written against. Chip-specific code (the RP2040 firmware) provides the
//! implementations; host tests provide recording fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  scoreboard-core (dispatcher, mux)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  scoreboard-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  embedded-hal │       │  host fakes   │
//! │  pins (RP2040)│       │   (tests)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Single digital output (alliance indicators)
//! - [`port::OutputPort`] - Multi-line output bus (segments, digit select)
//! - [`uart::UartRx`] - Serial receive with a bounded wait

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod port;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{EhPin, OutputPin};
pub use port::{OutputPort, PinBank, PortError};
pub use uart::{UartConfig, UartRx};
