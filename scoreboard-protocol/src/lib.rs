//! Scoreboard Serial Protocol
//!
//! This crate defines the UART protocol between the match host (the
//! vision/scoring application) and the scoreboard controller. The host is
//! authoritative: it pushes match state, and the controller only ever
//! answers a PING.
//!
//! # Protocol Overview
//!
//! All commands use a simple binary packet format at 9600 baud, 8N1:
//! ```text
//! ┌───────┬─────┬─────┬────────────┬──────────┬──────┐
//! │ START │ CMD │ LEN │ DATA       │ CHECKSUM │ END  │
//! │ 0xAA  │ 1B  │ 1B  │ 0–10B      │ 1B       │ 0x55 │
//! └───────┴─────┴─────┴────────────┴──────────┴──────┘
//! ```
//!
//! CHECKSUM is the XOR of CMD, LEN and every DATA byte. A packet that fails
//! any check is dropped without a reply; the sender is expected to resend.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{
    checksum, FrameError, FrameParser, Packet, END_MARKER, MAX_DATA_LEN, MAX_PACKET_SIZE,
    START_MARKER,
};
pub use messages::{Alliance, Command, CommandError, Reply, ACK_REPLY};
