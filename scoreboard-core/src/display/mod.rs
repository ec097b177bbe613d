//! Seven-segment display path
//!
//! The foreground builds a [`DisplayBuffer`] from the match state and
//! publishes it through a [`DisplayCell`]; the periodic [`Multiplexer`]
//! reads the cell and drives one digit per tick.

pub mod buffer;
pub mod cell;
pub mod multiplex;
pub mod segments;

pub use buffer::{DisplayBuffer, DisplayedValues};
pub use cell::DisplayCell;
pub use multiplex::Multiplexer;
