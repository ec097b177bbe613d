//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels or the
//! shared display cell.

pub mod controller;
pub mod multiplex;
pub mod reply_tx;

pub use controller::controller_task;
pub use multiplex::multiplex_task;
pub use reply_tx::reply_tx_task;
