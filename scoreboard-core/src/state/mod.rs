//! Match phase state machine and match state
//!
//! The phase is explicit, finite and deterministic. Indicator outputs are
//! derived from it, so lit indicators outside an active match cannot be
//! expressed.

pub mod events;
pub mod machine;
pub mod match_state;

pub use events::Event;
pub use machine::MatchPhase;
pub use match_state::MatchState;
