//! Match phase definition
//!
//! Indicator behavior is a function of the current phase.

use super::events::Event;

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchPhase {
    /// Power-on or after RESET; nothing running
    #[default]
    Idle,
    /// Match running, indicators live
    Active,
    /// Match stopped, can be resumed with START
    Paused,
}

impl MatchPhase {
    /// Check if the match is running
    pub const fn is_active(&self) -> bool {
        matches!(self, MatchPhase::Active)
    }

    /// Process an event and return the next phase
    ///
    /// There is no terminal phase; RESET is the only way back to Idle.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use MatchPhase::*;

        match (self, event) {
            (Idle, Start) => Active,
            (Active, Stop) => Paused,
            (Paused, Start) => Active,
            (Active, Reset) | (Paused, Reset) => Idle,

            // Default: stay in current phase
            _ => self,
        }
    }
}
