//! Alliance indicator outputs
//!
//! Outputs follow the stored flags only while the match is active;
//! in every other phase both are forced off.

use scoreboard_hal::OutputPin;
use scoreboard_protocol::Alliance;

use crate::state::MatchState;

/// Desired indicator levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorOutputs {
    pub red: bool,
    pub blue: bool,
}

impl IndicatorOutputs {
    /// Both outputs off
    pub const OFF: Self = Self {
        red: false,
        blue: false,
    };

    /// Levels the indicator pins should show for `state`
    pub fn from_state(state: &MatchState) -> Self {
        if !state.match_active() {
            return Self::OFF;
        }
        Self {
            red: state.indicator(Alliance::Red),
            blue: state.indicator(Alliance::Blue),
        }
    }
}

/// The two indicator output pins
pub struct Indicators<P> {
    red: P,
    blue: P,
}

impl<P: OutputPin> Indicators<P> {
    /// Take the pins and switch both off
    pub fn new(mut red: P, mut blue: P) -> Self {
        red.set_low();
        blue.set_low();
        Self { red, blue }
    }

    /// Drive the pins from the current state
    pub fn apply(&mut self, state: &MatchState) -> IndicatorOutputs {
        let outputs = IndicatorOutputs::from_state(state);
        self.red.set_state(outputs.red);
        self.blue.set_state(outputs.blue);
        outputs
    }

    /// Levels currently on the pins
    pub fn outputs(&self) -> IndicatorOutputs {
        IndicatorOutputs {
            red: self.red.is_set_high(),
            blue: self.blue.is_set_high(),
        }
    }
}
