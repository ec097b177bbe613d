//! Authoritative match state
//!
//! One instance lives for the whole run, owned by the controller. RESET
//! restores the defaults in place.

use scoreboard_protocol::Alliance;

use super::events::Event;
use super::machine::MatchPhase;
use crate::config::{
    DEFAULT_MINUTES, DEFAULT_SECONDS, MAX_MINUTES, MAX_SCORE, MAX_SECONDS,
};

/// Timer, scores, phase and indicator flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatchState {
    minutes: u8,
    seconds: u8,
    red_score: u8,
    blue_score: u8,
    phase: MatchPhase,
    red_indicator: bool,
    blue_indicator: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Power-on state: 2:30 on the clock, 0-0, idle, indicators clear
    pub const fn new() -> Self {
        Self {
            minutes: DEFAULT_MINUTES,
            seconds: DEFAULT_SECONDS,
            red_score: 0,
            blue_score: 0,
            phase: MatchPhase::Idle,
            red_indicator: false,
            blue_indicator: false,
        }
    }

    /// Restore power-on defaults, indicator flags included
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    pub const fn red_score(&self) -> u8 {
        self.red_score
    }

    pub const fn blue_score(&self) -> u8 {
        self.blue_score
    }

    pub const fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// True only while the phase is Active
    pub const fn match_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Stored indicator flag (independent of phase)
    pub const fn indicator(&self, alliance: Alliance) -> bool {
        match alliance {
            Alliance::Red => self.red_indicator,
            Alliance::Blue => self.blue_indicator,
        }
    }

    /// Set both scores, saturating at 99
    pub fn set_scores(&mut self, red: u8, blue: u8) {
        self.red_score = red.min(MAX_SCORE);
        self.blue_score = blue.min(MAX_SCORE);
    }

    /// Set the clock, saturating at 99:59
    pub fn set_timer(&mut self, minutes: u8, seconds: u8) {
        self.minutes = minutes.min(MAX_MINUTES);
        self.seconds = seconds.min(MAX_SECONDS);
    }

    /// Set one alliance's indicator flag
    pub fn set_indicator(&mut self, alliance: Alliance, on: bool) {
        match alliance {
            Alliance::Red => self.red_indicator = on,
            Alliance::Blue => self.blue_indicator = on,
        }
    }

    /// Apply a phase event
    ///
    /// START lights both indicator flags, STOP clears them and RESET
    /// restores every field. Returns the new phase.
    pub fn apply(&mut self, event: Event) -> MatchPhase {
        match event {
            Event::Start => {
                self.phase = self.phase.transition(event);
                self.red_indicator = true;
                self.blue_indicator = true;
            }
            Event::Stop => {
                self.phase = self.phase.transition(event);
                self.red_indicator = false;
                self.blue_indicator = false;
            }
            Event::Reset => self.reset(),
        }
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = MatchState::new();
        assert_eq!(state.minutes(), 2);
        assert_eq!(state.seconds(), 30);
        assert_eq!(state.red_score(), 0);
        assert_eq!(state.blue_score(), 0);
        assert_eq!(state.phase(), MatchPhase::Idle);
        assert!(!state.match_active());
        assert!(!state.indicator(Alliance::Red));
        assert!(!state.indicator(Alliance::Blue));
    }

    #[test]
    fn test_values_saturate() {
        let mut state = MatchState::new();
        state.set_scores(200, 99);
        state.set_timer(150, 60);
        assert_eq!(state.red_score(), 99);
        assert_eq!(state.blue_score(), 99);
        assert_eq!(state.minutes(), 99);
        assert_eq!(state.seconds(), 59);
    }

    #[test]
    fn test_start_stop_start() {
        let mut state = MatchState::new();
        state.apply(Event::Start);
        state.apply(Event::Stop);
        assert_eq!(state.phase(), MatchPhase::Paused);
        assert!(!state.indicator(Alliance::Red));

        state.apply(Event::Start);
        assert!(state.match_active());
        assert!(state.indicator(Alliance::Red));
        assert!(state.indicator(Alliance::Blue));
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = MatchState::new();
        state.set_scores(12, 34);
        state.set_timer(0, 5);
        state.apply(Event::Start);
        state.set_indicator(Alliance::Blue, false);

        assert_eq!(state.apply(Event::Reset), MatchPhase::Idle);
        assert_eq!(state, MatchState::new());
    }

    #[test]
    fn test_set_indicator_touches_one_alliance() {
        let mut state = MatchState::new();
        state.set_indicator(Alliance::Red, true);
        assert!(state.indicator(Alliance::Red));
        assert!(!state.indicator(Alliance::Blue));
    }
}
