//! Frame state machine.
//!
//! A frame moves from `AwaitingAttempt(1)` through at most three attempts
//! to `Complete`. Each roll is checked against [`AttemptContract`] before
//! it is recorded, so a frame only ever holds a legal sequence of balls.

use super::action::{parse_pins, AttemptOutcome, FrameState, InvalidAttempt};
use super::contracts::{AttemptContract, Contract};
use super::rules;
use super::types::{Classification, FrameNumber, Pins};
use serde::Serialize;
use tracing::{debug, instrument};

/// One frame of one player.
///
/// Classification is derived from the balls on demand rather than
/// stored alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    number: FrameNumber,
    attempts: Vec<Pins>,
    state: FrameState,
}

impl Frame {
    /// Creates an empty frame awaiting its first ball.
    #[instrument]
    pub fn new(number: FrameNumber) -> Self {
        Self {
            number,
            attempts: Vec::with_capacity(rules::max_attempts(number)),
            state: FrameState::AwaitingAttempt(1),
        }
    }

    /// Returns the frame number.
    pub fn number(&self) -> FrameNumber {
        self.number
    }

    /// Returns the balls recorded so far, in order.
    pub fn attempts(&self) -> &[Pins] {
        &self.attempts
    }

    /// Returns the current state.
    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Returns true once no further balls are legal.
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Returns true for the tenth frame.
    pub fn is_last(&self) -> bool {
        self.number.is_last()
    }

    /// Open, spare or strike, once the balls thrown decide it.
    pub fn classification(&self) -> Option<Classification> {
        rules::classify(&self.attempts)
    }

    /// Pins knocked down in this frame, without bonus.
    pub fn pinfall(&self) -> u16 {
        self.attempts.iter().map(|p| u16::from(p.get())).sum()
    }

    /// Pins standing for the next ball.
    pub fn standing_pins(&self) -> u8 {
        rules::standing_pins(&self.attempts)
    }

    /// Records a ball from a raw integer.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `pins` is outside 0-10
    /// - `ExceedsFrameTotal` if more pins than are standing
    /// - `FrameComplete` if the frame already finished
    pub fn record_attempt(&mut self, pins: i64) -> Result<AttemptOutcome, InvalidAttempt> {
        let pins = Pins::new(pins).ok_or(InvalidAttempt::OutOfRange(pins))?;
        self.roll(pins)
    }

    /// Records a ball from user-entered text.
    ///
    /// # Errors
    ///
    /// As [`Frame::record_attempt`], plus `NotANumber` for text that is
    /// not an integer.
    pub fn record_input(&mut self, input: &str) -> Result<AttemptOutcome, InvalidAttempt> {
        let pins = parse_pins(input)?;
        self.roll(pins)
    }

    /// Records a validated ball.
    ///
    /// Only the frame itself changes; there is no other side effect.
    #[instrument(skip(self), fields(frame = %self.number, state = %self.state))]
    pub fn roll(&mut self, pins: Pins) -> Result<AttemptOutcome, InvalidAttempt> {
        AttemptContract::pre(self, &pins)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let previous = self.classification();
        self.attempts.push(pins);
        self.state = if rules::is_complete(self.number, &self.attempts) {
            FrameState::Complete
        } else {
            // At most three balls, so the count always fits
            FrameState::AwaitingAttempt(self.attempts.len() as u8 + 1)
        };

        #[cfg(debug_assertions)]
        AttemptContract::post(&before, self)
            .unwrap_or_else(|violations| panic!("Frame invariants violated: {:?}", violations));

        let bonus = match (previous, self.classification()) {
            (None, Some(earned)) if earned.earns_bonus() => Some(earned),
            _ => None,
        };

        debug!(state = %self.state, ?bonus, "Attempt recorded");
        Ok(AttemptOutcome {
            state: self.state,
            bonus,
        })
    }

    /// Appends a ball with no validation, for invariant tests.
    #[cfg(test)]
    pub(crate) fn force_push(&mut self, pins: u8) {
        self.attempts.push(Pins::new(i64::from(pins)).expect("pins in range"));
    }
}
