//! Attempt-level actions and their outcomes.
//!
//! A roll is a domain event: it is validated against the frame before
//! being recorded, and the outcome tells the caller what happened.

use super::types::{Classification, Pins, PINS_PER_FRAME_MAX};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use tracing::instrument;

/// Where a frame stands between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameState {
    /// Waiting for the given attempt (1-3).
    AwaitingAttempt(u8),
    /// No further attempts are legal.
    Complete,
}

impl FrameState {
    /// Returns true once the frame is finished.
    pub fn is_complete(self) -> bool {
        matches!(self, FrameState::Complete)
    }
}

impl std::fmt::Display for FrameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameState::AwaitingAttempt(n) => write!(f, "awaiting attempt {}", n),
            FrameState::Complete => write!(f, "complete"),
        }
    }
}

/// Result of a successfully recorded attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    /// Frame state after the attempt.
    pub state: FrameState,
    /// Strike or spare earned by this very attempt, if any.
    pub bonus: Option<Classification>,
}

impl AttemptOutcome {
    /// Returns true if the frame finished with this attempt.
    pub fn completed_frame(&self) -> bool {
        self.state.is_complete()
    }
}

/// Reasons an attempt is refused.
///
/// All variants are recoverable: the caller asks for another roll.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidAttempt {
    /// Input was not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// Pin count outside 0-10.
    #[display("{} is out of range (0-{})", _0, PINS_PER_FRAME_MAX)]
    OutOfRange(i64),

    /// More pins than are standing on the rack.
    #[display("only {} pins are standing, {} is too many", standing, attempted)]
    ExceedsFrameTotal {
        /// Pins still standing before the roll.
        standing: u8,
        /// Pins the roll claimed.
        attempted: u8,
    },

    /// The frame already finished.
    #[display("the frame is already complete")]
    FrameComplete,
}

impl std::error::Error for InvalidAttempt {}

/// Parses raw text into a pin count.
///
/// Integers that do not fit are reported as out of range rather than
/// as non-numbers.
#[instrument]
pub fn parse_pins(input: &str) -> Result<Pins, InvalidAttempt> {
    let trimmed = input.trim();
    let value = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => InvalidAttempt::OutOfRange(i64::MAX),
                IntErrorKind::NegOverflow => InvalidAttempt::OutOfRange(i64::MIN),
                _ => InvalidAttempt::NotANumber(trimmed.to_string()),
            });
        }
    };
    Pins::new(value).ok_or(InvalidAttempt::OutOfRange(value))
}
