//! Contract-based validation for frame attempts.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} roll {Q}

use super::action::InvalidAttempt;
use super::invariants::{FrameInvariants, InvariantSet, InvariantViolation};
use super::rules::standing_pins;
use super::types::Pins;
use super::Frame;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Error reported when the precondition fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Attempt Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the frame must still accept balls.
pub struct FrameOpen;

impl FrameOpen {
    #[instrument(skip(frame), fields(frame = %frame.number()))]
    pub fn check(frame: &Frame) -> Result<(), InvalidAttempt> {
        if frame.is_complete() {
            Err(InvalidAttempt::FrameComplete)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the ball cannot knock down more pins than are standing.
pub struct PinsStanding;

impl PinsStanding {
    #[instrument(skip(frame), fields(frame = %frame.number()))]
    pub fn check(pins: Pins, frame: &Frame) -> Result<(), InvalidAttempt> {
        let standing = standing_pins(frame.attempts());
        if pins.get() > standing {
            Err(InvalidAttempt::ExceedsFrameTotal {
                standing,
                attempted: pins.get(),
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a roll is legal if the frame is open and the
/// pins are standing.
pub struct LegalRoll;

impl LegalRoll {
    /// Validates all preconditions for a roll.
    #[instrument(skip(frame))]
    pub fn check(pins: Pins, frame: &Frame) -> Result<(), InvalidAttempt> {
        FrameOpen::check(frame)?;
        PinsStanding::check(pins, frame)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Attempt Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for recording a ball in a frame.
///
/// Preconditions:
/// - Frame is not complete
/// - Pins do not exceed those standing
///
/// Postconditions:
/// - Exactly one ball was appended, earlier balls untouched
/// - All frame invariants hold
pub struct AttemptContract;

impl Contract<Frame, Pins> for AttemptContract {
    type Error = InvalidAttempt;

    fn pre(frame: &Frame, pins: &Pins) -> Result<(), InvalidAttempt> {
        LegalRoll::check(*pins, frame)
    }

    fn post(before: &Frame, after: &Frame) -> Result<(), Vec<InvariantViolation>> {
        let appended = after.attempts().len() == before.attempts().len() + 1
            && after.attempts().starts_with(before.attempts())
            && after.number() == before.number();

        let mut violations = match FrameInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if !appended {
            violations.push(InvariantViolation::new(
                "Attempt appends exactly one ball to the frame",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(frame = %after.number(), count = violations.len(), "Attempt postcondition failed");
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bowling::FrameNumber;

    fn pins(value: i64) -> Pins {
        Pins::new(value).unwrap()
    }

    #[test]
    fn test_precondition_open_frame() {
        let frame = Frame::new(FrameNumber::FIRST);
        assert!(AttemptContract::pre(&frame, &pins(10)).is_ok());
    }

    #[test]
    fn test_precondition_complete_frame() {
        let mut frame = Frame::new(FrameNumber::FIRST);
        frame.record_attempt(10).unwrap();
        assert_eq!(
            AttemptContract::pre(&frame, &pins(0)),
            Err(InvalidAttempt::FrameComplete)
        );
    }

    #[test]
    fn test_precondition_too_many_pins() {
        let mut frame = Frame::new(FrameNumber::FIRST);
        frame.record_attempt(7).unwrap();
        assert_eq!(
            AttemptContract::pre(&frame, &pins(4)),
            Err(InvalidAttempt::ExceedsFrameTotal {
                standing: 3,
                attempted: 4
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_roll() {
        let before = Frame::new(FrameNumber::FIRST);
        let mut after = before.clone();
        after.record_attempt(3).unwrap();
        assert!(AttemptContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Frame::new(FrameNumber::FIRST);
        let mut after = before.clone();
        after.force_push(3);
        after.force_push(3);
        assert!(AttemptContract::post(&before, &after).is_err());
    }
}
