//! Attempt count invariant: a frame never holds more balls than allowed.

use super::super::rules::max_attempts;
use super::super::Frame;
use super::Invariant;

/// Invariant: ball count stays within the frame's limit.
///
/// Frames 1-9 hold at most two balls, and only one after a strike.
/// The tenth frame holds at most three.
pub struct AttemptCountInvariant;

impl Invariant<Frame> for AttemptCountInvariant {
    fn holds(frame: &Frame) -> bool {
        let attempts = frame.attempts();

        if attempts.len() > max_attempts(frame.number()) {
            return false;
        }

        // Outside the tenth frame nothing follows a strike
        !(attempts.len() > 1 && !frame.is_last() && attempts[0].is_all())
    }

    fn description() -> &'static str {
        "Frame holds no more balls than its number allows"
    }
}
