//! State consistency invariant: the recorded state matches the balls.

use super::super::action::FrameState;
use super::super::rules::is_complete;
use super::super::Frame;
use super::Invariant;

/// Invariant: a frame is `Complete` exactly when the rules say no more
/// balls are allowed, and otherwise awaits the next attempt in sequence.
pub struct StateConsistentInvariant;

impl Invariant<Frame> for StateConsistentInvariant {
    fn holds(frame: &Frame) -> bool {
        let done = is_complete(frame.number(), frame.attempts());
        match frame.state() {
            FrameState::Complete => done,
            FrameState::AwaitingAttempt(n) => {
                !done && usize::from(n) == frame.attempts().len() + 1
            }
        }
    }

    fn description() -> &'static str {
        "Frame state agrees with the balls recorded"
    }
}
