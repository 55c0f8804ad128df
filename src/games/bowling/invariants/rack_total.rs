//! Rack total invariant: no ball knocks down more pins than are standing.

use super::super::rules::standing_pins;
use super::super::Frame;
use super::Invariant;

/// Invariant: every ball fits the rack it was thrown at.
pub struct RackTotalInvariant;

impl Invariant<Frame> for RackTotalInvariant {
    fn holds(frame: &Frame) -> bool {
        let attempts = frame.attempts();
        (0..attempts.len()).all(|i| attempts[i].get() <= standing_pins(&attempts[..i]))
    }

    fn description() -> &'static str {
        "No ball knocks down more pins than are standing"
    }
}
