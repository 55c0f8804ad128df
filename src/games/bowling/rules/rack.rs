//! Pin rack bookkeeping.

use super::super::types::{Pins, PINS_PER_FRAME_MAX};
use tracing::instrument;

/// Pins standing and balls already thrown at the current rack.
///
/// The rack is reset to ten whenever it is cleared, which is what
/// lets the tenth frame's bonus balls count a fresh set of pins.
fn rack(attempts: &[Pins]) -> (u8, usize) {
    attempts
        .iter()
        .fold((PINS_PER_FRAME_MAX, 0), |(standing, thrown), pins| {
            match standing.saturating_sub(pins.get()) {
                0 => (PINS_PER_FRAME_MAX, 0),
                left => (left, thrown + 1),
            }
        })
}

/// Pins standing before the next ball, given the balls thrown so far
/// in the frame.
#[instrument]
pub fn standing_pins(attempts: &[Pins]) -> u8 {
    rack(attempts).0
}

/// Returns true if the next ball is the first at its rack.
#[instrument]
pub fn on_fresh_rack(previous: &[Pins]) -> bool {
    rack(previous).1 == 0
}
