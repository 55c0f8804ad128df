//! First-class invariants for bowling frames.
//!
//! Invariants are logical properties that must hold for every frame the
//! state machine produces. They are testable on their own and are
//! re-checked after each attempt in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so invariant sets compose as types.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod attempt_count;
pub mod rack_total;
pub mod state_consistent;

pub use attempt_count::AttemptCountInvariant;
pub use rack_total::RackTotalInvariant;
pub use state_consistent::StateConsistentInvariant;

/// All frame invariants as a composable set.
pub type FrameInvariants = (
    AttemptCountInvariant,
    RackTotalInvariant,
    StateConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bowling::{Frame, FrameNumber};

    #[test]
    fn test_invariant_set_holds_for_new_frame() {
        let frame = Frame::new(FrameNumber::FIRST);
        assert!(FrameInvariants::check_all(&frame).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_attempts() {
        let mut frame = Frame::new(FrameNumber::LAST);
        for pins in [10, 3, 7] {
            frame.record_attempt(pins).unwrap();
        }
        assert!(FrameInvariants::check_all(&frame).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut frame = Frame::new(FrameNumber::FIRST);
        frame.record_attempt(6).unwrap();
        frame.force_push(8);

        let violations = FrameInvariants::check_all(&frame).unwrap_err();
        assert!(!violations.is_empty());
        assert!(
            violations
                .iter()
                .any(|v| v.description == RackTotalInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let frame = Frame::new(FrameNumber::FIRST);

        type TwoInvariants = (AttemptCountInvariant, RackTotalInvariant);
        assert!(TwoInvariants::check_all(&frame).is_ok());
    }
}
