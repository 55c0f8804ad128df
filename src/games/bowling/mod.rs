//! Ten-pin bowling: frame state machine, scoring and game phases.

mod action;
mod contracts;
mod frame;
mod invariants;
mod phases;
mod player;
mod rules;
mod scorecard;
mod scoring;
mod state;
mod typestate;
mod types;

pub use action::{parse_pins, AttemptOutcome, FrameState, InvalidAttempt};
pub use contracts::{AttemptContract, Contract, FrameOpen, LegalRoll, PinsStanding};
pub use frame::Frame;
pub use invariants::{
    AttemptCountInvariant, FrameInvariants, Invariant, InvariantSet, InvariantViolation,
    RackTotalInvariant, StateConsistentInvariant,
};
pub use phases::{Outcome, Standing};
pub use player::{Player, PlayerError};
pub use scorecard::{marks, FrameCard, Scorecard};
pub use scoring::{ScoreAggregator, ScoreError};
pub use state::{GameState, SetupError, Turn};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup, ReplayError, SubmitError};
pub use types::{
    Classification, FrameNumber, Pins, FRAMES_PER_GAME, MAX_PLAYERS, PINS_PER_FRAME_MAX,
};
