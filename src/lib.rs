//! Strictly Bowling library - type-safe ten-pin bowling scoring
//!
//! Frames only accept legal rolls, games move through typed phases, and
//! scores are derived from the ball stream on demand.
//!
//! # Architecture
//!
//! - **Games**: frames, players, scoring and the setup/in-progress/finished phases
//! - **Players**: bowlers that supply rolls (console or scripted)
//! - **Orchestrator**: the turn loop joining a bowler to a game
//! - **Config**: player lists loaded from TOML
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{GameResult, GameSetup};
//!
//! # fn example() -> anyhow::Result<()> {
//! let game = GameSetup::with_players(["Ada"])?.start()?;
//! match game.replay(&[10; 12])? {
//!     GameResult::Finished(done) => assert_eq!(done.standings()[0].score, 300),
//!     GameResult::InProgress(_) => unreachable!(),
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game_config;
mod games;
mod orchestrator;
mod players;

pub mod cli;

// Crate-level exports - Configuration
pub use game_config::{ConfigError, GameConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator, PlayOutcome};

// Crate-level exports - Bowlers
pub use players::{Bowler, ConsoleBowler, RollRequest, ScriptedBowler};

// Crate-level exports - Game types (bowling)
pub use games::bowling::{
    AttemptContract, AttemptCountInvariant, AttemptOutcome, Classification, Contract, Frame,
    FrameCard, FrameInvariants, FrameNumber, FrameOpen, FrameState, GameFinished,
    GameInProgress, GameResult, GameSetup, GameState, Invariant, InvariantSet,
    InvariantViolation, InvalidAttempt, LegalRoll, Outcome, Pins, PinsStanding, Player,
    PlayerError, RackTotalInvariant, ReplayError, ScoreAggregator, ScoreError, Scorecard,
    SetupError, Standing, StateConsistentInvariant, SubmitError, Turn, FRAMES_PER_GAME,
    MAX_PLAYERS, PINS_PER_FRAME_MAX, marks, parse_pins,
};
