//! Bowler trait and implementations.
//!
//! The scoring engine never prompts anyone. A [`Bowler`] supplies raw
//! rolls and decides whether to retry after a refused one; the
//! orchestrator does the rest.

mod console;
mod scripted;

pub use console::ConsoleBowler;
pub use scripted::ScriptedBowler;

use crate::games::bowling::{FrameNumber, InvalidAttempt};
use crate::orchestrator::GameEvent;
use anyhow::Result;

/// Who is up and which ball they are throwing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollRequest {
    /// Name of the player to bowl.
    pub player: String,
    /// Frame being bowled.
    pub frame: FrameNumber,
    /// Attempt within the frame (1-3).
    pub attempt: u8,
}

/// Source of rolls for a game.
pub trait Bowler {
    /// Asks for the next roll as raw text.
    ///
    /// Returns `None` when the player wants to stop.
    fn next_roll(&mut self, request: &RollRequest) -> Result<Option<String>>;

    /// Reports a refused roll. Returns true to try again.
    fn rejected(&mut self, request: &RollRequest, error: &InvalidAttempt) -> Result<bool>;

    /// Shows a game event.
    fn notify(&mut self, event: &GameEvent) -> Result<()>;
}
