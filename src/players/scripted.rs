//! Bowler that throws a fixed sequence of rolls.

use super::{Bowler, RollRequest};
use crate::games::bowling::InvalidAttempt;
use crate::orchestrator::GameEvent;
use anyhow::Result;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Plays back rolls in order and stops at the first refused one.
///
/// Events are kept so callers can inspect what happened.
#[derive(Debug, Default)]
pub struct ScriptedBowler {
    rolls: VecDeque<String>,
    events: Vec<GameEvent>,
    rejections: Vec<InvalidAttempt>,
}

impl ScriptedBowler {
    /// Creates a bowler from raw roll entries.
    pub fn new<I, S>(rolls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rolls: rolls.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Events seen so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Rolls refused so far.
    pub fn rejections(&self) -> &[InvalidAttempt] {
        &self.rejections
    }

    /// Rolls not yet thrown.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Bowler for ScriptedBowler {
    fn next_roll(&mut self, request: &RollRequest) -> Result<Option<String>> {
        let roll = self.rolls.pop_front();
        debug!(player = %request.player, frame = %request.frame, ?roll, "Scripted roll");
        Ok(roll)
    }

    fn rejected(&mut self, request: &RollRequest, error: &InvalidAttempt) -> Result<bool> {
        warn!(player = %request.player, %error, "Scripted roll refused");
        self.rejections.push(error.clone());
        Ok(false)
    }

    fn notify(&mut self, event: &GameEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
