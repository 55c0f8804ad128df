//! Bowler that reads rolls from a text stream.

use super::{Bowler, RollRequest};
use crate::games::bowling::{GameSetup, InvalidAttempt, MAX_PLAYERS};
use crate::orchestrator::GameEvent;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Words that end the game at any prompt.
const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Interactive bowler over any line-based input and output,
/// normally stdin and stdout.
pub struct ConsoleBowler<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleBowler<R, W> {
    /// Creates a console bowler.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the bowler, returning the output (for inspection in tests).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a prompt and reads one line.
    ///
    /// `None` at end of input or on a quit word.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        let answer = line.trim();
        if QUIT_WORDS.contains(&answer.to_lowercase().as_str()) {
            debug!("Player quit");
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }

    /// Asks how many are playing and their names.
    ///
    /// Re-asks after invalid answers. Returns `None` if the player quits.
    #[instrument(skip(self))]
    pub fn setup_game(&mut self) -> Result<Option<GameSetup>> {
        writeln!(
            self.output,
            "Welcome to bowling! Type 'q' at any prompt to leave."
        )?;

        let count = loop {
            let prompt = format!(
                "How many people will be playing today? Please enter 1 to {}.",
                MAX_PLAYERS
            );
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(n) if (1..=MAX_PLAYERS).contains(&n) => break n,
                _ => writeln!(self.output, "Sorry, that was an invalid entry. Please try again.")?,
            }
        };

        let mut setup = GameSetup::new();
        while setup.players().len() < count {
            let prompt = match (count, setup.players().len()) {
                (1, _) => "What is the player's name?".to_string(),
                (_, seat) => format!("What is player {}'s name?", seat + 1),
            };
            let Some(name) = self.ask(&prompt)? else {
                return Ok(None);
            };
            if let Err(e) = setup.add_player(name) {
                writeln!(self.output, "Sorry, {}. Please try again.", e)?;
            }
        }
        Ok(Some(setup))
    }
}

impl<R: BufRead, W: Write> Bowler for ConsoleBowler<R, W> {
    fn next_roll(&mut self, request: &RollRequest) -> Result<Option<String>> {
        let prompt = format!(
            "Ok {}... Frame {}, attempt {}. What do you bowl?",
            request.player, request.frame, request.attempt
        );
        self.ask(&prompt)
    }

    fn rejected(&mut self, _request: &RollRequest, error: &InvalidAttempt) -> Result<bool> {
        writeln!(
            self.output,
            "Sorry, that was an invalid bowl: {}. Try again.",
            error
        )?;
        Ok(true)
    }

    fn notify(&mut self, event: &GameEvent) -> Result<()> {
        writeln!(self.output, "{}", event)?;
        if let GameEvent::FrameComplete { card, .. } = event {
            writeln!(self.output, "{}", card.render())?;
        }
        Ok(())
    }
}
