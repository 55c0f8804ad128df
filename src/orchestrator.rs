//! Game orchestration: turns, frames and retries.

use crate::games::bowling::{
    Classification, Frame, FrameNumber, GameFinished, GameInProgress, GameResult, GameSetup,
    Outcome, Player, Scorecard, Standing,
};
use crate::players::{Bowler, RollRequest};
use anyhow::Result;
use tracing::{debug, info, instrument, warn};

/// Things the bowler is told about as the game goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player finished a frame.
    FrameComplete {
        /// Who bowled it.
        player: String,
        /// Which frame.
        frame: FrameNumber,
        /// Pins knocked down in the frame.
        pinfall: u16,
        /// Strike or spare, if earned.
        bonus: Option<Classification>,
        /// The player's card so far.
        card: Scorecard,
    },
    /// Every player finished.
    GameOver {
        /// Final scores in playing order.
        standings: Vec<Standing>,
        /// Result.
        outcome: Outcome,
    },
    /// Someone quit before the end.
    Abandoned,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::FrameComplete {
                player,
                pinfall,
                bonus,
                ..
            } => {
                write!(f, "{}'s score this frame: {} pins", player, pinfall)?;
                match bonus {
                    Some(kind) => write!(f, " with a {}; nicely done!", kind),
                    None => Ok(()),
                }
            }
            GameEvent::GameOver { standings, outcome } => {
                for standing in standings {
                    writeln!(
                        f,
                        "Thanks for playing! {}'s final score is {}.",
                        standing.name, standing.score
                    )?;
                }
                write!(f, "{}", outcome)
            }
            GameEvent::Abandoned => write!(f, "Sorry to see you go. Come back for another game!"),
        }
    }
}

/// How a played game ended.
#[derive(Debug)]
pub enum PlayOutcome {
    /// All frames bowled.
    Finished(GameFinished),
    /// A player stopped partway.
    Abandoned {
        /// Player who stopped.
        player: String,
        /// Frame they were on.
        frame: FrameNumber,
    },
}

/// Drives a game from setup to finish, asking a [`Bowler`] for rolls.
pub struct Orchestrator<B> {
    bowler: B,
}

impl<B: Bowler> Orchestrator<B> {
    /// Creates an orchestrator around a bowler.
    pub fn new(bowler: B) -> Self {
        Self { bowler }
    }

    /// Returns the bowler.
    pub fn bowler(&self) -> &B {
        &self.bowler
    }

    /// Consumes the orchestrator, returning the bowler.
    pub fn into_bowler(self) -> B {
        self.bowler
    }

    /// Runs the game loop.
    ///
    /// # Errors
    ///
    /// I/O errors from the bowler, or a game that refuses a completed
    /// frame (which would be a bug).
    #[instrument(skip(self, setup), fields(players = setup.players().len()))]
    pub fn run(&mut self, setup: GameSetup) -> Result<PlayOutcome> {
        info!("Starting game orchestration");
        let mut game = setup.start()?;

        loop {
            let seat = game.state().player_index();
            let player = game.current_player().name().to_string();
            let Some(frame) = self.play_frame(&game)? else {
                let frame = game.state().frame();
                info!(%player, %frame, "Game abandoned");
                self.bowler.notify(&GameEvent::Abandoned)?;
                return Ok(PlayOutcome::Abandoned { player, frame });
            };

            let number = frame.number();
            let pinfall = frame.pinfall();
            let bonus = frame.classification().filter(|c| c.earns_bonus());

            game = match game.submit_frame(frame)? {
                GameResult::InProgress(next) => {
                    self.frame_complete(next.players(), seat, number, pinfall, bonus)?;
                    next
                }
                GameResult::Finished(finished) => {
                    self.frame_complete(finished.players(), seat, number, pinfall, bonus)?;
                    self.bowler.notify(&GameEvent::GameOver {
                        standings: finished.standings().to_vec(),
                        outcome: finished.outcome().clone(),
                    })?;
                    return Ok(PlayOutcome::Finished(finished));
                }
            };
        }
    }

    fn frame_complete(
        &mut self,
        players: &[Player],
        seat: usize,
        frame: FrameNumber,
        pinfall: u16,
        bonus: Option<Classification>,
    ) -> Result<()> {
        let Some(player) = players.get(seat) else {
            return Ok(());
        };
        self.bowler.notify(&GameEvent::FrameComplete {
            player: player.name().to_string(),
            card: Scorecard::for_player(player),
            frame,
            pinfall,
            bonus,
        })
    }

    /// Collects rolls until the current frame completes.
    ///
    /// `None` if the bowler stops.
    #[instrument(skip(self, game), fields(frame = %game.state().frame()))]
    fn play_frame(&mut self, game: &GameInProgress) -> Result<Option<Frame>> {
        let mut frame = game.new_frame();

        while !frame.is_complete() {
            let request = RollRequest {
                player: game.current_player().name().to_string(),
                frame: frame.number(),
                attempt: frame.attempts().len() as u8 + 1,
            };

            let Some(input) = self.bowler.next_roll(&request)? else {
                return Ok(None);
            };

            match frame.record_input(&input) {
                Ok(outcome) => debug!(state = %outcome.state, "Roll accepted"),
                Err(error) => {
                    warn!(%error, input = %input, "Roll refused");
                    if !self.bowler.rejected(&request, &error)? {
                        return Ok(None);
                    }
                }
            }
        }

        Ok(Some(frame))
    }
}
