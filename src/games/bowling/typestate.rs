//! Phase-specific typestate structs for a bowling game.
//!
//! Each phase is its own type. A `GameFinished` always has an outcome,
//! and only a `GameInProgress` accepts frames.

use super::action::InvalidAttempt;
use super::phases::{Outcome, Standing};
use super::player::{Player, PlayerError};
use super::scoring::ScoreError;
use super::state::{GameState, SetupError, Turn};
use super::types::{FrameNumber, MAX_PLAYERS};
use super::Frame;
use tracing::{debug, info, instrument, warn};

/// Errors when handing a frame to a game in progress.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SubmitError {
    /// Frame number does not match the current turn.
    #[display("expected frame {}, got frame {}", expected, got)]
    WrongFrame {
        /// Frame the current turn is on.
        expected: FrameNumber,
        /// Frame offered.
        got: FrameNumber,
    },

    /// The player refused the frame.
    #[display("{}", _0)]
    Player(PlayerError),

    /// Final scores could not be computed.
    #[display("{}", _0)]
    Score(ScoreError),
}

impl std::error::Error for SubmitError {}

impl From<PlayerError> for SubmitError {
    fn from(err: PlayerError) -> Self {
        Self::Player(err)
    }
}

impl From<ScoreError> for SubmitError {
    fn from(err: ScoreError) -> Self {
        Self::Score(err)
    }
}

/// Errors replaying a roll sequence.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// A roll was illegal where it fell.
    #[display("roll {} ({}): {}", roll, pins, source)]
    Roll {
        /// One-based position in the sequence.
        roll: usize,
        /// Pins given.
        pins: i64,
        /// Why it was refused.
        source: InvalidAttempt,
    },

    /// Rolls ran out partway through a frame.
    #[display("rolls ended partway through frame {} for {}", frame, player)]
    UnfinishedFrame {
        /// Player whose frame was cut short.
        player: String,
        /// That frame.
        frame: FrameNumber,
    },

    /// Rolls remained after the game ended.
    #[display("{} roll(s) left over after the tenth frame", _0)]
    ExtraRolls(usize),

    /// A completed frame was refused.
    #[display("{}", _0)]
    Submit(SubmitError),
}

impl std::error::Error for ReplayError {}

impl From<SubmitError> for ReplayError {
    fn from(err: SubmitError) -> Self {
        Self::Submit(err)
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game being set up - players join here.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    players: Vec<Player>,
}

impl GameSetup {
    /// Creates an empty setup.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a setup with the given player names.
    ///
    /// # Errors
    ///
    /// Any name or player-count error from [`GameSetup::add_player`].
    #[instrument(skip(names))]
    pub fn with_players<I, S>(names: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut setup = Self::new();
        for name in names {
            setup.add_player(name)?;
        }
        Ok(setup)
    }

    /// Adds a player.
    ///
    /// # Errors
    ///
    /// `TooManyPlayers` past the lane limit, or a name error.
    #[instrument(skip(self, name))]
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), SetupError> {
        if self.players.len() >= MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers(self.players.len() + 1));
        }
        let player = Player::new(name)?;
        info!(player = %player.name(), "Player joined");
        self.players.push(player);
        Ok(())
    }

    /// Returns the players so far.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Starts the game (consumes setup, returns in-progress).
    ///
    /// # Errors
    ///
    /// `NoPlayers` if nobody joined.
    #[instrument(skip(self), fields(players = self.players.len()))]
    pub fn start(self) -> Result<GameInProgress, SetupError> {
        let state = GameState::new(self.players.len())?;
        info!("Game started");
        Ok(GameInProgress {
            players: self.players,
            state,
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - accepts completed frames in turn order.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    players: Vec<Player>,
    state: GameState,
}

impl GameInProgress {
    /// Returns the turn state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns all players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.state.player_index()]
    }

    /// Creates an empty frame for the current turn.
    pub fn new_frame(&self) -> Frame {
        Frame::new(self.state.frame())
    }

    /// Hands the current player's completed frame to the game,
    /// consuming self and transitioning to the next turn.
    ///
    /// # Errors
    ///
    /// - `WrongFrame` if the frame is not for the current turn
    /// - `Player` if the frame is incomplete
    /// - `Score` if final scores cannot be computed at game end
    #[instrument(skip(self, frame), fields(frame = %frame.number(), player = self.state.player_index()))]
    pub fn submit_frame(mut self, frame: Frame) -> Result<GameResult, SubmitError> {
        if frame.number() != self.state.frame() {
            return Err(SubmitError::WrongFrame {
                expected: self.state.frame(),
                got: frame.number(),
            });
        }
        self.players[self.state.player_index()].push_frame(frame)?;

        match self.state.advance() {
            Turn::Next(state) => {
                self.state = state;
                Ok(GameResult::InProgress(self))
            }
            Turn::GameOver => Ok(GameResult::Finished(GameFinished::from_players(
                self.players,
            )?)),
        }
    }

    /// Replays raw rolls in turn order, starting from the current turn.
    ///
    /// Rolls for two players interleave frame by frame, as bowled.
    ///
    /// # Errors
    ///
    /// - `Roll` for an illegal roll
    /// - `UnfinishedFrame` if the rolls stop partway through a frame
    /// - `ExtraRolls` if rolls remain once the game is over
    #[instrument(skip(self, rolls), fields(rolls = rolls.len()))]
    pub fn replay(self, rolls: &[i64]) -> Result<GameResult, ReplayError> {
        let mut game = self;
        let mut rolls = rolls.iter().copied().enumerate().peekable();

        while rolls.peek().is_some() {
            let mut frame = game.new_frame();
            while !frame.is_complete() {
                let Some((index, pins)) = rolls.next() else {
                    warn!(frame = %frame.number(), "Replay stopped mid-frame");
                    return Err(ReplayError::UnfinishedFrame {
                        player: game.current_player().name().to_string(),
                        frame: frame.number(),
                    });
                };
                frame
                    .record_attempt(pins)
                    .map_err(|source| ReplayError::Roll {
                        roll: index + 1,
                        pins,
                        source,
                    })?;
            }

            match game.submit_frame(frame)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => {
                    let left = rolls.count();
                    if left > 0 {
                        return Err(ReplayError::ExtraRolls(left));
                    }
                    return Ok(GameResult::Finished(g));
                }
            }
        }

        debug!(frame = %game.state.frame(), "Replay ended between frames");
        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - every player has ten frames and the outcome is known.
#[derive(Debug, Clone)]
pub struct GameFinished {
    players: Vec<Player>,
    standings: Vec<Standing>,
    outcome: Outcome,
}

impl GameFinished {
    fn from_players(players: Vec<Player>) -> Result<Self, SubmitError> {
        let standings = players
            .iter()
            .map(|p| {
                Ok(Standing {
                    name: p.name().to_string(),
                    score: p.final_score()?,
                })
            })
            .collect::<Result<Vec<_>, ScoreError>>()?;
        let outcome = Outcome::from_standings(&standings)
            .ok_or(ScoreError::IncompleteGame { completed: 0 })?;
        info!(%outcome, "Game finished");
        Ok(Self {
            players,
            standings,
            outcome,
        })
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Final score of each player, in playing order.
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    /// Returns all players with their frames.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Starts over with the same player names (consumes finished).
    #[instrument(skip(self))]
    pub fn restart(self) -> Result<GameSetup, SetupError> {
        GameSetup::with_players(self.players.iter().map(|p| p.name().to_string()))
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of submitting a frame.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
