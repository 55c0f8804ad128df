//! Turn bookkeeping as an immutable value.
//!
//! Whose turn it is and which frame is being bowled live in a
//! [`GameState`] that is consumed and returned by each advance, rather
//! than in counters mutated in place.

use super::types::{FrameNumber, MAX_PLAYERS};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Game started with nobody bowling.
    #[display("at least one player is required")]
    NoPlayers,

    /// More players than a lane takes.
    #[display("{} players is too many (max {})", _0, MAX_PLAYERS)]
    TooManyPlayers(usize),

    /// A player name was rejected.
    #[display("{}", _0)]
    Player(super::player::PlayerError),
}

impl std::error::Error for SetupError {}

impl From<super::player::PlayerError> for SetupError {
    fn from(err: super::player::PlayerError) -> Self {
        Self::Player(err)
    }
}

/// Current frame and current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    player_count: usize,
    frame: FrameNumber,
    player_index: usize,
}

/// Result of advancing the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Someone bowls next.
    Next(GameState),
    /// Every player has bowled the tenth frame.
    GameOver,
}

impl GameState {
    /// Creates the opening state: frame 1, first player.
    ///
    /// # Errors
    ///
    /// `NoPlayers` for zero, `TooManyPlayers` above the lane limit.
    #[instrument]
    pub fn new(player_count: usize) -> Result<Self, SetupError> {
        match player_count {
            0 => Err(SetupError::NoPlayers),
            n if n > MAX_PLAYERS => Err(SetupError::TooManyPlayers(n)),
            n => Ok(Self {
                player_count: n,
                frame: FrameNumber::FIRST,
                player_index: 0,
            }),
        }
    }

    /// Number of players in the rotation.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Frame being bowled.
    pub fn frame(&self) -> FrameNumber {
        self.frame
    }

    /// Zero-based index of the player to bowl.
    pub fn player_index(&self) -> usize {
        self.player_index
    }

    /// Moves to the next player, and to the next frame after the last
    /// player has bowled.
    #[instrument]
    pub fn advance(self) -> Turn {
        let next_player = self.player_index + 1;
        if next_player < self.player_count {
            return Turn::Next(Self {
                player_index: next_player,
                ..self
            });
        }

        match self.frame.next() {
            Some(frame) => {
                debug!(frame = %frame, "Advancing to next frame");
                Turn::Next(Self {
                    frame,
                    player_index: 0,
                    ..self
                })
            }
            None => Turn::GameOver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(state: GameState) -> GameState {
        match state.advance() {
            Turn::Next(state) => state,
            Turn::GameOver => panic!("Game ended early"),
        }
    }

    #[test]
    fn test_player_count_bounds() {
        assert_eq!(GameState::new(0), Err(SetupError::NoPlayers));
        assert_eq!(GameState::new(3), Err(SetupError::TooManyPlayers(3)));
        assert!(GameState::new(2).is_ok());
    }

    #[test]
    fn test_solo_rotation() {
        let state = GameState::new(1).unwrap();
        let state = next(state);
        assert_eq!(state.frame().get(), 2);
        assert_eq!(state.player_index(), 0);
    }

    #[test]
    fn test_two_player_rotation() {
        let state = GameState::new(2).unwrap();
        let second = next(state);
        assert_eq!(second.frame(), FrameNumber::FIRST);
        assert_eq!(second.player_index(), 1);

        let third = next(second);
        assert_eq!(third.frame().get(), 2);
        assert_eq!(third.player_index(), 0);
    }

    #[test]
    fn test_game_over_after_twenty_turns() {
        let mut state = GameState::new(2).unwrap();
        let mut turns = 1;
        while let Turn::Next(s) = state.advance() {
            state = s;
            turns += 1;
        }
        assert_eq!(turns, 20);
        assert_eq!(state.frame(), FrameNumber::LAST);
        assert_eq!(state.player_index(), 1);
    }
}
