//! Players and their frame lists.

use super::scoring::{ScoreAggregator, ScoreError};
use super::types::{FrameNumber, FRAMES_PER_GAME};
use super::Frame;
use serde::Serialize;
use tracing::{debug, instrument};

/// Errors when naming a player or adding frames.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayerError {
    /// Name was empty or whitespace.
    #[display("player name cannot be empty")]
    EmptyName,

    /// Name was a number, which usually means a pinfall typed at the
    /// wrong prompt.
    #[display("{:?} looks like a number, not a name", _0)]
    NumericName(String),

    /// Frame still accepts balls.
    #[display("frame {} is not complete", _0)]
    FrameIncomplete(FrameNumber),

    /// Frame number does not match the next slot.
    #[display("expected frame {}, got frame {}", expected, got)]
    FrameOutOfOrder {
        /// Number of the next slot.
        expected: u8,
        /// Number of the frame offered.
        got: FrameNumber,
    },

    /// All ten frames are already recorded.
    #[display("all {} frames are already recorded", FRAMES_PER_GAME)]
    CardFull,
}

impl std::error::Error for PlayerError {}

/// A bowler and the frames they have completed.
///
/// Frames are append-only and always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    frames: Vec<Frame>,
}

impl Player {
    /// Creates a player with no frames.
    ///
    /// # Errors
    ///
    /// `EmptyName` for blank names, `NumericName` for names that parse
    /// as a number.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>) -> Result<Self, PlayerError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }
        if name.parse::<i64>().is_ok() {
            return Err(PlayerError::NumericName(name));
        }
        debug!(player = %name, "Player created");
        Ok(Self {
            name,
            frames: Vec::with_capacity(FRAMES_PER_GAME),
        })
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns completed frames in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of the frame this player bowls next, or `None` when done.
    pub fn next_frame_number(&self) -> Option<FrameNumber> {
        FrameNumber::from_index(self.frames.len())
    }

    /// Returns true once all ten frames are recorded.
    pub fn is_finished(&self) -> bool {
        self.frames.len() == FRAMES_PER_GAME
    }

    /// Appends a completed frame.
    ///
    /// # Errors
    ///
    /// - `CardFull` after the tenth frame
    /// - `FrameIncomplete` for a frame still accepting balls
    /// - `FrameOutOfOrder` if the frame number is not the next one
    #[instrument(skip(self, frame), fields(player = %self.name, frame = %frame.number()))]
    pub fn push_frame(&mut self, frame: Frame) -> Result<(), PlayerError> {
        let expected = self.next_frame_number().ok_or(PlayerError::CardFull)?;
        if !frame.is_complete() {
            return Err(PlayerError::FrameIncomplete(frame.number()));
        }
        if frame.number() != expected {
            return Err(PlayerError::FrameOutOfOrder {
                expected: expected.get(),
                got: frame.number(),
            });
        }
        self.frames.push(frame);
        debug!(frames = self.frames.len(), "Frame appended");
        Ok(())
    }

    /// Bonus-adjusted score of one frame (zero-based index).
    pub fn frame_score(&self, index: usize) -> Result<u16, ScoreError> {
        ScoreAggregator::frame_score(&self.frames, index)
    }

    /// Final score; requires all ten frames.
    pub fn final_score(&self) -> Result<u16, ScoreError> {
        ScoreAggregator::final_score(&self.frames)
    }

    /// Cumulative totals so far, for live display.
    pub fn running_totals(&self) -> Vec<Option<u16>> {
        ScoreAggregator::running_totals(&self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(number: u8, balls: &[i64]) -> Frame {
        let mut frame = Frame::new(FrameNumber::new(number).unwrap());
        for pins in balls {
            frame.record_attempt(*pins).unwrap();
        }
        frame
    }

    #[test]
    fn test_name_validation() {
        assert_eq!(Player::new("  "), Err(PlayerError::EmptyName));
        assert_eq!(
            Player::new("7"),
            Err(PlayerError::NumericName("7".to_string()))
        );
        assert_eq!(Player::new(" Ada ").unwrap().name(), "Ada");
    }

    #[test]
    fn test_push_frames_in_order() {
        let mut player = Player::new("Ada").unwrap();
        player.push_frame(completed(1, &[10])).unwrap();
        assert_eq!(
            player.push_frame(completed(3, &[1, 1])),
            Err(PlayerError::FrameOutOfOrder {
                expected: 2,
                got: FrameNumber::new(3).unwrap()
            })
        );
        assert_eq!(player.next_frame_number(), FrameNumber::new(2));
    }

    #[test]
    fn test_rejects_incomplete_frame() {
        let mut player = Player::new("Ada").unwrap();
        let open = completed(1, &[4]);
        assert_eq!(
            player.push_frame(open),
            Err(PlayerError::FrameIncomplete(FrameNumber::FIRST))
        );
        assert!(player.frames().is_empty());
    }

    #[test]
    fn test_card_full_after_ten() {
        let mut player = Player::new("Ada").unwrap();
        for number in 1..=10 {
            player.push_frame(completed(number, &[0, 0])).unwrap();
        }
        assert!(player.is_finished());
        assert_eq!(player.next_frame_number(), None);
        assert_eq!(
            player.push_frame(completed(10, &[0, 0])),
            Err(PlayerError::CardFull)
        );
        assert_eq!(player.final_score(), Ok(0));
    }
}
