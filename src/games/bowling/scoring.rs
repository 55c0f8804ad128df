//! Cross-frame score aggregation.
//!
//! A strike or spare is worth the pins of the next balls thrown, wherever
//! they fall. Scores are found by walking forward over the ball stream of
//! the frames that follow, so no frame needs special handling for bonus
//! lookup.

use super::types::{Classification, FRAMES_PER_GAME};
use super::Frame;
use tracing::{debug, instrument};

/// Errors from score queries.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScoreError {
    /// Final score asked for before all ten frames were complete.
    #[display("game incomplete: {} of {} frames complete", completed, FRAMES_PER_GAME)]
    IncompleteGame {
        /// Complete frames available.
        completed: usize,
    },

    /// Index past the end of the frame list.
    #[display("no frame at index {}", _0)]
    NoSuchFrame(usize),

    /// The frame at the index is still being bowled.
    #[display("frame at index {} is not complete", _0)]
    FrameIncomplete(usize),

    /// Bonus balls for the frame at the index have not been thrown yet.
    #[display("bonus for frame at index {} is still pending", _0)]
    PendingBonus(usize),
}

impl std::error::Error for ScoreError {}

/// Score calculations over a player's ordered frames.
///
/// Never mutates frames and keeps no state between calls.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Bonus-adjusted score of `frames[index]`.
    ///
    /// # Errors
    ///
    /// - `NoSuchFrame` if `index` is out of bounds
    /// - `FrameIncomplete` if that frame is still open
    /// - `PendingBonus` if the balls its bonus needs are not yet thrown
    #[instrument(skip(frames), fields(frames = frames.len()))]
    pub fn frame_score(frames: &[Frame], index: usize) -> Result<u16, ScoreError> {
        let frame = frames.get(index).ok_or(ScoreError::NoSuchFrame(index))?;
        if !frame.is_complete() {
            return Err(ScoreError::FrameIncomplete(index));
        }

        let base = frame.pinfall();
        let wanted = Self::bonus_kind(frame).map_or(0, Classification::bonus_balls);
        if wanted == 0 {
            return Ok(base);
        }

        let bonus: Vec<u16> = frames[index + 1..]
            .iter()
            .flat_map(|f| f.attempts())
            .take(wanted)
            .map(|p| u16::from(p.get()))
            .collect();
        if bonus.len() < wanted {
            return Err(ScoreError::PendingBonus(index));
        }

        let score = base + bonus.iter().sum::<u16>();
        debug!(index, base, score, "Frame scored");
        Ok(score)
    }

    /// Total of all ten frame scores.
    ///
    /// # Errors
    ///
    /// `IncompleteGame` unless exactly ten complete frames are given.
    #[instrument(skip(frames), fields(frames = frames.len()))]
    pub fn final_score(frames: &[Frame]) -> Result<u16, ScoreError> {
        let completed = frames.iter().filter(|f| f.is_complete()).count();
        if frames.len() != FRAMES_PER_GAME || completed != FRAMES_PER_GAME {
            return Err(ScoreError::IncompleteGame { completed });
        }

        (0..frames.len())
            .map(|index| Self::frame_score(frames, index))
            .sum()
    }

    /// Cumulative score after each frame.
    ///
    /// Entries are `None` from the first frame whose score cannot be
    /// settled yet; later totals depend on it.
    #[instrument(skip(frames), fields(frames = frames.len()))]
    pub fn running_totals(frames: &[Frame]) -> Vec<Option<u16>> {
        let mut total = Some(0u16);
        (0..frames.len())
            .map(|index| {
                total = total.and_then(|sum| {
                    Self::frame_score(frames, index)
                        .ok()
                        .map(|score| sum + score)
                });
                total
            })
            .collect()
    }

    /// Classification used for bonus purposes; `None` for the tenth frame.
    pub fn bonus_kind(frame: &Frame) -> Option<Classification> {
        if frame.is_last() {
            None
        } else {
            frame.classification()
        }
    }
}
