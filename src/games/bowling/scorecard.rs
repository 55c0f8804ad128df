//! Printable scorecards.

use super::player::Player;
use super::rules::{on_fresh_rack, standing_pins};
use super::types::{FrameNumber, FRAMES_PER_GAME, PINS_PER_FRAME_MAX};
use super::Frame;
use serde::Serialize;
use tracing::instrument;

const CELL_WIDTH: usize = 7;

/// Scorecard marks for a frame's balls.
///
/// `X` for a strike at a full rack, `/` for clearing a rack already hit,
/// `-` for a gutter ball, the pin count otherwise.
#[instrument(skip(frame), fields(frame = %frame.number()))]
pub fn marks(frame: &Frame) -> Vec<String> {
    let attempts = frame.attempts();
    attempts
        .iter()
        .enumerate()
        .map(|(i, pins)| {
            let before = &attempts[..i];
            let cleared = pins.get() == standing_pins(before);
            match pins.get() {
                PINS_PER_FRAME_MAX if on_fresh_rack(before) => "X".to_string(),
                _ if cleared && !on_fresh_rack(before) => "/".to_string(),
                0 => "-".to_string(),
                n => n.to_string(),
            }
        })
        .collect()
}

/// One column of a scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameCard {
    /// Frame number.
    pub number: FrameNumber,
    /// Marks for each ball.
    pub marks: Vec<String>,
    /// Bonus-adjusted frame score, once settled.
    pub score: Option<u16>,
    /// Cumulative score through this frame, once settled.
    pub total: Option<u16>,
}

/// A player's scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    /// Player name.
    pub player: String,
    /// Completed frames.
    pub frames: Vec<FrameCard>,
    /// Final score, once all ten frames are in.
    pub total: Option<u16>,
}

impl Scorecard {
    /// Builds the scorecard for a player's completed frames.
    #[instrument(skip(player), fields(player = %player.name()))]
    pub fn for_player(player: &Player) -> Self {
        let totals = player.running_totals();
        let frames = player
            .frames()
            .iter()
            .zip(totals)
            .enumerate()
            .map(|(index, (frame, total))| FrameCard {
                number: frame.number(),
                marks: marks(frame),
                score: player.frame_score(index).ok(),
                total,
            })
            .collect();

        Self {
            player: player.name().to_string(),
            frames,
            total: player.final_score().ok(),
        }
    }

    /// Renders the card as a text grid with one column per frame.
    ///
    /// Frames not yet bowled are left blank.
    pub fn render(&self) -> String {
        let column = |index: usize| self.frames.get(index);
        let numbers: Vec<String> = (1..=FRAMES_PER_GAME).map(|n| n.to_string()).collect();
        let marks: Vec<String> = (0..FRAMES_PER_GAME)
            .map(|i| column(i).map(|c| c.marks.join(" ")).unwrap_or_default())
            .collect();
        let totals: Vec<String> = (0..FRAMES_PER_GAME)
            .map(|i| {
                column(i)
                    .and_then(|c| c.total)
                    .map(|t| t.to_string())
                    .unwrap_or_default()
            })
            .collect();

        let border = format!("+{}+", vec!["-".repeat(CELL_WIDTH); FRAMES_PER_GAME].join("+"));
        let total = match self.total {
            Some(score) => score.to_string(),
            None => "in progress".to_string(),
        };

        [
            self.player.clone(),
            border.clone(),
            row(&numbers),
            border.clone(),
            row(&marks),
            row(&totals),
            border,
            format!("Total: {}", total),
        ]
        .join("\n")
    }
}

fn row(cells: &[String]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .map(|c| format!("{:^width$}", c, width = CELL_WIDTH))
        .collect();
    format!("|{}|", cells.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(number: u8, balls: &[i64]) -> Frame {
        let mut frame = Frame::new(FrameNumber::new(number).unwrap());
        for pins in balls {
            frame.record_attempt(*pins).unwrap();
        }
        frame
    }

    #[test]
    fn test_marks_regular_frames() {
        assert_eq!(marks(&frame(1, &[10])), vec!["X"]);
        assert_eq!(marks(&frame(1, &[7, 3])), vec!["7", "/"]);
        assert_eq!(marks(&frame(1, &[0, 10])), vec!["-", "/"]);
        assert_eq!(marks(&frame(1, &[9, 0])), vec!["9", "-"]);
    }

    #[test]
    fn test_marks_tenth_frame() {
        assert_eq!(marks(&frame(10, &[10, 10, 10])), vec!["X", "X", "X"]);
        assert_eq!(marks(&frame(10, &[10, 7, 3])), vec!["X", "7", "/"]);
        assert_eq!(marks(&frame(10, &[6, 4, 10])), vec!["6", "/", "X"]);
        assert_eq!(marks(&frame(10, &[3, 4])), vec!["3", "4"]);
    }

    #[test]
    fn test_render_partial_card() {
        let mut player = Player::new("Ada").unwrap();
        player.push_frame(frame(1, &[10])).unwrap();
        player.push_frame(frame(2, &[7, 3])).unwrap();
        player.push_frame(frame(3, &[9, 0])).unwrap();

        let card = Scorecard::for_player(&player);
        assert_eq!(card.frames[0].total, Some(20));
        assert_eq!(card.frames[2].total, Some(48));
        assert_eq!(card.total, None);

        let text = card.render();
        assert!(text.starts_with("Ada\n+-------+"));
        assert!(text.contains("|   X   |  7 /  |  9 -  |       |"));
        assert!(text.contains("|  20   |  39   |  48   |"));
        assert!(text.ends_with("Total: in progress"));
    }

    #[test]
    fn test_json_shape() {
        let mut player = Player::new("Ada").unwrap();
        player.push_frame(frame(1, &[4, 5])).unwrap();
        let json = serde_json::to_value(Scorecard::for_player(&player)).unwrap();
        assert_eq!(json["player"], "Ada");
        assert_eq!(json["frames"][0]["number"], 1);
        assert_eq!(json["frames"][0]["marks"][1], "5");
        assert_eq!(json["frames"][0]["total"], 9);
        assert!(json["total"].is_null());
    }
}
