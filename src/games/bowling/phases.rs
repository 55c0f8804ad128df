//! End-of-game results.

use serde::{Deserialize, Serialize};

/// A player's final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player name.
    pub name: String,
    /// Final score.
    pub score: u16,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// One player bowled alone.
    Solo(Standing),
    /// One player outscored the rest.
    Winner(Standing),
    /// Top score shared.
    Tie {
        /// The shared score.
        score: u16,
    },
}

impl Outcome {
    /// Decides the outcome from final standings.
    ///
    /// Returns `None` for an empty list.
    pub fn from_standings(standings: &[Standing]) -> Option<Self> {
        let best = standings.iter().max_by_key(|s| s.score)?;
        if standings.len() == 1 {
            return Some(Outcome::Solo(best.clone()));
        }
        let leaders = standings.iter().filter(|s| s.score == best.score).count();
        Some(if leaders > 1 {
            Outcome::Tie { score: best.score }
        } else {
            Outcome::Winner(best.clone())
        })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Standing> {
        match self {
            Outcome::Winner(standing) => Some(standing),
            Outcome::Solo(_) | Outcome::Tie { .. } => None,
        }
    }

    /// Returns true if the top score was shared.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Solo(s) => write!(f, "{} finished with {}", s.name, s.score),
            Outcome::Winner(s) => write!(f, "The winner is {} with {}!", s.name, s.score),
            Outcome::Tie { score } => write!(f, "It's a tie at {}! Everybody wins!", score),
        }
    }
}
