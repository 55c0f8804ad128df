//! Command-line interface for strictly_bowling.

use clap::{Parser, Subcommand};

/// Strictly Bowling - ten-pin bowling scorer
#[derive(Parser, Debug)]
#[command(name = "strictly_bowling")]
#[command(about = "Ten-pin bowling scorer for one or two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Player name (repeat for a second player). Asked for if omitted.
        #[arg(short, long = "player")]
        players: Vec<String>,

        /// TOML file listing players
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Score a sequence of rolls given in bowling order
    Score {
        /// Player name (repeat for a second player)
        #[arg(short, long = "player", default_value = "Bowler")]
        players: Vec<String>,

        /// Print scorecards as JSON
        #[arg(long)]
        json: bool,

        /// Pins knocked down by each ball, players interleaved frame by frame
        #[arg(allow_negative_numbers = true)]
        rolls: Vec<i64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score() {
        let cli = Cli::try_parse_from(["strictly_bowling", "score", "10", "7", "3"]).unwrap();
        match cli.command {
            Command::Score {
                players,
                json,
                rolls,
            } => {
                assert_eq!(players, vec!["Bowler".to_string()]);
                assert!(!json);
                assert_eq!(rolls, vec![10, 7, 3]);
            }
            Command::Play { .. } => panic!("Expected score"),
        }
    }

    #[test]
    fn test_parse_play_players() {
        let cli =
            Cli::try_parse_from(["strictly_bowling", "play", "-p", "Ada", "--player", "Grace"])
                .unwrap();
        match cli.command {
            Command::Play { players, config } => {
                assert_eq!(players, vec!["Ada".to_string(), "Grace".to_string()]);
                assert!(config.is_none());
            }
            Command::Score { .. } => panic!("Expected play"),
        }
    }
}
