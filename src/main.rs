//! Strictly Bowling - CLI
//!
//! Interactive play on the terminal, or scoring of a given roll sequence.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use strictly_bowling::cli::{Cli, Command};
use strictly_bowling::{
    ConsoleBowler, GameConfig, GameResult, GameSetup, Orchestrator, Outcome, PlayOutcome, Player,
    Scorecard,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with prompts or JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { players, config } => run_play(players, config),
        Command::Score {
            players,
            json,
            rolls,
        } => run_score(players, json, &rolls),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(players))]
fn run_play(players: Vec<String>, config: Option<PathBuf>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut bowler = ConsoleBowler::new(stdin.lock(), stdout.lock());

    let game_config = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?
            .with_extra_players(players),
        None => GameConfig::new(players),
    };

    let setup = if game_config.players().is_empty() {
        match bowler.setup_game()? {
            Some(setup) => setup,
            None => {
                info!("Setup abandoned");
                return Ok(());
            }
        }
    } else {
        game_config.setup()?
    };

    info!(players = setup.players().len(), "Starting game");
    let mut orchestrator = Orchestrator::new(bowler);
    match orchestrator.run(setup)? {
        PlayOutcome::Finished(game) => info!(outcome = %game.outcome(), "Game finished"),
        PlayOutcome::Abandoned { player, frame } => {
            info!(%player, %frame, "Game abandoned")
        }
    }
    Ok(())
}

/// Scorecards plus result, as printed by `score --json`.
#[derive(Debug, Serialize)]
struct ScoreReport {
    cards: Vec<Scorecard>,
    outcome: Option<Outcome>,
}

/// Score a roll sequence and print the cards
#[instrument(skip(players, rolls), fields(rolls = rolls.len()))]
fn run_score(players: Vec<String>, json: bool, rolls: &[i64]) -> Result<()> {
    let game = GameSetup::with_players(players)?.start()?;

    let (players, outcome): (Vec<Player>, Option<Outcome>) = match game.replay(rolls)? {
        GameResult::InProgress(game) => (game.players().to_vec(), None),
        GameResult::Finished(game) => (game.players().to_vec(), Some(game.outcome().clone())),
    };

    let report = ScoreReport {
        cards: players.iter().map(Scorecard::for_player).collect(),
        outcome,
    };

    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        for card in &report.cards {
            writeln!(out, "{}", card.render())?;
        }
        if let Some(outcome) = &report.outcome {
            writeln!(out, "{}", outcome)?;
        }
    }
    Ok(())
}
