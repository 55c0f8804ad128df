//! Tests for the game phases and turn loop.

use std::io::Cursor;
use strictly_bowling::{
    ConsoleBowler, Frame, FrameNumber, GameConfig, GameResult, GameSetup, Orchestrator, Outcome,
    PlayOutcome, ReplayError, Scorecard, ScriptedBowler, SetupError, SubmitError,
};

#[test]
fn test_typestate_lifecycle() {
    let game = GameSetup::with_players(["Ada"])
        .expect("setup")
        .start()
        .expect("start");
    assert_eq!(game.state().frame(), FrameNumber::FIRST);

    let mut frame = game.new_frame();
    frame.record_attempt(10).expect("strike");
    let game = match game.submit_frame(frame).expect("valid frame") {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Game shouldn't finish after one frame"),
    };
    assert_eq!(game.state().frame().get(), 2);
    assert_eq!(game.current_player().frames().len(), 1);
}

#[test]
fn test_wrong_frame_rejected() {
    let game = GameSetup::with_players(["Ada"])
        .expect("setup")
        .start()
        .expect("start");
    let mut frame = Frame::new(FrameNumber::LAST);
    frame.record_attempt(1).expect("legal");
    frame.record_attempt(2).expect("legal");
    assert!(matches!(
        game.submit_frame(frame),
        Err(SubmitError::WrongFrame { .. })
    ));
}

#[test]
fn test_setup_requires_players() {
    assert_eq!(GameSetup::new().start().err(), Some(SetupError::NoPlayers));
    assert!(matches!(
        GameSetup::with_players(["   "]),
        Err(SetupError::Player(_))
    ));
}

#[test]
fn test_two_player_replay_and_winner() {
    let game = GameSetup::with_players(["Ada", "Grace"])
        .expect("setup")
        .start()
        .expect("start");
    // Ada bowls 4,4 every frame and Grace 5,4.
    let rolls: Vec<i64> = (0..10).flat_map(|_| [4, 4, 5, 4]).collect();
    let finished = match game.replay(&rolls).expect("replay") {
        GameResult::Finished(done) => done,
        GameResult::InProgress(_) => panic!("Game should be finished"),
    };
    let scores: Vec<u16> = finished.standings().iter().map(|s| s.score).collect();
    assert_eq!(scores, vec![80, 90]);
    assert_eq!(
        finished.outcome().winner().map(|s| s.name.as_str()),
        Some("Grace")
    );
    assert_eq!(finished.outcome().to_string(), "The winner is Grace with 90!");

    let setup = finished.restart().expect("restart");
    assert_eq!(setup.players().len(), 2);
    assert!(setup.players().iter().all(|p| p.frames().is_empty()));
}

#[test]
fn test_two_player_tie() {
    let game = GameSetup::with_players(["Ada", "Grace"])
        .expect("setup")
        .start()
        .expect("start");
    let finished = match game.replay(&[3; 40]).expect("replay") {
        GameResult::Finished(done) => done,
        GameResult::InProgress(_) => panic!("Game should be finished"),
    };
    assert_eq!(finished.outcome(), &Outcome::Tie { score: 60 });
}

#[test]
fn test_replay_errors() {
    let start = || {
        GameSetup::with_players(["Ada"])
            .expect("setup")
            .start()
            .expect("start")
    };
    assert!(matches!(
        start().replay(&[3, 11]),
        Err(ReplayError::Roll { roll: 2, pins: 11, .. })
    ));
    assert!(matches!(
        start().replay(&[3, 4, 5]),
        Err(ReplayError::UnfinishedFrame { .. })
    ));
    assert!(matches!(
        start().replay(&[10; 13]),
        Err(ReplayError::ExtraRolls(1))
    ));
    assert!(matches!(start().replay(&[3, 4]), Ok(GameResult::InProgress(_))));
}

#[test]
fn test_scripted_bowler_two_players() {
    let setup = GameSetup::with_players(["Ada", "Grace"]).expect("setup");
    // Ada strikes out and Grace gutters every ball.
    let rolls: Vec<String> = (0..9)
        .flat_map(|_| ["10", "0", "0"])
        .chain(["10", "10", "10", "0", "0"])
        .map(String::from)
        .collect();
    let mut orchestrator = Orchestrator::new(ScriptedBowler::new(rolls));
    match orchestrator.run(setup).expect("run") {
        PlayOutcome::Finished(game) => {
            assert_eq!(game.standings()[0].score, 300);
            assert_eq!(game.standings()[1].score, 0);
        }
        PlayOutcome::Abandoned { .. } => panic!("Game should finish"),
    }
}

#[test]
fn test_console_game_with_retry() {
    let mut input = String::from("1\nAda\n");
    input.push_str("seven\n11\n7\n3\n");
    for _ in 0..9 {
        input.push_str("2\n2\n");
    }
    let mut bowler = ConsoleBowler::new(Cursor::new(input.into_bytes()), Vec::new());
    let setup = bowler.setup_game().expect("io").expect("not abandoned");

    let mut orchestrator = Orchestrator::new(bowler);
    let outcome = orchestrator.run(setup).expect("run");
    let final_score = match outcome {
        PlayOutcome::Finished(game) => game.standings()[0].score,
        PlayOutcome::Abandoned { .. } => panic!("Game should finish"),
    };
    // Spare then 2,2 is 12, and nine frames of 4 is 36.
    assert_eq!(final_score, 48);

    let output = String::from_utf8(orchestrator.into_bowler().into_output()).expect("utf8");
    assert_eq!(output.matches("invalid bowl").count(), 2);
    assert!(output.contains("Ada's score this frame: 10 pins with a Spare; nicely done!"));
    assert!(output.contains("Thanks for playing! Ada's final score is 48."));
    assert!(output.contains("Ada finished with 48"));
}

#[test]
fn test_console_quit_mid_game() {
    let input = "1\n4\nq\n";
    let bowler = ConsoleBowler::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut orchestrator = Orchestrator::new(bowler);
    let setup = GameSetup::with_players(["Ada"]).expect("setup");
    let outcome = orchestrator.run(setup).expect("run");
    match outcome {
        PlayOutcome::Abandoned { player, frame } => {
            assert_eq!(player, "Ada");
            assert_eq!(frame.get(), 2);
        }
        PlayOutcome::Finished(_) => panic!("Game should be abandoned"),
    }
    let output = String::from_utf8(orchestrator.into_bowler().into_output()).expect("utf8");
    assert!(output.contains("Sorry to see you go."));
}

#[test]
fn test_scorecard_json_after_replay() {
    let game = GameSetup::with_players(["Ada"])
        .expect("setup")
        .start()
        .expect("start");
    let game = match game.replay(&[10, 7, 3]).expect("replay") {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Game shouldn't finish"),
    };
    let card = Scorecard::for_player(game.current_player());
    let json = serde_json::to_value(&card).expect("serialize");
    assert_eq!(json["player"], "Ada");
    assert_eq!(json["frames"][0]["marks"][0], "X");
    assert_eq!(json["frames"][0]["score"], 20);
    assert_eq!(json["frames"][1]["marks"][1], "/");
    assert!(json["frames"][1]["score"].is_null());
    assert!(card.render().contains("Total: in progress"));
}

#[test]
fn test_config_players_start_game() {
    let config = GameConfig::new(vec!["Ada".to_string()]);
    let game = config.setup().expect("setup").start().expect("start");
    assert_eq!(game.current_player().name(), "Ada");
}
