//! Session event handling, outcome caching and scripted play.

use tictactoe_history::{
    GameError, Mark, Outcome, Session, ViewOptions, evaluate, parse_script, run_script,
};

#[test]
fn test_mount_starts_empty() {
    let session = Session::mount();
    assert_eq!(session.state().history().len(), 1);
    assert_eq!(session.outcome(), &Outcome::InProgress);
    assert_eq!(session.view(&ViewOptions::default()).status(), "Next player: X");
}

#[test]
fn test_outcome_tracks_every_transition() {
    let mut session = Session::mount();
    for index in [0, 4, 1, 5, 2] {
        assert!(session.select_cell(index));
        assert_eq!(session.outcome(), &evaluate(session.state().current_board()));
    }
    assert_eq!(session.outcome().winner(), Some(Mark::X));

    session.jump_to(3).unwrap();
    assert_eq!(session.outcome(), &Outcome::InProgress);
    assert_eq!(session.view(&ViewOptions::default()).status(), "Next player: O");
}

#[test]
fn test_rejected_click_keeps_state() {
    let mut session = Session::mount();
    session.select_cell(4);
    let before = session.state().clone();
    assert!(!session.select_cell(4));
    assert_eq!(session.state(), &before);
}

#[test]
fn test_bad_jump_keeps_state() {
    let mut session = Session::mount();
    session.select_cell(0);
    assert_eq!(
        session.jump_to(7),
        Err(GameError::JumpOutOfRange { step: 7, len: 2 })
    );
    assert_eq!(session.state().current_step(), 1);
}

#[test]
fn test_reset() {
    let mut session = Session::mount();
    session.select_cell(0);
    session.reset();
    assert_eq!(session.state().history().len(), 1);
}

#[test]
fn test_script_branches_history() {
    let mut session = Session::mount();
    let steps = parse_script("0 4 1 5 @2 8").unwrap();
    run_script(&mut session, &steps).unwrap();

    let view = session.view(&ViewOptions::default());
    let labels: Vec<&str> = view.moves().iter().map(|m| m.label().as_str()).collect();
    assert_eq!(
        labels,
        vec!["Go to game start", "Go to move #1", "Go to move #2", "Go to move #3"]
    );
    assert_eq!(*view.current_step(), 3);
}

#[test]
fn test_view_serializes_to_json() {
    let mut session = Session::mount();
    run_script(&mut session, &parse_script("0,4,1,5,2").unwrap()).unwrap();
    let json = serde_json::to_value(session.view(&ViewOptions::default())).unwrap();
    assert_eq!(json["status"], "Winner: X");
    assert_eq!(json["cells"][0]["mark"], "X");
    assert_eq!(json["cells"][0]["winning"], true);
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(6));
}
