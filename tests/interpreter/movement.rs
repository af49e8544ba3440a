//! Movement tests.

use hollow_command::{Line, Refusal, TurnOutcome};
use hollow_foundation::{Command, Direction, ErrorKind, RoomId};

use crate::{ARMOURY, play, texts};

#[test]
fn moving_changes_room() {
    let mut game = play(ARMOURY);
    let turn = game.execute("north");
    assert!(matches!(
        turn.outcome,
        TurnOutcome::Completed(Command::Go(Direction::North))
    ));
    assert_eq!(game.context().room(), &RoomId::new("yard"));
}

#[test]
fn no_exit_leaves_room_unchanged() {
    let mut game = play(ARMOURY);
    let turn = game.execute("west");
    assert!(matches!(
        turn.outcome,
        TurnOutcome::Refused(_, Refusal::NoExit(Direction::West))
    ));
    assert_eq!(
        turn.lines,
        vec![Line::failure("There is no way to go in that direction.")]
    );
    assert_eq!(game.context().room(), &RoomId::new("armoury"));
}

#[test]
fn dangling_exit_is_a_failure_line_not_a_crash() {
    let mut game = play(ARMOURY);
    game.execute("north");
    let turn = game.execute("east");

    let TurnOutcome::Inconsistent(_, error) = &turn.outcome else {
        panic!("expected inconsistency, got {:?}", turn.outcome);
    };
    assert!(matches!(error.kind, ErrorKind::DanglingExit { .. }));
    assert!(texts(&turn.lines)[0].contains("stables"));
    assert_eq!(game.context().room(), &RoomId::new("yard"));

    // Play continues.
    let turn = game.execute("south");
    assert!(matches!(turn.outcome, TurnOutcome::Completed(_)));
}

#[test]
fn movement_words_ignore_case_and_extra_words() {
    let mut game = play(ARMOURY);
    game.execute("  NORTH   quickly ");
    assert_eq!(game.context().room(), &RoomId::new("yard"));
}
