//! Synonym tests.

use hollow_command::TurnOutcome;
use hollow_foundation::{Command, Direction, RoomId};

use crate::{ARMOURY, play, texts};

#[test]
fn synonym_resolves_to_canonical_command() {
    let mut game = play(ARMOURY);
    let turn = game.execute("n");
    assert!(matches!(
        turn.outcome,
        TurnOutcome::Completed(Command::Go(Direction::North))
    ));
    assert_eq!(game.context().last_command(), Some(Command::Go(Direction::North)));
}

#[test]
fn synonym_carries_argument() {
    let mut game = play(ARMOURY);
    game.execute("Grab Knife");
    assert_eq!(game.context().last_command(), Some(Command::Take));
    assert_eq!(game.context().last_argument(), Some("knife"));
    assert_eq!(game.context().inventory().len(), 1);
}

#[test]
fn canonical_words_still_work_alongside_synonyms() {
    let mut game = play(ARMOURY);
    game.execute("get sword");
    game.execute("n");
    game.execute("south");
    assert_eq!(game.context().room(), &RoomId::new("armoury"));
    assert_eq!(game.context().inventory().len(), 1);
}

#[test]
fn unknown_word_is_not_an_error() {
    let mut game = play(ARMOURY);
    let turn = game.execute("xyzzy");
    assert!(matches!(turn.outcome, TurnOutcome::Unknown(ref w) if w == "xyzzy"));
    assert_eq!(texts(&turn.lines), ["...and then?"]);
    assert_eq!(game.context().last_command(), None);
}
