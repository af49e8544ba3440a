//! Take, drop, and inventory tests.

use hollow_command::{Line, Refusal, TurnOutcome};
use hollow_foundation::{ItemId, RoomId};

use crate::{ARMOURY, play, texts};

#[test]
fn take_by_term_moves_item_to_inventory() {
    let mut game = play(ARMOURY);
    let turn = game.execute("take sword");
    assert_eq!(turn.lines, vec![Line::success("OK")]);
    assert_eq!(game.context().inventory(), &[ItemId::new("sword")]);

    let room = game.world().room(&RoomId::new("armoury")).unwrap();
    assert_eq!(room.items(), &[ItemId::new("dagger")]);
}

#[test]
fn shared_term_takes_every_match() {
    let mut game = play(ARMOURY);
    let turn = game.execute("take BLADE");
    assert_eq!(texts(&turn.lines), ["OK", "OK"]);
    assert_eq!(game.context().inventory(), &[ItemId::new("sword"), ItemId::new("dagger")]);
}

#[test]
fn take_refusals() {
    let mut game = play(ARMOURY);

    let turn = game.execute("take");
    assert!(matches!(turn.outcome, TurnOutcome::Refused(_, Refusal::MissingObject)));
    assert_eq!(texts(&turn.lines), ["Do what with the what?"]);

    let turn = game.execute("take shield");
    assert_eq!(texts(&turn.lines), ["There's nothing like that here."]);
    assert!(game.context().inventory().is_empty());
}

#[test]
fn drop_puts_item_in_current_room() {
    let mut game = play(ARMOURY);
    game.execute("take knife");
    game.execute("north");

    let turn = game.execute("drop dagger");
    assert_eq!(texts(&turn.lines), ["OK"]);
    assert!(game.context().inventory().is_empty());
    let yard = game.world().room(&RoomId::new("yard")).unwrap();
    assert_eq!(yard.items(), &[ItemId::new("dagger")]);

    let turn = game.execute("drop dagger");
    assert!(matches!(turn.outcome, TurnOutcome::Refused(_, Refusal::NotCarried(_))));
    assert_eq!(texts(&turn.lines), ["You don't have anything like that."]);
}

#[test]
fn inventory_lists_first_terms() {
    let mut game = play(ARMOURY);

    let turn = game.execute("inventory");
    assert_eq!(texts(&turn.lines), ["You're not carrying anything."]);

    game.execute("take knife");
    game.execute("take sword");
    let turn = game.execute("inventory");
    assert_eq!(texts(&turn.lines), ["Dagger", "sword"]);
}

#[test]
fn look_shows_what_is_left() {
    let mut game = play(ARMOURY);
    game.execute("take sword");
    let turn = game.execute("look");
    assert_eq!(texts(&turn.lines), ["Racks line the walls.", "a small dagger"]);
}

#[test]
fn take_and_drop_by_id_match_taking_by_term() {
    const VAULT: &str = "\
Room vault:
  Title: the vault
  Description: A cold vault.
  Objects:
    gem

Object gem:
  Terms: jewel
  Description: a glittering jewel
";
    let mut by_id = play(VAULT);
    let mut by_term = play(VAULT);

    let turn = by_id.execute("take GEM");
    assert_eq!(texts(&turn.lines), ["OK"]);
    assert_eq!(texts(&turn.lines), texts(&by_term.execute("take jewel").lines));
    assert_eq!(by_id.context(), by_term.context());
    assert_eq!(by_id.context().inventory(), &[ItemId::new("gem")]);

    let turn = by_id.execute("drop gem");
    assert_eq!(texts(&turn.lines), ["OK"]);
    let room = by_id.world().room(&RoomId::new("vault")).unwrap();
    assert_eq!(room.items(), &[ItemId::new("gem")]);
}
