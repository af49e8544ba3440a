//! First-visit and revisit narration tests.

use hollow_command::{Tone, TurnOutcome};

use crate::{ARMOURY, texts};

#[test]
fn start_describes_room_and_items() {
    let mut game = hollow_story::compile(ARMOURY).unwrap().into_interpreter();
    let lines = game.start();
    assert_eq!(
        texts(&lines),
        ["Racks line the walls.", "a sharp sword", "a small dagger"]
    );
    assert!(lines.iter().all(|line| line.tone == Tone::Narration));
}

#[test]
fn first_visit_full_then_short_form() {
    let mut game = crate::play(ARMOURY);

    let turn = game.execute("north");
    assert_eq!(texts(&turn.lines), ["An open yard."]);

    let turn = game.execute("south");
    assert_eq!(texts(&turn.lines), ["You're at the armoury."]);

    let turn = game.execute("north");
    assert_eq!(texts(&turn.lines), ["You're at the yard."]);
}

#[test]
fn non_movement_commands_add_no_room_text() {
    let mut game = crate::play(ARMOURY);
    let turn = game.execute("take sword");
    assert_eq!(texts(&turn.lines), ["OK"]);
    assert_eq!(turn.lines[0].tone, Tone::Success);
}

#[test]
fn quit_ends_silently() {
    let mut game = crate::play(ARMOURY);
    let turn = game.execute("quit");
    assert!(matches!(turn.outcome, TurnOutcome::Ended));
    assert!(turn.lines.is_empty());
}
