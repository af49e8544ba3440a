//! The cave story.
//!
//! Demonstrates:
//! - Multi-line descriptions and a commentary paragraph outside blocks
//! - Enter/exit directions
//! - A full synonym table

use hollow_foundation::{Command, Direction, ItemId, RoomId};
use hollow_runtime::{Game, GameConfig, MemorySink, ReaderEditor};
use hollow_story::compile;

const CAVE: &str = include_str!("../../stories/cave.story");

#[test]
fn cave_compiles_cleanly() {
    let story = compile(CAVE).unwrap();
    assert!(story.diagnostics().is_empty(), "{:?}", story.diagnostics());
    assert_eq!(story.world().room_count(), 5);
    assert_eq!(story.world().items().len(), 3);
    assert_eq!(story.world().start(), &RoomId::new("mouth"));
    assert_eq!(story.aliases().resolve("leave"), Some(Command::Go(Direction::Exit)));
}

#[test]
fn cave_walkthrough() {
    let mut game = compile(CAVE).unwrap().into_interpreter();
    let opening = game.start();
    assert_eq!(
        opening[0].text,
        "You stand at the mouth of a cave. Daylight spills in from the south, \
         and a narrow passage leads north into darkness."
    );
    assert_eq!(opening[1].text, "A brass lamp lies on the ground.");

    game.execute("get lantern");
    game.execute("n");
    game.execute("e");
    game.execute("grab sword");
    game.execute("in");
    assert_eq!(game.context().room(), &RoomId::new("crack"));

    game.execute("put blade");
    let crack = game.world().room(&RoomId::new("crack")).unwrap();
    assert_eq!(crack.items(), &[ItemId::new("sword")]);

    let turn = game.execute("out");
    assert_eq!(turn.lines[0].text, "You're at the crystal chamber.");

    let turn = game.execute("i");
    let carried: Vec<&str> = turn.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(carried, ["lamp"]);
}

#[test]
fn cave_replay_through_game_loop() {
    let moves = "exit\nenter\nq\n";
    let mut game = Game::new(
        compile(CAVE).unwrap(),
        ReaderEditor::new(moves.as_bytes()),
        MemorySink::new(),
        GameConfig::default(),
    );
    assert_eq!(game.run().unwrap(), 3);
    let texts = game.sink().texts();
    assert_eq!(texts[2], "A sunny meadow stretches away from the cave.");
    assert_eq!(texts[3], "You're at the cave mouth.");
    assert_eq!(texts.last(), Some(&"You have died of dysentery."));
}
