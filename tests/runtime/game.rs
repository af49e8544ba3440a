//! Game loop tests.

use hollow_command::Tone;
use hollow_runtime::{ColorChoice, Game, GameConfig, MemorySink, ReaderEditor, TerminalSink};
use hollow_story::compile;

const STORY: &str = "\
Room R1:
  Title: the first room
  Description: You are in the first room.
  Exits:
    north to R2
  Objects:
    sword

Room R2:
  Title: the second room
  Description: You are in the second room.

Object sword:
  Terms: sword, blade
  Description: a sharp sword
";

fn run(input: &str, config: GameConfig) -> (usize, MemorySink) {
    let editor = ReaderEditor::new(input.as_bytes());
    let mut game = Game::new(compile(STORY).unwrap(), editor, MemorySink::new(), config);
    let turns = game.run().unwrap();
    let (_, sink) = game.into_parts();
    (turns, sink)
}

#[test]
fn transcript_of_a_short_game() {
    let (turns, sink) = run("look\ntake blade\nnorth\nsouth\nquit\n", GameConfig::default());
    assert_eq!(turns, 5);
    assert_eq!(
        sink.texts(),
        [
            "You are in the first room.",
            "a sharp sword",
            "You are in the first room.",
            "a sharp sword",
            "OK",
            "You are in the second room.",
            "There is no way to go in that direction.",
            "You have died of dysentery.",
        ]
    );
}

#[test]
fn end_of_input_is_an_implicit_quit() {
    let (turns, sink) = run("inventory", GameConfig::default());
    assert_eq!(turns, 1);
    let lines = sink.lines();
    assert_eq!(lines[2].text, "You're not carrying anything.");
    assert_eq!(lines.last().unwrap().tone, Tone::Failure);
}

#[test]
fn blank_lines_take_a_turn_but_say_nothing() {
    let (turns, sink) = run("\n   \n", GameConfig::default().with_farewell(None));
    assert_eq!(turns, 2);
    assert_eq!(sink.texts(), ["You are in the first room.", "a sharp sword"]);
}

#[test]
fn terminal_sink_colours_by_tone() {
    let editor = ReaderEditor::new("take sword\nxyzzy\n".as_bytes());
    let config = GameConfig::default()
        .with_color(ColorChoice::Always)
        .with_farewell(None);
    let sink = TerminalSink::new(Vec::new(), config.color.enabled_for(false));
    let mut game = Game::new(compile(STORY).unwrap(), editor, sink, config);
    game.run().unwrap();

    let (_, sink) = game.into_parts();
    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(
        output,
        "You are in the first room.\na sharp sword\n\x1b[34mOK\x1b[0m\n\x1b[31m...and then?\x1b[0m\n"
    );
}

#[test]
fn history_skips_blank_lines() {
    let editor = ReaderEditor::new("look\n\nnorth\n".as_bytes());
    let mut game = Game::new(
        compile(STORY).unwrap(),
        editor,
        MemorySink::new(),
        GameConfig::default(),
    );
    game.run().unwrap();
    assert_eq!(game.editor().history(), ["look", "north"]);
}
