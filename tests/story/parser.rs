//! Parser tests.
//!
//! Tests for grouping lines into declarations.

use hollow_foundation::Direction;
use hollow_story::{DiagnosticKind, parse};

#[test]
fn description_spans_continuation_lines() {
    let source = "\
Room r1:
  Title: the hall
  Description:
    A long
    hall.
  Exits:
    north to r2
";
    let (decls, diagnostics) = parse(source);
    assert!(diagnostics.is_empty());
    let room = &decls.rooms[0];
    assert_eq!(room.description.as_ref().unwrap().text, "A long hall.");
    assert_eq!(room.exits[0].direction, Direction::North);
}

#[test]
fn objects_section_consumes_rest_of_block() {
    let source = "\
Room r1:
  Title: t
  Description: d
  Objects:
    sword
    Exits:
    lamp
";
    let (decls, _) = parse(source);
    let names: Vec<&str> = decls.rooms[0]
        .objects
        .iter()
        .map(|o| o.name.as_str())
        .collect();
    assert_eq!(names, ["sword", "Exits:", "lamp"]);
    assert!(decls.rooms[0].exits.is_empty());
}

#[test]
fn blocks_may_appear_in_any_order() {
    let source = "\
Object lamp:
  Terms: lamp
  Description: a lamp

Synonyms:
  take:get

Room r1:
  Title: t
  Description: d
";
    let (decls, diagnostics) = parse(source);
    assert!(diagnostics.is_empty());
    assert_eq!(decls.objects.len(), 1);
    assert_eq!(decls.synonyms.len(), 1);
    assert_eq!(decls.rooms.len(), 1);
}

#[test]
fn every_direction_parses() {
    let source = "\
Room r1:
  Title: t
  Description: d
  Exits:
    north to a
    south to b
    east to c
    west to d
    enter to e
    exit to f
";
    let (decls, diagnostics) = parse(source);
    assert!(diagnostics.is_empty());
    let directions: Vec<Direction> = decls.rooms[0].exits.iter().map(|e| e.direction).collect();
    assert_eq!(directions, Direction::ALL);
}

#[test]
fn bad_exit_lines_are_reported_with_their_line() {
    let source = "\
Room r1:
  Title: t
  Description: d
  Exits:
    North to a
    south a
    east to
";
    let (decls, diagnostics) = parse(source);
    assert!(decls.rooms[0].exits.is_empty());
    let found: Vec<(DiagnosticKind, u32)> = diagnostics
        .iter()
        .map(|d| (d.kind, d.span.line))
        .collect();
    assert_eq!(
        found,
        [
            (DiagnosticKind::UnknownDirection, 5),
            (DiagnosticKind::MalformedExit, 6),
            (DiagnosticKind::MalformedExit, 7),
        ]
    );
}

#[test]
fn synonyms_directly_after_a_block_are_not_swallowed() {
    let source = "\
Object lamp:
  Terms: lamp
  Description: A lamp.
Synonyms:
  north:n
";
    let (decls, diagnostics) = parse(source);
    assert!(diagnostics.is_empty());
    assert_eq!(decls.objects[0].description.as_ref().unwrap().text, "A lamp.");
    assert_eq!(decls.synonyms.len(), 1);
    assert_eq!(decls.synonyms[0].command, "north");
    assert_eq!(decls.synonyms[0].words, ["n"]);
}
