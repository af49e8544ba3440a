//! Property tests over arbitrary command sequences.

use std::collections::BTreeMap;

use hollow_command::Interpreter;
use hollow_foundation::ItemId;
use proptest::prelude::*;

use crate::{ARMOURY, play, texts};

// =============================================================================
// Generators
// =============================================================================

/// Commands written with canonical words only.
fn canonical_command() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "north",
        "south",
        "east",
        "west",
        "look",
        "inventory",
        "take sword",
        "take blade",
        "take knife",
        "drop sword",
        "drop blade",
        "drop knife",
    ])
}

/// Commands that never pick anything up.
fn wandering_command() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["north", "south", "west", "look", "inventory", "xyzzy"])
}

/// Object words the story knows.
fn object_word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["sword", "blade", "knife", "dagger", "rock"])
}

/// Rewrites canonical command words as story synonyms.
fn with_synonyms(command: &str) -> String {
    let (verb, rest) = command.split_once(' ').unwrap_or((command, ""));
    let verb = match verb {
        "north" => "n",
        "south" => "s",
        "take" => "grab",
        other => other,
    };
    format!("{verb} {rest}")
}

// =============================================================================
// Helpers
// =============================================================================

/// Where every item is: room id, or "inventory".
fn locations(game: &Interpreter) -> BTreeMap<ItemId, Vec<String>> {
    let mut map: BTreeMap<ItemId, Vec<String>> = BTreeMap::new();
    for room in game.world().rooms() {
        for item in room.items() {
            map.entry(item.clone()).or_default().push(room.id().to_string());
        }
    }
    for item in game.context().inventory() {
        map.entry(item.clone()).or_default().push("inventory".to_string());
    }
    map
}

fn sorted_room_items(game: &Interpreter) -> Vec<ItemId> {
    let room = game.world().room(game.context().room()).unwrap();
    let mut items = room.items().to_vec();
    items.sort();
    items
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every item is always in exactly one place.
    #[test]
    fn items_are_conserved(commands in prop::collection::vec(canonical_command(), 0..40)) {
        let mut game = play(ARMOURY);
        for command in &commands {
            game.execute(command);
            let locations = locations(&game);
            prop_assert_eq!(locations.len(), 2);
            prop_assert!(locations.values().all(|places| places.len() == 1));
        }
    }

    /// Taking then dropping the same word restores the room and empty hands.
    #[test]
    fn take_then_drop_restores_state(
        wander in prop::collection::vec(wandering_command(), 0..10),
        word in object_word(),
    ) {
        let mut game = play(ARMOURY);
        for command in &wander {
            game.execute(command);
        }
        let before = sorted_room_items(&game);

        game.execute(&format!("take {word}"));
        game.execute(&format!("drop {word}"));

        prop_assert_eq!(sorted_room_items(&game), before);
        prop_assert!(game.context().inventory().is_empty());
    }

    /// Synonyms behave exactly like the canonical words they stand for.
    #[test]
    fn synonyms_match_canonical(commands in prop::collection::vec(canonical_command(), 0..30)) {
        let mut canonical = play(ARMOURY);
        let mut aliased = play(ARMOURY);

        for command in &commands {
            let expected = canonical.execute(command);
            let actual = aliased.execute(&with_synonyms(command));
            prop_assert_eq!(texts(&expected.lines), texts(&actual.lines));
        }
        prop_assert_eq!(canonical.context().room(), aliased.context().room());
        prop_assert_eq!(canonical.context().inventory(), aliased.context().inventory());
    }

    /// Unrecognised words change nothing.
    #[test]
    fn unknown_words_change_nothing(
        commands in prop::collection::vec(canonical_command(), 0..20),
        word in "[a-z]{3,8}".prop_filter("not a known word", |w| {
            !["north", "south", "east", "west", "enter", "exit", "look", "take",
              "drop", "inventory", "quit", "grab", "get"].contains(&w.as_str())
        }),
    ) {
        let mut game = play(ARMOURY);
        for command in &commands {
            game.execute(command);
        }
        let room = game.context().room().clone();
        let places = locations(&game);

        let turn = game.execute(&format!("{word} sword"));
        prop_assert_eq!(texts(&turn.lines), ["...and then?"]);
        prop_assert_eq!(game.context().room(), &room);
        prop_assert_eq!(locations(&game), places);
    }
}
