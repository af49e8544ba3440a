//! Lexer tests.
//!
//! Tests for classifying story lines.

use hollow_story::{Lexer, Section, Span, TokenKind, tokenize};

#[test]
fn one_token_per_line_with_positions() {
    let source = "Room cellar:\n  Title: the cellar\n\n  Exits:\n";
    let tokens = tokenize(source);

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::RoomHeader("cellar".into()));
    assert_eq!(tokens[1].span, Span::new(15, 32, 2, 3));
    assert_eq!(tokens[1].text(source), "Title: the cellar");
    assert_eq!(tokens[2].kind, TokenKind::Blank);
    assert_eq!(tokens[3].span.line, 4);
}

#[test]
fn indentation_does_not_matter() {
    let flush = tokenize("Title: x");
    let indented = tokenize("\t\t  Title: x");
    assert_eq!(flush[0].kind, indented[0].kind);
    assert_eq!(indented[0].span.column, 5);
}

#[test]
fn every_section_keyword_is_recognised() {
    for section in Section::ALL {
        let line = format!("{section}: value");
        let tokens = tokenize(&line);
        assert_eq!(
            tokens[0].kind,
            TokenKind::Section {
                name: section,
                inline: "value".into()
            }
        );
    }
}

#[test]
fn keywords_are_case_sensitive() {
    let kinds: Vec<TokenKind> = Lexer::new("room a:\nOBJECT b:\nsynonyms:\nterms: x")
        .map(|t| t.kind)
        .collect();
    assert!(kinds.iter().all(|k| *k == TokenKind::Text));
}

#[test]
fn column_counts_characters_not_bytes() {
    let tokens = tokenize("\u{3000}Room a:");
    assert_eq!(tokens[0].kind, TokenKind::RoomHeader("a".into()));
    assert_eq!(tokens[0].span.column, 2);
    assert_eq!(tokens[0].span.start, 3);
}
