//! Line lexer for story files.
//!
//! Stories are line-oriented, so the lexer yields one [`Token`] per source
//! line. Classification ignores indentation.

use crate::span::Span;
use crate::token::{Section, Token, TokenKind};

/// Lexer for story source.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the token for the next line, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.position >= self.source.len() {
            return None;
        }

        let rest = &self.source[self.position..];
        let raw_len = rest.find('\n').map_or(rest.len(), |i| i + 1);
        let raw = &rest[..raw_len];
        let content = raw.trim_end_matches(['\n', '\r']);

        let leading = content.len() - content.trim_start().len();
        let trimmed = content.trim();
        let start = self.position + leading;
        let column = u32::try_from(content[..leading].chars().count() + 1).unwrap_or(u32::MAX);
        let span = Span::new(start, start + trimmed.len(), self.line, column);

        self.position += raw_len;
        self.line += 1;

        Some(Token::new(classify(trimmed), span))
    }

    /// Tokenizes all remaining lines.
    #[must_use]
    pub fn tokenize_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Classifies a trimmed line.
fn classify(line: &str) -> TokenKind {
    if line.is_empty() {
        return TokenKind::Blank;
    }
    if line == "Synonyms:" {
        return TokenKind::SynonymsHeader;
    }
    if let Some(id) = header_id(line, "Room") {
        return TokenKind::RoomHeader(id);
    }
    if let Some(id) = header_id(line, "Object") {
        return TokenKind::ObjectHeader(id);
    }
    if let Some((keyword, inline)) = line.split_once(':') {
        if let Some(name) = Section::from_keyword(keyword.trim_end()) {
            return TokenKind::Section {
                name,
                inline: inline.trim().to_string(),
            };
        }
    }
    TokenKind::Text
}

/// Extracts `<id>` from `<keyword> <id>:`.
fn header_id(line: &str, keyword: &str) -> Option<String> {
    let rest = line.strip_prefix(keyword)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let id = rest.strip_suffix(':')?.trim();
    Some(id.to_string())
}

/// Tokenizes a whole source string.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize_all()
}
