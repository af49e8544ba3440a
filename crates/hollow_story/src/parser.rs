//! Block parser for story files.
//!
//! The parser groups line tokens into room, object and synonym
//! declarations. It never fails: anything it cannot make sense of becomes a
//! [`Diagnostic`] and is skipped.

use hollow_foundation::Direction;

use crate::ast::{Declarations, ExitDecl, Field, ObjectDecl, ObjectRef, RoomDecl, SynonymDecl};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Section, Token, TokenKind};

/// A section of a block with its value lines.
struct SectionBody {
    name: Section,
    span: Span,
    lines: Vec<(String, Span)>,
}

impl SectionBody {
    /// Joins the value lines into a single field.
    fn field(&self) -> Field {
        let text = self
            .lines
            .iter()
            .map(|(line, _)| line.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Field {
            text,
            span: self.span,
        }
    }
}

/// Parser for story source.
pub struct Parser<'src> {
    /// Source text (for token text).
    source: &'src str,
    /// Every line of the source.
    tokens: Vec<Token>,
    /// Index of the next unread token.
    position: usize,
    /// Problems found so far.
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Lexer::new(source).tokenize_all(),
            position: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parses the whole source.
    #[must_use]
    pub fn parse(mut self) -> (Declarations, Vec<Diagnostic>) {
        let mut declarations = Declarations::default();

        while let Some(token) = self.advance() {
            match token.kind {
                TokenKind::RoomHeader(id) => {
                    let block = self.take_block();
                    if let Some(room) = self.room(id, token.span, &block) {
                        declarations.rooms.push(room);
                    }
                }
                TokenKind::ObjectHeader(id) => {
                    let block = self.take_block();
                    if let Some(object) = self.object(id, token.span, &block) {
                        declarations.objects.push(object);
                    }
                }
                TokenKind::SynonymsHeader => self.synonyms(&mut declarations.synonyms),
                // Text between blocks is commentary.
                TokenKind::Blank | TokenKind::Section { .. } | TokenKind::Text => {}
            }
        }

        tracing::debug!(
            rooms = declarations.rooms.len(),
            objects = declarations.objects.len(),
            synonyms = declarations.synonyms.len(),
            "parsed story"
        );
        (declarations, self.diagnostics)
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position)?.clone();
        self.position += 1;
        Some(token)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Takes tokens up to the next blank line, `Synonyms:` header, or end of
    /// input. A blank line is consumed; a `Synonyms:` header is left for
    /// [`parse`](Self::parse).
    fn take_block(&mut self) -> Vec<Token> {
        let mut block = Vec::new();
        while let Some(token) = self.peek() {
            if token.kind == TokenKind::SynonymsHeader {
                break;
            }
            let Some(token) = self.advance() else { break };
            if token.kind == TokenKind::Blank {
                break;
            }
            block.push(token);
        }
        block
    }

    fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>, span: Span) {
        let diagnostic = Diagnostic::new(kind, message, span);
        tracing::debug!(%diagnostic, "story diagnostic");
        self.diagnostics.push(diagnostic);
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// Splits a block body into sections.
    fn sections(&mut self, block: &[Token]) -> Vec<SectionBody> {
        let mut sections: Vec<SectionBody> = Vec::new();

        for token in block {
            let text = token.text(self.source);
            let in_objects = sections.last().is_some_and(|s| s.name == Section::Objects);

            if let (TokenKind::Section { name, inline }, false) = (&token.kind, in_objects) {
                let mut lines = Vec::new();
                if !inline.is_empty() {
                    lines.push((inline.clone(), token.span));
                }
                sections.push(SectionBody {
                    name: *name,
                    span: token.span,
                    lines,
                });
                continue;
            }

            if let Some(current) = sections.last_mut() {
                current.lines.push((text.to_string(), token.span));
            } else {
                self.report(
                    DiagnosticKind::StrayText,
                    format!("`{text}` is not inside a section"),
                    token.span,
                );
            }
        }

        sections
    }

    fn check_id(&mut self, what: &str, id: &str, span: Span) -> bool {
        if id.is_empty() {
            self.report(
                DiagnosticKind::MissingId,
                format!("{what} header has no id; block skipped"),
                span,
            );
            return false;
        }
        true
    }

    fn set_field(&mut self, slot: &mut Option<Field>, owner: &str, section: &SectionBody) {
        if slot.is_some() {
            self.report(
                DiagnosticKind::RepeatedSection,
                format!("{owner} has a second `{}` section; the later one wins", section.name),
                section.span,
            );
        }
        *slot = Some(section.field());
    }

    fn misplaced(&mut self, owner: &str, section: &SectionBody) {
        self.report(
            DiagnosticKind::MisplacedSection,
            format!("`{}` does not belong in {owner}; ignored", section.name),
            section.span,
        );
    }

    fn room(&mut self, id: String, span: Span, block: &[Token]) -> Option<RoomDecl> {
        if !self.check_id("room", &id, span) {
            return None;
        }

        let owner = format!("room `{id}`");
        let mut room = RoomDecl::new(id, span);
        let mut seen_exits = false;

        for section in self.sections(block) {
            match section.name {
                Section::Title => self.set_field(&mut room.title, &owner, &section),
                Section::Description => self.set_field(&mut room.description, &owner, &section),
                Section::Exits => {
                    if seen_exits {
                        self.report(
                            DiagnosticKind::RepeatedSection,
                            format!("{owner} has a second `Exits` section; exits are merged"),
                            section.span,
                        );
                    }
                    seen_exits = true;
                    for (line, line_span) in &section.lines {
                        if let Some(exit) = self.exit(line, *line_span) {
                            room.exits.push(exit);
                        }
                    }
                }
                Section::Objects => {
                    room.objects.extend(section.lines.iter().flat_map(|(line, line_span)| {
                        line.split_whitespace().map(move |name| ObjectRef {
                            name: name.to_string(),
                            span: *line_span,
                        })
                    }));
                }
                Section::Terms => self.misplaced(&owner, &section),
            }
        }

        if room.title.is_none() {
            self.report(
                DiagnosticKind::MissingSection,
                format!("{owner} has no `Title`"),
                span,
            );
        }
        if room.description.is_none() {
            self.report(
                DiagnosticKind::MissingSection,
                format!("{owner} has no `Description`"),
                span,
            );
        }

        Some(room)
    }

    /// Parses `<direction> to <target>`.
    fn exit(&mut self, line: &str, span: Span) -> Option<ExitDecl> {
        let mut words = line.split_whitespace();
        let (Some(direction), Some("to")) = (words.next(), words.next()) else {
            self.report(
                DiagnosticKind::MalformedExit,
                format!("expected `<direction> to <room>`, found `{line}`"),
                span,
            );
            return None;
        };

        let target = words.collect::<Vec<_>>().join(" ");
        if target.is_empty() {
            self.report(
                DiagnosticKind::MalformedExit,
                format!("exit `{line}` has no target room"),
                span,
            );
            return None;
        }

        match direction.parse::<Direction>() {
            Ok(direction) => Some(ExitDecl {
                direction,
                target,
                span,
            }),
            Err(err) => {
                self.report(
                    DiagnosticKind::UnknownDirection,
                    format!("unknown direction `{}`", err.0),
                    span,
                );
                None
            }
        }
    }

    fn object(&mut self, id: String, span: Span, block: &[Token]) -> Option<ObjectDecl> {
        if !self.check_id("object", &id, span) {
            return None;
        }

        let owner = format!("object `{id}`");
        let mut object = ObjectDecl::new(id, span);
        let mut seen_terms = false;

        for section in self.sections(block) {
            match section.name {
                Section::Terms => {
                    if seen_terms {
                        self.report(
                            DiagnosticKind::RepeatedSection,
                            format!("{owner} has a second `Terms` section; terms are merged"),
                            section.span,
                        );
                    }
                    seen_terms = true;
                    object.terms.extend(
                        section
                            .lines
                            .iter()
                            .flat_map(|(line, _)| line.split(','))
                            .map(str::trim)
                            .filter(|term| !term.is_empty())
                            .map(str::to_string),
                    );
                }
                Section::Description => self.set_field(&mut object.description, &owner, &section),
                Section::Title | Section::Exits | Section::Objects => {
                    self.misplaced(&owner, &section);
                }
            }
        }

        if !seen_terms {
            self.report(
                DiagnosticKind::MissingSection,
                format!("{owner} has no `Terms` and cannot be referred to by name"),
                span,
            );
        }
        if object.description.is_none() {
            self.report(
                DiagnosticKind::MissingSection,
                format!("{owner} has no `Description`"),
                span,
            );
        }

        Some(object)
    }

    // =========================================================================
    // Synonyms
    // =========================================================================

    /// Reads synonym lines until the next block header or end of input.
    fn synonyms(&mut self, out: &mut Vec<SynonymDecl>) {
        while self.peek().is_some_and(|t| !t.kind.is_block_header()) {
            let Some(token) = self.advance() else { break };
            if matches!(token.kind, TokenKind::Blank | TokenKind::SynonymsHeader) {
                continue;
            }

            let line = token.text(self.source);
            let Some((command, words)) = line.split_once(':') else {
                self.report(
                    DiagnosticKind::MalformedSynonym,
                    format!("expected `<command>:<word>,<word>`, found `{line}`"),
                    token.span,
                );
                continue;
            };

            out.push(SynonymDecl {
                command: command.trim().to_string(),
                words: words
                    .split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
                    .collect(),
                span: token.span,
            });
        }
    }
}

/// Parses story source into declarations and diagnostics.
#[must_use]
pub fn parse(source: &str) -> (Declarations, Vec<Diagnostic>) {
    Parser::new(source).parse()
}
