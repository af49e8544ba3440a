//! Story compilation.
//!
//! Turns parsed declarations into a [`World`] and an [`AliasTable`]. Only a
//! story with no rooms at all fails to compile; everything else degrades to
//! defaults and is reported as a [`Diagnostic`].

use std::collections::{HashMap, HashSet};
use std::path::Path;

use hollow_command::{AliasTable, Interpreter};
use hollow_foundation::{
    Command, Direction, Error, ErrorContext, ErrorKind, ItemId, Result, RoomId,
};
use hollow_world::{DanglingReference, Item, ItemTable, Room, World};

use crate::ast::{Declarations, ObjectDecl, RoomDecl, SynonymDecl};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::parser;
use crate::span::Span;

/// Options controlling compilation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reject stories with dangling exits or object references.
    pub strict: bool,
}

impl CompileOptions {
    /// Creates the default, lenient options.
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Creates options with strict validation on or off.
    #[must_use]
    pub const fn strict(strict: bool) -> Self {
        Self { strict }
    }
}

/// A compiled story, ready to play.
#[derive(Debug)]
pub struct Story {
    world: World,
    aliases: AliasTable,
    diagnostics: Vec<Diagnostic>,
}

impl Story {
    /// Returns the compiled world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the alias table: base vocabulary plus story synonyms.
    #[must_use]
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Returns every diagnostic, in the order found.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of exits and object references that name nothing.
    #[must_use]
    pub fn dangling_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.kind.is_dangling())
            .count()
    }

    /// Creates an interpreter with the player at the start room.
    #[must_use]
    pub fn into_interpreter(self) -> Interpreter {
        Interpreter::new(self.world, self.aliases)
    }
}

/// Compiles story source into a playable [`Story`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StoryCompiler {
    options: CompileOptions,
}

impl StoryCompiler {
    /// Creates a compiler with the given options.
    #[must_use]
    pub const fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Compiles story source.
    ///
    /// # Errors
    ///
    /// Returns `MalformedStory` if the source declares no room, or
    /// `DanglingReferences` in strict mode if any exit or object reference
    /// names nothing.
    pub fn compile(&self, source: &str) -> Result<Story> {
        let (declarations, diagnostics) = parser::parse(source);
        let mut build = Build::new(diagnostics);
        let story = build.story(declarations)?;

        let dangling = story.dangling_count();
        tracing::debug!(
            rooms = story.world.room_count(),
            items = story.world.items().len(),
            words = story.aliases.len(),
            diagnostics = story.diagnostics.len(),
            dangling,
            "compiled story"
        );

        if self.options.strict && dangling > 0 {
            let mut error = Error::new(ErrorKind::DanglingReferences { count: dangling });
            if let Some(first) = story.diagnostics.iter().find(|d| d.kind.is_dangling()) {
                error = error.with_context(
                    ErrorContext::new()
                        .with_position(first.span.line as usize, first.span.column as usize),
                );
            }
            return Err(error);
        }

        Ok(story)
    }

    /// Reads and compiles a story file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as
    /// [`compile`](Self::compile) with the path attached as context.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Story> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::info!(path = %path.display(), bytes = source.len(), "loaded story");

        self.compile(&source).map_err(|mut error| {
            let context = error.context.take().unwrap_or_default();
            error.with_context(context.with_source(path.display().to_string()))
        })
    }
}

/// Compiles story source with default options.
///
/// # Errors
///
/// Returns `MalformedStory` if the source declares no room.
pub fn compile(source: &str) -> Result<Story> {
    StoryCompiler::default().compile(source)
}

/// Compiles story source with the given options.
///
/// # Errors
///
/// See [`StoryCompiler::compile`].
pub fn compile_with(source: &str, options: CompileOptions) -> Result<Story> {
    StoryCompiler::new(options).compile(source)
}

/// Collapses runs of whitespace into single spaces and trims.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Working state for one compilation.
struct Build {
    diagnostics: Vec<Diagnostic>,
    exit_spans: HashMap<(RoomId, Direction), Span>,
    object_spans: HashMap<(RoomId, ItemId), Span>,
}

impl Build {
    fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagnostics,
            exit_spans: HashMap::new(),
            object_spans: HashMap::new(),
        }
    }

    fn report(&mut self, kind: DiagnosticKind, message: String, span: Span) {
        let diagnostic = Diagnostic::new(kind, message, span);
        tracing::debug!(%diagnostic, "story diagnostic");
        self.diagnostics.push(diagnostic);
    }

    fn story(&mut self, declarations: Declarations) -> Result<Story> {
        let Declarations {
            rooms,
            objects,
            synonyms,
        } = declarations;

        let Some(first) = rooms.first() else {
            return Err(Error::malformed_story("no `Room <id>:` block found"));
        };
        tracing::trace!(start = %first.id, "start room");

        let items = self.items(&objects);
        let rooms = self.rooms(&rooms, &items);
        let aliases = self.aliases(&synonyms);
        let world = World::new(rooms, items)?;

        for reference in world.dangling_references() {
            self.dangling(&reference);
        }

        Ok(Story {
            world,
            aliases,
            diagnostics: std::mem::take(&mut self.diagnostics),
        })
    }

    // =========================================================================
    // Items
    // =========================================================================

    fn items(&mut self, objects: &[ObjectDecl]) -> ItemTable {
        let mut table = ItemTable::new();

        for object in objects {
            for term in &object.terms {
                if let Some(owner) = table.term_owner(term) {
                    if owner.as_str() != object.id {
                        let message = format!(
                            "term `{term}` already names `{owner}`; `{}` takes it over",
                            object.id
                        );
                        self.report(DiagnosticKind::SharedTerm, message, object.span);
                    }
                }
            }

            let item = Item::new(object.id.as_str())
                .with_terms(object.terms.iter().map(String::as_str))
                .with_description(
                    object
                        .description
                        .as_ref()
                        .map(|d| collapse(&d.text))
                        .unwrap_or_default(),
                );

            if table.insert(item).is_some() {
                let message = format!("object `{}` declared again; the later one wins", object.id);
                self.report(DiagnosticKind::DuplicateItem, message, object.span);
            }
        }

        table
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    fn rooms(&mut self, decls: &[RoomDecl], items: &ItemTable) -> Vec<Room> {
        let mut seen = HashSet::new();
        decls
            .iter()
            .map(|decl| {
                if !seen.insert(decl.id.as_str()) {
                    let message = format!(
                        "room `{}` declared again; the later one replaces it",
                        decl.id
                    );
                    self.report(DiagnosticKind::DuplicateRoom, message, decl.span);
                    self.exit_spans.retain(|(room, _), _| room.as_str() != decl.id);
                    self.object_spans.retain(|(room, _), _| room.as_str() != decl.id);
                }
                self.room(decl, items)
            })
            .collect()
    }

    fn room(&mut self, decl: &RoomDecl, items: &ItemTable) -> Room {
        let id = RoomId::new(decl.id.as_str());
        let mut room = Room::new(id.clone())
            .with_title(decl.title.as_ref().map(|t| collapse(&t.text)).unwrap_or_default())
            .with_description(
                decl.description
                    .as_ref()
                    .map(|d| collapse(&d.text))
                    .unwrap_or_default(),
            );

        for exit in &decl.exits {
            if room.exit(exit.direction).is_some() {
                let message = format!(
                    "room `{id}` has a second {} exit; `{}` wins",
                    exit.direction, exit.target
                );
                self.report(DiagnosticKind::RepeatedExit, message, exit.span);
            }
            room = room.with_exit(exit.direction, exit.target.as_str());
            self.exit_spans.insert((id.clone(), exit.direction), exit.span);
        }

        for object in &decl.objects {
            let item = items
                .resolve(&object.name)
                .map_or_else(|| ItemId::new(object.name.as_str()), |item| item.id().clone());
            if room.contains(&item) {
                let message = format!("room `{id}` lists `{}` twice; ignored", object.name);
                self.report(DiagnosticKind::DuplicateObject, message, object.span);
                continue;
            }
            self.object_spans.insert((id.clone(), item.clone()), object.span);
            room.add_item(item);
        }

        room
    }

    fn dangling(&mut self, reference: &DanglingReference) {
        let (kind, span) = match reference {
            DanglingReference::Exit {
                room, direction, ..
            } => (
                DiagnosticKind::DanglingExit,
                self.exit_spans.get(&(room.clone(), *direction)),
            ),
            DanglingReference::Item { room, item } => (
                DiagnosticKind::DanglingObject,
                self.object_spans.get(&(room.clone(), item.clone())),
            ),
        };
        let span = span.copied().unwrap_or_default();
        self.report(kind, reference.to_string(), span);
    }

    // =========================================================================
    // Synonyms
    // =========================================================================

    fn aliases(&mut self, synonyms: &[SynonymDecl]) -> AliasTable {
        let mut aliases = AliasTable::new();

        for synonym in synonyms {
            let Ok(command) = synonym.command.parse::<Command>() else {
                let message = format!("`{}` is not a command; line skipped", synonym.command);
                self.report(DiagnosticKind::UnknownCommand, message, synonym.span);
                continue;
            };

            for word in &synonym.words {
                if let Some(previous) = aliases.register(word, command) {
                    if previous != command {
                        tracing::debug!(%word, %previous, %command, "synonym rebinds word");
                    }
                }
            }
        }

        aliases
    }
}
