//! Hollow CLI entry point.

use hollow_foundation::Error;
use hollow_runtime::{ColorChoice, Game, GameConfig, ReaderEditor, TerminalSink, logging};
use hollow_story::StoryCompiler;
use std::env;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    story: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
    check: bool,
    strict: bool,
    no_color: bool,
    prompt: Option<String>,
    verbosity: u8,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--check" => config.check = true,
            "--strict" => config.strict = true,
            "--no-color" => config.no_color = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "--prompt" => {
                i += 1;
                if i >= args.len() {
                    return Err("--prompt requires a value".into());
                }
                config.prompt = Some(args[i].clone());
            }
            arg if arg.len() > 2 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v') => {
                let count = u8::try_from(arg.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(count);
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.story.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.story = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Renders an error with its source location, if it has one.
fn describe(error: Error) -> Box<dyn std::error::Error> {
    let Some(context) = error.context.clone() else {
        return error.into();
    };
    format!("{error} ({context})").into()
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("hollow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.verbosity);

    let Some(story) = config.story else {
        print_usage();
        return Err("no story file given".into());
    };

    let mut game_config = GameConfig::default().with_strict(config.strict);
    if config.no_color {
        game_config = game_config.with_color(ColorChoice::Never);
    }
    if let Some(prompt) = config.prompt {
        game_config = game_config.with_prompt(prompt);
    }

    if config.check {
        return check(&story, &game_config);
    }

    if io::stdin().is_terminal() {
        let mut game = Game::load(&story, game_config).map_err(describe)?;
        game.run().map_err(describe)?;
    } else {
        // Piped moves: no line editing, no echoed prompt.
        let compiled = StoryCompiler::new(game_config.compile_options())
            .load(&story)
            .map_err(describe)?;
        let sink = TerminalSink::stdout(game_config.color.enabled());
        let editor = ReaderEditor::new(io::stdin().lock());
        let mut game = Game::new(compiled, editor, sink, game_config);
        game.run().map_err(describe)?;
    }
    Ok(())
}

/// Compiles the story and lists its diagnostics without playing.
fn check(path: &Path, config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    let story = StoryCompiler::new(config.compile_options())
        .load(path)
        .map_err(describe)?;

    for diagnostic in story.diagnostics() {
        println!("{}:{diagnostic}", path.display());
    }

    let world = story.world();
    println!(
        "{}: {} room(s), {} object(s), {} diagnostic(s)",
        path.display(),
        world.room_count(),
        world.items().len(),
        story.diagnostics().len()
    );

    match story.dangling_count() {
        0 => Ok(()),
        count => Err(format!("{count} dangling reference(s)").into()),
    }
}

fn print_usage() {
    eprintln!("USAGE:\n    hollow [OPTIONS] STORY_FILE\n\nRun `hollow --help` for more.");
}

fn print_help() {
    println!(
        "\x1b[1mHollow\x1b[0m - Text adventure interpreter

\x1b[1mUSAGE:\x1b[0m
    hollow [OPTIONS] STORY_FILE

\x1b[1mARGUMENTS:\x1b[0m
    STORY_FILE    Story to play

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --check            Compile the story, list diagnostics, and exit
    --strict           Refuse stories with exits or objects that name nothing
    --no-color         Never colour output
    --prompt TEXT      Prompt shown before each command (default \"> \")
    -v, --verbose      Log more to stderr (repeat for more; RUST_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    hollow cave.story              Play cave.story
    hollow --check cave.story      Validate cave.story
    hollow -vv cave.story < moves  Replay moves with debug logging

\x1b[1mIN GAME:\x1b[0m
    north, south, east, west, enter, exit
    look, take THING, drop THING, inventory, quit
    Ctrl+D               Quit
    Ctrl+C               Clear the current line

For more information, visit https://github.com/ndouglas/hollow"
    );
}
