//! `lexedit` - terminal text editor
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin lexedit
//! cargo run --bin lexedit -- script.py
//! cargo run --bin lexedit -- --log-file lexedit.log --log-level debug notes.txt
//! ```
//!
//! Press Esc to quit.

use lexedit::{Editor, EditorConfig, FsPersistence, LinePrompt, StdioSurface};
use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "lexedit - terminal text editor with syntax highlighting

USAGE:
    lexedit [OPTIONS] [FILE]

ARGS:
    [FILE]                  File to open at startup (created on first save
                            if it does not exist)

OPTIONS:
    -h, --help              Print this help message and exit
    --history-depth <N>     Undo snapshots to keep (default: 50)
    --margin <N>            Columns kept free on the right before
                            scrolling horizontally (default: 5)
    --no-alt-screen         Don't enter alternate screen

    --log-file <PATH>       Write logs to PATH (logging is off otherwise)
    --log-level <LEVEL>     trace, debug, info, warn or error (default: info)

KEYS:
    Esc exit | F2 save | F3 open | Ctrl+Z undo | Ctrl+Y redo
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
pub struct Config {
    pub editor: EditorConfig,
    pub file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            file: None,
            log_file: None,
            log_level: Level::INFO,
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--no-alt-screen" => config.editor.use_alt_screen = false,

                "--history-depth" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--history-depth requires a value".to_string());
                    };
                    let value = value.to_string_lossy().to_string();
                    match value.parse::<usize>() {
                        Ok(n) if n > 0 => config.editor.history_depth = n,
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --history-depth value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                "--margin" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--margin requires a value".to_string());
                    };
                    let value = value.to_string_lossy().to_string();
                    match value.parse::<usize>() {
                        Ok(n) => config.editor.horizontal_margin = n,
                        Err(_) => {
                            return ParseResult::Error(format!("Invalid --margin value: {value}"));
                        }
                    }
                }

                "--log-file" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--log-file requires a path".to_string());
                    };
                    config.log_file = Some(PathBuf::from(value));
                }

                "--log-level" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--log-level requires a value".to_string());
                    };
                    let value = value.to_string_lossy().to_string();
                    match value.parse::<Level>() {
                        Ok(level) => config.log_level = level,
                        Err(_) => {
                            return ParseResult::Error(format!(
                                "Invalid --log-level: {value} (use trace, debug, info, warn or error)"
                            ));
                        }
                    }
                }

                other if other.starts_with('-') && other != "-" => {
                    return ParseResult::Error(format!("Unknown option: {other}"));
                }

                _ => {
                    if config.file.is_some() {
                        return ParseResult::Error("Only one FILE may be given".to_string());
                    }
                    config.file = Some(PathBuf::from(&arg));
                }
            }
        }

        ParseResult::Config(config)
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> lexedit::Result<()> {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => run(&config),
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Logs go to a file only; stdout belongs to the editor.
fn init_logging(config: &Config) -> lexedit::Result<()> {
    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(config.log_level)
            .init();
    }
    Ok(())
}

fn run(config: &Config) -> lexedit::Result<()> {
    init_logging(config)?;
    tracing::info!(file = ?config.file, "starting lexedit");

    let surface = StdioSurface::stdio(&config.editor)?;
    let mut editor = Editor::new(
        config.editor.clone(),
        surface,
        FsPersistence::new(),
        LinePrompt::new(),
    );
    if let Some(path) = &config.file {
        editor.open_startup(path);
    }
    let result = editor.run();
    tracing::info!(ok = result.is_ok(), "lexedit exiting");
    result
}
