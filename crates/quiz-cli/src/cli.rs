//! CLI argument definitions for the quiz player.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use quiz_ingest::LoadOptions;
use quiz_model::QuizMode;

#[derive(Parser)]
#[command(
    name = "quiz",
    version,
    about = "Quiz player - Load XML question banks and play them in the terminal",
    long_about = "Load a quiz from an XML question document and play it.\n\n\
                  Documents whose file name contains 'textOnly' are text-only quizzes;\n\
                  any other document is a visual quiz with an <name>_images folder."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a question document and print its questions.
    Inspect(InspectArgs),

    /// Play a quiz, one command per line on stdin.
    Play(PlayArgs),
}

/// Options shared by every command that loads a document.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to the XML question document.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Load the document in this mode instead of detecting it from the file name.
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// Image folder (default: <FILE stem>_images next to the document).
    #[arg(long = "image-dir", value_name = "DIR")]
    pub image_dir: Option<PathBuf>,
}

impl SourceArgs {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            mode: self.mode.map(QuizMode::from),
            image_dir: self.image_dir.clone(),
        }
    }
}

#[derive(Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: InspectFormatArg,

    /// Report image references whose file is missing.
    #[arg(long = "check-images")]
    pub check_images: bool,
}

#[derive(Parser)]
pub struct PlayArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Simple,
    Visual,
}

impl From<ModeArg> for QuizMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => QuizMode::Simple,
            ModeArg::Visual => QuizMode::Visual,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InspectFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
