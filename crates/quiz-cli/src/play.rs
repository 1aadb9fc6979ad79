//! Line-oriented quiz driver.
//!
//! Reads one command per line, submits the matching session event and
//! prints the resulting screen.

use std::io::{self, BufRead, Write};

use quiz_ingest::ImageAssets;
use quiz_model::{QuizMode, option_index};
use quiz_session::{EventOutcome, Session, SessionEvent};

use crate::render::render_screen;

pub const HELP: &str = "\
Commands:
  simple, visual    choose the quiz mode
  start             start the quiz
  A, B, C, ...      answer with the option letter
  next              go to the next question
  reset             restart the quiz (asks for confirmation)
  confirm, cancel   answer the reset confirmation
  help              show this list
  quit              leave the quiz";

/// Longest accepted option label (`ZZ` is option 702).
const MAX_LABEL_LEN: usize = 2;

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    Event(SessionEvent),
    Help,
    Quit,
}

/// Parses a command; `None` for anything unrecognised.
///
/// Command words are case-insensitive and take precedence over option
/// letters.
pub fn parse_command(input: &str) -> Option<PlayCommand> {
    let word = input.trim().to_ascii_lowercase();
    let command = match word.as_str() {
        "simple" => PlayCommand::Event(SessionEvent::SelectMode(QuizMode::Simple)),
        "visual" => PlayCommand::Event(SessionEvent::SelectMode(QuizMode::Visual)),
        "start" => PlayCommand::Event(SessionEvent::Start),
        "next" => PlayCommand::Event(SessionEvent::Next),
        "reset" => PlayCommand::Event(SessionEvent::Reset),
        "confirm" => PlayCommand::Event(SessionEvent::ConfirmReset),
        "cancel" => PlayCommand::Event(SessionEvent::CancelReset),
        "help" | "?" => PlayCommand::Help,
        "quit" | "exit" => PlayCommand::Quit,
        label if label.len() <= MAX_LABEL_LEN => {
            PlayCommand::Event(SessionEvent::SelectAnswer(option_index(label)?))
        }
        _ => return None,
    };
    Some(command)
}

/// Runs `session` against the commands read from `input` until the input
/// ends or the player quits.
///
/// Unknown commands print a hint; commands that are not valid on the
/// current screen print a note. Neither changes the session.
pub fn run_session<R, W>(
    session: &mut Session,
    assets: &ImageAssets,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render_screen(session, assets))?;
    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        match parse_command(command) {
            None => writeln!(
                output,
                "Unknown command '{command}'. Type 'help' for the list of commands."
            )?,
            Some(PlayCommand::Quit) => break,
            Some(PlayCommand::Help) => writeln!(output, "{HELP}")?,
            Some(PlayCommand::Event(event)) => match session.handle(event) {
                EventOutcome::Applied { .. } => {
                    writeln!(output, "{}", render_screen(session, assets))?;
                }
                EventOutcome::Ignored { screen } => writeln!(
                    output,
                    "'{command}' does nothing on the {} screen.",
                    screen.name().to_lowercase()
                )?,
            },
        }
    }
    output.flush()
}
