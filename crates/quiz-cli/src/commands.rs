use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use quiz_cli::inspect::{InspectReport, missing_table, question_table};
use quiz_cli::play::run_session;
use quiz_ingest::{LoadedQuiz, load_quiz_file};
use quiz_session::Session;
use tracing::{info, info_span};

use crate::cli::{InspectArgs, InspectFormatArg, PlayArgs, SourceArgs};

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let quiz = load(&args.source)?;
    let missing = args
        .check_images
        .then(|| quiz.assets.missing(&quiz.bank));

    match args.format {
        InspectFormatArg::Json => {
            let report =
                InspectReport::new(&quiz.path, &quiz.bank, &quiz.assets, missing.as_deref());
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{json}");
        }
        InspectFormatArg::Table => {
            println!("Quiz: {}", quiz.path.display());
            println!("Mode: {}", quiz.bank.mode());
            println!("Questions: {}", quiz.bank.len());
            if quiz.bank.mode().is_visual() {
                println!("Images: {}", quiz.assets.dir().display());
            }
            println!("{}", question_table(&quiz.bank));
            match &missing {
                Some(missing) if missing.is_empty() => println!("All image files found."),
                Some(missing) => {
                    println!();
                    println!("Missing images:");
                    println!("{}", missing_table(missing));
                }
                None => {}
            }
        }
    }
    Ok(())
}

pub fn run_play(args: &PlayArgs) -> Result<()> {
    let quiz = load(&args.source)?;
    let missing = quiz.assets.missing(&quiz.bank);
    if !missing.is_empty() {
        eprintln!(
            "warning: {} image file(s) missing under {}",
            missing.len(),
            quiz.assets.dir().display()
        );
    }

    let span = info_span!("play", path = %quiz.path.display());
    let _guard = span.enter();
    let mut session = Session::new(Arc::new(quiz.bank));
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut session, &quiz.assets, stdin.lock(), stdout.lock())
        .context("play session")?;
    info!(
        score = session.score(),
        total = session.total(),
        "Session ended"
    );
    Ok(())
}

fn load(source: &SourceArgs) -> Result<LoadedQuiz> {
    load_quiz_file(&source.file, &source.load_options())
        .with_context(|| format!("load quiz {}", source.file.display()))
}
