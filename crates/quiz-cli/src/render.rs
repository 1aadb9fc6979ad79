//! Plain-text rendering of session screens.

use quiz_ingest::ImageAssets;
use quiz_model::{QuestionSet, option_label};
use quiz_session::{ScreenView, Session};

/// Renders the current screen of `session` as terminal text.
///
/// Image references are shown as paths resolved against `assets`, and only
/// when the player picked the visual mode.
pub fn render_screen(session: &Session, assets: &ImageAssets) -> String {
    let mut lines = Vec::new();
    match session.view() {
        ScreenView::ChooseMode { visual_available } => {
            if visual_available {
                lines.push("Choose a mode: simple or visual".to_string());
            } else {
                lines.push("Choose a mode: simple (text-only quiz)".to_string());
            }
        }
        ScreenView::Ready { total } => {
            lines.push(format!("Ready: {}. Type 'start' to begin.", questions(total)));
        }
        ScreenView::Question {
            question,
            number,
            total,
            show_images,
        } => {
            lines.push(progress_line(number, total));
            render_question(&mut lines, question, show_images.then_some(assets));
        }
        ScreenView::PopupCorrect { .. } => {
            lines.push("Correct!".to_string());
            lines.push("Type 'next' to continue.".to_string());
        }
        ScreenView::PopupIncorrect {
            correct_label,
            correct_option,
        } => {
            lines.push(format!(
                "Incorrect. The correct answer was... {correct_label}: {}",
                correct_option.text()
            ));
            lines.push("Type 'next' to continue.".to_string());
        }
        ScreenView::ConfirmReset => {
            lines.push("Reset the quiz? Type 'confirm' or 'cancel'.".to_string());
        }
        ScreenView::Final { score, total } => {
            lines.push(format!("Final score: {score} out of {total}"));
            lines.push("Type 'reset' to play again.".to_string());
        }
    }
    lines.join("\n")
}

/// The "Question N out of TOTAL" header line.
pub fn progress_line(number: usize, total: usize) -> String {
    format!("Question {number} out of {total}")
}

fn render_question(lines: &mut Vec<String>, question: &QuestionSet, assets: Option<&ImageAssets>) {
    lines.push(question.prompt().to_string());
    if let Some(assets) = assets
        && let Ok(image_ref) = question.image_ref()
    {
        lines.push(format!("[image: {}]", assets.resolve(image_ref).display()));
    }
    for (index, option) in question.options().iter().enumerate() {
        let mut line = format!("  {}) {}", option_label(index), option.text());
        if let Some(assets) = assets
            && let Ok(image_ref) = option.image_ref()
        {
            line.push_str(&format!(" [image: {}]", assets.resolve(image_ref).display()));
        }
        lines.push(line);
    }
}

fn questions(total: usize) -> String {
    if total == 1 {
        "1 question".to_string()
    } else {
        format!("{total} questions")
    }
}
