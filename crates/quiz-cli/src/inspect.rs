//! Question bank listings for the `inspect` command.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use quiz_ingest::{ImageAssets, MissingAsset};
use quiz_model::{QuestionBank, QuestionSet, QuizMode, option_label};
use serde::Serialize;

/// JSON listing of a loaded document.
#[derive(Debug, Serialize)]
pub struct InspectReport<'a> {
    pub path: String,
    pub mode: QuizMode,
    pub total: usize,
    pub image_dir: String,
    pub questions: Vec<QuestionEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_images: Option<Vec<MissingEntry>>,
}

#[derive(Debug, Serialize)]
pub struct QuestionEntry<'a> {
    pub id: usize,
    pub prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<&'a str>,
    pub correct: String,
    pub options: Vec<OptionEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct OptionEntry<'a> {
    pub label: String,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct MissingEntry {
    pub question_id: usize,
    /// Option label, absent for the question image.
    pub option: Option<String>,
    pub image_ref: String,
    pub path: String,
}

impl<'a> InspectReport<'a> {
    pub fn new(
        path: &Path,
        bank: &'a QuestionBank,
        assets: &ImageAssets,
        missing: Option<&[MissingAsset]>,
    ) -> Self {
        Self {
            path: path.display().to_string(),
            mode: bank.mode(),
            total: bank.len(),
            image_dir: assets.dir().display().to_string(),
            questions: bank.iter().map(QuestionEntry::new).collect(),
            missing_images: missing.map(|missing| missing.iter().map(MissingEntry::new).collect()),
        }
    }
}

impl<'a> QuestionEntry<'a> {
    fn new(question: &'a QuestionSet) -> Self {
        Self {
            id: question.id(),
            prompt: question.prompt(),
            image_ref: question.image_ref().ok(),
            correct: question.correct_label(),
            options: question
                .options()
                .iter()
                .enumerate()
                .map(|(index, option)| OptionEntry {
                    label: option_label(index),
                    text: option.text(),
                    image_ref: option.image_ref().ok(),
                })
                .collect(),
        }
    }
}

impl MissingEntry {
    fn new(missing: &MissingAsset) -> Self {
        Self {
            question_id: missing.question_id,
            option: missing.option.map(option_label),
            image_ref: missing.image_ref.clone(),
            path: missing.path.display().to_string(),
        }
    }
}

/// One row per question: id, prompt, labelled options and the correct label.
pub fn question_table(bank: &QuestionBank) -> Table {
    let visual = bank.mode().is_visual();
    let mut table = Table::new();
    let mut header = vec![
        header_cell("Id"),
        header_cell("Question"),
        header_cell("Options"),
        header_cell("Correct"),
    ];
    if visual {
        header.push(header_cell("Image"));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    for question in bank {
        let options: Vec<String> = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| match option.image_ref() {
                Ok(image_ref) => format!("{}) {} ({image_ref})", option_label(index), option.text()),
                Err(_) => format!("{}) {}", option_label(index), option.text()),
            })
            .collect();
        let mut row = vec![
            Cell::new(question.id()),
            Cell::new(question.prompt()),
            Cell::new(options.join("\n")),
            Cell::new(question.correct_label())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ];
        if visual {
            row.push(Cell::new(question.image_ref().unwrap_or("-")));
        }
        table.add_row(row);
    }
    table
}

/// Missing image files, one row each.
pub fn missing_table(missing: &[MissingAsset]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Question"),
        header_cell("Option"),
        header_cell("Image"),
        header_cell("Path"),
    ]);
    apply_table_style(&mut table);
    for asset in missing {
        table.add_row(vec![
            Cell::new(asset.question_id),
            Cell::new(asset.option.map_or_else(|| "-".to_string(), option_label)),
            Cell::new(&asset.image_ref).fg(Color::Yellow),
            Cell::new(asset.path.display()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
