//! Tests for loading question banks from XML documents.

use std::fs;
use std::path::{Path, PathBuf};

use quiz_ingest::{
    IngestError, LoadErrorKind, LoadOptions, OrderingError, load_bank, load_quiz_file,
    load_simple_bank, parse_question_blocks, upgrade_to_visual,
};
use quiz_model::{QuizMode, option_label};
use tempfile::TempDir;

const FLAGS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<questionSets>
  <questionSet id="1">
    <q>Which flag is blue and white?</q>
    <qImg>q1.png</qImg>
    <a id="1">Greece</a>
    <a id="0">Italy</a>
    <aImg id="0">italy.png</aImg>
    <aImg id="1">greece.png</aImg>
    <correct>1</correct>
  </questionSet>
  <questionSet id="0">
    <q>Which flag has a maple leaf?</q>
    <qImg>q0.png</qImg>
    <a id="2">Canada</a>
    <a id="0">Japan</a>
    <a id="1">Peru</a>
    <aImg id="2">canada.png</aImg>
    <aImg id="1">peru.png</aImg>
    <aImg id="0">japan.png</aImg>
    <correct>2</correct>
  </questionSet>
</questionSets>"#;

fn write(dir: &Path, name: &str, xml: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, xml).expect("write document");
    path
}

fn question(id: usize, answers: &[(&str, &str)], correct: &str) -> String {
    let answers: String = answers
        .iter()
        .map(|(index, text)| format!(r#"<a id="{index}">{text}</a>"#))
        .collect();
    format!(r#"<questionSet id="{id}"><q>Q{id}</q>{answers}<correct>{correct}</correct></questionSet>"#)
}

fn load_simple(xml: &str) -> Result<quiz_model::QuestionBank, IngestError> {
    let blocks = parse_question_blocks(xml)?;
    load_simple_bank(&blocks)
}

#[test]
fn simple_bank_orders_questions_and_options() {
    let bank = load_bank(&parse_question_blocks(FLAGS).unwrap(), QuizMode::Simple).unwrap();
    assert_eq!(bank.mode(), QuizMode::Simple);
    assert_eq!(bank.len(), 2);

    let first = bank.get(0).unwrap();
    assert_eq!(first.prompt(), "Which flag has a maple leaf?");
    let options: Vec<&str> = first.options().iter().map(|o| o.text()).collect();
    assert_eq!(options, ["Japan", "Peru", "Canada"]);
    assert_eq!(first.correct_option().text(), "Canada");
    assert_eq!(first.correct_label(), "C");
    assert!(first.image_ref().is_err());
}

#[test]
fn visual_upgrade_keeps_text_fields() {
    let blocks = parse_question_blocks(FLAGS).unwrap();
    let base = load_simple_bank(&blocks).unwrap();
    let visual = upgrade_to_visual(base.clone(), &blocks).unwrap();

    assert_eq!(visual.mode(), QuizMode::Visual);
    assert_eq!(visual.len(), base.len());
    for (simple, upgraded) in base.iter().zip(visual.iter()) {
        assert_eq!(simple.id(), upgraded.id());
        assert_eq!(simple.prompt(), upgraded.prompt());
        assert_eq!(simple.correct_index(), upgraded.correct_index());
        let simple_texts: Vec<&str> = simple.options().iter().map(|o| o.text()).collect();
        let visual_texts: Vec<&str> = upgraded.options().iter().map(|o| o.text()).collect();
        assert_eq!(simple_texts, visual_texts);
    }

    let second = visual.get(1).unwrap();
    assert_eq!(second.image_ref().unwrap(), "q1.png");
    let images: Vec<&str> = second
        .options()
        .iter()
        .map(|o| o.image_ref().unwrap())
        .collect();
    assert_eq!(images, ["italy.png", "greece.png"]);
}

#[test]
fn end_to_end_scenario_bank() {
    let xml = format!(
        "<questionSets>{}{}</questionSets>",
        question(1, &[("0", "A"), ("1", "B")], "0"),
        question(0, &[("1", "Y"), ("0", "X")], "1"),
    );
    let bank = load_simple(&xml).unwrap();
    let q0 = bank.get(0).unwrap();
    assert_eq!(q0.options()[0].text(), "X");
    assert_eq!(q0.options()[1].text(), "Y");
    assert_eq!(q0.correct_index(), 1);
    assert_eq!(option_label(q0.correct_index()), "B");
}

#[test]
fn gap_in_question_ids_is_rejected() {
    let xml = format!(
        "<questionSets>{}{}{}</questionSets>",
        question(0, &[("0", "a")], "0"),
        question(1, &[("0", "a")], "0"),
        question(3, &[("0", "a")], "0"),
    );
    let err = load_simple(&xml).unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::NonContiguousBank);
}

#[test]
fn repeated_question_id_is_rejected() {
    let xml = format!(
        "<questionSets>{}{}</questionSets>",
        question(0, &[("0", "a")], "0"),
        question(0, &[("0", "b")], "0"),
    );
    let err = load_simple(&xml).unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::DuplicateId);
}

#[test]
fn broken_answer_ordering_is_rejected() {
    let duplicate = format!(
        "<questionSets>{}</questionSets>",
        question(0, &[("0", "a"), ("0", "b")], "0")
    );
    assert_eq!(
        load_simple(&duplicate).unwrap_err().kind(),
        LoadErrorKind::MalformedOrdering
    );

    let gap = format!(
        "<questionSets>{}</questionSets>",
        question(0, &[("0", "a"), ("2", "b")], "0")
    );
    assert_eq!(
        load_simple(&gap).unwrap_err().kind(),
        LoadErrorKind::MalformedOrdering
    );

    let negative = format!(
        "<questionSets>{}</questionSets>",
        question(0, &[("-1", "a"), ("0", "b")], "0")
    );
    assert_eq!(
        load_simple(&negative).unwrap_err().kind(),
        LoadErrorKind::MalformedOrdering
    );
}

#[test]
fn correct_index_must_reference_an_option() {
    let xml = format!(
        "<questionSets>{}</questionSets>",
        question(0, &[("0", "a"), ("1", "b")], "2")
    );
    assert_eq!(
        load_simple(&xml).unwrap_err().kind(),
        LoadErrorKind::InvalidReference
    );
}

#[test]
fn missing_fields_are_rejected() {
    let no_correct = r#"<questionSets><questionSet id="0"><q>Q</q><a id="0">a</a></questionSet></questionSets>"#;
    let err = load_simple(no_correct).unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::MissingField);
    assert_eq!(
        err.to_string(),
        "questionSet #0: required field correct is missing"
    );

    let no_index = r#"<questionSets><questionSet id="0"><q>Q</q><a>a</a><correct>0</correct></questionSet></questionSets>"#;
    assert_eq!(
        load_simple(no_index).unwrap_err().kind(),
        LoadErrorKind::MissingField
    );
}

#[test]
fn document_without_questions_is_empty() {
    let err = load_simple("<questionSets/>").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::EmptyBank);
}

#[test]
fn answer_image_count_must_match_options() {
    let xml = r#"<questionSets><questionSet id="0">
        <q>Q</q><qImg>q.png</qImg>
        <a id="0">a</a><a id="1">b</a>
        <aImg id="0">a.png</aImg>
        <correct>0</correct>
    </questionSet></questionSets>"#;
    let blocks = parse_question_blocks(xml).unwrap();
    let err = load_bank(&blocks, QuizMode::Visual).unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::OptionCountMismatch);
}

fn visual_question(
    id: usize,
    question_image: Option<&str>,
    images: &[(Option<&str>, &str)],
) -> String {
    let question_image = question_image
        .map(|image| format!("<qImg>{image}</qImg>"))
        .unwrap_or_default();
    let images: String = images
        .iter()
        .map(|(index, image)| match index {
            Some(index) => format!(r#"<aImg id="{index}">{image}</aImg>"#),
            None => format!("<aImg>{image}</aImg>"),
        })
        .collect();
    format!(
        r#"<questionSet id="{id}"><q>Q{id}</q>{question_image}<a id="0">a</a><a id="1">b</a>{images}<correct>0</correct></questionSet>"#
    )
}

fn load_visual(questions: &[String]) -> Result<quiz_model::QuestionBank, IngestError> {
    let xml = format!("<questionSets>{}</questionSets>", questions.concat());
    load_bank(&parse_question_blocks(&xml)?, QuizMode::Visual)
}

#[test]
fn broken_answer_image_ordering_is_rejected() {
    let duplicate = visual_question(0, Some("q.png"), &[(Some("0"), "a.png"), (Some("0"), "b.png")]);
    match load_visual(&[duplicate]).unwrap_err() {
        IngestError::MalformedOrdering {
            question_id,
            element,
            source,
        } => {
            assert_eq!(question_id, 0);
            assert_eq!(element, "aImg");
            assert_eq!(source, OrderingError::Duplicate { index: 0 });
        }
        other => panic!("unexpected error: {other}"),
    }

    let out_of_range = visual_question(0, Some("q.png"), &[(Some("0"), "a.png"), (Some("2"), "b.png")]);
    let err = load_visual(&[out_of_range]).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MalformedOrdering {
            element: "aImg",
            source: OrderingError::OutOfRange { index: 2, count: 2 },
            ..
        }
    ));
}

#[test]
fn answer_image_needs_declared_index() {
    let unindexed = visual_question(0, Some("q.png"), &[(Some("0"), "a.png"), (None, "b.png")]);
    let err = load_visual(&[unindexed]).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MissingField {
            position: 0,
            field: "aImg@id",
            ..
        }
    ));
}

#[test]
fn later_visual_failure_aborts_whole_bank() {
    let valid = visual_question(0, Some("q0.png"), &[(Some("1"), "b.png"), (Some("0"), "a.png")]);

    let no_image = visual_question(1, None, &[(Some("0"), "a.png"), (Some("1"), "b.png")]);
    let err = load_visual(&[valid.clone(), no_image]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "questionSet #1: required field qImg is missing"
    );
    assert!(matches!(
        err,
        IngestError::MissingField {
            position: 1,
            field: "qImg",
            ..
        }
    ));

    let duplicate = visual_question(1, Some("q1.png"), &[(Some("1"), "a.png"), (Some("1"), "b.png")]);
    let err = load_visual(&[valid.clone(), duplicate]).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MalformedOrdering {
            question_id: 1,
            element: "aImg",
            ..
        }
    ));

    let bank = load_visual(&[valid]).unwrap();
    assert_eq!(bank.mode(), QuizMode::Visual);
}

#[test]
fn visual_document_needs_question_image() {
    let xml = format!(
        "<questionSets>{}</questionSets>",
        question(0, &[("0", "a")], "0")
    );
    let blocks = parse_question_blocks(&xml).unwrap();
    let err = load_bank(&blocks, QuizMode::Visual).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MissingField { field: "qImg", .. }
    ));
}

#[test]
fn load_quiz_file_detects_mode_from_name() {
    let dir = TempDir::new().unwrap();
    let visual = write(dir.path(), "flags.xml", FLAGS);
    let text_only = write(dir.path(), "flags_textOnly.xml", FLAGS);

    let quiz = load_quiz_file(&visual, &LoadOptions::default()).unwrap();
    assert_eq!(quiz.bank.mode(), QuizMode::Visual);
    assert_eq!(quiz.assets.dir(), dir.path().join("flags_images"));
    assert_eq!(quiz.assets.missing(&quiz.bank).len(), 7);

    let quiz = load_quiz_file(&text_only, &LoadOptions::default()).unwrap();
    assert_eq!(quiz.bank.mode(), QuizMode::Simple);
    assert!(quiz.assets.missing(&quiz.bank).is_empty());

    let options = LoadOptions::default()
        .with_mode(QuizMode::Simple)
        .with_image_dir(dir.path());
    let quiz = load_quiz_file(&visual, &options).unwrap();
    assert_eq!(quiz.bank.mode(), QuizMode::Simple);
    assert_eq!(quiz.assets.dir(), dir.path());
}

#[test]
fn load_quiz_file_resolves_present_assets() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "flags.xml", FLAGS);
    let images = dir.path().join("flags_images");
    fs::create_dir(&images).unwrap();
    for name in [
        "q0.png",
        "q1.png",
        "italy.png",
        "greece.png",
        "canada.png",
        "peru.png",
    ] {
        fs::write(images.join(name), b"png").unwrap();
    }

    let quiz = load_quiz_file(&path, &LoadOptions::default()).unwrap();
    let missing = quiz.assets.missing(&quiz.bank);
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].image_ref, "japan.png");
    assert_eq!(missing[0].question_id, 0);
    assert_eq!(missing[0].option, Some(0));
}

#[test]
fn load_quiz_file_reports_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let err = load_quiz_file(&dir.path().join("absent.xml"), &LoadOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Io);
}
