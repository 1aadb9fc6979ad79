//! Extracts raw question blocks from an XML question document.
//!
//! Every `questionSet` element, at any depth, becomes one
//! [`RawQuestionBlock`] in document order. Inside a block the first `q`,
//! `correct` and `qImg` elements are kept, and every `a` / `aImg` element is
//! collected with its `id` attribute. Element text includes the text of
//! nested elements and is whitespace-trimmed.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::debug;

use crate::document::{Field, RawQuestionBlock, tags};
use crate::error::{IngestError, Result};

/// Reads and parses a question document from disk.
pub fn read_question_file(path: &Path) -> Result<Vec<RawQuestionBlock>> {
    let xml = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let blocks = parse_question_blocks(&xml)?;
    debug!(
        path = %path.display(),
        blocks = blocks.len(),
        "Read question document"
    );
    Ok(blocks)
}

/// A child element whose text is being collected.
struct Capture {
    field: Field,
    declared_index: Option<String>,
    depth: usize,
    text: String,
}

/// Parses question blocks from an XML string.
pub fn parse_question_blocks(xml: &str) -> Result<Vec<RawQuestionBlock>> {
    let mut reader = Reader::from_str(xml);
    let mut blocks = Vec::new();
    let mut current: Option<RawQuestionBlock> = None;
    let mut capture: Option<Capture> = None;
    // Element depth below the open questionSet.
    let mut depth = 0usize;

    loop {
        let event = reader.read_event().inspect_err(|_| {
            debug!(position = reader.buffer_position(), "XML tokenizer error");
        })?;
        match event {
            Event::Start(start) => {
                if current.is_some() {
                    depth += 1;
                    if capture.is_none() {
                        capture = begin_capture(&start, depth)?;
                    }
                } else if is_question_set(&start) {
                    current = Some(RawQuestionBlock::new(
                        blocks.len(),
                        attribute(&start, tags::ID_ATTR)?,
                    ));
                    depth = 0;
                }
            }
            Event::Empty(start) => {
                if let Some(block) = current.as_mut() {
                    if capture.is_none()
                        && let Some(empty) = begin_capture(&start, depth + 1)?
                    {
                        block.set_field(empty.field, empty.declared_index, String::new());
                    }
                } else if is_question_set(&start) {
                    blocks.push(RawQuestionBlock::new(
                        blocks.len(),
                        attribute(&start, tags::ID_ATTR)?,
                    ));
                }
            }
            Event::End(_) => {
                if current.is_none() {
                    continue;
                }
                if depth == 0 {
                    blocks.extend(current.take());
                    continue;
                }
                if let Some(done) = capture.take_if(|capture| capture.depth == depth)
                    && let Some(block) = current.as_mut()
                {
                    let text = done.text.trim().to_string();
                    block.set_field(done.field, done.declared_index, text);
                }
                depth -= 1;
            }
            Event::Text(text) => {
                if let Some(capture) = capture.as_mut() {
                    let decoded = text.decode().map_err(quick_xml::Error::from)?;
                    capture.text.push_str(&decoded);
                }
            }
            Event::CData(data) => {
                if let Some(capture) = capture.as_mut() {
                    capture.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(capture) = capture.as_mut() {
                    capture.text.push_str(&resolve_reference(&reference)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if current.is_some() {
        return Err(IngestError::document("unclosed questionSet element"));
    }
    Ok(blocks)
}

fn is_question_set(start: &BytesStart<'_>) -> bool {
    start.local_name().as_ref() == tags::QUESTION_SET.as_bytes()
}

fn begin_capture(start: &BytesStart<'_>, depth: usize) -> Result<Option<Capture>> {
    let Some(field) = Field::from_tag(start.local_name().as_ref()) else {
        return Ok(None);
    };
    let declared_index = if field.is_indexed() {
        attribute(start, tags::ID_ATTR)?
    } else {
        None
    };
    Ok(Some(Capture {
        field,
        declared_index,
        depth,
        text: String::new(),
    }))
}

fn attribute(start: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    let Some(attr) = start
        .try_get_attribute(name)
        .map_err(quick_xml::Error::from)?
    else {
        return Ok(None);
    };
    let value = attr.unescape_value()?;
    Ok(Some(value.trim().to_string()))
}

fn resolve_reference(reference: &BytesRef<'_>) -> Result<String> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(ch.to_string());
    }
    let name = reference.decode().map_err(quick_xml::Error::from)?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| IngestError::document(format!("unknown entity &{name};")))
}
