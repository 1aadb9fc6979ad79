//! XML question document reading.

mod reader;

pub use reader::{parse_question_blocks, read_question_file};
