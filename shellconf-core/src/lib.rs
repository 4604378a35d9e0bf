//! Generic parsing and editing primitives for shell-style configuration text.

pub mod document;
pub mod format;
pub mod parser;
pub mod writer;

pub use document::{Document, EditError, Quote, Record, Value};
pub use format::{format_json, format_text};
pub use parser::{parse, ParseError};
pub use writer::write;
