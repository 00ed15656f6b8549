//! Structured extraction: turning multimodal context into JSON satisfying a
//! target schema.

mod parser;
mod spreadsheet;

pub use parser::{ContextInput, ContextKind, ContextParser, Extraction};
pub use spreadsheet::spreadsheet_to_json;
