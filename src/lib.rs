//! A document model and recursive-descent parser for a deliberately small
//! subset of JSON: objects whose members are strings or nested objects.
//!
//! Arrays, numbers, booleans, null and escape sequences are outside the
//! grammar. Parsing is a single synchronous pass over the input; all
//! boundary detection is done by scanning for ASCII delimiters, with
//! nested object values located by brace-depth counting.
//!
//! ```
//! let doc = kvjson::parse("{ \"name\": { \"first\": \"sam\" } }").unwrap();
//! let name = doc.get_object("name").unwrap();
//! assert_eq!(name.get_string("first"), Some("sam"));
//! ```

mod document;
mod error;
pub mod harness;
mod parser;
mod scan;

pub use document::{Document, Value};
pub use error::ParseError;
pub use parser::Parser;

/// Nesting limit used by [`Parser::new`] and [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Parses `input` with a default-configured [`Parser`].
pub fn parse(input: &str) -> Result<Document, ParseError> {
    Parser::new().parse(input)
}
