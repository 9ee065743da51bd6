// src/parser.rs
use log::trace;

use crate::document::Document;
use crate::error::ParseError;
use crate::scan::Cursor;
use crate::DEFAULT_MAX_DEPTH;

/// Recursive-descent parser for the string/object subset of JSON.
///
/// Parsing is a pure function of the input text: the parser holds no state
/// besides its nesting limit, so one instance can serve concurrent `parse`
/// calls from multiple threads.
#[derive(Debug, Clone)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    /// Creates a parser with the default nesting limit.
    pub fn new() -> Self {
        Parser {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a parser that rejects objects nested deeper than
    /// `max_depth` levels.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Parser { max_depth }
    }

    /// Parses a complete text buffer into a [`Document`].
    ///
    /// The buffer must hold exactly one brace-delimited object, with
    /// whitespace permitted around and between tokens. Any malformed-input
    /// condition aborts the whole call; no partial document is returned.
    pub fn parse(&self, input: &str) -> Result<Document, ParseError> {
        self.parse_object(input.trim(), 0)
    }

    /// Parses one object-shaped substring, recursing into nested object
    /// values.
    fn parse_object(&self, text: &str, depth: usize) -> Result<Document, ParseError> {
        let text = text.trim();
        if !text.starts_with('{') || !text.ends_with('}') {
            return Err(ParseError::MissingDelimiter);
        }
        if depth >= self.max_depth {
            return Err(ParseError::DepthLimitExceeded);
        }
        trace!("object at depth {depth}, {} bytes", text.len());

        let body = text[1..text.len() - 1].trim();
        let mut doc = Document::new();

        // A body that does not open with a quote has zero members.
        if !body.starts_with('"') {
            return Ok(doc);
        }

        let mut cur = Cursor::new(body);
        loop {
            // The cursor sits on the member's opening quote; the key runs
            // to the next quote.
            cur.advance(1);
            let key_start = cur.pos();
            let key_end = cur.scan_to(b'"').ok_or(ParseError::UnterminatedKey)?;
            let key = cur.slice(key_start, key_end);
            cur.advance(1);

            // Lenient: anything between the key's closing quote and the
            // colon is skipped over, not validated.
            cur.scan_to(b':').ok_or(ParseError::MissingColon)?;
            cur.advance(1);

            // The first quote or opening brace after the colon decides the
            // value kind.
            cur.scan_to_either(b'"', b'{')
                .ok_or(ParseError::MalformedValue)?;
            if cur.peek() == Some(b'"') {
                cur.advance(1);
                let value_start = cur.pos();
                let value_end = cur
                    .scan_to(b'"')
                    .ok_or(ParseError::UnterminatedStringValue)?;
                doc.set_string(key, cur.slice(value_start, value_end));
                cur.advance(1);
            } else {
                let object_start = cur.pos();
                let object_end = cur.scan_balanced().ok_or(ParseError::UnbalancedBraces)?;
                let child = self.parse_object(cur.slice(object_start, object_end), depth + 1)?;
                doc.set_object(key, child);
            }

            // A comma past the value's end means another member follows.
            if cur.scan_to(b',').is_none() {
                break;
            }
            cur.advance(1);
            cur.skip_whitespace();
        }

        Ok(doc)
    }
}
