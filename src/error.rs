// src/error.rs

/// A fatal parse failure.
///
/// Every variant aborts the entire `parse` call; there is no partial
/// document and no recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The outer text lacks a leading `{` or trailing `}`.
    #[error("missing opening or closing brace on object")]
    MissingDelimiter,
    /// A key's opening quote has no matching closing quote.
    #[error("missing closing quotation mark on key")]
    UnterminatedKey,
    /// No `:` was found after a key.
    #[error("missing colon delimiter between key and value")]
    MissingColon,
    /// A string value's opening quote has no matching closing quote.
    #[error("missing closing quotation mark on value")]
    UnterminatedStringValue,
    /// An object value's brace depth never returned to zero.
    #[error("opening and closing braces do not add up")]
    UnbalancedBraces,
    /// A member's value starts with neither `"` nor `{`.
    #[error("value is neither a string nor an object")]
    MalformedValue,
    /// Objects were nested deeper than the parser's configured limit.
    #[error("maximum nesting depth exceeded")]
    DepthLimitExceeded,
}
