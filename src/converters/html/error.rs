use thiserror::Error;

/// Errors that can occur during the deck to HTML conversion process.
///
/// Note the deliberately small surface: per-shape and per-image extraction
/// failures are swallowed at the item boundary (logged, item or property
/// omitted), so only document-level problems become errors.
#[derive(Error, Debug)]
pub enum HtmlConversionError {
    #[error("Formatting error during HTML generation: {0}")]
    FormatError(#[from] std::fmt::Error),
    #[error("Missing expected data necessary for conversion: {0}")]
    MissingData(String),
    #[error("An internal error occurred during conversion: {0}")]
    Internal(String),
}

/// A specialized Result type for HTML conversion operations.
pub type Result<T> = std::result::Result<T, HtmlConversionError>;
