use thiserror::Error;

/// Top-level errors surfaced by the crate. Per-item and per-slide extraction
/// failures never reach this type; they are logged and degrade the output
/// instead. Only document-level failures abort a conversion.
#[derive(Error, Debug)]
pub enum DeckError {
    /// A failure while generating the HTML rendering of a deck.
    #[error("HTML conversion failed: {0}")]
    Conversion(#[from] crate::converters::html::HtmlConversionError),

    /// Failure to serialize or deserialize a deck or metadata document.
    #[error("JSON (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A type alias for `Result<T, DeckError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, DeckError>;
