pub mod converters;
pub mod errors;
pub mod models;

pub use converters::html::{convert_deck_to_html, HtmlOutput};
pub use errors::{DeckError, Result};
pub use models::slide::Deck;
