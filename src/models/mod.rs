//! The slide-deck document model consumed by the converters.
//!
//! These types are the contract with the external container reader: it hands
//! over a fully populated [`slide::Deck`] with all geometry pre-resolved to
//! slide-absolute EMU coordinates. Everything derives serde traits so decks
//! can equally be loaded from a JSON dump.

pub mod colors;
pub mod common;
pub mod fill;
pub mod line;
pub mod shadow;
pub mod shape;
pub mod slide;
pub mod table;
pub mod text;
