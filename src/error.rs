//! Error types

use thiserror::Error;

use crate::deck::CardId;

/// Errors surfaced by the deck's embedder-facing API
///
/// Gesture handling itself never fails; these only cover API misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// Attribute name the deck does not observe
    #[error("unknown deck attribute `{0}`")]
    UnknownAttribute(String),

    /// Card is not (or no longer) a member of the deck
    #[error("{0} is not a member of this deck")]
    UnknownCard(CardId),
}
