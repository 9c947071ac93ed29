//! Swipe Deck
//!
//! Swipeable card deck for picking a movie together: pointer gestures are
//! recognized as left/right votes, with continuous drag feedback.

/// Demo application - configuration, windowing and input plumbing
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// Gesture recognition engine - deck, cards and drag sessions
pub mod deck;

/// Error types for the deck API
pub mod error;

/// Health checks for configuration, build metadata and the gesture engine
pub mod health;

pub use error::DeckError;
