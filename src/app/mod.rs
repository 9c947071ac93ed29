//! Demo application module
//!
//! Handles configuration, windowing and feeding pointer input to a deck.

pub mod config;
mod runner;
mod window;

pub use self::config::{AppConfig, LoggingConfig, WindowConfig};
pub use runner::{App, Session, Vote, replay};
pub use window::{card_bounds, window_attributes_from_config};
