//! Swipeable card deck
//!
//! Recognizes horizontal swipe gestures on a stack of cards:
//! - Listens for pointer signals through a shared, page-level scope
//! - Tracks at most one drag at a time
//! - Feeds continuous offset/progress/tilt feedback to each card's surface
//! - Commits a swipe once the pointer has travelled the swipe distance,
//!   otherwise springs the card back
//!
//! # Architecture
//!
//! ```text
//! Raw Input (winit) → PointerCollector → PointerSignal
//!                                             ↓
//!                              InputScope (listener registry)
//!                                             ↓
//!                                   Deck (state machine)
//!                                    ↓               ↓
//!                          CardSurface::apply    SwipeEvent queue
//! ```
//!
//! # Usage
//!
//! ```
//! use swipe_deck::deck::{Deck, GestureScript, HeadlessSurface, InputScope, Rect};
//!
//! let mut scope = InputScope::new();
//! let mut deck = Deck::new();
//! deck.add_card(&mut scope, Rect::new(0.0, 0.0, 300.0, 400.0), HeadlessSurface::new("Heat"));
//! deck.attach(&mut scope);
//!
//! GestureScript::horizontal_drag(10.0, 160.0, 200.0, 50.0).play(&mut deck, &mut scope);
//!
//! let swiped = deck.take_events();
//! assert_eq!(swiped.len(), 1);
//! assert!(deck.is_empty());
//! ```

pub mod affordance;
mod card;
mod collector;
mod config;
mod engine;
mod events;
mod scope;
mod script;
mod session;
mod state;
mod surface;

// Re-export public API
pub use affordance::{Affordance, Badge, BadgeAnchor};
pub use card::{Card, CardId, Rect};
pub use collector::{PointerCollector, PointerSource};
pub use self::config::DeckConfig;
pub use engine::{Deck, SWIPE_DISTANCE_ATTRIBUTE};
pub use events::{PointerSignal, SignalKind, SwipeDirection, SwipeEvent};
pub use scope::{DeckId, InputScope, ListenerId, Registration};
pub use script::{GestureScript, MAX_DRAG_STEPS};
pub use session::DragSession;
pub use state::{
    CardPhase, DEFAULT_SWIPE_DISTANCE, DirectionHint, MAX_TILT_DEGREES, Presentation, feedback,
    resolve_swipe_distance,
};
pub use surface::{CardSurface, HeadlessSurface};
