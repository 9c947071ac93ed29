//! Pointer signals consumed by the deck and notifications it emits

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// Discrete pointer signal delivered to a deck
///
/// Positions are logical pixels in the coordinate space of the ambient scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSignal {
    /// Pointer pressed (gesture start)
    Down { pos: [f32; 2] },
    /// Pointer moved anywhere in the scope
    Move { pos: [f32; 2] },
    /// Pointer released anywhere in the scope (gesture end)
    Up { pos: [f32; 2] },
}

impl PointerSignal {
    /// Position carried by the signal
    pub fn pos(&self) -> [f32; 2] {
        match *self {
            Self::Down { pos } | Self::Move { pos } | Self::Up { pos } => pos,
        }
    }

    /// Listener kind this signal is routed to
    pub fn kind(&self) -> SignalKind {
        match self {
            Self::Down { .. } => SignalKind::Start,
            Self::Move { .. } => SignalKind::Move,
            Self::Up { .. } => SignalKind::End,
        }
    }
}

/// Listener slot a signal is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// Registered per card
    Start,
    /// One shared registration per deck
    Move,
    /// Registered once per gesture, removed after firing
    End,
}

/// Direction of a committed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Resolve a direction from a signed displacement
    ///
    /// Zero has no direction.
    pub fn from_displacement(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Self::Right)
        } else if dx < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// The "swiped" notification
///
/// Emitted once per committed gesture, after the card has left the deck.
/// The card is handed over by value, so the deck can never update it again.
pub struct SwipeEvent<S> {
    pub card: Card<S>,
    pub direction: SwipeDirection,
}

impl<S> std::fmt::Debug for SwipeEvent<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeEvent")
            .field("card", &self.card.id())
            .field("direction", &self.direction)
            .finish()
    }
}
