//! Transient record of one in-progress gesture

use super::card::CardId;
use super::scope::ListenerId;

/// One in-progress drag
///
/// Exists only between gesture start and gesture end; the deck holds at
/// most one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at gesture start
    pub origin: [f32; 2],
    /// Card being dragged (still owned by the deck)
    pub target: CardId,
    /// Once-only end listener armed for this gesture
    pub end_listener: ListenerId,
}

impl DragSession {
    /// Raw horizontal displacement of `pos` from the origin
    ///
    /// The vertical axis is not used for classification.
    pub fn displacement(&self, pos: [f32; 2]) -> f32 {
        pos[0] - self.origin[0]
    }
}
