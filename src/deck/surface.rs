//! Rendering capability for cards

use super::state::Presentation;

/// Trait for anything that can render drag feedback for a card
///
/// The deck only ever pushes values into a surface; it never reads them
/// back, so the same recognition logic drives any renderer.
pub trait CardSurface {
    /// Render the latest presentation values
    fn apply(&mut self, presentation: &Presentation);

    /// Toggle the "being dragged" affordance (grab cursor, no transition)
    fn set_dragging(&mut self, _dragging: bool) {
        // Default: no-op
    }

    /// Start the spring-back transition after a cancelled drag
    ///
    /// The deck does not wait for it; call [`Deck::finish_release`] once
    /// the transition has ended.
    ///
    /// [`Deck::finish_release`]: super::Deck::finish_release
    fn begin_release(&mut self) {
        // Default: no-op
    }

    /// Called when the spring-back transition has ended
    fn finish_release(&mut self) {
        // Default: no-op
    }
}

/// Surface that keeps the last rendered frame in memory
///
/// Used by the demo runner, the health check and tests.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    label: String,
    last: Presentation,
    frames: usize,
    dragging: bool,
    releasing: bool,
}

impl HeadlessSurface {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Last presentation pushed to this surface
    pub fn last(&self) -> &Presentation {
        &self.last
    }

    /// Number of frames rendered so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_releasing(&self) -> bool {
        self.releasing
    }
}

impl CardSurface for HeadlessSurface {
    fn apply(&mut self, presentation: &Presentation) {
        self.last = *presentation;
        self.frames += 1;
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    fn begin_release(&mut self) {
        self.releasing = true;
    }

    fn finish_release(&mut self) {
        self.releasing = false;
    }
}
