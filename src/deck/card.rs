//! Swipeable cards and their hit-test bounds

use super::state::{CardPhase, Presentation};
use super::surface::CardSurface;

/// Stable identifier of a card within its deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// Rectangular area for card hit testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, pos: [f32; 2]) -> bool {
        pos[0] >= self.x
            && pos[0] <= self.x + self.width
            && pos[1] >= self.y
            && pos[1] <= self.y + self.height
    }

    /// Get the center point of the rectangle
    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }
}

/// One swipeable unit
///
/// The presentation is derived state owned by the deck while the card is a
/// member; the surface is whatever renders it.
#[derive(Debug)]
pub struct Card<S> {
    id: CardId,
    bounds: Rect,
    phase: CardPhase,
    presentation: Presentation,
    surface: S,
}

impl<S: CardSurface> Card<S> {
    pub fn new(id: CardId, bounds: Rect, surface: S) -> Self {
        Self {
            id,
            bounds,
            phase: CardPhase::Idle,
            presentation: Presentation::NEUTRAL,
            surface,
        }
    }

    pub(crate) fn present(&mut self, presentation: Presentation) {
        self.presentation = presentation;
        self.surface.apply(&presentation);
    }

    pub(crate) fn begin_drag(&mut self) {
        self.phase = CardPhase::Dragging;
        self.surface.set_dragging(true);
    }

    pub(crate) fn end_drag(&mut self) {
        self.surface.set_dragging(false);
    }

    /// Drop out of a drag that will never see its end signal
    ///
    /// The presentation stays where the last move left it.
    pub(crate) fn abandon_drag(&mut self) {
        if self.phase == CardPhase::Dragging {
            self.phase = CardPhase::Idle;
        }
        self.end_drag();
    }

    /// Reset to neutral and request the spring-back transition
    pub(crate) fn release(&mut self) {
        self.present(Presentation::NEUTRAL);
        self.phase = CardPhase::Releasing;
        self.surface.begin_release();
    }

    /// Returns true if a release transition was actually pending
    pub(crate) fn finish_release(&mut self) -> bool {
        if self.phase != CardPhase::Releasing {
            return false;
        }
        self.phase = CardPhase::Idle;
        self.surface.finish_release();
        true
    }
}

impl<S> Card<S> {
    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Update hit-test bounds after layout
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the card, returning its surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::HeadlessSurface;
    use crate::deck::state::feedback;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(rect.contains([10.0, 10.0]));
        assert!(rect.contains([110.0, 60.0]));
        assert!(!rect.contains([9.9, 30.0]));
        assert!(!rect.contains([50.0, 61.0]));
        assert_eq!(rect.center(), [60.0, 35.0]);
    }

    #[test]
    fn test_release_resets_presentation() {
        let mut card = Card::new(CardId(1), Rect::new(0.0, 0.0, 10.0, 10.0), HeadlessSurface::new("Alien"));
        card.begin_drag();
        card.present(feedback(40.0, 100.0));
        assert_eq!(card.phase(), CardPhase::Dragging);
        assert!(!card.presentation().is_neutral());

        card.end_drag();
        card.release();
        assert_eq!(card.phase(), CardPhase::Releasing);
        assert!(card.presentation().is_neutral());
        assert!(card.surface().is_releasing());

        assert!(card.finish_release());
        assert!(!card.finish_release());
        assert_eq!(card.phase(), CardPhase::Idle);
        assert!(!card.surface().is_releasing());
    }

    #[test]
    fn test_abandon_drag_keeps_presentation() {
        let mut card = Card::new(CardId(2), Rect::new(0.0, 0.0, 10.0, 10.0), HeadlessSurface::new("Ran"));
        card.begin_drag();
        card.present(feedback(-30.0, 100.0));

        card.abandon_drag();
        assert_eq!(card.phase(), CardPhase::Idle);
        assert!(!card.surface().is_dragging());
        assert_eq!(card.presentation().offset, -30.0);
    }
}
