//! Default visual affordances for a dragged card
//!
//! A tinted overlay whose opacity follows the drag progress, and a
//! thumbs-up/down badge with a ring that fills as the card approaches the
//! swipe distance. Renderers that draw their own feedback can ignore this.

use palette::{Srgb, Srgba, WithAlpha};

use super::state::{DirectionHint, Presentation};

/// Overlay opacity at full progress
pub const MAX_OVERLAY_OPACITY: f32 = 0.8;

/// Corner a badge is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeAnchor {
    TopLeft,
    TopRight,
}

/// Vote badge drawn on top of the card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Badge {
    pub symbol: &'static str,
    pub anchor: BadgeAnchor,
    /// Fraction of the ring that is filled, in [0, 1]
    pub ring_fill: f32,
}

/// Affordances for one frame of a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affordance {
    pub tint: Srgb<u8>,
    pub opacity: f32,
    pub badge: Badge,
}

impl Affordance {
    /// Affordances for a presentation, or `None` when there is no hint
    pub fn for_presentation(presentation: &Presentation) -> Option<Self> {
        let (tint, badge) = match presentation.hint {
            DirectionHint::None => return None,
            DirectionHint::Left => (
                reject_tint(),
                Badge {
                    symbol: "👎",
                    anchor: BadgeAnchor::TopRight,
                    ring_fill: presentation.progress,
                },
            ),
            DirectionHint::Right => (
                accept_tint(),
                Badge {
                    symbol: "👍",
                    anchor: BadgeAnchor::TopLeft,
                    ring_fill: presentation.progress,
                },
            ),
        };

        Some(Self {
            tint,
            opacity: presentation.progress * MAX_OVERLAY_OPACITY,
            badge,
        })
    }

    /// Overlay color with its opacity applied as alpha
    pub fn overlay_color(&self) -> Srgba<f32> {
        self.tint.into_format::<f32>().with_alpha(self.opacity)
    }
}

/// Overlay tint for a leftward (reject) drag
pub fn reject_tint() -> Srgb<u8> {
    Srgb::new(0xf8, 0x71, 0x71)
}

/// Overlay tint for a rightward (accept) drag
pub fn accept_tint() -> Srgb<u8> {
    Srgb::new(0x4a, 0xde, 0x80)
}
