//! Per-card drag presentation state and the per-move feedback model

/// Distance (logical pixels) a pointer must travel to commit a swipe
pub const DEFAULT_SWIPE_DISTANCE: f32 = 100.0;

/// Tilt applied at full progress, in degrees
pub const MAX_TILT_DEGREES: f32 = 15.0;

/// Provisional left/right classification shown while dragging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionHint {
    #[default]
    None,
    Left,
    Right,
}

impl DirectionHint {
    fn from_offset(offset: f32) -> Self {
        if offset > 0.0 {
            Self::Right
        } else if offset < 0.0 {
            Self::Left
        } else {
            Self::None
        }
    }
}

/// Drag-derived presentation of a card
///
/// Always recomputed from the active session, never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Presentation {
    /// Clamped horizontal offset in logical pixels
    pub offset: f32,
    /// How far the offset has travelled toward the swipe distance, in [0, 1]
    pub progress: f32,
    /// Rotation in degrees, same sign as the offset
    pub tilt: f32,
    pub hint: DirectionHint,
}

impl Presentation {
    /// Neutral presentation (no offset, no tilt, no hint)
    pub const NEUTRAL: Self = Self {
        offset: 0.0,
        progress: 0.0,
        tilt: 0.0,
        hint: DirectionHint::None,
    };

    pub fn is_neutral(&self) -> bool {
        self.offset == 0.0 && self.progress == 0.0 && self.tilt == 0.0 && self.hint == DirectionHint::None
    }
}

/// Computes the presentation for a raw horizontal displacement
///
/// `swipe_distance` must be positive; see [`resolve_swipe_distance`].
pub fn feedback(dx: f32, swipe_distance: f32) -> Presentation {
    let offset = dx.clamp(-swipe_distance, swipe_distance);
    let progress = (offset / swipe_distance).abs().min(1.0);
    let tilt = if offset == 0.0 {
        0.0
    } else {
        offset.signum() * progress * MAX_TILT_DEGREES
    };

    Presentation {
        offset,
        progress,
        tilt,
        hint: DirectionHint::from_offset(offset),
    }
}

/// Resolves a configured swipe distance, falling back to the default
///
/// Missing, non-finite and non-positive values all resolve to
/// [`DEFAULT_SWIPE_DISTANCE`].
pub fn resolve_swipe_distance(configured: Option<f32>) -> f32 {
    match configured {
        Some(distance) if distance.is_finite() && distance > 0.0 => distance,
        _ => DEFAULT_SWIPE_DISTANCE,
    }
}

/// Parses a textual swipe distance attribute
///
/// Unparseable text yields `None`, which then resolves to the default.
pub fn parse_swipe_distance(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok()
}

/// Visual phase of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPhase {
    #[default]
    Idle,
    /// Target of the active drag session
    Dragging,
    /// Springing back after a cancelled drag (cosmetic only)
    Releasing,
}

impl CardPhase {
    /// Returns true if the card may start a new gesture
    pub fn accepts_start(self) -> bool {
        matches!(self, Self::Idle | Self::Releasing)
    }
}
