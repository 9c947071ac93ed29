//! Scripted pointer input

use tracing::warn;

use super::collector::PointerSource;
use super::engine::Deck;
use super::events::PointerSignal;
use super::scope::InputScope;
use super::surface::CardSurface;

/// Upper bound on intermediate moves in a generated drag
pub const MAX_DRAG_STEPS: usize = 1024;

/// A fixed sequence of pointer signals
///
/// ```
/// use swipe_deck::deck::GestureScript;
///
/// let script = GestureScript::new()
///     .down(0.0, 0.0)
///     .move_to(30.0, 0.0)
///     .up(30.0, 0.0);
/// assert_eq!(script.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureScript {
    signals: Vec<PointerSignal>,
}

impl GestureScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// A complete horizontal drag from `from_x` to `to_x` at height `y`
    ///
    /// Emits intermediate moves every `step` pixels (at least one move, at
    /// most [`MAX_DRAG_STEPS`]). Non-finite coordinates yield an empty script.
    pub fn horizontal_drag(from_x: f32, to_x: f32, y: f32, step: f32) -> Self {
        if !(from_x.is_finite() && to_x.is_finite() && y.is_finite()) {
            warn!(from_x, to_x, y, "Drag with non-finite coordinates skipped");
            return Self::new();
        }

        let mut script = Self::new().down(from_x, y);
        let distance = to_x - from_x;
        let steps = if step > 0.0 && step.is_finite() {
            (distance.abs() / step).ceil().clamp(1.0, MAX_DRAG_STEPS as f32) as usize
        } else {
            1
        };
        for i in 1..=steps {
            let x = from_x + distance * (i as f32 / steps as f32);
            script = script.move_to(x, y);
        }
        script.up(to_x, y)
    }

    pub fn down(mut self, x: f32, y: f32) -> Self {
        self.signals.push(PointerSignal::Down { pos: [x, y] });
        self
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.signals.push(PointerSignal::Move { pos: [x, y] });
        self
    }

    pub fn up(mut self, x: f32, y: f32) -> Self {
        self.signals.push(PointerSignal::Up { pos: [x, y] });
        self
    }

    /// Append another script
    pub fn then(mut self, other: GestureScript) -> Self {
        self.signals.extend(other.signals);
        self
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn signals(&self) -> &[PointerSignal] {
        &self.signals
    }

    /// Feed every signal to a deck in order
    pub fn play<S: CardSurface>(mut self, deck: &mut Deck<S>, scope: &mut InputScope) {
        for signal in self.drain_signals() {
            deck.dispatch(scope, signal);
        }
    }
}

impl PointerSource for GestureScript {
    fn drain_signals(&mut self) -> Vec<PointerSignal> {
        std::mem::take(&mut self.signals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_drag_steps() {
        let script = GestureScript::horizontal_drag(0.0, 100.0, 5.0, 25.0);
        let signals = script.signals();
        assert_eq!(signals.len(), 6);
        assert_eq!(signals[0], PointerSignal::Down { pos: [0.0, 5.0] });
        assert_eq!(signals[1], PointerSignal::Move { pos: [25.0, 5.0] });
        assert_eq!(signals[4], PointerSignal::Move { pos: [100.0, 5.0] });
        assert_eq!(signals[5], PointerSignal::Up { pos: [100.0, 5.0] });
    }

    #[test]
    fn test_zero_length_drag_still_moves_once() {
        let script = GestureScript::horizontal_drag(10.0, 10.0, 0.0, 5.0);
        assert_eq!(script.len(), 3);
    }

    #[test]
    fn test_drag_step_count_is_capped() {
        let script = GestureScript::horizontal_drag(0.0, 1.0e9, 0.0, 0.001);
        assert_eq!(script.len(), MAX_DRAG_STEPS + 2);
        assert_eq!(script.signals()[MAX_DRAG_STEPS + 1], PointerSignal::Up { pos: [1.0e9, 0.0] });
    }

    #[test]
    fn test_non_finite_drag_is_empty() {
        assert!(GestureScript::horizontal_drag(0.0, f32::INFINITY, 0.0, 10.0).is_empty());
        assert!(GestureScript::horizontal_drag(f32::NAN, 10.0, 0.0, 10.0).is_empty());
        assert_eq!(GestureScript::horizontal_drag(0.0, 50.0, 0.0, f32::INFINITY).len(), 3);
    }

    #[test]
    fn test_drain_empties_script() {
        let mut script = GestureScript::new().down(0.0, 0.0).then(GestureScript::new().up(1.0, 0.0));
        assert_eq!(script.drain_signals().len(), 2);
        assert!(script.is_empty());
    }
}
