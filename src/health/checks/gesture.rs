//! Gesture engine health check

use crate::deck::{
    Deck, GestureScript, HeadlessSurface, InputScope, MAX_TILT_DEGREES, Rect, SwipeDirection,
};
use crate::health::check::{CheckResult, SystemCheck};

/// Runs scripted gestures against a headless deck
pub struct GestureCheck;

impl GestureCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GestureCheck {
    fn default() -> Self {
        Self::new()
    }
}

fn fixture(scope: &mut InputScope) -> Deck<HeadlessSurface> {
    let mut deck = Deck::new();
    deck.add_card(
        scope,
        Rect::new(0.0, 0.0, 300.0, 400.0),
        HeadlessSurface::new("probe"),
    );
    deck.attach(scope);
    deck
}

impl SystemCheck for GestureCheck {
    fn name(&self) -> &'static str {
        "Gesture Engine"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates drag feedback, cancel, commit and detach behaviour")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        // Short drag springs back
        let mut scope = InputScope::new();
        let mut deck = fixture(&mut scope);
        GestureScript::new()
            .down(0.0, 10.0)
            .move_to(30.0, 10.0)
            .move_to(60.0, 10.0)
            .up(60.0, 10.0)
            .play(&mut deck, &mut scope);
        if deck.len() != 1 || !deck.take_events().is_empty() {
            details.push("  ✗ Short drag should cancel".to_string());
            return CheckResult::fail("Cancel path broken").with_details(details.join("\n"));
        }
        if !deck.cards()[0].presentation().is_neutral() {
            details.push("  ✗ Cancelled card should return to neutral".to_string());
            return CheckResult::fail("Cancel path broken").with_details(details.join("\n"));
        }
        details.push("  ✓ Short drag cancelled and reset".to_string());

        // Feedback saturates past the swipe distance
        GestureScript::new()
            .down(0.0, 10.0)
            .move_to(250.0, 10.0)
            .play(&mut deck, &mut scope);
        let presentation = *deck.cards()[0].presentation();
        if presentation.progress != 1.0 || presentation.tilt != MAX_TILT_DEGREES {
            details.push(format!(
                "  ✗ Expected saturated feedback, got progress {} tilt {}",
                presentation.progress, presentation.tilt
            ));
            return CheckResult::fail("Feedback model broken").with_details(details.join("\n"));
        }
        details.push("  ✓ Feedback saturates at the swipe distance".to_string());

        // Releasing there commits
        GestureScript::new()
            .up(250.0, 10.0)
            .play(&mut deck, &mut scope);
        let events = deck.take_events();
        if events.len() != 1 || events[0].direction != SwipeDirection::Right || !deck.is_empty() {
            details.push("  ✗ Long drag should commit exactly one right swipe".to_string());
            return CheckResult::fail("Commit path broken").with_details(details.join("\n"));
        }
        details.push("  ✓ Long drag committed to the right".to_string());

        // Detach mid-gesture leaves nothing behind
        let mut scope = InputScope::new();
        let mut deck = fixture(&mut scope);
        GestureScript::new()
            .down(0.0, 10.0)
            .move_to(-150.0, 10.0)
            .play(&mut deck, &mut scope);
        deck.detach(&mut scope);
        GestureScript::new()
            .up(-150.0, 10.0)
            .play(&mut deck, &mut scope);
        if scope.listener_count() != 0 || !deck.take_events().is_empty() {
            details.push(format!(
                "  ✗ Detach left {} listener(s) registered",
                scope.listener_count()
            ));
            return CheckResult::fail("Detach leaks listeners").with_details(details.join("\n"));
        }
        details.push("  ✓ Detach discards gesture and listeners".to_string());

        CheckResult::pass("Gesture recognition operational").with_details(details.join("\n"))
    }
}
