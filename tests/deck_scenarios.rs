//! End-to-end gesture scenarios driven through scripted pointer input

use swipe_deck::deck::{
    CardId, CardPhase, Deck, DirectionHint, GestureScript, HeadlessSurface, InputScope,
    MAX_TILT_DEGREES, Rect, SwipeDirection,
};

fn deck_with(titles: &[&str]) -> (InputScope, Deck<HeadlessSurface>, Vec<CardId>) {
    let mut scope = InputScope::new();
    let mut deck = Deck::new();
    let ids = titles
        .iter()
        .map(|title| {
            deck.add_card(
                &mut scope,
                Rect::new(-200.0, -200.0, 400.0, 400.0),
                HeadlessSurface::new(*title),
            )
        })
        .collect();
    deck.attach(&mut scope);
    (scope, deck, ids)
}

#[test]
fn test_short_drag_cancels() {
    let (mut scope, mut deck, ids) = deck_with(&["Heat"]);

    GestureScript::new()
        .down(0.0, 0.0)
        .move_to(30.0, 0.0)
        .move_to(60.0, 0.0)
        .up(60.0, 0.0)
        .play(&mut deck, &mut scope);

    let card = deck.card(ids[0]).expect("card retained");
    assert!(card.presentation().is_neutral());
    assert_eq!(card.phase(), CardPhase::Releasing);
    assert!(deck.take_events().is_empty());
}

#[test]
fn test_long_drag_commits_right() {
    let (mut scope, mut deck, ids) = deck_with(&["Heat"]);

    GestureScript::new()
        .down(0.0, 0.0)
        .move_to(150.0, 0.0)
        .up(150.0, 0.0)
        .play(&mut deck, &mut scope);

    let events = deck.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].direction, SwipeDirection::Right);
    assert_eq!(events[0].card.id(), ids[0]);
    assert!(!deck.contains(ids[0]));
}

#[test]
fn test_cancel_range_for_every_displacement_below_distance() {
    for dx in [-99.0, -50.0, -0.5, 0.0, 0.5, 50.0, 99.9] {
        let (mut scope, mut deck, ids) = deck_with(&["Heat"]);
        GestureScript::new()
            .down(0.0, 0.0)
            .move_to(dx, 0.0)
            .up(dx, 0.0)
            .play(&mut deck, &mut scope);

        assert!(deck.contains(ids[0]), "dx = {dx} should cancel");
        assert!(deck.card(ids[0]).unwrap().presentation().is_neutral());
        assert!(deck.take_events().is_empty());
    }
}

#[test]
fn test_commit_direction_follows_sign() {
    for (dx, expected) in [
        (100.0, SwipeDirection::Right),
        (180.0, SwipeDirection::Right),
        (-100.0, SwipeDirection::Left),
        (-180.0, SwipeDirection::Left),
    ] {
        let (mut scope, mut deck, _) = deck_with(&["Heat"]);
        GestureScript::new()
            .down(0.0, 0.0)
            .up(dx, 0.0)
            .play(&mut deck, &mut scope);

        let events = deck.take_events();
        assert_eq!(events.len(), 1, "dx = {dx} should commit");
        assert_eq!(events[0].direction, expected);
        assert!(deck.is_empty());
    }
}

#[test]
fn test_removed_card_never_updates_again() {
    let (mut scope, mut deck, _) = deck_with(&["Heat"]);
    GestureScript::horizontal_drag(0.0, -150.0, 0.0, 50.0).play(&mut deck, &mut scope);

    let mut events = deck.take_events();
    let swiped = events.pop().unwrap().card;
    let frames = swiped.surface().frames();

    GestureScript::new()
        .down(0.0, 0.0)
        .move_to(40.0, 0.0)
        .up(40.0, 0.0)
        .play(&mut deck, &mut scope);
    assert_eq!(swiped.surface().frames(), frames);
    assert!(deck.take_events().is_empty());
}

#[test]
fn test_vertical_motion_is_ignored() {
    let (mut scope, mut deck, ids) = deck_with(&["Heat"]);
    GestureScript::new()
        .down(0.0, 0.0)
        .move_to(20.0, 180.0)
        .play(&mut deck, &mut scope);

    let presentation = *deck.card(ids[0]).unwrap().presentation();
    assert_eq!(presentation.offset, 20.0);
    assert_eq!(presentation.hint, DirectionHint::Right);

    GestureScript::new().up(20.0, -300.0).play(&mut deck, &mut scope);
    assert!(deck.contains(ids[0]));
}

#[test]
fn test_tilt_tracks_progress() {
    let (mut scope, mut deck, ids) = deck_with(&["Heat"]);
    GestureScript::new().down(0.0, 0.0).play(&mut deck, &mut scope);

    for x in [-300.0, -100.0, -25.0, 0.0, 25.0, 100.0, 300.0] {
        GestureScript::new().move_to(x, 0.0).play(&mut deck, &mut scope);
        let p = *deck.card(ids[0]).unwrap().presentation();
        assert!((0.0..=1.0).contains(&p.progress));
        assert!(p.tilt.abs() <= MAX_TILT_DEGREES);
        assert!((p.tilt - p.offset.signum() * p.progress * MAX_TILT_DEGREES).abs() < 1e-4 || p.offset == 0.0);
    }
}

#[test]
fn test_shrinking_distance_mid_gesture_commits() {
    let (mut scope, mut deck, ids) = deck_with(&["Heat"]);
    GestureScript::new()
        .down(0.0, 0.0)
        .move_to(80.0, 0.0)
        .play(&mut deck, &mut scope);

    deck.set_swipe_distance(Some(50.0));
    GestureScript::new().up(80.0, 0.0).play(&mut deck, &mut scope);

    let events = deck.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].card.id(), ids[0]);
}

#[test]
fn test_growing_distance_mid_gesture_cancels() {
    let (mut scope, mut deck, ids) = deck_with(&["Heat"]);
    GestureScript::new()
        .down(0.0, 0.0)
        .move_to(120.0, 0.0)
        .play(&mut deck, &mut scope);

    deck.set_attribute("swipe-distance", "200").unwrap();
    GestureScript::new().up(120.0, 0.0).play(&mut deck, &mut scope);

    assert!(deck.contains(ids[0]));
    assert!(deck.take_events().is_empty());
}

#[test]
fn test_detach_while_dragging() {
    let (mut scope, mut deck, _) = deck_with(&["Heat", "Ran"]);
    GestureScript::new()
        .down(0.0, 0.0)
        .move_to(170.0, 0.0)
        .play(&mut deck, &mut scope);

    deck.detach(&mut scope);
    GestureScript::new().up(170.0, 0.0).play(&mut deck, &mut scope);

    assert!(deck.take_events().is_empty());
    assert_eq!(scope.listener_count(), 0);
    assert_eq!(deck.len(), 2);
}

#[test]
fn test_reattach_after_mid_drag_detach_leaves_no_residue() {
    let (mut scope, mut deck, ids) = deck_with(&["Heat", "Ran"]);
    GestureScript::new()
        .down(10.0, 0.0)
        .move_to(60.0, 0.0)
        .play(&mut deck, &mut scope);
    deck.detach(&mut scope);

    let top = deck.card(ids[1]).expect("card retained");
    assert_eq!(top.phase(), CardPhase::Idle);
    assert!(!top.surface().is_dragging());

    deck.attach(&mut scope);
    GestureScript::horizontal_drag(10.0, 200.0, 0.0, 50.0).play(&mut deck, &mut scope);

    let events = deck.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].card.id(), ids[1]);
    assert_eq!(events[0].direction, SwipeDirection::Right);
    // Remaining card's start listener plus the move listener
    assert_eq!(scope.listener_count(), 2);
}

#[test]
fn test_card_removed_mid_drag_comes_back_idle() {
    let (mut scope, mut deck, ids) = deck_with(&["Heat"]);
    GestureScript::new()
        .down(0.0, 0.0)
        .move_to(-40.0, 0.0)
        .play(&mut deck, &mut scope);

    let card = deck.remove_card(&mut scope, ids[0]).expect("member card");
    assert_eq!(card.phase(), CardPhase::Idle);
    assert!(!card.surface().is_dragging());
    assert!(deck.session().is_none());

    GestureScript::new().up(-300.0, 0.0).play(&mut deck, &mut scope);
    assert!(deck.take_events().is_empty());
}

#[test]
fn test_swipes_through_whole_deck_in_visual_order() {
    let (mut scope, mut deck, ids) = deck_with(&["Heat", "Ran", "Alien"]);
    for _ in 0..3 {
        GestureScript::horizontal_drag(0.0, 120.0, 0.0, 40.0).play(&mut deck, &mut scope);
    }

    let order: Vec<_> = deck.take_events().into_iter().map(|e| e.card.id()).collect();
    assert_eq!(order, ids.into_iter().rev().collect::<Vec<_>>());
    assert_eq!(deck.swipe_count(SwipeDirection::Right), 3);
    assert_eq!(deck.swipe_count(SwipeDirection::Left), 0);
    // Only the shared move listener is left
    assert_eq!(scope.listener_count(), 1);
}

#[test]
fn test_two_decks_share_a_scope() {
    let mut scope = InputScope::new();
    let mut left: Deck<HeadlessSurface> = Deck::new();
    let mut right: Deck<HeadlessSurface> = Deck::new();
    left.add_card(&mut scope, Rect::new(0.0, 0.0, 100.0, 100.0), HeadlessSurface::new("a"));
    right.add_card(&mut scope, Rect::new(500.0, 0.0, 100.0, 100.0), HeadlessSurface::new("b"));
    left.attach(&mut scope);
    right.attach(&mut scope);

    let script = GestureScript::horizontal_drag(50.0, 200.0, 50.0, 50.0);
    script.clone().play(&mut left, &mut scope);
    script.play(&mut right, &mut scope);

    assert_eq!(left.take_events().len(), 1);
    assert!(right.take_events().is_empty());

    left.detach(&mut scope);
    assert_eq!(scope.listener_count(), 2);
}
