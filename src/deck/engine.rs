//! The deck: card membership, listener lifecycle and the gesture state machine

use std::collections::HashMap;

use enum_map::EnumMap;
use tracing::{debug, info, trace, warn};

use super::affordance::Affordance;
use super::card::{Card, CardId, Rect};
use super::config::DeckConfig;
use super::events::{PointerSignal, SignalKind, SwipeDirection, SwipeEvent};
use super::scope::{DeckId, InputScope, ListenerId, Registration};
use super::session::DragSession;
use super::state::{feedback, parse_swipe_distance, resolve_swipe_distance};
use super::surface::CardSurface;
use crate::error::DeckError;

/// Name of the observed swipe distance attribute
pub const SWIPE_DISTANCE_ATTRIBUTE: &str = "swipe-distance";

/// Listener bookkeeping while attached to a scope
#[derive(Debug)]
struct Attachment {
    owner: DeckId,
    move_listener: ListenerId,
    start_listeners: HashMap<CardId, ListenerId>,
}

/// Container of swipeable cards
///
/// Owns its cards, the single active drag session and the queue of swipe
/// notifications waiting for the embedder.
pub struct Deck<S> {
    cards: Vec<Card<S>>,
    next_card: u32,
    swipe_distance: Option<f32>,
    default_affordances: bool,
    attachment: Option<Attachment>,
    session: Option<DragSession>,
    events: Vec<SwipeEvent<S>>,
    swipes: EnumMap<SwipeDirection, u32>,
}

impl<S: CardSurface> Deck<S> {
    /// Creates an empty, detached deck with default settings
    pub fn new() -> Self {
        Self::with_config(&DeckConfig::default())
    }

    /// Creates an empty, detached deck from configuration
    pub fn with_config(config: &DeckConfig) -> Self {
        Self {
            cards: Vec::new(),
            next_card: 0,
            swipe_distance: config.swipe_distance,
            default_affordances: config.default_affordances,
            attachment: None,
            session: None,
            events: Vec::new(),
            swipes: EnumMap::default(),
        }
    }

    /// Effective swipe distance, resolved at the moment of asking
    pub fn swipe_distance(&self) -> f32 {
        resolve_swipe_distance(self.swipe_distance)
    }

    /// Set the swipe distance; `None` or an invalid value means default
    ///
    /// Takes effect on the next move or end signal, including for a gesture
    /// already in progress.
    pub fn set_swipe_distance(&mut self, distance: Option<f32>) {
        if let Some(value) = distance
            && !(value.is_finite() && value > 0.0)
        {
            warn!(value, "Invalid swipe distance, default applies");
        }
        self.swipe_distance = distance;
    }

    /// Set an observed attribute from its textual value
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), DeckError> {
        if name != SWIPE_DISTANCE_ATTRIBUTE {
            return Err(DeckError::UnknownAttribute(name.to_string()));
        }
        let parsed = parse_swipe_distance(value);
        if parsed.is_none() {
            warn!(value, "Unparseable swipe distance, default applies");
        }
        self.set_swipe_distance(parsed);
        Ok(())
    }

    /// Add a card on top of the deck
    ///
    /// If the deck is attached, the card's start listener is registered
    /// right away.
    pub fn add_card(&mut self, scope: &mut InputScope, bounds: Rect, surface: S) -> CardId {
        let id = CardId(self.next_card);
        self.next_card += 1;

        if let Some(attachment) = &mut self.attachment {
            let listener = scope.listen(start_registration(attachment.owner, id));
            attachment.start_listeners.insert(id, listener);
        }

        self.cards.push(Card::new(id, bounds, surface));
        debug!(card = %id, "Card added");
        id
    }

    /// Remove a card for reasons of the embedder's own
    ///
    /// Its start listener is dropped. If it was being dragged, the gesture
    /// is discarded without a swipe notification.
    pub fn remove_card(&mut self, scope: &mut InputScope, id: CardId) -> Result<Card<S>, DeckError> {
        let index = self.index_of(id).ok_or(DeckError::UnknownCard(id))?;

        if let Some(session) = self.session.take_if(|session| session.target == id) {
            scope.unlisten(session.end_listener);
            debug!(card = %id, "Dragged card removed, gesture discarded");
        }

        self.forget_start_listener(scope, id);
        let mut card = self.cards.remove(index);
        card.abandon_drag();
        debug!(card = %id, "Card removed");
        Ok(card)
    }

    /// Start receiving pointer signals from a scope
    ///
    /// Registers one start listener per card and a single shared move
    /// listener. Attaching an attached deck is a no-op.
    pub fn attach(&mut self, scope: &mut InputScope) -> DeckId {
        if let Some(attachment) = &self.attachment {
            return attachment.owner;
        }

        let owner = scope.register_owner();
        let start_listeners = self
            .cards
            .iter()
            .map(|card| (card.id(), scope.listen(start_registration(owner, card.id()))))
            .collect();
        let move_listener = scope.listen(Registration {
            owner,
            kind: SignalKind::Move,
            target: None,
            once: false,
        });

        if self.default_affordances && scope.install_affordances() {
            debug!("Default card affordances installed");
        }

        debug!(deck = owner.0, cards = self.cards.len(), "Deck attached");
        self.attachment = Some(Attachment {
            owner,
            move_listener,
            start_listeners,
        });
        owner
    }

    /// Stop receiving pointer signals
    ///
    /// Every listener the deck registered is removed. A gesture in progress
    /// is discarded without a swipe notification.
    pub fn detach(&mut self, scope: &mut InputScope) {
        let Some(attachment) = self.attachment.take() else {
            return;
        };

        for listener in attachment.start_listeners.into_values() {
            scope.unlisten(listener);
        }
        scope.unlisten(attachment.move_listener);

        if let Some(session) = self.session.take() {
            scope.unlisten(session.end_listener);
            if let Some(index) = self.index_of(session.target) {
                self.cards[index].abandon_drag();
            }
            debug!(card = %session.target, "Gesture discarded on detach");
        }

        // Sweep anything registered under this owner that we lost track of
        let stale = scope.unlisten_owner(attachment.owner);
        if stale > 0 {
            warn!(stale, "Removed untracked listeners on detach");
        }
        debug!(deck = attachment.owner.0, "Deck detached");
    }

    /// Process one pointer signal
    ///
    /// Signals the deck has no listener for are ignored.
    pub fn dispatch(&mut self, scope: &mut InputScope, signal: PointerSignal) {
        let Some(owner) = self.attachment.as_ref().map(|a| a.owner) else {
            trace!(?signal, "Signal ignored, deck detached");
            return;
        };

        match signal {
            PointerSignal::Down { pos } => {
                let Some(target) = self.hit_test(pos) else {
                    return;
                };
                if scope
                    .deliver(owner, SignalKind::Start, Some(target))
                    .is_some()
                {
                    self.begin_gesture(scope, owner, target, pos);
                }
            }
            PointerSignal::Move { pos } => {
                if scope.deliver(owner, SignalKind::Move, None).is_some() {
                    self.track(pos);
                }
            }
            PointerSignal::Up { pos } => {
                if let Some(listener) = scope.deliver(owner, SignalKind::End, None) {
                    self.end_gesture(scope, listener, pos);
                }
            }
        }
    }

    /// Notify the deck that a card's spring-back transition has ended
    ///
    /// Returns false if nothing was pending (repeated calls, unknown cards).
    pub fn finish_release(&mut self, id: CardId) -> bool {
        self.index_of(id)
            .is_some_and(|index| self.cards[index].finish_release())
    }

    fn begin_gesture(&mut self, scope: &mut InputScope, owner: DeckId, target: CardId, pos: [f32; 2]) {
        if let Some(active) = &self.session {
            debug!(active = %active.target, ignored = %target, "Gesture already in progress, start ignored");
            return;
        }
        let Some(index) = self.index_of(target) else {
            return;
        };
        if !self.cards[index].phase().accepts_start() {
            return;
        }

        let end_listener = scope.listen(Registration {
            owner,
            kind: SignalKind::End,
            target: None,
            once: true,
        });
        self.cards[index].begin_drag();
        self.session = Some(DragSession {
            origin: pos,
            target,
            end_listener,
        });
        debug!(card = %target, x = pos[0], y = pos[1], "Gesture started");
    }

    fn track(&mut self, pos: [f32; 2]) {
        let Some(session) = self.session else {
            return;
        };
        let distance = self.swipe_distance();
        let Some(index) = self.index_of(session.target) else {
            return;
        };

        let presentation = feedback(session.displacement(pos), distance);
        trace!(
            card = %session.target,
            offset = presentation.offset,
            progress = presentation.progress,
            tilt = presentation.tilt,
            "Drag feedback"
        );
        self.cards[index].present(presentation);
    }

    fn end_gesture(&mut self, scope: &mut InputScope, listener: ListenerId, pos: [f32; 2]) {
        let Some(session) = self.session else {
            return;
        };
        if session.end_listener != listener {
            return;
        }
        self.session = None;

        let Some(index) = self.index_of(session.target) else {
            return;
        };
        self.cards[index].end_drag();

        let dx = session.displacement(pos);
        let distance = self.swipe_distance();
        let direction = match SwipeDirection::from_displacement(dx) {
            Some(direction) if dx.abs() >= distance => direction,
            _ => {
                self.cards[index].release();
                debug!(card = %session.target, dx, distance, "Gesture cancelled");
                return;
            }
        };

        self.forget_start_listener(scope, session.target);
        let card = self.cards.remove(index);
        self.swipes[direction] += 1;
        info!(card = %session.target, %direction, dx, distance, "Card swiped");
        self.events.push(SwipeEvent { card, direction });
    }

    fn forget_start_listener(&mut self, scope: &mut InputScope, id: CardId) {
        if let Some(listener) = self
            .attachment
            .as_mut()
            .and_then(|a| a.start_listeners.remove(&id))
        {
            scope.unlisten(listener);
        }
    }

    /// Top-most member under a position
    fn hit_test(&self, pos: [f32; 2]) -> Option<CardId> {
        self.cards
            .iter()
            .rev()
            .find(|card| card.bounds().contains(pos))
            .map(|card| card.id())
    }
}

impl<S> Deck<S> {
    fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    /// Take the swipe notifications queued since the last call
    pub fn take_events(&mut self) -> Vec<SwipeEvent<S>> {
        std::mem::take(&mut self.events)
    }

    /// Members in visual order (last is on top)
    pub fn cards(&self) -> &[Card<S>] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card<S>> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Mutable access for layout; presentation stays under deck control
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card<S>> {
        self.cards.iter_mut().find(|card| card.id() == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The gesture in progress, if any
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Owner id in the scope this deck is attached to
    pub fn owner(&self) -> Option<DeckId> {
        self.attachment.as_ref().map(|a| a.owner)
    }

    /// Whether the default affordances are drawn for this deck
    ///
    /// Only while attached, since attaching is what installs them.
    pub fn affordances_enabled(&self) -> bool {
        self.default_affordances && self.attachment.is_some()
    }

    /// Default affordances for a member card's current presentation
    ///
    /// `None` when they are disabled or the card shows no direction.
    pub fn affordance(&self, id: CardId) -> Option<Affordance> {
        if !self.affordances_enabled() {
            return None;
        }
        Affordance::for_presentation(self.card(id)?.presentation())
    }

    /// Number of committed swipes in a direction
    pub fn swipe_count(&self, direction: SwipeDirection) -> u32 {
        self.swipes[direction]
    }
}

impl<S: CardSurface> Default for Deck<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn start_registration(owner: DeckId, card: CardId) -> Registration {
    Registration {
        owner,
        kind: SignalKind::Start,
        target: Some(card),
        once: false,
    }
}
