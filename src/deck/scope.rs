//! Ambient input scope: the page-level listener registry
//!
//! A deck does not receive pointer signals on its own. It registers
//! listeners here when it attaches and removes them when it detaches, so
//! that a detached deck is unreachable from the scope.

use std::collections::BTreeMap;

use tracing::trace;

use super::card::CardId;
use super::events::SignalKind;

/// Identifier of a deck registered with a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeckId(pub u32);

/// Handle of a single listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// A listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub owner: DeckId,
    pub kind: SignalKind,
    /// Card the listener is bound to (start listeners only)
    pub target: Option<CardId>,
    /// Removed automatically after it fires once
    pub once: bool,
}

/// Page-level registry shared by every deck on the page
#[derive(Debug, Default)]
pub struct InputScope {
    next_owner: u32,
    next_listener: u64,
    listeners: BTreeMap<ListenerId, Registration>,
    affordances_installed: bool,
}

impl InputScope {
    /// Creates an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an owner id for a deck that is attaching
    pub fn register_owner(&mut self) -> DeckId {
        self.next_owner += 1;
        DeckId(self.next_owner)
    }

    /// Register a listener
    pub fn listen(&mut self, registration: Registration) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id, registration);
        trace!(listener = id.0, ?registration, "Listener registered");
        id
    }

    /// Remove a listener, returning true if it was registered
    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Remove every listener owned by a deck, returning how many were removed
    pub fn unlisten_owner(&mut self, owner: DeckId) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|_, reg| reg.owner != owner);
        before - self.listeners.len()
    }

    /// Deliver a signal of `kind` to `owner`
    ///
    /// Returns the listener that fired, if any. Once-only listeners are
    /// removed as they fire.
    pub fn deliver(
        &mut self,
        owner: DeckId,
        kind: SignalKind,
        target: Option<CardId>,
    ) -> Option<ListenerId> {
        let (id, registration) = self
            .listeners
            .iter()
            .find(|(_, reg)| reg.owner == owner && reg.kind == kind && reg.target == target)
            .map(|(id, reg)| (*id, *reg))?;

        if registration.once {
            self.listeners.remove(&id);
        }
        Some(id)
    }

    /// Returns true if a listener is currently registered
    pub fn is_listening(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    /// Number of registered listeners across all decks
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of listeners registered by one deck
    pub fn listener_count_for(&self, owner: DeckId) -> usize {
        self.listeners
            .values()
            .filter(|reg| reg.owner == owner)
            .count()
    }

    /// Mark the default card affordances as installed for this page
    ///
    /// Returns true only the first time, so the shared styling is set up
    /// once per scope no matter how many decks attach.
    pub fn install_affordances(&mut self) -> bool {
        !std::mem::replace(&mut self.affordances_installed, true)
    }

    pub fn affordances_installed(&self) -> bool {
        self.affordances_installed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(owner: DeckId, card: u32) -> Registration {
        Registration {
            owner,
            kind: SignalKind::Start,
            target: Some(CardId(card)),
            once: false,
        }
    }

    #[test]
    fn test_deliver_matches_kind_and_target() {
        let mut scope = InputScope::new();
        let owner = scope.register_owner();
        let id = scope.listen(start(owner, 1));

        assert_eq!(scope.deliver(owner, SignalKind::Start, Some(CardId(1))), Some(id));
        assert_eq!(scope.deliver(owner, SignalKind::Start, Some(CardId(2))), None);
        assert_eq!(scope.deliver(owner, SignalKind::Move, None), None);
        // Persistent listeners stay registered after firing
        assert!(scope.is_listening(id));
    }

    #[test]
    fn test_once_listener_fires_once() {
        let mut scope = InputScope::new();
        let owner = scope.register_owner();
        let id = scope.listen(Registration {
            owner,
            kind: SignalKind::End,
            target: None,
            once: true,
        });

        assert_eq!(scope.deliver(owner, SignalKind::End, None), Some(id));
        assert_eq!(scope.deliver(owner, SignalKind::End, None), None);
        assert_eq!(scope.listener_count(), 0);
    }

    #[test]
    fn test_owners_are_isolated() {
        let mut scope = InputScope::new();
        let a = scope.register_owner();
        let b = scope.register_owner();
        scope.listen(start(a, 1));
        scope.listen(start(b, 1));
        scope.listen(start(b, 2));

        assert_eq!(scope.listener_count_for(b), 2);
        assert_eq!(scope.unlisten_owner(b), 2);
        assert_eq!(scope.listener_count(), 1);
        assert!(scope.deliver(b, SignalKind::Start, Some(CardId(1))).is_none());
        assert!(scope.deliver(a, SignalKind::Start, Some(CardId(1))).is_some());
    }

    #[test]
    fn test_affordances_install_once() {
        let mut scope = InputScope::new();
        assert!(!scope.affordances_installed());
        assert!(scope.install_affordances());
        assert!(!scope.install_affordances());
        assert!(scope.affordances_installed());
    }
}
