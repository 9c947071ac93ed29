//! Demo application: a window with a deck of movie candidates

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::config::AppConfig;
use super::window::{card_bounds, window_attributes_from_config};
use crate::deck::{
    Affordance, CardPhase, Deck, GestureScript, HeadlessSurface, InputScope, PointerCollector,
    PointerSource, SwipeDirection,
};

/// A recorded vote on one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub title: String,
    pub direction: SwipeDirection,
}

/// Deck of candidates plus the scope it listens on
///
/// Shared by the windowed app and scripted replays.
pub struct Session {
    scope: InputScope,
    deck: Deck<HeadlessSurface>,
    votes: Vec<Vote>,
}

impl Session {
    /// Creates an attached deck holding one card per title
    ///
    /// The first title ends up on top.
    pub fn new(config: &AppConfig, titles: &[String]) -> Self {
        let mut scope = InputScope::new();
        let mut deck = Deck::with_config(&config.deck);
        let bounds = card_bounds(config.window.width as f32, config.window.height as f32);
        for title in titles.iter().rev() {
            deck.add_card(&mut scope, bounds, HeadlessSurface::new(title.clone()));
        }
        deck.attach(&mut scope);
        info!(
            candidates = deck.len(),
            swipe_distance = deck.swipe_distance(),
            "Deck ready"
        );

        Self {
            scope,
            deck,
            votes: Vec::new(),
        }
    }

    /// Feed all pending signals from a source into the deck
    pub fn pump(&mut self, source: &mut impl PointerSource) {
        for signal in source.drain_signals() {
            self.deck.dispatch(&mut self.scope, signal);
        }
        self.settle();
    }

    /// Record swipes and finish spring-back transitions
    ///
    /// Headless surfaces have nothing to animate, so releases end at once.
    fn settle(&mut self) {
        for event in self.deck.take_events() {
            let title = event.card.surface().label().to_string();
            info!(%title, direction = %event.direction, "Vote recorded");
            self.votes.push(Vote {
                title,
                direction: event.direction,
            });
        }

        let releasing: Vec<_> = self
            .deck
            .cards()
            .iter()
            .filter(|card| card.phase() == CardPhase::Releasing)
            .map(|card| card.id())
            .collect();
        for id in releasing {
            self.deck.finish_release(id);
        }
    }

    /// Re-layout cards after a resize
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = card_bounds(width, height);
        for id in self.deck.cards().iter().map(|c| c.id()).collect::<Vec<_>>() {
            if let Some(card) = self.deck.card_mut(id) {
                card.set_bounds(bounds);
            }
        }
    }

    /// Title and affordance of the card currently being dragged
    pub fn dragged(&self) -> Option<(&str, Option<Affordance>)> {
        let session = self.deck.session()?;
        let card = self.deck.card(session.target)?;
        Some((card.surface().label(), self.deck.affordance(session.target)))
    }

    pub fn deck(&self) -> &Deck<HeadlessSurface> {
        &self.deck
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    /// Tear down the deck's listeners
    pub fn close(&mut self) {
        self.deck.detach(&mut self.scope);
    }
}

/// Run a scripted gesture sequence against a fresh session
pub fn replay(config: &AppConfig, titles: &[String], mut script: GestureScript) -> Session {
    let mut session = Session::new(config, titles);
    session.pump(&mut script);
    session
}

/// Main demo application
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    collector: PointerCollector,
    session: Session,
}

impl App {
    /// Creates a new demo application with the provided configuration
    pub fn new(config: AppConfig, titles: &[String]) -> Self {
        info!(profile = %config.profile, "Starting swipe demo");
        info!(?config.window, "Window configuration");

        let session = Session::new(&config, titles);
        Self {
            config,
            window: None,
            collector: PointerCollector::new(),
            session,
        }
    }

    /// Votes recorded so far
    pub fn votes(&self) -> &[Vote] {
        self.session.votes()
    }

    fn summarize(&self) {
        let liked: Vec<_> = self
            .votes()
            .iter()
            .filter(|vote| vote.direction == SwipeDirection::Right)
            .map(|vote| vote.title.as_str())
            .collect();
        info!(votes = self.votes().len(), ?liked, "Session finished");
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = window_attributes_from_config(&self.config.window);
        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let scale_factor = window.scale_factor();
                let size = window.inner_size().to_logical::<f32>(scale_factor);
                info!(
                    window.width = size.width,
                    window.height = size.height,
                    "Window created successfully"
                );
                self.collector.set_scale_factor(scale_factor as f32);
                self.session.resize(size.width, size.height);
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Feed events to the collector first so no pointer input is missed
        self.collector.handle_window_event(&event);
        self.session.pump(&mut self.collector);

        if let Some((title, Some(affordance))) = self.session.dragged() {
            debug!(
                %title,
                badge = affordance.badge.symbol,
                opacity = affordance.opacity,
                "Drag feedback"
            );
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                self.session.close();
                self.summarize();
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(new_size) => {
                if let Some(window) = &self.window {
                    let size = new_size.to_logical::<f32>(window.scale_factor());
                    self.session.resize(size.width, size.height);
                }
            }
            _ => {}
        }

        if self.session.deck().is_empty() {
            warn!("No candidates left");
            self.session.close();
            self.summarize();
            event_loop.exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{LoggingConfig, WindowConfig};
    use crate::deck::DeckConfig;

    fn config() -> AppConfig {
        AppConfig {
            profile: "test".to_string(),
            deck: DeckConfig::default(),
            window: WindowConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    fn titles() -> Vec<String> {
        vec!["Heat".to_string(), "Ran".to_string()]
    }

    #[test]
    fn test_first_title_on_top() {
        let session = Session::new(&config(), &titles());
        let top = session.deck().cards().last().unwrap();
        assert_eq!(top.surface().label(), "Heat");
    }

    #[test]
    fn test_replay_records_votes() {
        let center = card_bounds(480.0, 640.0).center();
        let script = GestureScript::horizontal_drag(center[0], center[0] + 150.0, center[1], 30.0)
            .then(GestureScript::horizontal_drag(center[0], center[0] - 40.0, center[1], 20.0))
            .then(GestureScript::horizontal_drag(center[0], center[0] - 120.0, center[1], 40.0));

        let session = replay(&config(), &titles(), script);
        assert_eq!(
            session.votes(),
            &[
                Vote {
                    title: "Heat".to_string(),
                    direction: SwipeDirection::Right,
                },
                Vote {
                    title: "Ran".to_string(),
                    direction: SwipeDirection::Left,
                },
            ]
        );
        assert!(session.deck().is_empty());
    }

    #[test]
    fn test_dragged_affordance_respects_config() {
        let center = card_bounds(480.0, 640.0).center();
        let press = GestureScript::new()
            .down(center[0], center[1])
            .move_to(center[0] + 50.0, center[1]);

        let session = replay(&config(), &titles(), press.clone());
        let (title, affordance) = session.dragged().unwrap();
        assert_eq!(title, "Heat");
        assert!(affordance.is_some());

        let mut plain = config();
        plain.deck.default_affordances = false;
        let session = replay(&plain, &titles(), press);
        assert_eq!(session.dragged(), Some(("Heat", None)));
    }

    #[test]
    fn test_cancelled_card_settles_to_idle() {
        let center = card_bounds(480.0, 640.0).center();
        let script = GestureScript::horizontal_drag(center[0], center[0] + 20.0, center[1], 10.0);
        let session = replay(&config(), &titles(), script);
        assert!(session.votes().is_empty());
        assert!(
            session
                .deck()
                .cards()
                .iter()
                .all(|card| card.phase() == CardPhase::Idle)
        );
    }
}
