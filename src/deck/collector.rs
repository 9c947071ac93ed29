//! Pointer signal collection from winit events

use winit::event::{ElementState, MouseButton, WindowEvent};

use super::events::PointerSignal;

/// Anything that reports pointer signals in arrival order
pub trait PointerSource {
    /// Take all signals collected since the last call
    fn drain_signals(&mut self) -> Vec<PointerSignal>;
}

/// Collects pointer signals from winit window events
///
/// Only the primary (left) button drives gestures. Positions are converted
/// to logical pixels using the window's scale factor.
pub struct PointerCollector {
    pending: Vec<PointerSignal>,
    cursor: Option<[f32; 2]>,
    pressed: bool,
    scale_factor: f32,
}

impl PointerCollector {
    /// Creates a new pointer collector
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            cursor: None,
            pressed: false,
            scale_factor: 1.0,
        }
    }

    /// Update scale factor (DPI scaling)
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved([position.x as f32, position.y as f32]);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.primary_button(*state == ElementState::Pressed);
            }
            WindowEvent::CursorLeft { .. } => {
                // Leaving the window ends the gesture where the pointer was last seen
                if self.pressed {
                    self.primary_button(false);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor as f32);
            }
            _ => {}
        }
    }

    /// Record a cursor position in physical pixels
    pub fn cursor_moved(&mut self, physical: [f32; 2]) {
        let pos = [
            physical[0] / self.scale_factor,
            physical[1] / self.scale_factor,
        ];
        self.cursor = Some(pos);
        self.pending.push(PointerSignal::Move { pos });
    }

    /// Record a primary button transition
    ///
    /// Presses without a known cursor position are dropped.
    pub fn primary_button(&mut self, pressed: bool) {
        let Some(pos) = self.cursor else {
            return;
        };
        if pressed == self.pressed {
            return;
        }
        self.pressed = pressed;
        self.pending.push(if pressed {
            PointerSignal::Down { pos }
        } else {
            PointerSignal::Up { pos }
        });
    }

    /// Last known cursor position in logical pixels
    pub fn cursor(&self) -> Option<[f32; 2]> {
        self.cursor
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl Default for PointerCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerSource for PointerCollector {
    fn drain_signals(&mut self) -> Vec<PointerSignal> {
        std::mem::take(&mut self.pending)
    }
}
