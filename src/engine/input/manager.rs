// Input manager - turns window events into per-frame snapshots

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::snapshot::{InputSnapshot, PointerState};
use log::debug;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Tracks which input sources are held and answers action queries through the
/// binding table.
pub struct InputManager {
    /// Binding table
    config: InputConfig,

    /// Keys and mouse buttons currently held
    held: HashSet<InputSource>,

    /// Last pressed mouse button (releases leave it unchanged)
    last_button: Option<MouseButton>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            held: HashSet::new(),
            last_button: None,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical keys
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let source = InputSource::key(key_code);
            match event.state {
                ElementState::Pressed => self.press(source),
                ElementState::Released => self.release(source),
            }
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        let source = InputSource::mouse(button);
        match state {
            ElementState::Pressed => {
                self.last_button = Some(button);
                self.press(source);
            }
            ElementState::Released => self.release(source),
        }
    }

    /// Register a source press (key repeats are harmless)
    pub(crate) fn press(&mut self, source: InputSource) {
        self.held.insert(source);
    }

    /// Register a source release
    pub(crate) fn release(&mut self, source: InputSource) {
        self.held.remove(&source);
    }

    /// Check if any source bound to an action is held
    pub fn is_held(&self, action: Action) -> bool {
        self.config
            .get_sources(action)
            .iter()
            .any(|source| self.held.contains(source))
    }

    /// Read the current level state of every action
    pub fn snapshot(&self) -> InputSnapshot {
        let mut snapshot = InputSnapshot {
            pointer: PointerState {
                primary_down: false,
                button: self.last_button,
                primary: self
                    .config
                    .primary_pointer_button()
                    .unwrap_or(MouseButton::Left),
            },
            ..InputSnapshot::default()
        };

        for action in Action::ALL {
            snapshot.set_held(action, self.is_held(action));
        }

        snapshot
    }

    /// Forget all held sources (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        if !self.held.is_empty() {
            debug!("Releasing {} held input(s)", self.held.len());
        }
        self.held.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
