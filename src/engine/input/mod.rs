// Input handling system
//
// Keyboard and mouse events from the window are tracked as held sources and
// read back once per frame as an `InputSnapshot` of level states. Nothing is
// buffered or queued.
//
// ## Architecture
//
// - `action`: Game actions and default key bindings
// - `config`: Binding table and remapping
// - `manager`: Held-source tracking, fed by winit events
// - `snapshot`: The per-frame read-only view the hero logic consumes
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputConfig, InputManager};
//
// let mut input = InputManager::new(InputConfig::default());
//
// // In your event loop, process keyboard and mouse events
// input.process_keyboard_event(&key_event);
// input.process_mouse_button(state, button);
//
// // Once per frame, read the snapshot
// let snapshot = input.snapshot();
// if snapshot.crouch_held {
//     // ...
// }
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod snapshot;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use snapshot::{InputSnapshot, PointerState};
