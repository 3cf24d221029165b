// Per-frame input snapshot

use super::action::Action;
use winit::event::MouseButton;

/// Mouse pointer state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    /// Whether the primary button is held
    pub primary_down: bool,
    /// Last pressed mouse button; releasing a button does not change it
    pub button: Option<MouseButton>,
    /// Which mouse button counts as primary
    pub primary: MouseButton,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            primary_down: false,
            button: None,
            primary: MouseButton::Left,
        }
    }
}

impl PointerState {
    /// Primary button held and it is the button the pointer last reported
    ///
    /// Pressing another button while holding the primary one hides the press.
    pub fn primary_pressed(&self) -> bool {
        self.primary_down && self.button == Some(self.primary)
    }
}

/// Level state of every input the hero reacts to, read once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub jump_held: bool,
    pub down_held: bool,
    pub crouch_held: bool,
    pub left_held: bool,
    pub right_held: bool,
    pub pointer: PointerState,
}

impl InputSnapshot {
    /// Set whether the given action is held
    pub fn set_held(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.left_held = held,
            Action::MoveRight => self.right_held = held,
            Action::Jump => self.jump_held = held,
            Action::Down => self.down_held = held,
            Action::Crouch => self.crouch_held = held,
            Action::Attack => self.pointer.primary_down = held,
        }
    }

    /// Either horizontal direction held
    pub fn horizontal_held(&self) -> bool {
        self.left_held || self.right_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_neutral() {
        let snapshot = InputSnapshot::default();
        assert!(!snapshot.crouch_held);
        assert!(!snapshot.horizontal_held());
        assert!(!snapshot.pointer.primary_down);
        assert!(!snapshot.pointer.primary_pressed());
    }

    #[test]
    fn test_set_held() {
        let mut snapshot = InputSnapshot::default();
        snapshot.set_held(Action::MoveLeft, true);
        snapshot.set_held(Action::Down, true);
        snapshot.set_held(Action::Attack, true);

        assert!(snapshot.left_held);
        assert!(snapshot.down_held);
        assert!(snapshot.pointer.primary_down);
        assert!(!snapshot.right_held);
        assert!(!snapshot.jump_held);

        snapshot.set_held(Action::MoveLeft, false);
        assert!(!snapshot.left_held);
    }

    #[test]
    fn test_horizontal_held() {
        let mut snapshot = InputSnapshot::default();
        snapshot.right_held = true;
        assert!(snapshot.horizontal_held());
    }

    #[test]
    fn test_primary_pressed_requires_identity() {
        let mut pointer = PointerState {
            primary_down: true,
            button: Some(MouseButton::Left),
            primary: MouseButton::Left,
        };
        assert!(pointer.primary_pressed());

        // Right button pressed while left is still held
        pointer.button = Some(MouseButton::Right);
        assert!(!pointer.primary_pressed());

        pointer.button = Some(MouseButton::Left);
        pointer.primary_down = false;
        assert!(!pointer.primary_pressed());
    }
}
