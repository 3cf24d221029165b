// Action bindings and remapping

use super::action::{default_bindings, Action, InputSource};
use std::collections::HashMap;
use winit::event::MouseButton;

/// Binding table from actions to the keys and buttons that hold them
///
/// A source drives at most one action; an action may have several sources
/// (both Ctrl keys hold Down).
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Sources per action, in bind order
    sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create a table with nothing bound
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// Create a table from `(source, action)` pairs, later pairs winning
    pub fn from_bindings<I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (InputSource, Action)>,
    {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind `source` to `action`, taking it away from any other action
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.sources.retain(|_, bound| {
            bound.retain(|s| *s != source);
            !bound.is_empty()
        });
        self.sources.entry(action).or_default().push(source);
    }

    /// Sources bound to an action
    pub fn get_sources(&self, action: Action) -> &[InputSource] {
        self.sources.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_binding(&self, action: Action) -> bool {
        self.sources.contains_key(&action)
    }

    /// Actions nothing is bound to
    pub fn unbound_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| !self.has_binding(*action))
            .collect()
    }

    /// The mouse button acting as the pointer's primary button
    ///
    /// This is the first mouse button bound to [`Action::Attack`].
    pub fn primary_pointer_button(&self) -> Option<MouseButton> {
        self.get_sources(Action::Attack)
            .iter()
            .find_map(|source| match source {
                InputSource::Mouse(button) => Some(*button),
                InputSource::Keyboard(_) => None,
            })
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn defaults_without(action: Action) -> InputConfig {
        InputConfig::from_bindings(
            default_bindings()
                .into_iter()
                .filter(|(_, bound)| *bound != action),
        )
    }

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);
        config.bind(source, Action::MoveLeft);

        assert_eq!(config.get_sources(Action::MoveLeft), &[source]);
        assert!(config.get_sources(Action::Jump).is_empty());
    }

    #[test]
    fn test_rebind_moves_source() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);

        config.bind(source, Action::MoveLeft);
        config.bind(source, Action::MoveRight);

        assert_eq!(config.get_sources(Action::MoveRight), &[source]);
        assert!(!config.has_binding(Action::MoveLeft));
    }

    #[test]
    fn test_sources_keep_bind_order() {
        let left_ctrl = InputSource::key(KeyCode::ControlLeft);
        let right_ctrl = InputSource::key(KeyCode::ControlRight);
        let config =
            InputConfig::from_bindings([(left_ctrl, Action::Down), (right_ctrl, Action::Down)]);

        assert_eq!(config.get_sources(Action::Down), &[left_ctrl, right_ctrl]);
    }

    #[test]
    fn test_default_config_binds_everything() {
        let config = InputConfig::default();
        assert!(config.unbound_actions().is_empty());
        assert_eq!(config.get_sources(Action::Down).len(), 2);
        assert_eq!(
            config.get_sources(Action::Crouch),
            &[InputSource::key(KeyCode::KeyC)]
        );
    }

    #[test]
    fn test_unbound_actions() {
        let config = defaults_without(Action::Crouch);
        assert_eq!(config.unbound_actions(), vec![Action::Crouch]);
    }

    #[test]
    fn test_primary_pointer_button() {
        assert_eq!(
            InputConfig::default().primary_pointer_button(),
            Some(MouseButton::Left)
        );

        let mut config = defaults_without(Action::Attack);
        config.bind(InputSource::key(KeyCode::KeyF), Action::Attack);
        assert_eq!(config.primary_pointer_button(), None);

        config.bind(InputSource::mouse(MouseButton::Right), Action::Attack);
        assert_eq!(config.primary_pointer_button(), Some(MouseButton::Right));
    }
}
