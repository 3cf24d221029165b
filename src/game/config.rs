// Scene configuration

use super::hero::{CharacterState, HeroStats};
use super::SceneError;
use crate::engine::animation::{AnimationDef, Repeat};
use crate::engine::input::InputConfig;
use glam::Vec2;
use std::path::PathBuf;

/// A sprite-sheet to load before the scene starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetAsset {
    pub key: String,
    /// Path relative to the asset root
    pub path: String,
}

impl SheetAsset {
    pub fn new(key: &str, path: &str) -> Self {
        Self {
            key: key.to_string(),
            path: path.to_string(),
        }
    }
}

/// Everything needed to load and build the scene
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Directory all asset paths are relative to
    pub asset_root: PathBuf,
    pub background_key: String,
    pub background_path: String,
    /// Hero sprite-sheets, all cut into `stats.frame_width` x `stats.frame_height` frames
    pub sheets: Vec<SheetAsset>,
    /// Hero animations
    pub animations: Vec<AnimationDef>,
    pub stats: HeroStats,
    /// Spawn height above the bottom edge of the background (pixels)
    pub spawn_offset_y: f32,
    /// Camera easing per axis
    pub camera_lerp: Vec2,
    pub window_width: u32,
    pub window_height: u32,
    pub input: InputConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let sheets = vec![
            SheetAsset::new("hero_idle", "hero/120x80_PNGSheets/_Idle.png"),
            SheetAsset::new("hero_run", "hero/120x80_PNGSheets/_Run.png"),
            SheetAsset::new("hero_crouch", "hero/120x80_PNGSheets/_Crouch.png"),
            SheetAsset::new("hero_crouch_walk", "hero/120x80_PNGSheets/_CrouchWalk.png"),
            SheetAsset::new("hero_attack", "hero/120x80_PNGSheets/_Attack.png"),
        ];

        let animations = vec![
            AnimationDef::new("idle", "hero_idle", 0, 9, 10.0, Repeat::Forever),
            AnimationDef::new("run", "hero_run", 0, 9, 12.0, Repeat::Forever),
            AnimationDef::new("crouch", "hero_crouch", 0, 9, 10.0, Repeat::Forever),
            AnimationDef::new("crouch_walk", "hero_crouch_walk", 0, 9, 9.0, Repeat::Forever),
            AnimationDef::new("attack", "hero_attack", 0, 9, 20.0, Repeat::ONCE),
        ];

        Self {
            asset_root: PathBuf::from("assets"),
            background_key: "background".to_string(),
            background_path: "background.png".to_string(),
            sheets,
            animations,
            stats: HeroStats::standard(),
            spawn_offset_y: 300.0,
            camera_lerp: Vec2::new(0.1, 0.1),
            window_width: 1280,
            window_height: 720,
            input: InputConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Find the animation definition for a key
    pub fn animation(&self, key: &str) -> Option<&AnimationDef> {
        self.animations.iter().find(|def| def.key == key)
    }

    /// Check that every state can play its animation and every action is bound
    pub fn validate(&self) -> Result<(), SceneError> {
        for state in CharacterState::ALL {
            let key = state.animation_key();
            let def = self
                .animation(key)
                .ok_or(SceneError::MissingAnimation { state, key })?;

            if !self.sheets.iter().any(|sheet| sheet.key == def.sheet) {
                return Err(SceneError::MissingSheet {
                    animation: def.key.clone(),
                    sheet: def.sheet.clone(),
                });
            }

            // Attack only ends on completion
            if state == CharacterState::Attack && def.repeat == Repeat::Forever {
                return Err(SceneError::LoopingAttack);
            }
        }

        if let Some(action) = self.input.unbound_actions().into_iter().next() {
            return Err(SceneError::MissingBinding(action));
        }

        if self.input.primary_pointer_button().is_none() {
            return Err(SceneError::NoPointerAttack);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::default_bindings;
    use crate::engine::input::{Action, InputSource};
    use winit::keyboard::KeyCode;

    fn bindings_without(action: Action) -> Vec<(InputSource, Action)> {
        default_bindings()
            .into_iter()
            .filter(|(_, bound)| *bound != action)
            .collect()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SceneConfig::default();
        config.validate().unwrap();
        assert_eq!(config.sheets.len(), 5);
        assert_eq!(config.animations.len(), 5);
    }

    #[test]
    fn test_default_animation_rates() {
        let config = SceneConfig::default();
        assert_eq!(config.animation("idle").unwrap().frame_rate, 10.0);
        assert_eq!(config.animation("crouch_walk").unwrap().frame_rate, 9.0);

        let attack = config.animation("attack").unwrap();
        assert_eq!(attack.frame_rate, 20.0);
        assert_eq!(attack.repeat, Repeat::ONCE);
    }

    #[test]
    fn test_missing_animation() {
        let mut config = SceneConfig::default();
        config.animations.retain(|def| def.key != "crouch");

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            SceneError::MissingAnimation {
                state: CharacterState::Crouch,
                key: "crouch"
            }
        ));
    }

    #[test]
    fn test_missing_sheet() {
        let mut config = SceneConfig::default();
        config.sheets.retain(|sheet| sheet.key != "hero_run");

        let err = config.validate().unwrap_err();
        assert!(matches!(err, SceneError::MissingSheet { sheet, .. } if sheet == "hero_run"));
    }

    #[test]
    fn test_looping_attack_rejected() {
        let mut config = SceneConfig::default();
        for def in &mut config.animations {
            if def.key == "attack" {
                def.repeat = Repeat::Forever;
            }
        }

        assert!(matches!(config.validate(), Err(SceneError::LoopingAttack)));
    }

    #[test]
    fn test_missing_binding() {
        let mut config = SceneConfig::default();
        config.input = InputConfig::from_bindings(bindings_without(Action::Crouch));

        assert!(matches!(
            config.validate(),
            Err(SceneError::MissingBinding(Action::Crouch))
        ));
    }

    #[test]
    fn test_attack_on_keyboard_only_rejected() {
        let mut config = SceneConfig::default();
        config.input = InputConfig::from_bindings(bindings_without(Action::Attack));
        config
            .input
            .bind(InputSource::key(KeyCode::KeyF), Action::Attack);

        assert!(matches!(config.validate(), Err(SceneError::NoPointerAttack)));
    }
}
