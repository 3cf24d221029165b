// Game modules: hero, scene setup and configuration

pub mod config;
pub mod hero;
pub mod scene;

pub use config::{SceneConfig, SheetAsset};
pub use scene::{preload, Scene};

use crate::engine::input::Action;
use hero::CharacterState;

/// Scene configuration errors, detected before the scene starts
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("No animation '{key}' defined for state {state:?}")]
    MissingAnimation {
        state: CharacterState,
        key: &'static str,
    },

    #[error("Animation '{animation}' uses sprite-sheet '{sheet}', which is not in the asset list")]
    MissingSheet { animation: String, sheet: String },

    #[error("Animation 'attack' must not loop forever")]
    LoopingAttack,

    #[error("No input bound to {0:?}")]
    MissingBinding(Action),

    #[error("Attack must be bound to a mouse button")]
    NoPointerAttack,
}
