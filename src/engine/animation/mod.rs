// Sprite animation system
//
// Named animations are registered from sprite-sheets and played back by key.
// Non-looping animations notify one-shot completion subscribers when they end.
//
// ## Architecture
//
// - `sheet`: Sprite-sheet geometry (frame size, frame numbering, UVs)
// - `clip`: Animation definitions and the clips built from them
// - `player`: Playback, frame advance and completion subscriptions

mod clip;
mod player;
mod sheet;

pub use clip::{AnimationClip, AnimationDef, Repeat};
pub use player::{AnimationPlayer, CompletionCallback, SubscriptionId};
pub use sheet::SpriteSheet;

/// Animation configuration errors
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation already registered: {0}")]
    DuplicateKey(String),

    #[error("Unknown sprite-sheet '{sheet}' for animation '{animation}'")]
    UnknownSheet { animation: String, sheet: String },

    #[error("Frames {start}..={end} out of range for sheet '{sheet}' ({frame_count} frames)")]
    FrameRange {
        sheet: String,
        start: usize,
        end: usize,
        frame_count: usize,
    },

    #[error("Invalid frame rate {rate} for animation '{animation}'")]
    InvalidFrameRate { animation: String, rate: f32 },
}
