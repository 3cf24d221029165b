// Animation definitions and clips

use super::{AnimationError, SpriteSheet};

/// How many times an animation repeats after its first play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Loop until another animation is played
    Forever,
    /// Play once, then repeat the given number of times
    Times(u32),
}

impl Repeat {
    /// Play exactly once
    pub const ONCE: Repeat = Repeat::Times(0);
}

/// Request to register an animation from a sprite-sheet
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Key the animation is played by (e.g. "idle")
    pub key: String,
    /// Key of the sprite-sheet providing the frames
    pub sheet: String,
    /// First frame number (inclusive)
    pub start: usize,
    /// Last frame number (inclusive)
    pub end: usize,
    /// Frames per second
    pub frame_rate: f32,
    pub repeat: Repeat,
}

impl AnimationDef {
    pub fn new(key: &str, sheet: &str, start: usize, end: usize, frame_rate: f32, repeat: Repeat) -> Self {
        Self {
            key: key.to_string(),
            sheet: sheet.to_string(),
            start,
            end,
            frame_rate,
            repeat,
        }
    }
}

/// A registered animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "run", "attack")
    pub key: String,
    /// Sprite-sheet the frames come from
    pub sheet: String,
    /// Sheet frame numbers in playback order
    pub frames: Vec<usize>,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    pub repeat: Repeat,
}

impl AnimationClip {
    /// Build a clip from a definition and the sheet it refers to
    pub fn from_def(def: &AnimationDef, sheet: &SpriteSheet) -> Result<Self, AnimationError> {
        if def.sheet != sheet.key {
            return Err(AnimationError::UnknownSheet {
                animation: def.key.clone(),
                sheet: def.sheet.clone(),
            });
        }

        if !def.frame_rate.is_finite() || def.frame_rate <= 0.0 {
            return Err(AnimationError::InvalidFrameRate {
                animation: def.key.clone(),
                rate: def.frame_rate,
            });
        }

        let frames = sheet.generate_frame_numbers(def.start, def.end)?;

        Ok(Self {
            key: def.key.clone(),
            sheet: def.sheet.clone(),
            frames,
            frame_duration: 1.0 / def.frame_rate,
            repeat: def.repeat,
        })
    }

    /// Number of frames in one play-through
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
