// Sprite-sheet geometry

use super::AnimationError;

/// A sprite-sheet image subdivided into fixed-size frames
///
/// Frames are numbered row by row, left to right, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    /// Key the sheet was loaded under (e.g. "hero_idle")
    pub key: String,
    /// Width of each frame in pixels
    pub frame_width: u32,
    /// Height of each frame in pixels
    pub frame_height: u32,
    /// Number of frame columns
    pub columns: u32,
    /// Number of frame rows
    pub rows: u32,
}

impl SpriteSheet {
    /// Create a new sprite-sheet description
    pub fn new(key: &str, frame_width: u32, frame_height: u32, columns: u32, rows: u32) -> Self {
        Self {
            key: key.to_string(),
            frame_width,
            frame_height,
            columns,
            rows,
        }
    }

    /// Total number of frames in the sheet
    pub fn frame_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// List frame numbers from `start` to `end` (inclusive)
    ///
    /// A reversed range yields the frames in descending order.
    pub fn generate_frame_numbers(&self, start: usize, end: usize) -> Result<Vec<usize>, AnimationError> {
        let frame_count = self.frame_count();
        if start >= frame_count || end >= frame_count {
            return Err(AnimationError::FrameRange {
                sheet: self.key.clone(),
                start,
                end,
                frame_count,
            });
        }

        if start <= end {
            Ok((start..=end).collect())
        } else {
            Ok((end..=start).rev().collect())
        }
    }
}
