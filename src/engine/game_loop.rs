/// Frame timing and control
///
/// The scene is updated exactly once per rendered frame. The loop measures the
/// time between frames for animation playback, keeps a smoothed FPS estimate
/// and handles pausing.
use log::info;
use std::time::Instant;

/// Longest frame delta handed to the scene (seconds)
///
/// Keeps animations from skipping ahead after a stall (window drag, breakpoint).
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Weight of the newest frame in the FPS estimate
const FPS_SMOOTHING: f32 = 0.1;

/// Frame timing state
pub struct GameLoop {
    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Frames seen, paused or not
    frame_count: u64,

    /// Exponentially smoothed frames per second
    fps: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            fps: 0.0,
        }
    }

    /// Begin a new frame
    ///
    /// Returns the delta time to update the scene with, or `None` while paused.
    pub fn begin_frame(&mut self) -> Option<f32> {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.frame_count += 1;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.fps = if self.fps == 0.0 {
                instant_fps
            } else {
                self.fps + (instant_fps - self.fps) * FPS_SMOOTHING
            };
        }

        if self.paused {
            return None;
        }

        Some(frame_time.min(MAX_FRAME_DELTA))
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            info!("Paused at frame {} ({:.0} fps)", self.frame_count, self.fps);
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Don't hand the whole pause to the next frame
            self.last_frame_time = Instant::now();
            info!("Resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
