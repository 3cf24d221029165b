// Animation playback and completion events

use super::{AnimationClip, AnimationDef, AnimationError, Repeat, SpriteSheet};
use log::{debug, error};
use std::collections::HashMap;
use std::fmt;

/// Callback invoked once when a subscribed animation completes
pub type CompletionCallback = Box<dyn FnOnce()>;

/// Token identifying a pending completion subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    animation: String,
    callback: CompletionCallback,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

/// Manages animation playback for a sprite
///
/// Completion callbacks run inside [`AnimationPlayer::update`], on the same
/// thread as the rest of the frame.
#[derive(Debug)]
pub struct AnimationPlayer {
    /// All registered animations
    clips: HashMap<String, AnimationClip>,
    /// Currently playing animation key
    current: Option<String>,
    /// Index into the current clip's frame list
    frame_index: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    /// Completed repeats of the current clip
    repeats_done: u32,
    /// Whether the animation is playing
    playing: bool,
    /// One-shot completion subscriptions
    subscriptions: Vec<Subscription>,
    next_subscription: u64,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
            current: None,
            frame_index: 0,
            frame_timer: 0.0,
            repeats_done: 0,
            playing: false,
            subscriptions: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Register an animation built from a sprite-sheet
    pub fn create(&mut self, def: &AnimationDef, sheet: &SpriteSheet) -> Result<(), AnimationError> {
        if self.clips.contains_key(&def.key) {
            return Err(AnimationError::DuplicateKey(def.key.clone()));
        }

        let clip = AnimationClip::from_def(def, sheet)?;
        debug!(
            "Registered animation '{}' ({} frames from '{}')",
            clip.key,
            clip.frame_count(),
            clip.sheet
        );
        self.clips.insert(clip.key.clone(), clip);
        Ok(())
    }

    /// Play an animation by key
    ///
    /// With `ignore_if_playing`, a call for the animation that is already
    /// playing is a no-op. Otherwise playback restarts from the first frame.
    pub fn play(&mut self, key: &str, ignore_if_playing: bool) {
        if !self.clips.contains_key(key) {
            error!("Animation '{}' is not registered", key);
            return;
        }

        if ignore_if_playing && self.playing && self.current.as_deref() == Some(key) {
            return;
        }

        self.current = Some(key.to_string());
        self.frame_index = 0;
        self.frame_timer = 0.0;
        self.repeats_done = 0;
        self.playing = true;
    }

    /// Subscribe to the next completion of an animation
    ///
    /// The callback fires at most once and is dropped afterwards.
    pub fn once_complete(&mut self, animation: &str, callback: CompletionCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        self.subscriptions.push(Subscription {
            id,
            animation: animation.to_string(),
            callback,
        });
        debug!("Subscribed {:?} to completion of '{}'", id, animation);
        id
    }

    /// Cancel a pending subscription
    /// Returns true if the subscription was still pending
    pub fn cancel(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        let cancelled = self.subscriptions.len() != before;
        if cancelled {
            debug!("Cancelled {:?}", id);
        }
        cancelled
    }

    /// Advance the animation (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(key) = self.current.as_deref() else {
            return;
        };
        let Some(clip) = self.clips.get(key) else {
            return;
        };

        self.frame_timer += dt;

        let mut completed = false;
        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.frame_index += 1;

            if self.frame_index < clip.frame_count() {
                continue;
            }

            match clip.repeat {
                Repeat::Forever => self.frame_index = 0,
                Repeat::Times(times) if self.repeats_done < times => {
                    self.repeats_done += 1;
                    self.frame_index = 0;
                }
                Repeat::Times(_) => {
                    // Stay on last frame
                    self.frame_index = clip.frame_count() - 1;
                    self.frame_timer = 0.0;
                    self.playing = false;
                    completed = true;
                    break;
                }
            }
        }

        if completed {
            let key = key.to_string();
            self.fire_complete(&key);
        }
    }

    fn fire_complete(&mut self, key: &str) {
        let (fired, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.subscriptions)
            .into_iter()
            .partition(|sub| sub.animation == key);
        self.subscriptions = pending;

        debug!("Animation '{}' complete, notifying {} subscriber(s)", key, fired.len());
        for sub in fired {
            (sub.callback)();
        }
    }

    /// Get the current animation key
    pub fn current_animation(&self) -> Option<&str> {
        self.current.as_deref()
    }

}

#[cfg(test)]
impl AnimationPlayer {
    /// Sprite-sheet frame currently shown
    pub(crate) fn current_frame(&self) -> Option<usize> {
        let clip = self.clips.get(self.current.as_deref()?)?;
        clip.frames.get(self.frame_index).copied()
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.playing
    }

    /// Subscriptions still waiting for a completion
    pub(crate) fn pending_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }
}
