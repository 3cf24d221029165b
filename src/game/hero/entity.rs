// Hero sprite entity

use crate::engine::animation::{AnimationPlayer, CompletionCallback, SubscriptionId};
use glam::Vec2;

/// Horizontal direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// The player-controlled sprite
#[derive(Debug)]
pub struct Hero {
    /// Position in world space (pixels, y down)
    pub position: Vec2,
    /// Whether the sprite is mirrored to face left
    pub flip_x: bool,
    /// Animation player holding the hero's animations
    pub animation: AnimationPlayer,
}

impl Hero {
    /// Spawn a hero at `position`, facing right
    pub fn new(position: Vec2, animation: AnimationPlayer) -> Self {
        Self {
            position,
            flip_x: false,
            animation,
        }
    }

    /// Play an animation, leaving it alone if it is already playing
    pub fn play(&mut self, key: &str) {
        self.animation.play(key, true);
    }

    /// Subscribe to the next completion of an animation
    pub fn once_complete(&mut self, key: &str, callback: CompletionCallback) -> SubscriptionId {
        self.animation.once_complete(key, callback)
    }

    /// Move `distance` pixels in `direction` and face that way
    pub fn walk(&mut self, direction: Direction, distance: f32) {
        match direction {
            Direction::Left => {
                self.position.x -= distance;
                self.flip_x = true;
            }
            Direction::Right => {
                self.position.x += distance;
                self.flip_x = false;
            }
        }
    }

    /// Currently playing animation key
    pub fn animation_key(&self) -> Option<&str> {
        self.animation.current_animation()
    }
}
