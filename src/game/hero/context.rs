// State shared by the hero's state handlers

use super::entity::Hero;
use super::stats::HeroStats;
use crate::engine::input::InputSnapshot;

/// Everything a state handler may read or mutate during a frame
#[derive(Debug)]
pub struct CharacterContext {
    /// The controlled hero
    pub hero: Hero,
    /// Movement stats
    pub stats: HeroStats,
    /// Set when an attack fires; cleared once the primary button is seen up
    pub attack_locked: bool,
    /// Input for the current frame
    input: InputSnapshot,
}

impl CharacterContext {
    pub fn new(hero: Hero, stats: HeroStats) -> Self {
        Self {
            hero,
            stats,
            attack_locked: false,
            input: InputSnapshot::default(),
        }
    }

    /// Install the input snapshot for the frame about to be evaluated
    pub fn begin_frame(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    /// Input for the current frame
    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }
}
