// Hero movement stats

/// Fixed hero stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroStats {
    /// Horizontal distance covered per frame while running (pixels)
    pub run_speed: f32,
    /// Fraction of run speed used while crouch-walking
    pub crouch_speed_factor: f32,
    /// Sprite frame width in pixels
    pub frame_width: u32,
    /// Sprite frame height in pixels
    pub frame_height: u32,
}

/// The stats the hero spawns with
pub const BASE_STATS: HeroStats = HeroStats {
    // One pixel per frame, tied to the display refresh rate
    run_speed: 1.0,
    crouch_speed_factor: 0.5,

    // Frame size of every hero sprite-sheet
    frame_width: 120,
    frame_height: 80,
};

impl Default for HeroStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl HeroStats {
    /// Get the standard hero stats
    pub fn standard() -> Self {
        BASE_STATS
    }

    /// Horizontal distance covered per frame while crouch-walking
    pub fn crouch_speed(&self) -> f32 {
        self.run_speed * self.crouch_speed_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = HeroStats::default();
        assert_eq!(stats.run_speed, 1.0);
        assert_eq!(stats.frame_width, 120);
        assert_eq!(stats.frame_height, 80);
        assert_eq!(stats, HeroStats::standard());
    }

    #[test]
    fn test_crouch_speed_is_half_run_speed() {
        let stats = HeroStats::standard();
        assert_eq!(stats.crouch_speed(), 0.5);

        let fast = HeroStats {
            run_speed: 3.0,
            ..BASE_STATS
        };
        assert_eq!(fast.crouch_speed(), 1.5);
    }
}
