// Follow camera for 2D scenes
//
// World coordinates are in pixels with y pointing down, matching the
// background image the world is built on.

use glam::Vec2;

/// Axis-aligned world region the camera may show
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Create bounds from a top-left corner and a size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// 2D camera that eases toward a target and stays inside world bounds
#[derive(Debug, Clone)]
pub struct FollowCamera {
    /// Center of the view in world space
    position: Vec2,
    /// Viewport size in pixels
    viewport: Vec2,
    /// Region the view must stay inside (None = unbounded)
    bounds: Option<Bounds>,
    /// Fraction of the remaining distance covered each frame, per axis
    lerp: Vec2,
    /// Snap the view origin to whole pixels
    round_pixels: bool,
    following: bool,
}

impl FollowCamera {
    /// Create a new camera centred on `position`
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position,
            viewport: Vec2::new(viewport_width, viewport_height),
            bounds: None,
            lerp: Vec2::ONE,
            round_pixels: false,
            following: false,
        }
    }

    /// Keep the view inside the given world region
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
        self.position = self.clamp(self.position);
    }

    /// Start following a target with per-axis easing (1.0 = snap)
    pub fn start_follow(&mut self, round_pixels: bool, lerp_x: f32, lerp_y: f32) {
        self.round_pixels = round_pixels;
        self.lerp = Vec2::new(lerp_x.clamp(0.0, 1.0), lerp_y.clamp(0.0, 1.0));
        self.following = true;
    }

    /// Jump straight to `target`
    pub fn center_on(&mut self, target: Vec2) {
        self.position = self.clamp(target);
    }

    /// Move toward the followed target (called every frame)
    pub fn update(&mut self, target: Vec2) {
        if !self.following {
            return;
        }

        let eased = self.position + (target - self.position) * self.lerp;
        self.position = self.clamp(eased);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.position = self.clamp(self.position);
    }

    fn clamp(&self, center: Vec2) -> Vec2 {
        let Some(bounds) = self.bounds else {
            return center;
        };

        let half = self.viewport * 0.5;
        let size = bounds.size();

        let axis = |value: f32, min: f32, max: f32, half: f32, size: f32, view: f32| {
            if size <= view {
                // World smaller than the view: keep it centred
                (min + max) * 0.5
            } else {
                value.clamp(min + half, max - half)
            }
        };

        Vec2::new(
            axis(center.x, bounds.min.x, bounds.max.x, half.x, size.x, self.viewport.x),
            axis(center.y, bounds.min.y, bounds.max.y, half.y, size.y, self.viewport.y),
        )
    }

    /// Center of the view in world space
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Top-left corner of the view in world space
    pub fn view_origin(&self) -> Vec2 {
        let origin = self.position - self.viewport * 0.5;
        if self.round_pixels {
            origin.round()
        } else {
            origin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn world_camera() -> FollowCamera {
        let mut camera = FollowCamera::new(Vec2::new(500.0, 500.0), 400.0, 300.0);
        camera.set_bounds(Bounds::new(0.0, 0.0, 2000.0, 1000.0));
        camera
    }

    #[test]
    fn test_bounds_helpers() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bounds.min, Vec2::new(10.0, 20.0));
        assert_eq!(bounds.size(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_not_following_ignores_target() {
        let mut camera = world_camera();
        camera.update(Vec2::new(900.0, 700.0));
        assert_eq!(camera.position(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_follow_lerp() {
        let mut camera = world_camera();
        camera.start_follow(false, 0.1, 0.1);
        camera.update(Vec2::new(600.0, 500.0));

        assert_relative_eq!(camera.position().x, 510.0);
        assert_relative_eq!(camera.position().y, 500.0);
    }

    #[test]
    fn test_follow_converges() {
        let mut camera = world_camera();
        camera.start_follow(false, 0.1, 0.1);
        for _ in 0..200 {
            camera.update(Vec2::new(800.0, 400.0));
        }

        assert_relative_eq!(camera.position().x, 800.0, epsilon = 0.01);
        assert_relative_eq!(camera.position().y, 400.0, epsilon = 0.01);
    }

    #[test]
    fn test_view_stays_inside_bounds() {
        let mut camera = world_camera();
        camera.start_follow(false, 1.0, 1.0);

        camera.update(Vec2::new(-50.0, -50.0));
        assert_eq!(camera.view_origin(), Vec2::ZERO);

        camera.update(Vec2::new(5000.0, 5000.0));
        assert_eq!(camera.position(), Vec2::new(1800.0, 850.0));
    }

    #[test]
    fn test_world_smaller_than_view_is_centred() {
        let mut camera = FollowCamera::new(Vec2::ZERO, 800.0, 600.0);
        camera.set_bounds(Bounds::new(0.0, 0.0, 400.0, 300.0));
        camera.center_on(Vec2::new(10.0, 10.0));

        assert_eq!(camera.position(), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_round_pixels() {
        let mut camera = world_camera();
        camera.start_follow(true, 0.1, 0.1);
        camera.update(Vec2::new(505.0, 500.0));

        assert_relative_eq!(camera.position().x, 500.5);
        assert_eq!(camera.view_origin(), Vec2::new(301.0, 350.0));
    }

    #[test]
    fn test_resize_reclamps() {
        let mut camera = world_camera();
        camera.center_on(Vec2::new(1900.0, 500.0));
        assert_eq!(camera.position().x, 1800.0);

        camera.resize(1000.0, 300.0);
        assert_eq!(camera.position().x, 1500.0);
        assert_eq!(camera.view_origin(), Vec2::new(1000.0, 350.0));
    }
}
