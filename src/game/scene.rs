// The hero scene: asset loading, setup and per-frame update

use super::config::SceneConfig;
use super::hero::{CharacterContext, CharacterState, CharacterStateMachine, Hero};
use crate::engine::animation::{AnimationError, AnimationPlayer};
use crate::engine::assets::{AssetError, AssetManager};
use crate::engine::camera::{Bounds, FollowCamera};
use crate::engine::input::InputSnapshot;
use anyhow::{Context, Result};
use glam::Vec2;
use log::info;

/// Load the background and every hero sprite-sheet
pub fn preload(config: &SceneConfig, assets: &mut AssetManager) -> Result<()> {
    assets
        .load_image(&config.background_key, &config.background_path)
        .with_context(|| format!("Failed to load background '{}'", config.background_path))?;

    for sheet in &config.sheets {
        assets
            .load_spritesheet(
                &sheet.key,
                &sheet.path,
                config.stats.frame_width,
                config.stats.frame_height,
            )
            .with_context(|| format!("Failed to load sprite-sheet '{}'", sheet.path))?;
    }

    let stats = assets.stats();
    info!(
        "Loaded {} images ({} sprite-sheets)",
        stats.image_count, stats.sheet_count
    );
    Ok(())
}

/// A background, the hero on it, and a camera following the hero
#[derive(Debug)]
pub struct Scene {
    context: CharacterContext,
    machine: CharacterStateMachine,
    camera: FollowCamera,
}

impl Scene {
    /// Build the scene from preloaded assets
    pub fn new(config: &SceneConfig, assets: &AssetManager) -> Result<Self> {
        config.validate()?;

        let (width, height) = assets
            .image_size(&config.background_key)
            .ok_or_else(|| AssetError::NotFound(config.background_key.clone()))?;

        let mut animation = AnimationPlayer::new();
        for def in &config.animations {
            let sheet = assets
                .sheet(&def.sheet)
                .ok_or_else(|| AnimationError::UnknownSheet {
                    animation: def.key.clone(),
                    sheet: def.sheet.clone(),
                })?;
            animation.create(def, sheet)?;
        }

        let spawn = Vec2::new(width as f32 / 2.0, height as f32 - config.spawn_offset_y);
        let mut camera = FollowCamera::new(
            spawn,
            config.window_width as f32,
            config.window_height as f32,
        );
        camera.set_bounds(Bounds::new(0.0, 0.0, width as f32, height as f32));
        camera.start_follow(true, config.camera_lerp.x, config.camera_lerp.y);
        camera.center_on(spawn);

        let mut context = CharacterContext::new(Hero::new(spawn, animation), config.stats);
        let mut machine = CharacterStateMachine::new();
        machine.start(&mut context);

        info!(
            "Hero spawned at ({:.0}, {:.0}) on a {}x{} world",
            spawn.x, spawn.y, width, height
        );

        Ok(Self {
            context,
            machine,
            camera,
        })
    }

    /// Advance one frame
    ///
    /// Animations advance first so completion callbacks land before the
    /// state machine looks at them; the camera follows the result.
    pub fn update(&mut self, input: InputSnapshot, dt: f32) -> CharacterState {
        self.context.hero.animation.update(dt);

        self.context.begin_frame(input);
        let state = self.machine.step(&mut self.context);

        self.camera.update(self.context.hero.position);
        state
    }

    /// Resize the camera viewport
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width as f32, height as f32);
    }

    pub fn state(&self) -> CharacterState {
        self.machine.state()
    }

    pub fn machine(&self) -> &CharacterStateMachine {
        &self.machine
    }

    pub fn hero(&self) -> &Hero {
        &self.context.hero
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }
}
