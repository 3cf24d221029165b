use anyhow::{Context, Result};
use log::{debug, info};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod engine;
mod game;

use engine::assets::AssetManager;
use engine::game_loop::GameLoop;
use engine::input::InputManager;
use game::{preload, Scene, SceneConfig};

const TITLE: &str = "Hero Controller";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting {}...", TITLE);

    let config = SceneConfig::default();

    // Any missing asset is fatal before the window opens
    let mut assets = AssetManager::new(&config.asset_root);
    preload(&config, &mut assets).context("Failed to preload scene assets")?;
    let mut scene = Scene::new(&config, &assets)?;

    let mut input = InputManager::new(config.input.clone());
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(format!("{} - {}", TITLE, scene.state()))
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window_width,
            config.window_height,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    let size = window.inner_size();
    scene.resize(size.width, size.height);

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    scene.resize(physical_size.width, physical_size.height);
                }
                WindowEvent::Focused(false) => {
                    // Key releases are lost while unfocused
                    input.reset();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.physical_key == PhysicalKey::Code(KeyCode::KeyP)
                        && event.state == ElementState::Pressed
                        && !event.repeat
                    {
                        game_loop.toggle_pause();
                    }
                    input.process_keyboard_event(&event);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.process_mouse_button(state, button);
                }
                WindowEvent::RedrawRequested => {
                    if let Some(dt) = game_loop.begin_frame() {
                        let frames = scene.machine().frames_in_state();
                        let state = scene.update(input.snapshot(), dt);

                        let machine = scene.machine();
                        if machine.state_just_changed() {
                            window.set_title(&format!("{} - {}", TITLE, state));
                            debug!(
                                "Left {} after {} frame(s), transition #{}",
                                machine.previous_state(),
                                frames + 1,
                                machine.transition_count()
                            );

                            let hero = scene.hero();
                            let camera = scene.camera();
                            let view = camera.view_origin();
                            debug!(
                                "Hero playing '{}' at ({:.0}, {:.0}); view at ({:.0}, {:.0}) centred on ({:.0}, {:.0})",
                                hero.animation_key().unwrap_or("none"),
                                hero.position.x,
                                hero.position.y,
                                view.x,
                                view.y,
                                camera.position().x,
                                camera.position().y
                            );
                        }
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Keep redrawing unless paused; input events still arrive
                if !game_loop.is_paused() {
                    window.request_redraw();
                }
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
