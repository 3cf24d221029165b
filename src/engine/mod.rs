// Engine modules: animation, assets, camera, frame loop, input

pub mod animation;
pub mod assets;
pub mod camera;
pub mod game_loop;
pub mod input;
