pub mod adaptive;
pub mod camera;
pub mod content;
pub mod geometry;
pub mod image;
pub mod particles;
pub mod scene;
pub mod sections;
pub mod sound;
pub mod splash;
pub mod throttle;

pub use adaptive::*;
pub use camera::*;
pub use image::*;
pub use particles::*;
pub use scene::*;
pub use sections::*;
pub use sound::*;
pub use splash::*;
pub use throttle::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
