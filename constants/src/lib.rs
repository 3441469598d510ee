pub mod camera;
pub mod motion;
pub mod render_settings;
pub mod scene;
pub mod texture;
