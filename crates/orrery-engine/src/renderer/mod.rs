pub mod camera;
pub mod draw_list;
pub mod headless;
pub mod traits;

// Re-export key types for convenient access
pub use traits::{Renderer, Viewport};
