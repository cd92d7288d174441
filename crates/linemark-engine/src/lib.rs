pub mod render;

// Re-export key types for easier usage
pub use render::{RenderOptions, render, render_with};
