pub mod koch_canvas;
pub mod toolbar;

pub use koch_canvas::KochCanvas;
pub use toolbar::Toolbar;
