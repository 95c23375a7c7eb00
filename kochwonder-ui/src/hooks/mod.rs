mod use_canvas_interaction;

pub use use_canvas_interaction::{dispatch, use_canvas_interaction, use_keyboard_shortcuts};
