pub mod canvas_utils;

pub use canvas_utils::{draw_closed_polyline, get_2d_context, performance_now, SNOWFLAKE_STYLE};
