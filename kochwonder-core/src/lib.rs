pub mod boundary;
pub mod config;
pub mod error;
pub mod level;
pub mod points;
pub mod shape;
pub mod transforms;
pub mod viewport;

pub use boundary::{checked_expected_len, expected_len, Boundary};
pub use config::{KochConfig, MAX_DEPTH, SNOWFLAKE_CONFIG};
pub use error::{KochError, Result};
pub use level::{LevelBounds, RecursionLevel};
pub use points::Point;
pub use shape::{BaseShape, Winding};
pub use transforms::{ScaleRange, ViewTransform};
pub use viewport::{InputEvent, Update, ViewportController, WHEEL_DELTA_PER_STEP};
