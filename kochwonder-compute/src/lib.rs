pub mod cancellation;
pub mod generator;
pub mod koch;

pub use cancellation::{CancellationChecker, EpochChecker, NeverCancel, SupersedeToken};
pub use generator::BoundaryGenerator;
pub use koch::{generate, generate_cancellable, subdivide, subdivide_cancellable};
