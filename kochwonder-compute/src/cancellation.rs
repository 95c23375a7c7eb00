use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Trait for checking if computation should be cancelled
pub trait CancellationChecker: Clone {
    /// Returns true if computation should be cancelled
    fn is_cancelled(&self) -> bool;
}

/// Never cancels - for single-threaded or non-cancellable contexts
#[derive(Clone, Copy, Default)]
pub struct NeverCancel;

impl CancellationChecker for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Shared request counter. Every new request supersedes all earlier ones.
#[derive(Clone, Default)]
pub struct SupersedeToken {
    epoch: Arc<AtomicU64>,
}

impl SupersedeToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, cancelling every checker handed out before.
    pub fn begin(&self) -> EpochChecker {
        let issued = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        EpochChecker {
            epoch: Arc::clone(&self.epoch),
            issued,
        }
    }

    /// Cancel in-flight work without starting a new request.
    pub fn supersede(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }
}

/// Cancelled once its token has moved past the epoch it was issued at.
#[derive(Clone)]
pub struct EpochChecker {
    epoch: Arc<AtomicU64>,
    issued: u64,
}

impl EpochChecker {
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

impl CancellationChecker for EpochChecker {
    fn is_cancelled(&self) -> bool {
        self.epoch.load(Ordering::Acquire) != self.issued
    }
}
