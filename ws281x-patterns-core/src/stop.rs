use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set from a signal handler, polled by the run loop.
///
/// Setting it is a single atomic store, so it is safe to do from signal context.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// For handing to `signal_hook::flag::register`.
    pub fn as_atomic(&self) -> Arc<AtomicBool> {
        self.0.clone()
    }
}
