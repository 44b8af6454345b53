//! Profiling instrumentation for the pointer handlers.
//!
//! Enable with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! embodi-canvas = { features = ["profiling"] }
//! ```
//!
//! Then wrap hot paths:
//! ```ignore
//! fn on_pointer_move(&mut self) {
//!     profile_scope!("on_pointer_move");
//!     // ...
//! }
//! ```
//! Without the feature the macro expands to nothing.

use std::time::Instant;
use tracing::{trace, warn};

/// Handlers slower than this are reported at `warn` level
pub const DEFAULT_THRESHOLD_MS: f64 = 4.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_THRESHOLD_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// RAII timer that logs its scope's duration when dropped.
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }

    /// Milliseconds since the timer started.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = elapsed,
                threshold_ms = self.threshold_ms,
                "Slow operation"
            );
        } else {
            trace!(operation = self.name, elapsed_ms = elapsed, "Timed");
        }
    }
}
