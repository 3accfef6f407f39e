//! Resolution detection - is this a high pixel density display?
//!
//! The answer is computed once, from the pixel ratio the host reports, and
//! cached for the rest of the process. Moving a window to another display does
//! not change it.
//!
//! # Example
//!
//! ```ignore
//! use spark_sections::state::resolution;
//!
//! // At startup, with whatever the host reports.
//! resolution::detect_device_pixel_ratio(2.0);
//!
//! // Anywhere afterwards.
//! assert!(resolution::is_hi_res());
//! ```

use once_cell::sync::OnceCell;
use tracing::{debug, info};

/// Pixel ratio of a standard-density display.
pub const BASELINE_PIXEL_RATIO: f64 = 1.0;

/// Computed-once high resolution flag.
#[derive(Debug, Default)]
pub struct ResolutionDetector {
    flag: OnceCell<bool>,
}

impl ResolutionDetector {
    pub const fn new() -> Self {
        Self {
            flag: OnceCell::new(),
        }
    }

    /// Return the cached flag, running `read_ratio` only if nothing is cached yet.
    ///
    /// `read_ratio` returns the device pixel ratio. The display is high resolution
    /// when that ratio is strictly above [`BASELINE_PIXEL_RATIO`].
    pub fn detect<F>(&self, read_ratio: F) -> bool
    where
        F: FnOnce() -> f64,
    {
        *self.flag.get_or_init(|| {
            let ratio = read_ratio();
            let hi_res = ratio > BASELINE_PIXEL_RATIO;
            info!(ratio, hi_res, "display resolution detected");
            hi_res
        })
    }

    /// Peek at the flag without initializing it.
    pub fn get(&self) -> Option<bool> {
        self.flag.get().copied()
    }

    /// Read the flag, assuming the baseline density if never detected.
    pub fn is_hi_res(&self) -> bool {
        self.detect(|| BASELINE_PIXEL_RATIO)
    }
}

static GLOBAL: ResolutionDetector = ResolutionDetector::new();

/// The process-wide detector shared by every section.
pub fn global() -> &'static ResolutionDetector {
    &GLOBAL
}

/// Seed the process-wide flag. Only the first call has any effect.
pub fn detect_device_pixel_ratio(ratio: f64) -> bool {
    let hi_res = GLOBAL.detect(|| ratio);
    if hi_res != (ratio > BASELINE_PIXEL_RATIO) {
        debug!(ratio, hi_res, "resolution already detected, ignoring new pixel ratio");
    }
    hi_res
}

/// Read the process-wide flag.
pub fn is_hi_res() -> bool {
    GLOBAL.is_hi_res()
}

// =============================================================================
// Tests
// =============================================================================
