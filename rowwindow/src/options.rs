use alloc::sync::Arc;

/// Configuration for [`crate::RowWindow`].
///
/// Cheap to clone: the estimate function is stored in an `Arc` so callers can
/// tweak a couple of fields and rebuild without reallocating closures.
#[derive(Clone)]
pub struct WindowOptions {
    /// Number of logical rows.
    pub count: usize,

    /// Estimated row size in the scroll axis (e.g. row height for vertical
    /// lists). The estimate is used until a row is measured.
    pub estimate_size: Arc<dyn Fn(usize) -> u32 + Send + Sync>,

    /// Extra rows materialized on each side of the visible window to reduce
    /// flicker during fast scrolling.
    pub overscan: usize,

    /// Initial size of the scroll container in the windowed axis.
    pub initial_viewport: u32,

    /// Initial scroll offset.
    pub initial_offset: u64,
}

impl WindowOptions {
    /// `estimate_size(i)` should return the estimated size of row `i`.
    pub fn new(count: usize, estimate_size: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self {
            count,
            estimate_size: Arc::new(estimate_size),
            overscan: 1,
            initial_viewport: 0,
            initial_offset: 0,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_viewport(mut self, initial_viewport: u32) -> Self {
        self.initial_viewport = initial_viewport;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("overscan", &self.overscan)
            .field("initial_viewport", &self.initial_viewport)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
