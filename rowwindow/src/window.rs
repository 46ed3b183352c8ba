use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use crate::offsets::OffsetCache;
use crate::{VirtualItem, VirtualRange, WindowOptions};

/// A headless row-windowing engine.
///
/// The engine is fully synchronous: setters apply input changes (scroll
/// offset, viewport resize, row count, remeasurement) immediately, and every
/// query re-runs to completion against the updated state. No operation yields
/// mid-computation.
///
/// Query cost is O(log count) for the range search plus O(window size) for
/// emission, independent of the total row count.
#[derive(Clone, Debug)]
pub struct RowWindow {
    options: WindowOptions,
    viewport_size: u32,
    scroll_offset: u64,

    sizes: Vec<u32>, // estimates until measured
    measured: Vec<bool>,
    offsets: OffsetCache,
}

impl RowWindow {
    /// Creates a new window from options, applying `initial_viewport` and
    /// `initial_offset` immediately.
    pub fn new(options: WindowOptions) -> Self {
        vdebug!(
            count = options.count,
            overscan = options.overscan,
            "RowWindow::new"
        );
        let mut w = Self {
            viewport_size: options.initial_viewport,
            scroll_offset: options.initial_offset,
            sizes: Vec::new(),
            measured: Vec::new(),
            offsets: OffsetCache::from_sizes(&[]),
            options,
        };
        w.rebuild_estimates();
        w
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// Changes the row count. Existing rows keep their current sizes
    /// (measured or estimated); new rows get fresh estimates.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        vtrace!(count, "set_count");
        self.options.count = count;
        if count < self.sizes.len() {
            self.sizes.truncate(count);
            self.measured.truncate(count);
            self.offsets.rebuild_from(count, &self.sizes);
        } else {
            let from = self.sizes.len();
            for i in from..count {
                self.sizes.push((self.options.estimate_size)(i));
                self.measured.push(false);
            }
            self.offsets.rebuild_from(from, &self.sizes);
        }
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    /// Replaces the estimate function. Measured rows keep their measured
    /// sizes; unmeasured rows are re-estimated and the prefix sums are
    /// recomputed in full.
    pub fn set_estimate_size(&mut self, f: impl Fn(usize) -> u32 + Send + Sync + 'static) {
        self.options.estimate_size = Arc::new(f);
        for i in 0..self.sizes.len() {
            if !self.measured[i] {
                self.sizes[i] = (self.options.estimate_size)(i);
            }
        }
        self.offsets.rebuild_from(0, &self.sizes);
    }

    /// Discards all measurements and falls back to estimates.
    pub fn reset_measurements(&mut self) {
        vdebug!(count = self.options.count, "reset_measurements");
        for m in &mut self.measured {
            *m = false;
        }
        for i in 0..self.sizes.len() {
            self.sizes[i] = (self.options.estimate_size)(i);
        }
        self.offsets.rebuild_from(0, &self.sizes);
    }

    /// Records a measured size for one row.
    ///
    /// This invalidates the cached offsets of every row at or after `index`
    /// and rebuilds that suffix. Out-of-range indexes are ignored.
    pub fn measure(&mut self, index: usize, size: u32) {
        if index >= self.options.count {
            return;
        }
        if self.sizes[index] == size {
            self.measured[index] = true;
            return;
        }
        vtrace!(index, size, "measure");
        self.sizes[index] = size;
        self.measured[index] = true;
        self.offsets.rebuild_from(index, &self.sizes);
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn set_viewport_size(&mut self, size: u32) {
        self.viewport_size = size;
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        self.scroll_offset = self.clamp_scroll_offset(offset);
    }

    pub fn set_viewport_and_scroll(&mut self, viewport_size: u32, scroll_offset: u64) {
        self.viewport_size = viewport_size;
        self.scroll_offset = scroll_offset;
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_size: u32, scroll_offset: u64) {
        self.viewport_size = viewport_size;
        self.scroll_offset = self.clamp_scroll_offset(scroll_offset);
    }

    /// Sum of all row sizes: the scroll track size.
    pub fn total_size(&self) -> u64 {
        self.offsets.total()
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size().saturating_sub(self.viewport_size as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Maps a pixel offset to the row covering it. O(log count).
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        self.offsets.index_at(offset)
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        (index < self.options.count).then(|| self.offsets.start_of(index))
    }

    pub fn item_size(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        let start = self.item_start(index)?;
        let size = self.item_size(index)? as u64;
        Some(start.saturating_add(size))
    }

    /// The visible window (no overscan) for the current scroll state.
    pub fn visible_range(&self) -> VirtualRange {
        self.visible_range_for(self.scroll_offset, self.viewport_size)
    }

    /// The visible window (no overscan) for a given scroll state.
    ///
    /// Offsets past `total_size - viewport` are clamped so the window covers
    /// the last rows.
    pub fn visible_range_for(&self, scroll_offset: u64, viewport_size: u32) -> VirtualRange {
        let count = self.options.count;
        if count == 0 || viewport_size == 0 {
            return VirtualRange {
                start_index: 0,
                end_index: 0,
            };
        }

        let view = viewport_size as u64;
        let total = self.total_size();
        let scroll_offset = scroll_offset.min(total.saturating_sub(view));
        let scroll_end = scroll_offset.saturating_add(view);

        // First row whose end exceeds the offset, through the last row whose
        // start lies before the viewport end (exclusive).
        let start = self.offsets.index_at(scroll_offset).unwrap_or(count);
        let end = self
            .offsets
            .index_at(cmp::max(scroll_end - 1, scroll_offset))
            .map(|i| i + 1)
            .unwrap_or(count);

        VirtualRange {
            start_index: start.min(count),
            end_index: end.min(count),
        }
    }

    /// The visible window expanded by `overscan` rows on each side, clamped
    /// to `[0, count]`.
    pub fn virtual_range(&self) -> VirtualRange {
        self.virtual_range_for(self.scroll_offset, self.viewport_size)
    }

    pub fn virtual_range_for(&self, scroll_offset: u64, viewport_size: u32) -> VirtualRange {
        let mut range = self.visible_range_for(scroll_offset, viewport_size);
        if range.is_empty() {
            return range;
        }

        let overscan = self.options.overscan;
        range.start_index = range.start_index.saturating_sub(overscan);
        range.end_index = cmp::min(self.options.count, range.end_index.saturating_add(overscan));
        range
    }

    /// Emits a [`VirtualItem`] for every row in the overscanned window,
    /// without allocating.
    pub fn for_each_virtual_item(&self, f: impl FnMut(VirtualItem)) {
        self.for_each_virtual_item_for(self.scroll_offset, self.viewport_size, f);
    }

    pub fn for_each_virtual_item_for(
        &self,
        scroll_offset: u64,
        viewport_size: u32,
        mut f: impl FnMut(VirtualItem),
    ) {
        let range = self.virtual_range_for(scroll_offset, viewport_size);
        if range.is_empty() {
            return;
        }

        let mut start = self.offsets.start_of(range.start_index);
        for index in range.start_index..range.end_index {
            let size = self.sizes[index];
            f(VirtualItem { index, start, size });
            start = start.saturating_add(size as u64);
        }
    }

    /// Collects virtual items into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_virtual_item`];
    /// reuse the buffer across frames to avoid churn.
    pub fn collect_virtual_items(&self, out: &mut Vec<VirtualItem>) {
        self.collect_virtual_items_for(self.scroll_offset, self.viewport_size, out);
    }

    pub fn collect_virtual_items_for(
        &self,
        scroll_offset: u64,
        viewport_size: u32,
        out: &mut Vec<VirtualItem>,
    ) {
        out.clear();
        self.for_each_virtual_item_for(scroll_offset, viewport_size, |it| out.push(it));
    }

    fn rebuild_estimates(&mut self) {
        vdebug!(count = self.options.count, "rebuild_estimates");
        self.sizes.clear();
        self.measured.clear();
        self.sizes.reserve_exact(self.options.count);
        self.measured.reserve_exact(self.options.count);
        for i in 0..self.options.count {
            self.sizes.push((self.options.estimate_size)(i));
            self.measured.push(false);
        }
        self.offsets = OffsetCache::from_sizes(&self.sizes);
    }
}
