use alloc::vec::Vec;

/// Dense prefix sums over per-row sizes.
///
/// `starts[i]` is the start offset of row `i`; `starts[len]` is the total
/// size. The sequence is monotonic non-decreasing, so mapping an offset back
/// to a row index is a binary search.
///
/// Remeasuring row `i` invalidates every entry at or after `i + 1`; the
/// suffix is rebuilt in place, so rows before the change keep their offsets.
#[derive(Clone, Debug)]
pub(crate) struct OffsetCache {
    starts: Vec<u64>, // len == row count + 1, starts[0] == 0
}

impl OffsetCache {
    pub(crate) fn from_sizes(sizes: &[u32]) -> Self {
        let mut starts = Vec::with_capacity(sizes.len() + 1);
        starts.push(0);
        let mut cache = Self { starts };
        cache.rebuild_from(0, sizes);
        cache
    }

    pub(crate) fn len(&self) -> usize {
        self.starts.len() - 1
    }

    /// Recomputes `starts[index + 1 ..]` from `sizes`, growing or shrinking
    /// the cache to `sizes.len() + 1` entries. O(sizes.len() - index).
    pub(crate) fn rebuild_from(&mut self, index: usize, sizes: &[u32]) {
        let index = index.min(sizes.len()).min(self.len());
        self.starts.truncate(index + 1);
        self.starts.reserve(sizes.len() - index);
        let mut acc = self.starts[index];
        for &size in &sizes[index..] {
            acc = acc.saturating_add(size as u64);
            self.starts.push(acc);
        }
    }

    pub(crate) fn start_of(&self, index: usize) -> u64 {
        self.starts[index.min(self.len())]
    }

    pub(crate) fn total(&self) -> u64 {
        self.starts[self.len()]
    }

    /// Returns the row covering `offset`: the last row whose start offset is
    /// `<= offset`, clamped to the final row. `None` when there are no rows.
    pub(crate) fn index_at(&self, offset: u64) -> Option<usize> {
        let count = self.len();
        if count == 0 {
            return None;
        }
        // Skipping the implicit starts[0] == 0 entry, this counts the rows
        // that start at or before `offset`.
        let covered = self.starts[1..].partition_point(|&start| start <= offset);
        Some(covered.min(count - 1))
    }
}
