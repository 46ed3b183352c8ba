use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn expected_start(sizes: &[u32], index: usize) -> u64 {
    sizes[..index].iter().map(|&s| s as u64).sum()
}

fn expected_total(sizes: &[u32]) -> u64 {
    sizes.iter().map(|&s| s as u64).sum()
}

fn expected_index_at(sizes: &[u32], offset: u64) -> Option<usize> {
    let count = sizes.len();
    if count == 0 {
        return None;
    }
    // Last row whose start is <= offset, clamped to the final row.
    let mut covered = 0usize;
    let mut start = 0u64;
    for &size in sizes {
        start = start.saturating_add(size as u64);
        if start <= offset {
            covered += 1;
        } else {
            break;
        }
    }
    Some(covered.min(count - 1))
}

fn expected_visible_range(sizes: &[u32], scroll_offset: u64, viewport_size: u32) -> VirtualRange {
    let count = sizes.len();
    if count == 0 || viewport_size == 0 {
        return VirtualRange {
            start_index: 0,
            end_index: 0,
        };
    }
    let view = viewport_size as u64;
    let total = expected_total(sizes);
    let scroll_offset = scroll_offset.min(total.saturating_sub(view));
    let scroll_end = scroll_offset.saturating_add(view);

    let start = expected_index_at(sizes, scroll_offset).unwrap_or(count);
    let end = expected_index_at(sizes, core::cmp::max(scroll_end - 1, scroll_offset))
        .map(|i| i + 1)
        .unwrap_or(count);
    VirtualRange {
        start_index: start.min(count),
        end_index: end.min(count),
    }
}

fn window_from_sizes(sizes: &[u32], overscan: usize) -> RowWindow {
    let sizes_owned: Vec<u32> = sizes.to_vec();
    let mut w = RowWindow::new(
        WindowOptions::new(sizes.len(), move |i| sizes_owned[i]).with_overscan(overscan),
    );
    // Mark everything measured so later size edits go through `measure`.
    for (i, &s) in sizes.iter().enumerate() {
        w.measure(i, s);
    }
    w
}

#[test]
fn fixed_size_total_and_ranges() {
    let mut w = RowWindow::new(WindowOptions::new(10, |_| 50));
    w.set_viewport_and_scroll(120, 0);

    assert_eq!(w.total_size(), 500);
    assert_eq!(
        w.visible_range(),
        VirtualRange {
            start_index: 0,
            end_index: 3
        }
    );
    // Default overscan is 1.
    assert_eq!(
        w.virtual_range(),
        VirtualRange {
            start_index: 0,
            end_index: 4
        }
    );
}

#[test]
fn overscan_expands_and_clamps_to_row_bounds() {
    let mut w = RowWindow::new(WindowOptions::new(10, |_| 50).with_overscan(5));
    w.set_viewport_and_scroll(100, 210);

    // Viewport covers [210, 310): rows 4..7 visible.
    assert_eq!(
        w.visible_range(),
        VirtualRange {
            start_index: 4,
            end_index: 7
        }
    );
    // 5 rows of overscan on each side, clamped to [0, 10].
    assert_eq!(
        w.virtual_range(),
        VirtualRange {
            start_index: 0,
            end_index: 10
        }
    );
}

#[test]
fn empty_row_count_is_empty() {
    let mut w = RowWindow::new(WindowOptions::new(0, |_| 50));
    w.set_viewport_and_scroll(100, 0);

    assert_eq!(w.total_size(), 0);
    assert_eq!(w.index_at_offset(0), None);
    assert!(w.visible_range().is_empty());
    assert!(w.virtual_range().is_empty());

    let mut items = Vec::new();
    w.collect_virtual_items(&mut items);
    assert!(items.is_empty());
}

#[test]
fn zero_viewport_emits_nothing() {
    let mut w = RowWindow::new(WindowOptions::new(10, |_| 50));
    w.set_viewport_and_scroll(0, 100);

    assert!(w.visible_range().is_empty());
    let mut items = Vec::new();
    w.collect_virtual_items(&mut items);
    assert!(items.is_empty());
}

#[test]
fn scroll_past_end_clamps_window_to_last_rows() {
    let mut w = RowWindow::new(WindowOptions::new(10, |_| 50));
    w.set_viewport_and_scroll(120, 10_000);

    // max scroll = 500 - 120 = 380; window covers [380, 500) -> rows 7..10.
    assert_eq!(w.max_scroll_offset(), 380);
    assert_eq!(
        w.visible_range(),
        VirtualRange {
            start_index: 7,
            end_index: 10
        }
    );

    let mut items = Vec::new();
    w.collect_virtual_items(&mut items);
    assert_eq!(items.last().map(|it| it.index), Some(9));
}

#[test]
fn set_scroll_offset_clamped_caps_at_max() {
    let mut w = RowWindow::new(WindowOptions::new(10, |_| 50));
    w.set_viewport_size(120);

    w.set_scroll_offset_clamped(10_000);
    assert_eq!(w.scroll_offset(), 380);

    w.set_scroll_offset_clamped(40);
    assert_eq!(w.scroll_offset(), 40);
}

#[test]
fn items_carry_start_offsets_and_sizes() {
    let mut w = RowWindow::new(WindowOptions::new(10, |_| 50).with_overscan(0));
    w.set_viewport_and_scroll(100, 125);

    let mut items = Vec::new();
    w.collect_virtual_items(&mut items);

    // Viewport covers [125, 225): rows 2, 3, 4.
    assert_eq!(
        items,
        alloc::vec![
            VirtualItem {
                index: 2,
                start: 100,
                size: 50
            },
            VirtualItem {
                index: 3,
                start: 150,
                size: 50
            },
            VirtualItem {
                index: 4,
                start: 200,
                size: 50
            },
        ]
    );
    assert_eq!(items[0].end(), 150);
}

#[test]
fn emitted_count_is_bounded_by_viewport_budget() {
    // A window of height v over rows of size s intersects at most
    // ceil(v / s) + 1 rows (the +1 covers misaligned offsets), so emission
    // is bounded by that plus 2 * overscan, and always by the row count.
    for overscan in 0..6usize {
        for count in [0usize, 1, 3, 10, 500] {
            let mut w = RowWindow::new(WindowOptions::new(count, |_| 50).with_overscan(overscan));
            w.set_viewport_size(120);
            let budget = (120u64.div_ceil(50) as usize) + 1 + 2 * overscan;

            let mut rng = Lcg::new(7);
            let mut items = Vec::new();
            for _ in 0..200 {
                let offset = rng.gen_range_u64(0, w.total_size().saturating_add(200) + 1);
                w.set_scroll_offset(offset);
                w.collect_virtual_items(&mut items);
                assert!(items.len() <= count);
                assert!(items.len() <= budget);
            }
        }
    }
}

#[test]
fn emitted_count_at_aligned_offsets_needs_no_slack() {
    // At row-aligned offsets the bound is exactly ceil(v / s) + 2 * overscan.
    for overscan in 0..6usize {
        let mut w = RowWindow::new(WindowOptions::new(500, |_| 50).with_overscan(overscan));
        w.set_viewport_size(120);
        let budget = (120u64.div_ceil(50) as usize) + 2 * overscan;

        let mut items = Vec::new();
        for row in (0..500).step_by(7) {
            w.set_scroll_offset(row as u64 * 50);
            w.collect_virtual_items(&mut items);
            assert!(items.len() <= budget);
        }
    }
}

#[test]
fn emitted_items_overlap_viewport_or_lie_within_overscan() {
    let overscan = 2usize;
    let mut rng = Lcg::new(42);
    let sizes: Vec<u32> = (0..300).map(|_| rng.gen_range_u32(1, 120)).collect();
    let w = window_from_sizes(&sizes, overscan);

    let total = w.total_size();
    let view = 250u32;
    let mut items = Vec::new();
    for _ in 0..500 {
        let offset = rng.gen_range_u64(0, total.saturating_sub(view as u64) + 1);
        let visible = expected_visible_range(&sizes, offset, view);
        w.collect_virtual_items_for(offset, view, &mut items);
        for it in &items {
            let overlaps = it.start < offset.saturating_add(view as u64) && it.end() > offset;
            let near = it.index + overscan >= visible.start_index
                && it.index < visible.end_index + overscan;
            assert!(overlaps || near, "item {it:?} outside window at offset {offset}");
        }
    }
}

#[test]
fn randomized_against_linear_scan_oracle() {
    let mut rng = Lcg::new(0xDECAF);
    for _ in 0..50 {
        let count = rng.gen_range_usize(1, 200);
        let sizes: Vec<u32> = (0..count).map(|_| rng.gen_range_u32(1, 90)).collect();
        let w = window_from_sizes(&sizes, rng.gen_range_usize(0, 4));

        assert_eq!(w.total_size(), expected_total(&sizes));
        for i in 0..count {
            assert_eq!(w.item_start(i), Some(expected_start(&sizes, i)));
            assert_eq!(w.item_size(i), Some(sizes[i]));
        }
        assert_eq!(w.item_start(count), None);

        let total = expected_total(&sizes);
        for _ in 0..100 {
            let offset = rng.gen_range_u64(0, total + 50);
            assert_eq!(w.index_at_offset(offset), expected_index_at(&sizes, offset));

            let view = rng.gen_range_u32(1, 300);
            assert_eq!(
                w.visible_range_for(offset, view),
                expected_visible_range(&sizes, offset, view),
                "sizes={sizes:?} offset={offset} view={view}"
            );
        }
    }
}

#[test]
fn measure_invalidates_offsets_at_and_after_changed_row() {
    let mut w = RowWindow::new(WindowOptions::new(10, |_| 50));
    assert_eq!(w.item_start(4), Some(200));

    w.measure(3, 80);

    // Rows before the change keep their offsets; later rows shift by +30.
    assert_eq!(w.item_start(3), Some(150));
    assert_eq!(w.item_start(4), Some(230));
    assert_eq!(w.item_start(9), Some(480));
    assert_eq!(w.total_size(), 530);
    assert!(w.is_measured(3));
    assert!(!w.is_measured(4));
}

#[test]
fn measure_out_of_range_is_ignored() {
    let mut w = RowWindow::new(WindowOptions::new(3, |_| 50));
    w.measure(3, 80);
    assert_eq!(w.total_size(), 150);
    assert!(!w.is_measured(3));
}

#[test]
fn set_count_preserves_existing_sizes_and_appends_estimates() {
    let mut w = RowWindow::new(WindowOptions::new(2, |_| 1));
    w.measure(0, 10);
    assert_eq!(w.total_size(), 11);

    w.set_count(4);
    assert_eq!(w.item_size(0), Some(10));
    assert_eq!(w.item_size(1), Some(1));
    assert_eq!(w.item_size(2), Some(1));
    assert_eq!(w.item_size(3), Some(1));
    assert_eq!(w.total_size(), 13);

    w.set_count(1);
    assert_eq!(w.item_size(0), Some(10));
    assert_eq!(w.item_size(1), None);
    assert_eq!(w.total_size(), 10);
}

#[test]
fn set_count_to_zero_then_grow_is_well_defined() {
    let mut w = RowWindow::new(WindowOptions::new(3, |_| 2));
    assert_eq!(w.total_size(), 6);

    w.set_count(0);
    assert_eq!(w.total_size(), 0);
    assert_eq!(w.index_at_offset(0), None);
    assert!(w.virtual_range().is_empty());

    w.set_count(2);
    assert_eq!(w.total_size(), 4);
    assert_eq!(w.index_at_offset(0), Some(0));
    assert_eq!(w.index_at_offset(2), Some(1));
}

#[test]
fn set_estimate_size_reestimates_unmeasured_rows_only() {
    let mut w = RowWindow::new(WindowOptions::new(4, |_| 10));
    w.measure(1, 25);
    assert_eq!(w.total_size(), 55);

    w.set_estimate_size(|_| 20);
    assert_eq!(w.item_size(0), Some(20));
    assert_eq!(w.item_size(1), Some(25));
    assert_eq!(w.item_size(2), Some(20));
    assert_eq!(w.total_size(), 85);

    w.reset_measurements();
    assert_eq!(w.item_size(1), Some(20));
    assert_eq!(w.total_size(), 80);
}

#[test]
fn variable_sizes_use_binary_search_semantics() {
    let sizes = [10u32, 0, 30, 5, 100];
    let w = window_from_sizes(&sizes, 0);

    assert_eq!(w.index_at_offset(0), Some(0));
    assert_eq!(w.index_at_offset(9), Some(0));
    // A zero-size row never covers an offset; its successor starts there too.
    assert_eq!(w.index_at_offset(10), Some(2));
    assert_eq!(w.index_at_offset(39), Some(2));
    assert_eq!(w.index_at_offset(40), Some(3));
    assert_eq!(w.index_at_offset(45), Some(4));
    // Past the end clamps to the last row.
    assert_eq!(w.index_at_offset(1_000), Some(4));
}

#[test]
fn collect_virtual_items_matches_for_each() {
    let mut rng = Lcg::new(99);
    let sizes: Vec<u32> = (0..64).map(|_| rng.gen_range_u32(1, 40)).collect();
    let mut w = window_from_sizes(&sizes, 2);
    w.set_viewport_and_scroll(120, 333);

    let mut collected = Vec::new();
    w.collect_virtual_items(&mut collected);

    let mut emitted = Vec::new();
    w.for_each_virtual_item(|it| emitted.push(it));

    assert_eq!(collected, emitted);
    assert!(!collected.is_empty());
}

#[test]
fn options_builder_applies_initial_state() {
    let w = RowWindow::new(
        WindowOptions::new(100, |_| 10)
            .with_overscan(3)
            .with_initial_viewport(50)
            .with_initial_offset(200),
    );
    assert_eq!(w.viewport_size(), 50);
    assert_eq!(w.scroll_offset(), 200);
    assert_eq!(w.overscan(), 3);
    assert_eq!(
        w.visible_range(),
        VirtualRange {
            start_index: 20,
            end_index: 25
        }
    );
}
