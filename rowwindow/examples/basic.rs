// Example: minimal usage with a large constant-height list.
use rowwindow::{RowWindow, WindowOptions};

fn main() {
    let mut w = RowWindow::new(WindowOptions::new(1_000_000, |_| 50).with_overscan(5));
    w.set_viewport_and_scroll_clamped(400, 123_456);

    let mut items = Vec::new();
    w.collect_virtual_items(&mut items);
    println!("total_size={}", w.total_size());
    println!("visible_range={:?}", w.visible_range());
    println!("materialized={} rows", items.len());
    println!("first={:?}", items.first());
    println!("last={:?}", items.last());
}
