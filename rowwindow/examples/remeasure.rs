// Example: dynamic remeasurement invalidates offsets for later rows.
use rowwindow::{RowWindow, WindowOptions};

fn main() {
    let mut w = RowWindow::new(WindowOptions::new(1_000, |_| 50));
    w.set_viewport_and_scroll(300, 0);

    println!("estimated: total={} row10_start={:?}", w.total_size(), w.item_start(10));

    // A few rows turn out taller than the estimate.
    w.measure(2, 120);
    w.measure(5, 75);

    println!("measured:  total={} row10_start={:?}", w.total_size(), w.item_start(10));

    let mut items = Vec::new();
    w.collect_virtual_items(&mut items);
    for it in &items {
        println!("row {:>3}: start={:>4} size={}", it.index, it.start, it.size);
    }
}
