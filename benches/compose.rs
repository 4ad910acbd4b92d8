//! Benchmarks for sticky grid composition.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_possible_truncation)]

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stickygrid::layout::{extract_window, MountOrder};
use stickygrid::render::{
    mount_rectangle, to_html, ColumnNameHeader, CompositorCache, CompositorKey, Compositor,
    HostProps, ValueCell,
};
use stickygrid::{GridProps, ItemData, StickyColumns};

fn props(rows: u32, columns: u32) -> GridProps {
    let names: Vec<String> = (0..columns).map(|c| format!("col{c}")).collect();
    let data: Vec<serde_json::Value> = (1..=rows)
        .map(|r| serde_json::Value::from((0..columns).map(|c| r * 1000 + c).collect::<Vec<_>>()))
        .collect();
    let json = serde_json::json!({
        "height": 800,
        "width": 1200,
        "numberOfStickiedColumns": 1,
        "rowCount": rows,
        "columnCount": columns,
        "itemData": { "columnNames": names, "filteredData": data },
    });
    GridProps::from_json(&json.to_string()).expect("Failed to build props")
}

fn compositor(props: &GridProps, mount_order: MountOrder) -> Compositor<ItemData> {
    Compositor::new(
        Rc::new(ValueCell),
        Rc::new(ColumnNameHeader),
        props.column_width_table().into_shared(),
        props.row_height_table().into_shared(),
        StickyColumns::One,
    )
    .with_mount_order(mount_order)
}

/// Compose for growing mounted windows
fn bench_compose(c: &mut Criterion) {
    let props = props(500, 40);
    let host = HostProps::with_scroll_height(props.content_height());
    let mut group = c.benchmark_group("compose");

    for (rows, columns) in [(20, 8), (60, 16), (120, 40)] {
        let mounted = mount_rectangle(&props, 100..=100 + rows - 1, 0..=columns - 1)
            .expect("Failed to mount");
        group.throughput(Throughput::Elements(mounted.len() as u64));
        for order in [MountOrder::Unspecified, MountOrder::ScanOrder] {
            let comp = compositor(&props, order);
            group.bench_with_input(
                BenchmarkId::new(format!("{order:?}"), format!("{rows}x{columns}")),
                &mounted,
                |b, mounted| {
                    b.iter(|| {
                        comp.compose(black_box(mounted), &host, &props.item_data)
                            .expect("Failed to compose")
                    })
                },
            );
        }
    }
    group.finish();
}

/// Window extraction alone
fn bench_extract_window(c: &mut Criterion) {
    let props = props(200, 40);
    let mounted = mount_rectangle(&props, 0..=119, 0..=39).expect("Failed to mount");
    c.bench_function("extract_window_4800", |b| {
        b.iter(|| extract_window(black_box(&mounted)))
    });
}

/// Repeated renders through the cache, as on scroll
fn bench_cached_render_to_html(c: &mut Criterion) {
    let props = props(500, 20);
    let key = CompositorKey::of(&compositor(&props, MountOrder::Unspecified));
    let mounted = mount_rectangle(&props, 40..=79, 0..=11).expect("Failed to mount");
    let host = HostProps::with_scroll_height(props.content_height());
    let mut cache = CompositorCache::new();

    c.bench_function("cached_render_to_html", |b| {
        b.iter(|| {
            let (grid, _) = cache
                .compose_with_metrics(&key, black_box(&mounted), &host, &props.item_data)
                .expect("Failed to compose");
            to_html(&grid.into_node())
        })
    });
}

criterion_group!(
    benches,
    bench_compose,
    bench_extract_window,
    bench_cached_render_to_html
);
criterion_main!(benches);
