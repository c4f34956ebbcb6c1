//! Benchmarks for picker placement and the open cycle.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dropdown_core::{ManualClock, Rect, Size, StaticLayout};
use dropdown_widgets::{place, scroll_offset, Dropdown, DropdownConfig, Item, PlacementInput};
use std::sync::Arc;

fn bench_place(c: &mut Criterion) {
    let config = DropdownConfig::default();
    let input = PlacementInput::from_config(
        &config,
        Rect::new(16.0, 100.0, 328.0, 64.0),
        Size::new(360.0, 640.0),
        false,
        100,
        Some(57),
    );

    c.bench_function("place", |b| b.iter(|| place(black_box(&input))));
}

fn bench_scroll_offset(c: &mut Criterion) {
    c.bench_function("scroll_offset_override", |b| {
        b.iter(|| scroll_offset(40.0, black_box(1_000), 4, Some(black_box(500)), Some(-2)))
    });
}

fn bench_open_cycle(c: &mut Criterion) {
    let data: Vec<_> = (0..200).map(|i| Some(Item::new(i))).collect();
    let mut layout = StaticLayout::new(Rect::new(16.0, 100.0, 328.0, 64.0), Size::new(360.0, 640.0));

    c.bench_function("open_cycle_200_items", |b| {
        b.iter(|| {
            let clock = Arc::new(ManualClock::new(0));
            let mut dropdown = Dropdown::new(DropdownConfig::default())
                .data(data.clone())
                .with_value(150)
                .clock(clock.clone());
            dropdown.focus();
            dropdown.tick(&mut layout);
            clock.advance(400);
            dropdown.tick(&mut layout);
            black_box(dropdown.opacity())
        })
    });
}

criterion_group!(benches, bench_place, bench_scroll_offset, bench_open_cycle);
criterion_main!(benches);
