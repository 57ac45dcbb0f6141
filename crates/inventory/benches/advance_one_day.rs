use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASSES, Inventory, Item, SULFURAS};

fn mixed_inventory(size: usize) -> Inventory {
    let names = [
        "+5 Dexterity Vest",
        AGED_BRIE,
        SULFURAS,
        BACKSTAGE_PASSES,
        "Conjured Mana Cake",
    ];
    (0..size)
        .map(|i| {
            let name = names[i % names.len()];
            Item::new(name, (i % 40) as i32 - 10, (i % 51) as i32)
        })
        .collect()
}

fn bench_advance_one_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_one_day");

    for size in [100usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched_ref(
                || mixed_inventory(size),
                |inventory| {
                    inventory.advance_one_day();
                    black_box(inventory.len());
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_category_resolution(c: &mut Criterion) {
    c.bench_function("item_new_resolves_category", |b| {
        b.iter(|| Item::new(black_box("Conjured Mana Cake"), 3, 6));
    });
}

criterion_group!(benches, bench_advance_one_day, bench_category_resolution);
criterion_main!(benches);
