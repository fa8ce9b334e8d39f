use criterion::{Criterion, criterion_group, criterion_main};

use volpack::entities::{Bin, Item};
use volpack::packer::{Packer, SortPolicy};

/// Deterministic synthetic instance: a spread of box sizes into a handful of bins.
fn build_packer(n_items: usize) -> Packer {
    let mut packer = Packer::new(SortPolicy::DecreasingVolume);
    for id in 0..4 {
        packer.add_bin(Bin::new(id, 120.0, 100.0, 220.0).unwrap()).unwrap();
    }
    for id in 0..n_items {
        let w = 10.0 + (id % 7) as f32 * 5.0;
        let h = 8.0 + (id % 5) as f32 * 6.0;
        let d = 12.0 + (id % 3) as f32 * 9.0;
        packer.add_item(Item::new(id, w, h, d, None, None).unwrap()).unwrap();
    }
    packer
}

fn packing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for n_items in [50, 200, 500] {
        group.bench_function(format!("{n_items}_items"), |b| {
            b.iter_batched(
                || build_packer(n_items),
                |mut packer| packer.pack().unwrap(),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, packing_benchmark);
criterion_main!(benches);
