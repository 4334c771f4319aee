use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use wordfreq_hash::{ChainedTable, ProbedTable, WordTable, DEFAULT_CAPACITY};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

// Zipf-ish word stream: a small vocabulary drawn with a skew toward low ids,
// sized so the probed table stays under half full.
fn words(seed: u64, n: usize) -> Vec<String> {
    lcg(seed)
        .take(n)
        .map(|x| {
            let r = (x >> 33) % 6000;
            let id = r * r / 6000;
            format!("w{:x}", id)
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let stream = words(1, 100_000);
    let mut group = c.benchmark_group("insert");
    group.throughput(Throughput::Elements(stream.len() as u64));
    group.bench_function("chained_100k", |b| {
        b.iter_batched(
            ChainedTable::new,
            |mut t| {
                for w in &stream {
                    t.insert(w);
                }
                black_box(t)
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("probed_100k", |b| {
        b.iter_batched(
            ProbedTable::new,
            |mut t| {
                for w in &stream {
                    t.insert(w);
                }
                black_box(t)
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let stream = words(2, 100_000);
    let mut chained = ChainedTable::with_capacity(DEFAULT_CAPACITY).unwrap();
    let mut probed = ProbedTable::with_capacity(DEFAULT_CAPACITY).unwrap();
    chained.extend_tokens(&stream);
    probed.extend_tokens(&stream);

    let hits = words(3, 10_000);
    let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(|x| format!("m{:x}", x)).collect();

    let mut group = c.benchmark_group("find_count");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("chained_hit", |b| {
        b.iter(|| hits.iter().map(|w| chained.find_count(w)).sum::<u64>())
    });
    group.bench_function("probed_hit", |b| {
        b.iter(|| hits.iter().map(|w| probed.find_count(w)).sum::<u64>())
    });
    group.bench_function("chained_miss", |b| {
        b.iter(|| misses.iter().map(|w| chained.find_count(w)).sum::<u64>())
    });
    group.bench_function("probed_miss", |b| {
        b.iter(|| misses.iter().map(|w| probed.find_count(w)).sum::<u64>())
    });
    group.finish();
}

fn bench_keys(c: &mut Criterion) {
    let mut probed = ProbedTable::new();
    let mut chained = ChainedTable::new();
    let stream = words(4, 50_000);
    probed.extend_tokens(&stream);
    chained.extend_tokens(&stream);

    let mut group = c.benchmark_group("keys");
    group.bench_function("chained", |b| b.iter(|| black_box(chained.keys().count())));
    group.bench_function("probed", |b| b.iter(|| black_box(probed.keys().count())));
    group.finish();
}

criterion_group!(benches, bench_insert, bench_find, bench_keys);
criterion_main!(benches);
