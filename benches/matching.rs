use comatch::{CommunityCollection, MatchConfig, match_communities};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Deterministic synthetic partition: `count` communities of up to
/// `max_size` members drawn from a shared identifier universe, so some pairs
/// are identical, some nested, and some merely similar.
fn synthetic_partition(count: usize, max_size: usize, offset: usize) -> CommunityCollection {
    let lists: Vec<Vec<String>> = (0..count)
        .map(|i| {
            let size = 2 + (i * 7 + offset) % max_size;
            (0..size)
                .map(|j| format!("M{:04}", (i * 3 + j + offset) % (count * 2)))
                .collect()
        })
        .collect();
    CommunityCollection::from_member_lists(lists)
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_communities");

    for &count in &[50usize, 200, 500] {
        let list1 = synthetic_partition(count, 12, 0);
        let list2 = synthetic_partition(count, 12, 5);
        group.throughput(Throughput::Elements((count * count) as u64));

        let seq_cfg = MatchConfig::new().with_size_tolerance(1.0);
        group.bench_function(format!("sequential_{count}"), |b| {
            b.iter(|| {
                match_communities(black_box(&list1), black_box(&list2), &seq_cfg)
                    .expect("valid config")
            })
        });

        let par_cfg = MatchConfig::new().with_size_tolerance(1.0).with_parallel(true);
        group.bench_function(format!("parallel_{count}"), |b| {
            b.iter(|| {
                match_communities(black_box(&list1), black_box(&list2), &par_cfg)
                    .expect("valid config")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
