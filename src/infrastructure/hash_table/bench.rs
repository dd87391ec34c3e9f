use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use rand::Rng;

// Import the hash table from the crate
use contact_table::HashTable;

// Test configuration
const CONTACT_COUNT: usize = 10_000;

// Generate random contact names and numbers
fn generate_contacts(count: usize) -> Vec<(String, String)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let name = format!("contact_{}_{}", i, rng.gen_range(0..u32::MAX));
            let number = format!(
                "{:03}-{:03}-{:04}",
                rng.gen_range(0..1000),
                rng.gen_range(0..1000),
                rng.gen_range(0..10000)
            );
            (name, number)
        })
        .collect()
}

// Benchmark insertion for several bucket counts
pub fn bench_insert(c: &mut Criterion) {
    let contacts = generate_contacts(CONTACT_COUNT);
    let mut group = c.benchmark_group("Insert");

    for bucket_count in [10, 1_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(bucket_count),
            &bucket_count,
            |b, &bucket_count| {
                b.iter(|| {
                    let mut table = HashTable::new(bucket_count).unwrap();
                    for (name, number) in &contacts {
                        table.insert(name.as_str(), number.as_str());
                    }
                    table
                });
            },
        );
    }

    group.finish();
}

// Benchmark read-heavy workloads (90% searches, 10% updates)
pub fn bench_read_heavy(c: &mut Criterion) {
    let contacts = generate_contacts(CONTACT_COUNT);
    let mut order: Vec<usize> = (0..CONTACT_COUNT).collect();
    order.shuffle(&mut rand::thread_rng());

    let mut group = c.benchmark_group("ReadHeavy");

    for bucket_count in [10, 1_000, 100_000] {
        let mut table = HashTable::new(bucket_count).unwrap();
        for (name, number) in &contacts {
            table.insert(name.as_str(), number.as_str());
        }

        group.bench_function(BenchmarkId::from_parameter(bucket_count), |b| {
            b.iter(|| {
                for (i, &idx) in order.iter().enumerate() {
                    let (name, _) = &contacts[idx];
                    if i % 10 == 0 {
                        table.insert(name.as_str(), "000-000-0000");
                    } else {
                        assert!(black_box(table.search(name)).is_some());
                    }
                }
            });
        });
    }

    group.finish();
}

// Benchmark misses against a populated table
pub fn bench_search_miss(c: &mut Criterion) {
    let contacts = generate_contacts(CONTACT_COUNT);
    let mut table = HashTable::new(1_000).unwrap();
    for (name, number) in &contacts {
        table.insert(name.as_str(), number.as_str());
    }

    c.bench_function("SearchMiss", |b| {
        b.iter(|| black_box(table.search(black_box("not_a_contact"))))
    });
}

// Export the benchmark group for criterion
criterion_group!(benches, bench_insert, bench_read_heavy, bench_search_miss);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
