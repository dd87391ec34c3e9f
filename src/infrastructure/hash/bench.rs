use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

// Import the hash functions from the main crate
use contact_table::infrastructure::hash::{bucket_index, code_point_sum};

// Generate a random string of specified length
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    let mut s = String::with_capacity(length);

    for _ in 0..length {
        let idx = rng.gen_range(0..CHARSET.len());
        s.push(CHARSET[idx] as char);
    }

    s
}

// Benchmark the hash over strings of increasing length
pub fn bench_string_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("CodePointSum");

    for length in [10, 100, 1000] {
        let s = generate_random_string(length);
        group.bench_function(format!("len_{}", length), |b| {
            b.iter(|| code_point_sum(black_box(&s)))
        });
    }

    group.finish();
}

// Benchmark the hash on contact-like names, reduced to a bucket index
pub fn bench_bucket_index(c: &mut Criterion) {
    let names: Vec<String> = (0..1000).map(|i| format!("contact_{}", i)).collect();

    c.bench_function("bucket_index_1000_names", |b| {
        b.iter(|| {
            for name in &names {
                black_box(bucket_index(black_box(name), 10));
            }
        })
    });
}

criterion_group!(benches, bench_string_lengths, bench_bucket_index);
criterion_main!(benches);
