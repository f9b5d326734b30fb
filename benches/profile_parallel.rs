//! Parallel query benchmark to measure concurrent access performance
//!
//! The index is immutable once built and every query takes `&self`, so it can be
//! shared across threads behind an `Arc` with no locking.

use kdbush::KDBush;
use rand::Rng;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Runs `query` for every center on `num_threads` threads at once
fn run_parallel<F>(index: &Arc<KDBush>, centers: &Arc<Vec<(f64, f64)>>, num_threads: usize, query: F) -> Duration
where
    F: Fn(&KDBush, f64, f64, &mut Vec<usize>) + Copy + Send + 'static,
{
    let start = Instant::now();
    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let index = Arc::clone(index);
            let centers = Arc::clone(centers);
            thread::spawn(move || {
                let mut results = Vec::new();
                for &(x, y) in centers.iter() {
                    query(&index, x, y, &mut results);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    start.elapsed()
}

fn report(name: &str, elapsed: Duration, num_threads: usize, num_tests: usize) {
    let total_queries = num_threads * num_tests;
    println!(
        "  {} {} queries (parallel {}×{}):   {:.2}ms ({:.3}µs/query)",
        total_queries,
        name,
        num_threads,
        num_tests,
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1_000_000.0 / total_queries as f64
    );
}

fn main() {
    println!("KDBush Parallel Query Benchmark");
    println!("===============================\n");

    let num_items = 1_000_000;
    let num_tests = 1_000;
    let num_threads = 10;

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    println!("Generating {} random points...", num_items);
    let points: Vec<(f64, f64)> = (0..num_items)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();

    println!("Building index...");
    let build_start = Instant::now();
    let index = Arc::new(KDBush::from_points(points, 64).unwrap());
    println!("  Index built in {:.2}ms\n", build_start.elapsed().as_secs_f64() * 1000.0);

    let centers: Arc<Vec<(f64, f64)>> = Arc::new(
        (0..num_tests)
            .map(|_| (rng.random_range(1.0..99.0), rng.random_range(1.0..99.0)))
            .collect(),
    );

    println!("Profiling (parallel):");
    println!("{}", "-".repeat(40));

    let elapsed = run_parallel(&index, &centers, num_threads, |index, x, y, results| {
        index.query_range(x - 0.5, y - 0.5, x + 0.5, y + 0.5, results);
    });
    report("range", elapsed, num_threads, num_tests);

    let elapsed = run_parallel(&index, &centers, num_threads, |index, x, y, results| {
        index.query_within(x, y, 1.0, results);
    });
    report("radius", elapsed, num_threads, num_tests);
}

/*
cargo bench --bench profile_parallel
*/
