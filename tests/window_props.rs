// tests/window_props.rs
//
// Contract properties of the window merge, exercised directly on
// `NumberWindow` (no HTTP). Randomized batches are seeded for determinism.

use std::sync::Arc;
use std::thread;

use rand::{rngs::StdRng, Rng, SeedableRng};

use number_window_service::average::{average, format_average};
use number_window_service::window::NumberWindow;

/// One merge computed by hand: union preserving first-encounter order,
/// then eviction from the front down to `capacity`.
fn replay_merge(previous: &[i64], batch: &[i64], capacity: usize) -> Vec<i64> {
    let mut values = previous.to_vec();
    for &v in batch {
        if !values.contains(&v) {
            values.push(v);
        }
    }
    if values.len() > capacity {
        values.drain(..values.len() - capacity);
    }
    values
}

#[test]
fn merging_the_same_batch_twice_adds_nothing() {
    let w = NumberWindow::with_capacity(10);
    let batch = [4, 8, 15, 16, 23, 42];

    let first = w.merge(&batch);
    assert_eq!(first.added, batch.len());

    let second = w.merge(&batch);
    assert_eq!(second.added, 0, "values must not be re-added");
    assert_eq!(second.window, first.window);
}

#[test]
fn capacity_bound_holds_for_random_merge_sequences() {
    let mut rng = StdRng::seed_from_u64(42);

    for capacity in [1usize, 3, 10] {
        let w = NumberWindow::with_capacity(capacity);
        for _ in 0..200 {
            let len = rng.random_range(0..8);
            let batch: Vec<i64> = (0..len).map(|_| rng.random_range(-25..25)).collect();
            let out = w.merge(&batch);

            assert!(
                out.window.len() <= capacity,
                "len {} exceeded capacity {capacity}",
                out.window.len()
            );
            assert_eq!(out.window.len(), w.len());

            // Set semantics: no value may appear twice.
            let mut sorted = out.window.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), out.window.len(), "window holds a duplicate");
        }
    }
}

#[test]
fn concurrent_merges_replay_serially_from_their_own_snapshots() {
    const CAPACITY: usize = 5;
    let w = Arc::new(NumberWindow::with_capacity(CAPACITY));

    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            let w = Arc::clone(&w);
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(42 + t);
                let (mut added, mut evicted) = (0usize, 0usize);

                for _ in 0..200 {
                    let len = rng.random_range(0..8);
                    let batch: Vec<i64> = (0..len).map(|_| rng.random_range(-25..25)).collect();

                    let out = w.merge(&batch);

                    // Whatever interleaving happened, the outcome must look
                    // like one serial merge applied to its own snapshot.
                    assert_eq!(
                        out.window,
                        replay_merge(&out.previous, &batch, CAPACITY),
                        "window does not replay from this merge's own previous"
                    );

                    assert!(out.window.len() <= CAPACITY);
                    let mut sorted = out.window.clone();
                    sorted.sort_unstable();
                    sorted.dedup();
                    assert_eq!(sorted.len(), out.window.len(), "window holds a duplicate");

                    let suffix = batch.len().min(out.window.len());
                    assert_eq!(out.current, out.window[out.window.len() - suffix..].to_vec());

                    added += out.added;
                    evicted += out.evicted;
                }

                (added, evicted)
            })
        })
        .collect();

    let (mut total_added, mut total_evicted) = (0usize, 0usize);
    for h in handles {
        let (a, e) = h.join().expect("merge thread panicked");
        total_added += a;
        total_evicted += e;
    }

    // Every push and pop happened under the lock, so the tallies balance
    // out to the final length.
    assert_eq!(w.len(), total_added - total_evicted);
}

#[test]
fn existing_elements_keep_relative_order_when_only_new_values_arrive() {
    let w = NumberWindow::with_capacity(10);
    w.merge(&[10, 20, 30]);

    let out = w.merge(&[40, 50]);
    assert_eq!(out.window, vec![10, 20, 30, 40, 50]);
}

#[test]
fn empty_merge_is_a_complete_no_op() {
    let w = NumberWindow::with_capacity(10);
    w.merge(&[7, 11]);

    let out = w.merge(&[]);
    assert_eq!(out.previous, vec![7, 11]);
    assert_eq!(out.window, vec![7, 11]);
    assert!(out.current.is_empty());
    assert_eq!(w.snapshot(), vec![7, 11]);
}

#[test]
fn overflow_evicts_the_two_oldest_of_five() {
    let w = NumberWindow::with_capacity(3);
    let out = w.merge(&[1, 2, 3, 4, 5]);
    assert_eq!(out.window, vec![3, 4, 5]);
}

#[test]
fn average_of_the_even_style_sample_formats_to_18() {
    let w = NumberWindow::with_capacity(10);
    let out = w.merge(&[4, 8, 15, 16, 23, 42]);
    assert_eq!(format_average(average(&out.window)), "18.00");
}
