//! # Number Window
//! Bounded, deduplicated sliding window over the numbers seen so far.
//!
//! One `NumberWindow` is shared by every request handler. All mutation goes
//! through [`NumberWindow::merge`], which runs the whole snapshot + union +
//! truncate + store sequence under a single lock, so concurrent requests
//! serialize on the merge and every outcome is internally consistent.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

/// Thread-safe window of the most recently seen unique numbers.
#[derive(Debug)]
pub struct NumberWindow {
    inner: Mutex<Inner>,
    capacity: usize,
}

#[derive(Debug)]
struct Inner {
    /// Stored values, oldest at the front.
    values: VecDeque<i64>,
}

/// Result of one [`NumberWindow::merge`] call, captured in one critical
/// section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Window contents immediately before this merge.
    pub previous: Vec<i64>,
    /// Trailing positional suffix of the new window, `min(batch len,
    /// window len)` long.
    ///
    /// Positional on purpose: when the batch repeats values the window
    /// already holds, this suffix can include elements that predate the
    /// batch.
    pub current: Vec<i64>,
    /// Full window contents after the merge.
    pub window: Vec<i64>,
    /// Values appended by this merge.
    pub added: usize,
    /// Values evicted from the front to respect capacity.
    pub evicted: usize,
}

impl NumberWindow {
    /// Create an empty window holding at most `capacity` values (min 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                values: VecDeque::new(),
            }),
            capacity: capacity.max(1),
        }
    }

    /// Merge one fetched batch into the window.
    ///
    /// The union keeps first-encounter order across (window, then batch):
    /// existing members keep their relative order, unseen batch values are
    /// appended in batch order, and any value already present — in the
    /// window or earlier in the batch — is skipped. If the union exceeds
    /// capacity, the oldest values fall off the front.
    ///
    /// Never fails; an empty batch leaves the window unchanged and returns
    /// an empty `current`.
    pub fn merge(&self, batch: &[i64]) -> MergeOutcome {
        let mut inner = self.inner.lock().expect("window mutex poisoned");

        let previous: Vec<i64> = inner.values.iter().copied().collect();

        // Membership via a seen-set seeded from the window: one hash lookup
        // per batch element instead of a deque scan.
        let mut seen: HashSet<i64> = inner.values.iter().copied().collect();
        let mut added = 0usize;
        for &value in batch {
            if seen.insert(value) {
                inner.values.push_back(value);
                added += 1;
            }
        }

        let mut evicted = 0usize;
        while inner.values.len() > self.capacity {
            inner.values.pop_front();
            evicted += 1;
        }

        let window: Vec<i64> = inner.values.iter().copied().collect();
        let suffix = batch.len().min(window.len());
        let current = window[window.len() - suffix..].to_vec();

        MergeOutcome {
            previous,
            current,
            window,
            added,
            evicted,
        }
    }

    /// Current window contents, oldest first.
    pub fn snapshot(&self) -> Vec<i64> {
        let inner = self.inner.lock().expect("window mutex poisoned");
        inner.values.iter().copied().collect()
    }

    /// Number of values currently held.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("window mutex poisoned")
            .values
            .len()
    }

    /// `true` while no merge has stored anything yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of values the window retains.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
