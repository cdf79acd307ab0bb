//! Identifier allocation scoped to a store

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier generator.
///
/// Hands out decimal string ids (`"9"`, `"10"`, ...) from a counter that
/// only moves forward. [`next_unused`](IdGenerator::next_unused) skips any
/// candidate the caller reports as taken, so an id is never handed out twice
/// as long as the caller checks and inserts under the same lock.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Start counting at `start`
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Start right after the largest numeric id in `existing`
    ///
    /// Non-numeric ids are ignored; they cannot collide with the counter.
    pub fn after<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let max = existing
            .into_iter()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::starting_at(max.saturating_add(1))
    }

    /// Next id for which `taken` returns false
    pub fn next_unused(&self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = self.next.fetch_add(1, Ordering::Relaxed).to_string();
            if !taken(&candidate) {
                return candidate;
            }
            tracing::debug!(id = %candidate, "skipping identifier already in use");
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
