//! Telemetry hook.
//!
//! The parser reports every construct it builds to a [`TypeObserver`]. The
//! hook is fire-and-forget: it cannot fail and cannot change the parse.
//! Callers that ship usage metrics somewhere plug in their own observer;
//! [`TypeCounter`] is an in-memory one for statistics and tests.

use conjure_ir::DescriptorKind;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

#[cfg(test)]
mod tests;

/// Receives one notification per successfully built descriptor node.
///
/// Notifications arrive bottom-up: the inner types of `list<map<a, b>>`
/// are reported before the list itself. An alternative that falls through
/// reports nothing, but a parse that fails may already have reported the
/// nodes it completed before the error.
pub trait TypeObserver: Send + Sync {
    fn type_parsed(&self, kind: DescriptorKind);
}

/// Observer that ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl TypeObserver for NoopObserver {
    #[inline]
    fn type_parsed(&self, _kind: DescriptorKind) {}
}

/// Shared no-op instance, so parsers without an observer can be `'static`.
pub(crate) static NOOP: NoopObserver = NoopObserver;

/// Counts parsed nodes per kind.
///
/// Safe to share between threads parsing concurrently.
#[derive(Debug, Default)]
pub struct TypeCounter {
    counts: Mutex<FxHashMap<DescriptorKind, u64>>,
}

impl TypeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes of `kind` seen so far.
    pub fn get(&self, kind: DescriptorKind) -> u64 {
        self.counts.lock().get(&kind).copied().unwrap_or(0)
    }

    /// Number of nodes seen so far, of any kind.
    pub fn total(&self) -> u64 {
        self.counts.lock().values().sum()
    }

    /// Non-zero counts, in declaration order of [`DescriptorKind`].
    pub fn snapshot(&self) -> Vec<(DescriptorKind, u64)> {
        let counts = self.counts.lock();
        DescriptorKind::ALL
            .iter()
            .filter_map(|kind| counts.get(kind).map(|&n| (*kind, n)))
            .collect()
    }

    pub fn reset(&self) {
        self.counts.lock().clear();
    }
}

impl TypeObserver for TypeCounter {
    fn type_parsed(&self, kind: DescriptorKind) {
        *self.counts.lock().entry(kind).or_insert(0) += 1;
    }
}
