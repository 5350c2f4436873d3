//! Reusable element fixtures for container lifecycle tests.
//!
//! - [`DropLedger`]: shared counters for construction, cloning and drops.
//! - [`Tracked`]: a value that reports its lifecycle to a ledger and can
//!   be made to panic on clone after a budget runs out.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Counts {
    created: AtomicUsize,
    cloned: AtomicUsize,
    dropped: AtomicUsize,
    clone_budget: AtomicUsize,
}

/// Shared bookkeeping for [`Tracked`] values.
///
/// Every `Tracked` created from a ledger bumps `created`, every clone bumps
/// `created` and `cloned`, and every drop bumps `dropped`. A container that
/// manages lifetimes correctly ends a test with `live() == 0`.
///
/// Uses `AtomicUsize` so fixtures stay `Send` and `Sync`.
#[derive(Clone)]
pub struct DropLedger {
    counts: Arc<Counts>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::with_clone_budget(usize::MAX)
    }

    /// A ledger whose tracked values panic on the clone after `budget`
    /// successful clones.
    pub fn with_clone_budget(budget: usize) -> Self {
        let counts = Counts::default();
        counts.clone_budget.store(budget, Ordering::SeqCst);
        Self {
            counts: Arc::new(counts),
        }
    }

    /// Wrap `value` so its lifecycle is recorded here.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.counts.created.fetch_add(1, Ordering::SeqCst);
        Tracked {
            value,
            ledger: self.clone(),
        }
    }

    pub fn created(&self) -> usize {
        self.counts.created.load(Ordering::SeqCst)
    }

    pub fn cloned(&self) -> usize {
        self.counts.cloned.load(Ordering::SeqCst)
    }

    pub fn dropped(&self) -> usize {
        self.counts.dropped.load(Ordering::SeqCst)
    }

    /// Values created but not yet dropped.
    ///
    /// # Panics
    ///
    /// Panics if more values were dropped than created, which means
    /// something was dropped twice.
    pub fn live(&self) -> usize {
        let created = self.created();
        let dropped = self.dropped();
        assert!(dropped <= created, "double drop: {dropped} drops for {created} values");
        created - dropped
    }

    fn take_clone_permit(&self) -> bool {
        self.counts
            .clone_budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok()
    }
}

impl Default for DropLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DropLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropLedger")
            .field("created", &self.created())
            .field("cloned", &self.cloned())
            .field("dropped", &self.dropped())
            .finish()
    }
}

/// A value whose construction, clones and drop are counted by a
/// [`DropLedger`].
pub struct Tracked<T> {
    value: T,
    ledger: DropLedger,
}

impl<T> Tracked<T> {
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        assert!(self.ledger.take_clone_permit(), "clone budget exhausted");
        self.ledger.counts.cloned.fetch_add(1, Ordering::SeqCst);
        self.ledger.track(self.value.clone())
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.ledger.counts.dropped.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
