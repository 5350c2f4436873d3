//! Integration test: element lifetimes across growth, shifts and unwinds.
//!
//! Every value stored through a `DropLedger` must be dropped exactly once,
//! whatever path removed it from the vector.

use std::panic::{catch_unwind, AssertUnwindSafe};

use ferrovec_buffer::Vector;
use ferrovec_test_utils::{DropLedger, Tracked};

fn tracked_vector(ledger: &DropLedger, n: u32) -> Vector<Tracked<u32>> {
    (0..n).map(|i| ledger.track(i)).collect()
}

#[test]
fn growth_moves_without_dropping() {
    let ledger = DropLedger::new();
    let mut v = Vector::new();
    for i in 0..100 {
        v.push(ledger.track(i));
    }
    assert_eq!(ledger.dropped(), 0);
    assert_eq!(ledger.live(), 100);
    drop(v);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn shifts_preserve_values_and_ownership() {
    let ledger = DropLedger::new();
    let mut v = tracked_vector(&ledger, 5);
    v.insert(2, ledger.track(99));
    let values: Vec<u32> = v.iter().map(|t| **t).collect();
    assert_eq!(values, vec![0, 1, 99, 2, 3, 4]);
    assert_eq!(ledger.dropped(), 0);

    v.erase(0);
    assert_eq!(ledger.dropped(), 1);
    let removed = v.remove(1);
    assert_eq!(*removed.value(), 99);
    assert_eq!(ledger.dropped(), 1);
    drop(removed);
    assert_eq!(ledger.live(), 4);
}

#[test]
fn truncate_clear_and_pop_drop_each_once() {
    let ledger = DropLedger::new();
    let mut v = tracked_vector(&ledger, 10);
    v.truncate(7);
    assert_eq!(ledger.dropped(), 3);
    v.pop();
    assert_eq!(ledger.dropped(), 4);
    v.resize_with(3, || ledger.track(0));
    assert_eq!(ledger.dropped(), 7);
    v.clear();
    assert_eq!(ledger.live(), 0);
    assert_eq!(v.capacity(), 10);
}

#[test]
fn clone_copies_every_element() {
    let ledger = DropLedger::new();
    let v = tracked_vector(&ledger, 6);
    let copy = v.clone();
    assert_eq!(ledger.cloned(), 6);
    assert_eq!(copy, v);
    drop(v);
    assert_eq!(ledger.live(), 6);
    drop(copy);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn panicking_clone_drops_partial_copy() {
    let ledger = DropLedger::with_clone_budget(2);
    let v = tracked_vector(&ledger, 4);
    let result = catch_unwind(AssertUnwindSafe(|| v.clone()));
    assert!(result.is_err());
    assert_eq!(ledger.live(), 4);
    drop(v);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn panicking_fill_keeps_constructed_prefix() {
    let ledger = DropLedger::new();
    let mut v: Vector<Tracked<u32>> = Vector::new();
    let mut calls = 0;
    let result = catch_unwind(AssertUnwindSafe(|| {
        v.resize_with(5, || {
            calls += 1;
            assert!(calls < 3, "fill failed");
            ledger.track(calls)
        });
    }));
    assert!(result.is_err());
    assert_eq!(v.len(), 2);
    assert_eq!(v.capacity(), 5);
    assert_eq!(ledger.live(), 2);
    drop(v);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn into_iter_drops_unconsumed_tail() {
    let ledger = DropLedger::new();
    let v = tracked_vector(&ledger, 5);
    let mut it = v.into_iter();
    let first = it.next();
    let last = it.next_back();
    assert_eq!(ledger.dropped(), 0);
    drop(it);
    assert_eq!(ledger.live(), 2);
    drop((first, last));
    assert_eq!(ledger.live(), 0);
}

#[test]
fn take_transfers_ownership() {
    let ledger = DropLedger::new();
    let mut source = tracked_vector(&ledger, 3);
    let dest = source.take();
    drop(source);
    assert_eq!(ledger.live(), 3);
    drop(dest);
    assert_eq!(ledger.live(), 0);
}
