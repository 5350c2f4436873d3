//! Proptest strategies for random container operation sequences.
//!
//! Indices in generated [`Op`]s are raw draws; the driver reduces them
//! modulo the current length so every operation is valid when applied.

use proptest::collection::vec;
use proptest::prelude::*;

/// One mutation applied to both a container under test and a model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Push(i32),
    Pop,
    Insert { index: usize, value: i32 },
    Erase { index: usize },
    Resize(usize),
    Reserve(usize),
    ShrinkToFit,
    Clear,
}

impl Op {
    /// Reduce a raw index draw onto `[0, len]` for inserts.
    pub fn insert_slot(raw: usize, len: usize) -> usize {
        raw % (len + 1)
    }

    /// Reduce a raw index draw onto `[0, len)` for erases. `None` when empty.
    pub fn erase_slot(raw: usize, len: usize) -> Option<usize> {
        (len > 0).then(|| raw % len)
    }
}

/// A single operation. Sizes stay small so shrinking stays readable.
pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
        2 => (any::<usize>(), any::<i32>())
            .prop_map(|(index, value)| Op::Insert { index, value }),
        2 => any::<usize>().prop_map(|index| Op::Erase { index }),
        1 => (0usize..64).prop_map(Op::Resize),
        1 => (0usize..128).prop_map(Op::Reserve),
        1 => Just(Op::ShrinkToFit),
        1 => Just(Op::Clear),
    ]
}

/// A sequence of up to `max_len` operations.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    vec(arb_op(), 0..max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_stay_in_range() {
        assert_eq!(Op::insert_slot(7, 3), 3);
        assert_eq!(Op::insert_slot(5, 0), 0);
        assert_eq!(Op::erase_slot(7, 3), Some(1));
        assert_eq!(Op::erase_slot(7, 0), None);
    }
}
