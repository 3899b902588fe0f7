//! A fixed-length array whose slots remember every value ever written to them.
//!
//! This module provides the [`crate::UndoArray`] type, the core container of the crate.
//! Each slot owns an independent, growable history of values; writing appends, undoing
//! pops, and the current value of a slot is always the most recent entry of its history.
//! A slot whose history is empty is *uninitialized* and has no current value.
//!
//! # Features
//!
//! - Fixed slot count, chosen at construction (zero is legal)
//! - Per-slot value history with amortized O(1) writes
//! - Undo down to and including the uninitialized state
//! - Deep structural clone and equality over full histories
//! - Structured [`crate::Snapshot`] export for external rendering
//!
//! # Example
//!
//! ```rust
//! use undo_array::UndoArray;
//!
//! let mut ua = UndoArray::new(7);
//! ua.set(2, 'a')?;
//! ua.set(2, 'b')?;
//! assert_eq!(ua.get(2)?, 'b');
//!
//! ua.undo(2)?;
//! assert_eq!(ua.get(2)?, 'a');
//!
//! ua.undo(2)?;
//! assert!(!ua.is_initialized(2)?);
//! # Ok::<(), undo_array::Error>(())
//! ```

use crate::{snapshot::Snapshot, Error, Result};

/// A fixed-length, indexable container in which every slot keeps its complete value history.
///
/// `UndoArray<T>` behaves like an ordinary fixed array of `T` with one addition: every call
/// to [`set`](Self::set) is recorded, and [`undo`](Self::undo) reverts a slot to the value
/// it held before its most recent write. Each slot's history is an independently owned
/// `Vec<T>`, oldest value first, so mutating one slot never reallocates or aliases another.
///
/// The slot count is fixed at construction; there is no resize API. A slot starts out
/// *uninitialized* (empty history) and becomes uninitialized again when its last remaining
/// value is undone. Reading or undoing an uninitialized slot is an error, never a default
/// value.
///
/// Cloning produces a fully independent deep copy, and `==` compares full histories, not
/// just current values: two arrays that hold the same current values but arrived at them
/// through different write sequences compare unequal.
///
/// No internal synchronization is provided. The type is a plain value container; sharing
/// it across threads requires external locking, which the `&self`/`&mut self` receivers
/// make explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoArray<T> {
    /// One history per slot, oldest value first. The outer length is the fixed slot count.
    slots: Vec<Vec<T>>,
}

impl<T> UndoArray<T> {
    /// Creates a new array with `size` slots, all uninitialized.
    ///
    /// A `size` of zero is legal and produces an empty container on which every indexed
    /// operation fails with [`Error::OutOfRange`]. Construction itself cannot fail.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut slots = Vec::with_capacity(size);
        slots.resize_with(size, Vec::new);
        Self { slots }
    }

    /// Returns the fixed slot count of this array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if this array was created with zero slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if the slot at `index` holds at least one value.
    ///
    /// Does not mutate any history; calling it repeatedly yields identical results.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is at or beyond the slot count.
    pub fn is_initialized(&self, index: usize) -> Result<bool> {
        Ok(!self.slot(index)?.is_empty())
    }

    /// Returns the number of values recorded for the slot at `index`.
    ///
    /// A length of zero means the slot is uninitialized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is at or beyond the slot count.
    pub fn history_len(&self, index: usize) -> Result<usize> {
        Ok(self.slot(index)?.len())
    }

    /// Returns a borrowed view of the full history of the slot at `index`, oldest first.
    ///
    /// The borrow ties the returned slice to `self`, so it cannot outlive a later
    /// [`set`](Self::set) or [`undo`](Self::undo) that would invalidate it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is at or beyond the slot count.
    pub fn history(&self, index: usize) -> Result<&[T]> {
        Ok(self.slot(index)?.as_slice())
    }

    /// Appends `value` to the history of the slot at `index`, making it the current value.
    ///
    /// Every prior value of the slot is preserved unchanged: after `k` writes to the same
    /// slot, [`get`](Self::get) returns the `k`-th value and `k - 1` calls to
    /// [`undo`](Self::undo) recover the earlier ones in reverse order. The write is
    /// amortized O(1); the slot's backing storage grows geometrically rather than being
    /// copied on every call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is at or beyond the slot count. On error
    /// the slot's history is left exactly as it was.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.slot_mut(index)?.push(value);
        Ok(())
    }

    /// Removes the most recent value of the slot at `index`, exposing the previous one.
    ///
    /// If the removed value was the only one recorded, the slot becomes uninitialized
    /// again, observable via [`is_initialized`](Self::is_initialized).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is at or beyond the slot count, or
    /// [`Error::Uninitialized`] if the slot has no value to undo. On error the slot's
    /// history is left exactly as it was.
    pub fn undo(&mut self, index: usize) -> Result<()> {
        let history = self.slot_mut(index)?;
        if history.pop().is_none() {
            return Err(Error::Uninitialized(index));
        }
        Ok(())
    }

    /// Validates `index` and returns the slot's history.
    fn slot(&self, index: usize) -> Result<&Vec<T>> {
        self.slots.get(index).ok_or(Error::OutOfRange {
            index,
            size: self.slots.len(),
        })
    }

    /// Validates `index` and returns the slot's history for mutation.
    fn slot_mut(&mut self, index: usize) -> Result<&mut Vec<T>> {
        let size = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, size })
    }
}

impl<T: Clone> UndoArray<T> {
    /// Returns the current (most recently set) value of the slot at `index`.
    ///
    /// The value is returned by value, never by reference, so the result stays valid
    /// across later mutations of the array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is at or beyond the slot count, or
    /// [`Error::Uninitialized`] if the slot holds no value.
    pub fn get(&self, index: usize) -> Result<T> {
        self.slot(index)?
            .last()
            .cloned()
            .ok_or(Error::Uninitialized(index))
    }

    /// Captures the full state of the array as structured presentation data.
    ///
    /// The returned [`Snapshot`] carries the slot count, each slot's history length, and
    /// the complete grid of historical values arranged row-major by history depth, with
    /// explicit absent markers where a slot's history is shorter than the deepest one.
    /// Rendering is left entirely to the caller; the core produces data, not text.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::capture(&self.slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_all_uninitialized() {
        let ua: UndoArray<char> = UndoArray::new(7);
        assert_eq!(ua.len(), 7);
        assert!(!ua.is_empty());
        for i in 0..7 {
            assert_eq!(ua.is_initialized(i), Ok(false));
            assert_eq!(ua.history_len(i), Ok(0));
        }
    }

    #[test]
    fn test_new_zero_size() {
        let ua: UndoArray<i32> = UndoArray::new(0);
        assert_eq!(ua.len(), 0);
        assert!(ua.is_empty());
        assert_eq!(
            ua.is_initialized(0),
            Err(Error::OutOfRange { index: 0, size: 0 })
        );
    }

    #[test]
    fn test_set_then_get() {
        let mut ua = UndoArray::new(3);
        ua.set(1, 42).unwrap();
        assert_eq!(ua.get(1), Ok(42));
        assert_eq!(ua.is_initialized(1), Ok(true));
        assert_eq!(ua.is_initialized(0), Ok(false));
    }

    #[test]
    fn test_set_preserves_history() {
        let mut ua = UndoArray::new(2);
        for v in 1..=5 {
            ua.set(0, v).unwrap();
        }
        assert_eq!(ua.get(0), Ok(5));
        assert_eq!(ua.history_len(0), Ok(5));
        assert_eq!(ua.history(0).unwrap(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_undo_reverts_to_previous() {
        let mut ua = UndoArray::new(1);
        ua.set(0, 'x').unwrap();
        ua.set(0, 'y').unwrap();
        ua.undo(0).unwrap();
        assert_eq!(ua.get(0), Ok('x'));
    }

    #[test]
    fn test_undo_to_uninitialized() {
        let mut ua = UndoArray::new(1);
        ua.set(0, 'x').unwrap();
        ua.undo(0).unwrap();
        assert_eq!(ua.is_initialized(0), Ok(false));
        assert_eq!(ua.get(0), Err(Error::Uninitialized(0)));
    }

    #[test]
    fn test_set_undo_sequence_law() {
        // k sets followed by m <= k undos leaves the (k - m)-th value current.
        let k = 8;
        for m in 0..=k {
            let mut ua = UndoArray::new(1);
            for v in 1..=k {
                ua.set(0, v).unwrap();
            }
            for _ in 0..m {
                ua.undo(0).unwrap();
            }
            if m < k {
                assert_eq!(ua.get(0), Ok(k - m));
            } else {
                assert_eq!(ua.is_initialized(0), Ok(false));
            }
        }
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut ua = UndoArray::new(2);
        ua.set(0, 7).unwrap();
        assert_eq!(ua.get(0), Ok(7));
        assert_eq!(ua.get(0), Ok(7));
        assert_eq!(ua.is_initialized(1), Ok(false));
        assert_eq!(ua.is_initialized(1), Ok(false));
        assert_eq!(ua.history_len(0), Ok(1));
        assert_eq!(ua.history_len(0), Ok(1));
    }

    #[test]
    fn test_out_of_range_errors() {
        let mut ua = UndoArray::new(3);
        let oor = Error::OutOfRange { index: 3, size: 3 };
        assert_eq!(ua.get(3), Err(oor));
        assert_eq!(ua.set(3, 1), Err(oor));
        assert_eq!(ua.undo(3), Err(oor));
        assert_eq!(ua.is_initialized(3), Err(oor));
        assert_eq!(ua.history_len(3), Err(oor));
    }

    #[test]
    fn test_undo_uninitialized_is_logic_error() {
        let mut ua: UndoArray<i32> = UndoArray::new(3);
        assert_eq!(ua.undo(1), Err(Error::Uninitialized(1)));
    }

    #[test]
    fn test_failed_ops_leave_state_unchanged() {
        let mut ua = UndoArray::new(2);
        ua.set(0, 'a').unwrap();
        let before = ua.clone();

        assert!(ua.set(5, 'z').is_err());
        assert!(ua.undo(1).is_err());
        assert!(ua.undo(9).is_err());
        assert_eq!(ua, before);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut ua = UndoArray::new(3);
        ua.set(0, 1).unwrap();
        ua.set(2, 9).unwrap();
        ua.set(2, 10).unwrap();
        ua.undo(2).unwrap();
        assert_eq!(ua.get(0), Ok(1));
        assert_eq!(ua.get(2), Ok(9));
        assert_eq!(ua.is_initialized(1), Ok(false));
    }

    #[test]
    fn test_clone_is_deep_copy() {
        let mut a = UndoArray::new(3);
        a.set(0, 'a').unwrap();
        a.set(1, 'b').unwrap();
        a.set(2, 'c').unwrap();

        let mut b = a.clone();
        assert_eq!(a, b);

        // Mutating the copy must not leak into the original, and vice versa.
        b.set(0, 'z').unwrap();
        assert_eq!(a.get(0), Ok('a'));
        assert_ne!(a, b);

        a.undo(2).unwrap();
        assert_eq!(b.get(2), Ok('c'));
    }

    #[test]
    fn test_assignment_matches_source() {
        let mut t1 = UndoArray::new(3);
        t1.set(0, 'a').unwrap();
        t1.set(1, 'b').unwrap();
        t1.set(2, 'c').unwrap();
        let t2 = t1.clone();
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_equality_is_reflexive_and_symmetric() {
        let mut a = UndoArray::new(2);
        a.set(0, 1).unwrap();
        let b = a.clone();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn test_equality_sees_full_history() {
        // Same current values, different history depth: must compare unequal.
        let mut a = UndoArray::new(1);
        a.set(0, 5).unwrap();

        let mut b = UndoArray::new(1);
        b.set(0, 3).unwrap();
        b.set(0, 5).unwrap();

        assert_eq!(a.get(0), b.get(0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_sees_size() {
        let a: UndoArray<i32> = UndoArray::new(2);
        let b: UndoArray<i32> = UndoArray::new(3);
        assert_ne!(a, b);
    }

    #[test]
    fn test_char_scenario() {
        let mut ua = UndoArray::new(7);
        for i in 0..7 {
            assert_eq!(ua.is_initialized(i), Ok(false));
        }

        ua.set(2, 'a').unwrap();
        assert_eq!(ua.get(2), Ok('a'));
        ua.set(2, 'b').unwrap();
        assert_eq!(ua.get(2), Ok('b'));
        ua.set(4, 'c').unwrap();
        assert_eq!(ua.get(4), Ok('c'));

        ua.undo(2).unwrap();
        assert_eq!(ua.get(2), Ok('a'));
        assert_eq!(ua.get(4), Ok('c'));
        ua.undo(4).unwrap();
        assert_eq!(ua.is_initialized(4), Ok(false));
        assert_eq!(ua.is_initialized(2), Ok(true));
        assert_eq!(ua.get(2), Ok('a'));
    }

    #[test]
    fn test_int_scenario() {
        let mut t1 = UndoArray::new(5);
        t1.set(0, 1).unwrap();
        t1.set(0, 2).unwrap();
        t1.set(0, 2).unwrap();
        t1.set(0, 4).unwrap();
        t1.set(1, 5).unwrap();
        t1.set(4, 6).unwrap();
        t1.set(4, 7).unwrap();
        t1.undo(0).unwrap();
        t1.undo(1).unwrap();
        assert_eq!(t1.get(4), Ok(7));
        assert_eq!(t1.is_initialized(2), Ok(false));
        assert_eq!(t1.get(0), Ok(2));
    }

    #[test]
    fn test_double_scenario() {
        let mut t2 = UndoArray::new(5);
        t2.set(0, 1.3).unwrap();
        t2.set(0, 2.43).unwrap();
        t2.set(0, 3.1415).unwrap();
        t2.set(0, 4.0).unwrap();
        t2.set(1, 5.667).unwrap();
        t2.set(4, 3.1415).unwrap();
        t2.set(4, 7.2).unwrap();
        t2.undo(0).unwrap();
        t2.undo(1).unwrap();
        assert_eq!(t2.get(4), Ok(7.2));
        assert_eq!(t2.is_initialized(2), Ok(false));
        assert_eq!(t2.get(0), Ok(3.1415));
    }

    #[test]
    fn test_float_scenario() {
        let mut t3: UndoArray<f32> = UndoArray::new(5);
        t3.set(0, 1.3).unwrap();
        t3.set(0, 2.43).unwrap();
        t3.set(0, 2.0).unwrap();
        t3.set(0, 4.0).unwrap();
        t3.set(1, 5.667).unwrap();
        t3.set(4, 3.1415).unwrap();
        t3.set(4, 3.0).unwrap();
        t3.undo(0).unwrap();
        t3.undo(1).unwrap();
        assert_eq!(t3.get(0), Ok(2.0));
        assert_eq!(t3.is_initialized(1), Ok(false));
        assert_eq!(t3.get(4), Ok(3.0));
    }

    #[test]
    fn test_bool_scenario() {
        let mut t4 = UndoArray::new(3);
        t4.set(0, true).unwrap();
        t4.set(0, true).unwrap();
        t4.set(0, false).unwrap();
        t4.set(0, true).unwrap();
        t4.set(1, false).unwrap();
        t4.set(2, false).unwrap();
        t4.set(2, true).unwrap();
        t4.undo(0).unwrap();
        t4.undo(1).unwrap();
        assert_eq!(t4.get(2), Ok(true));
        assert_eq!(t4.is_initialized(1), Ok(false));
        assert_eq!(t4.get(0), Ok(false));
    }

    #[test]
    fn test_owned_value_type() {
        let mut ua: UndoArray<String> = UndoArray::new(2);
        ua.set(0, "first".to_string()).unwrap();
        ua.set(0, "second".to_string()).unwrap();
        assert_eq!(ua.get(0).unwrap(), "second");
        ua.undo(0).unwrap();
        assert_eq!(ua.get(0).unwrap(), "first");
        assert_eq!(ua.history(0).unwrap(), &["first".to_string()]);
    }

    #[test]
    fn test_get_returns_by_value() {
        let mut ua = UndoArray::new(1);
        ua.set(0, 'a').unwrap();
        let held = ua.get(0).unwrap();
        // A later mutation must not invalidate an earlier read result.
        ua.set(0, 'b').unwrap();
        ua.undo(0).unwrap();
        assert_eq!(held, 'a');
    }
}
