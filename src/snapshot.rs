//! Structured presentation data captured from an [`crate::UndoArray`].
//!
//! The core container never formats text. When a caller wants to render the state of an
//! array, it asks for a [`crate::Snapshot`]: an owned, immutable copy of the slot count,
//! the per-slot history lengths, and the full grid of historical values arranged row-major
//! by history depth. Slots whose history is shorter than the deepest one carry explicit
//! `None` markers at the missing depths, so a renderer can lay out aligned columns without
//! re-deriving the shape itself.

/// An owned, immutable capture of an [`crate::UndoArray`]'s full state for rendering.
///
/// A snapshot shares no storage with the array it was taken from; taking one and then
/// mutating the array leaves the snapshot unchanged.
///
/// # Example
///
/// ```rust
/// use undo_array::UndoArray;
///
/// let mut ua = UndoArray::new(3);
/// ua.set(0, 'a')?;
/// ua.set(0, 'b')?;
/// ua.set(2, 'c')?;
///
/// let snap = ua.snapshot();
/// assert_eq!(snap.slot_count(), 3);
/// assert_eq!(snap.history_lens(), &[2, 0, 1]);
/// assert_eq!(snap.max_depth(), 2);
/// assert_eq!(snap.row(0), Some(&[Some('a'), None, Some('c')][..]));
/// assert_eq!(snap.row(1), Some(&[Some('b'), None, None][..]));
/// # Ok::<(), undo_array::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    /// The array's fixed slot count.
    slot_count: usize,
    /// History length per slot, in slot order.
    history_lens: Vec<usize>,
    /// One row per history depth, each of `slot_count` cells; `None` where a slot's
    /// history does not reach that depth.
    rows: Vec<Vec<Option<T>>>,
}

impl<T: Clone> Snapshot<T> {
    /// Builds a snapshot from per-slot histories, oldest value first.
    pub(crate) fn capture(slots: &[Vec<T>]) -> Self {
        let history_lens: Vec<usize> = slots.iter().map(Vec::len).collect();
        let max_depth = history_lens.iter().copied().max().unwrap_or(0);

        let rows = (0..max_depth)
            .map(|depth| {
                slots
                    .iter()
                    .map(|history| history.get(depth).cloned())
                    .collect()
            })
            .collect();

        Self {
            slot_count: slots.len(),
            history_lens,
            rows,
        }
    }
}

impl<T> Snapshot<T> {
    /// Returns the fixed slot count of the captured array.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Returns the history length of every slot, in slot order.
    #[must_use]
    pub fn history_lens(&self) -> &[usize] {
        &self.history_lens
    }

    /// Returns the deepest history length across all slots.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row of values at the given history depth, or `None` past the deepest
    /// history. Each cell is `Some` for slots whose history reaches `depth` and `None`
    /// otherwise.
    #[must_use]
    pub fn row(&self, depth: usize) -> Option<&[Option<T>]> {
        self.rows.get(depth).map(Vec::as_slice)
    }

    /// Iterates the value grid row by row, shallowest depth first.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }
}
