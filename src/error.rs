use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Both variants report contract violations at the call site: they are deterministic,
/// caller-detectable in advance (via bounds and [`crate::UndoArray::is_initialized`] checks),
/// and never the result of a transient condition. No operation mutates the container when it
/// returns an error.
///
/// # Error Categories
///
/// - [`Error::OutOfRange`] - Index at or beyond the fixed slot count
/// - [`Error::Uninitialized`] - Operation requires a slot with at least one recorded value
///
/// # Examples
///
/// ```rust
/// use undo_array::{Error, UndoArray};
///
/// let ua: UndoArray<i32> = UndoArray::new(4);
/// match ua.get(9) {
///     Err(Error::OutOfRange { index, size }) => {
///         eprintln!("index {} out of range for {} slots", index, size);
///     }
///     Err(Error::Uninitialized(index)) => {
///         eprintln!("slot {} has no value yet", index);
///     }
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index at or beyond the container's fixed slot count was used.
    ///
    /// The slot count is fixed at construction and never changes, so this error always
    /// indicates a caller-side bug rather than a state-dependent condition.
    ///
    /// # Fields
    ///
    /// * `index` - The offending index
    /// * `size` - The container's fixed slot count
    #[error("Index {index} is out of range for an array of {size} slots")]
    OutOfRange {
        /// The offending index
        index: usize,
        /// The container's fixed slot count
        size: usize,
    },

    /// An operation that requires a current value was applied to an uninitialized slot.
    ///
    /// A slot is uninitialized when its history is empty: either nothing was ever written
    /// to it, or every write has since been undone. Reading or undoing such a slot is
    /// rejected rather than yielding a default value, so the bug is surfaced at the call
    /// that made the wrong assumption.
    ///
    /// The associated value is the index of the uninitialized slot.
    #[error("Slot {0} is uninitialized and has no value to read or undo")]
    Uninitialized(usize),
}
