#![doc(html_no_source)]
#![deny(missing_docs)]

//! # undo-array
//!
//! [![Crates.io](https://img.shields.io/crates/v/undo-array.svg)](https://crates.io/crates/undo-array)
//! [![Documentation](https://docs.rs/undo-array/badge.svg)](https://docs.rs/undo-array)
//!
//! A fixed-length, indexable container in which every slot independently remembers the
//! complete sequence of values ever written to it, and any write can be reverted with an
//! undo. The slot count is fixed at construction; each slot owns a growable history whose
//! last element is the slot's current value, and a slot with an empty history is
//! *uninitialized* and has no current value at all.
//!
//! ## Features
//!
//! - **Per-slot history** - every `set` appends; nothing is ever overwritten in place
//! - **Undo to any depth** - down to and including the uninitialized state
//! - **Deep value semantics** - `clone()` copies every history; `==` compares full
//!   histories, not just current values
//! - **Explicit contract errors** - out-of-range and uninitialized-slot violations are
//!   rejected with typed errors, never masked by default values
//! - **Amortized O(1) writes** - each slot grows geometrically like any `Vec`
//!
//! ## Quick Start
//!
//! Add `undo-array` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! undo-array = "0.1"
//! ```
//!
//! ```rust
//! use undo_array::UndoArray;
//!
//! let mut ua = UndoArray::new(7);
//! assert!(!ua.is_initialized(2)?);
//!
//! ua.set(2, 'a')?;
//! ua.set(2, 'b')?;
//! assert_eq!(ua.get(2)?, 'b');
//!
//! ua.undo(2)?;
//! assert_eq!(ua.get(2)?, 'a');
//! # Ok::<(), undo_array::Error>(())
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into a small set of modules:
//!
//! - [`UndoArray`] - the container itself, with `get`/`set`/`undo`/`is_initialized` and
//!   the per-slot history accessors
//! - [`Snapshot`] - an owned, structured capture of an array's full state for external
//!   rendering; the core produces data, never formatted text
//! - [`Error`] and [`Result`] - the error taxonomy for contract violations
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Both error variants are
//! deterministic programmer-error reports: callers can always avoid them by checking
//! bounds and [`UndoArray::is_initialized`] first, and a failed operation never leaves a
//! partially mutated slot behind.
//!
//! ```rust
//! use undo_array::{Error, UndoArray};
//!
//! let mut ua: UndoArray<u8> = UndoArray::new(2);
//! assert_eq!(ua.undo(0), Err(Error::Uninitialized(0)));
//! assert_eq!(ua.set(5, 1), Err(Error::OutOfRange { index: 5, size: 2 }));
//! ```
//!
//! ## Concurrency
//!
//! The container performs no internal locking and spawns no threads; all operations are
//! synchronous and run to completion. Sharing an instance across threads requires
//! external synchronization, which the `&self`/`&mut self` receivers make explicit.

pub(crate) mod error;

/// The fixed-length container with per-slot value histories.
pub mod array;

/// Structured state capture for external rendering.
pub mod snapshot;

/// `undo-array` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. Used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `undo-array` Error type
///
/// Covers the two contract violations the container can report: indexing past the fixed
/// slot count, and reading or undoing a slot that holds no value.
pub use error::Error;

/// The core container type.
///
/// # Example
///
/// ```rust
/// use undo_array::UndoArray;
///
/// let mut ua = UndoArray::new(3);
/// ua.set(0, 10)?;
/// assert_eq!(ua.get(0)?, 10);
/// # Ok::<(), undo_array::Error>(())
/// ```
pub use array::UndoArray;

/// Owned presentation data captured from an [`UndoArray`].
pub use snapshot::Snapshot;
