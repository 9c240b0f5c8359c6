//! Error types for fallible tree operations.

use thiserror::Error;

/// Convenient result alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`. This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by fallible [`BinarySearchTree`] operations.
///
/// Lookups that can legitimately miss ([`find`]) return `Option` instead;
/// an `Error` is reserved for operations where the caller asked for
/// something the tree cannot do.
///
/// [`BinarySearchTree`]: crate::BinarySearchTree
/// [`find`]: crate::BinarySearchTree::find
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested value is not stored in the tree.
    #[error("value not found in tree")]
    ValueNotFound,
}
