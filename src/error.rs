// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors returned by [`ArrayStack`][ArrayStack] operations.
///
/// A failed operation never leaves the stack partially modified.
///
/// [ArrayStack]: struct.ArrayStack.html
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// A stack was requested with a negative capacity.
    #[error("invalid stack capacity {0}")]
    InvalidSize(isize),

    /// An index outside `[0, size)` was passed to `get` or `set`.
    #[error("index {index} out of range for stack of size {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The size of the stack at the time of the call.
        size: usize,
    },

    /// `pop` or `peek` was called on an empty stack.
    #[error("stack is empty")]
    EmptyStack,
}

/// Shorthand for results carrying a [`StackError`][StackError].
///
/// [StackError]: enum.StackError.html
pub type Result<A> = std::result::Result<A, StackError>;
