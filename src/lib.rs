// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A growable array stack with amortised O(1) [`push()`][push] and
//! [`pop()`][pop], which gives memory back when it shrinks.
//!
//! # Resizing
//!
//! [`ArrayStack`][ArrayStack] owns a single contiguous backing array whose
//! length is its capacity, and the values on the stack always occupy the
//! bottom `size` slots of it.
//!
//!   * When [`push()`][push] finds the array full, it moves everything into a
//!     new array of twice the length (or of length 1, if the old one was
//!     empty) before pushing.
//!   * After [`pop()`][pop] removes a value, if the capacity is at least three
//!     times the new size, everything moves into a new array of half the
//!     length, rounded down. This check is made once per pop.
//!
//! Because a stack is only shrunk when it's down to a third of its capacity,
//! and then only to half, a stack sitting just on either side of a resize
//! boundary won't reallocate on every push and pop.
//!
//! Resizing never reorders anything: the value at index `k` before a resize
//! is still at index `k` afterwards.
//!
//! # Errors
//!
//! Nothing in this crate panics on bad input except the [`Index`][Index]
//! operators, which behave like their slice counterparts. Everything else
//! returns a [`StackError`][StackError], and an operation which fails has
//! no effect on the stack.
//!
//! # Logging
//!
//! Each resize emits a `TRACE` level [`tracing`][tracing] event with the old
//! and new capacities and the current size. Errors are never logged.
//!
//! # Example
//!
//! ```rust
//! # use arraystack::{ArrayStack, StackError};
//! // Start out with room for two values.
//! let mut stack = ArrayStack::new(2);
//! stack.push("zero");
//! stack.push("one");
//! assert_eq!(2, stack.capacity());
//!
//! // The array is full, so this doubles it.
//! stack.push("two");
//! assert_eq!(4, stack.capacity());
//!
//! // Popping down to one value leaves 4 >= 3 * 1, so the array is halved.
//! assert_eq!(Ok("two"), stack.pop());
//! assert_eq!(Ok("one"), stack.pop());
//! assert_eq!(2, stack.capacity());
//!
//! assert_eq!(Ok(&"zero"), stack.peek());
//! assert_eq!(Ok("zero"), stack.pop());
//! assert_eq!(Err(StackError::EmptyStack), stack.pop());
//! ```
//!
//! [ArrayStack]: struct.ArrayStack.html
//! [StackError]: enum.StackError.html
//! [push]: struct.ArrayStack.html#method.push
//! [pop]: struct.ArrayStack.html#method.pop
//! [Index]: https://doc.rust-lang.org/std/ops/trait.Index.html
//! [tracing]: https://docs.rs/tracing

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod array_stack;
mod buffer;
mod error;

pub use self::array_stack::ArrayStack;
pub use self::error::{Result, StackError};
