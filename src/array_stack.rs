// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::convert::TryFrom;
use std::fmt::{Debug, Error, Formatter};
use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::buffer::Buffer;
use crate::error::{Result, StackError};

/// A LIFO stack backed by a single array which grows and shrinks as
/// values are pushed and popped.
///
/// When a push finds the array full, its capacity doubles (or becomes 1 if
/// it was 0). When a pop leaves the stack at a third of its capacity or
/// less, the capacity is halved. The gap between the two thresholds keeps
/// alternating pushes and pops at a boundary from reallocating every time.
///
/// # Examples
///
/// ```rust
/// # use arraystack::ArrayStack;
/// let mut stack = ArrayStack::new(2);
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
/// assert_eq!(4, stack.capacity());
/// assert_eq!(Ok(3), stack.pop());
/// assert_eq!(Ok(&2), stack.peek());
/// ```
#[derive(Clone)]
pub struct ArrayStack<A> {
    size: usize,
    data: Box<[Option<A>]>,
}

impl<A> ArrayStack<A> {
    /// Construct an empty stack with room for `capacity` values.
    ///
    /// A capacity of `0` is valid and allocates nothing; the first push will
    /// grow the stack to a capacity of `1`.
    pub fn new(capacity: usize) -> Self {
        Self {
            size: 0,
            data: Buffer::<A>::buffer_new(capacity),
        }
    }

    /// Construct an empty stack from a signed capacity request.
    ///
    /// Fails with [`StackError::InvalidSize`][InvalidSize] if `capacity` is
    /// negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackError};
    /// let stack: ArrayStack<char> = ArrayStack::try_new(5).unwrap();
    /// assert_eq!(5, stack.capacity());
    ///
    /// let failed = ArrayStack::<char>::try_new(-1);
    /// assert_eq!(Some(StackError::InvalidSize(-1)), failed.err());
    /// ```
    ///
    /// [InvalidSize]: enum.StackError.html#variant.InvalidSize
    pub fn try_new(capacity: isize) -> Result<Self> {
        usize::try_from(capacity)
            .map(Self::new)
            .map_err(|_| StackError::InvalidSize(capacity))
    }

    /// Get the number of values on the stack.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the length of the backing array.
    pub fn capacity(&self) -> usize {
        self.data.buffer_len()
    }

    /// Test whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get a reference to the value at `index`, counting from the bottom of
    /// the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackError};
    /// let mut stack = ArrayStack::new(4);
    /// stack.push("bottom");
    /// stack.push("top");
    /// assert_eq!(Ok(&"bottom"), stack.get(0));
    /// assert_eq!(
    ///     Err(StackError::IndexOutOfRange { index: 2, size: 2 }),
    ///     stack.get(2)
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&A> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        self.data
            .buffer_get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Overwrite the value at `index`, returning the value it replaced.
    ///
    /// This never resizes the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::ArrayStack;
    /// let mut stack = ArrayStack::new(4);
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(Ok(1), stack.set(0, 1337));
    /// assert_eq!(Ok(&1337), stack.get(0));
    /// assert!(stack.set(2, 0).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: A) -> Result<A> {
        self.slot_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Push a value onto the top of the stack, growing the backing array if
    /// it's full.
    pub fn push(&mut self, value: A) {
        let top = self.size;
        self.insert_at(top, value);
    }

    /// Remove and return the value on the top of the stack.
    ///
    /// If this leaves the stack using a third of its capacity or less, the
    /// capacity is halved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackError};
    /// let mut stack = ArrayStack::new(6);
    /// stack.push(1);
    /// stack.push(2);
    /// stack.push(3);
    /// assert_eq!(Ok(3), stack.pop());
    /// assert_eq!(3, stack.capacity());
    /// assert_eq!(Ok(2), stack.pop());
    /// assert_eq!(Ok(1), stack.pop());
    /// assert_eq!(Err(StackError::EmptyStack), stack.pop());
    /// ```
    pub fn pop(&mut self) -> Result<A> {
        let top = self.size.checked_sub(1).ok_or(StackError::EmptyStack)?;
        self.remove_at(top)
    }

    /// Get a reference to the value on the top of the stack without removing
    /// it.
    pub fn peek(&self) -> Result<&A> {
        let top = self.size.checked_sub(1).ok_or(StackError::EmptyStack)?;
        self.get(top)
    }

    fn out_of_range(&self, index: usize) -> StackError {
        StackError::IndexOutOfRange {
            index,
            size: self.size,
        }
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut A> {
        let error = self.out_of_range(index);
        if index >= self.size {
            return Err(error);
        }
        self.data.buffer_get_mut(index).ok_or(error)
    }

    /// Insert `value` at `index`, shifting everything above it up one slot.
    pub(crate) fn insert_at(&mut self, index: usize, value: A) {
        debug_assert!(index <= self.size);
        if self.size == self.capacity() {
            let grown = (self.capacity() * 2).max(1);
            self.resize(grown);
        }
        for from in (index..self.size).rev() {
            if let Some(moved) = self.data.buffer_take(from) {
                self.data.buffer_put(from + 1, moved);
            }
        }
        self.data.buffer_put(index, value);
        self.size += 1;
    }

    /// Remove the value at `index`, shifting everything above it down one
    /// slot and clearing the slot left vacant at the top.
    pub(crate) fn remove_at(&mut self, index: usize) -> Result<A> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        let value = self
            .data
            .buffer_take(index)
            .ok_or_else(|| self.out_of_range(index))?;
        for from in index + 1..self.size {
            if let Some(moved) = self.data.buffer_take(from) {
                self.data.buffer_put(from - 1, moved);
            }
        }
        self.size -= 1;

        // Checked once against the new size, never again after shrinking.
        if self.capacity() >= self.size.saturating_mul(3) {
            let shrunk = self.capacity() / 2;
            self.resize(shrunk);
        }
        Ok(value)
    }

    fn resize(&mut self, capacity: usize) {
        trace!(
            from = self.capacity(),
            to = capacity,
            size = self.size,
            "resizing array stack"
        );
        self.data.buffer_realloc(capacity, self.size);
    }
}

impl<A> Default for ArrayStack<A> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<A> Index<usize> for ArrayStack<A> {
    type Output = A;

    fn index(&self, index: usize) -> &A {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("ArrayStack::index: {}", error),
        }
    }
}

impl<A> IndexMut<usize> for ArrayStack<A> {
    fn index_mut(&mut self, index: usize) -> &mut A {
        match self.slot_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("ArrayStack::index_mut: {}", error),
        }
    }
}

impl<A: Debug> Debug for ArrayStack<A> {
    /// Debug implementation for `ArrayStack`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::ArrayStack;
    /// let mut stack = ArrayStack::new(4);
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!("ArrayStack[2/4][1, 2]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        write!(f, "ArrayStack[{}/{}]", self.size, self.capacity())?;
        f.debug_list()
            .entries(self.data.iter().take(self.size).flatten())
            .finish()
    }
}
