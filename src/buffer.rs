// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Fixed length backing storage for an `ArrayStack`.
///
/// Slots are either occupied or empty. The buffer itself never changes
/// length; resizing means allocating a new buffer and moving the live
/// prefix across.
pub(crate) trait Buffer<A>: Sized {
    fn buffer_new(capacity: usize) -> Self;
    fn buffer_len(&self) -> usize;
    fn buffer_get(&self, index: usize) -> Option<&A>;
    fn buffer_get_mut(&mut self, index: usize) -> Option<&mut A>;
    fn buffer_take(&mut self, index: usize) -> Option<A>;
    fn buffer_put(&mut self, index: usize, value: A) -> Option<A>;

    /// Replace `self` with a buffer of length `capacity` holding the first
    /// `live` values of the old one, in order.
    fn buffer_realloc(&mut self, capacity: usize, live: usize) {
        debug_assert!(live <= capacity);
        let mut target = Self::buffer_new(capacity);
        for index in 0..live {
            if let Some(value) = self.buffer_take(index) {
                target.buffer_put(index, value);
            }
        }
        *self = target;
    }
}

impl<A> Buffer<A> for Box<[Option<A>]> {
    fn buffer_new(capacity: usize) -> Self {
        std::iter::repeat_with(|| None).take(capacity).collect()
    }

    #[inline(always)]
    fn buffer_len(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn buffer_get(&self, index: usize) -> Option<&A> {
        self.get(index).and_then(Option::as_ref)
    }

    #[inline(always)]
    fn buffer_get_mut(&mut self, index: usize) -> Option<&mut A> {
        self.get_mut(index).and_then(Option::as_mut)
    }

    #[inline(always)]
    fn buffer_take(&mut self, index: usize) -> Option<A> {
        self.get_mut(index).and_then(Option::take)
    }

    #[inline(always)]
    fn buffer_put(&mut self, index: usize, value: A) -> Option<A> {
        std::mem::replace(&mut self[index], Some(value))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    type Slots = Box<[Option<usize>]>;

    #[test]
    fn new_buffer_is_all_empty() {
        let buffer: Slots = Buffer::<usize>::buffer_new(4);
        assert_eq!(4, buffer.buffer_len());
        assert!((0..4).all(|index| buffer.buffer_get(index).is_none()));
        assert!(buffer.buffer_get(4).is_none());
    }

    #[test]
    fn take_clears_the_slot() {
        let mut buffer: Slots = Buffer::<usize>::buffer_new(2);
        assert_eq!(None, buffer.buffer_put(1, 31337));
        assert_eq!(Some(31337), buffer.buffer_take(1));
        assert_eq!(None, buffer.buffer_take(1));
        assert_eq!(None, buffer.buffer_take(8));
    }

    #[test]
    fn realloc_keeps_the_live_prefix() {
        let mut buffer: Slots = Buffer::<usize>::buffer_new(4);
        for index in 0..3 {
            buffer.buffer_put(index, index * 10);
        }
        buffer.buffer_realloc(8, 3);
        assert_eq!(8, buffer.buffer_len());
        assert_eq!(Some(&0), buffer.buffer_get(0));
        assert_eq!(Some(&10), buffer.buffer_get(1));
        assert_eq!(Some(&20), buffer.buffer_get(2));
        assert!(buffer.buffer_get(3).is_none());

        buffer.buffer_realloc(2, 2);
        assert_eq!(2, buffer.buffer_len());
        assert_eq!(Some(&10), buffer.buffer_get(1));
    }
}
