//! Fixed-capacity stack backed by a preallocated slice.
//!
//! A monotonic pass over `n` elements never holds more than `n` entries, so
//! the buffer is sized once and never grows.

pub struct ArrayStack<T> {
    slots: Box<[T]>,
    len: usize,
}

impl<T: Copy + Default> ArrayStack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Pushes `value`, or returns `None` when the stack is full.
    #[must_use]
    pub fn push(&mut self, value: T) -> Option<()> {
        let slot = self.slots.get_mut(self.len)?;
        *slot = value;
        self.len += 1;
        Some(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.len = self.len.checked_sub(1)?;
        Some(self.slots[self.len])
    }

    pub fn peek(&self) -> Option<T> {
        self.len.checked_sub(1).map(|top| self.slots[top])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Live entries, bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = ArrayStack::<usize>::with_capacity(3);
        assert!(stack.is_empty());
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.peek(), Some(2));
        assert_eq!(stack.as_slice(), &[1, 2]);
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_push_past_capacity_fails() {
        let mut stack = ArrayStack::<usize>::with_capacity(1);
        assert_eq!(stack.push(7), Some(()));
        assert_eq!(stack.push(8), None);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.capacity(), 1);
    }

    #[test]
    fn test_zero_capacity() {
        let mut stack = ArrayStack::<usize>::with_capacity(0);
        assert_eq!(stack.push(0), None);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_clear_reuses_buffer() {
        let mut stack = ArrayStack::<usize>::with_capacity(2);
        stack.push(4).unwrap();
        stack.push(5).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        stack.push(6).unwrap();
        assert_eq!(stack.as_slice(), &[6]);
    }
}
