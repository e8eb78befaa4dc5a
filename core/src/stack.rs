use crate::Vec;
use core::fmt;
use thiserror::Error;

/// Errors reported by [`BoundedStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// A push was attempted while the stack already held `capacity` items.
    #[error("stack capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    /// A pop or peek was attempted on an empty stack.
    #[error("stack is empty")]
    Empty,
}

/// A last-in-first-out container with a fixed maximum size.
///
/// The evaluator keeps one of these for operands and one for pending
/// operators. Storage for `capacity` items is reserved up front and never
/// grows; pushing onto a full stack is an error rather than a reallocation.
///
/// # Examples
///
/// ```
/// use dijkstra_core::stack::{BoundedStack, StackError};
///
/// let mut stack = BoundedStack::new(2);
/// stack.push(42).unwrap();
/// stack.push(17).unwrap();
/// assert_eq!(stack.push(1), Err(StackError::CapacityExceeded { capacity: 2 }));
/// assert_eq!(stack.pop(), Ok(17));
/// assert_eq!(stack.peek(), Ok(&42));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct BoundedStack<T> {
    /// The underlying storage for stack elements.
    items: Vec<T>,
    /// Maximum number of elements the stack may hold.
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack that can hold at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a value onto the top of the stack.
    ///
    /// Fails with [`StackError::CapacityExceeded`] if the stack is full; the
    /// value is dropped in that case.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the top value.
    #[inline]
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Returns a reference to the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` once the stack holds `capacity` items.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
