use std::collections::TryReserveError;
use std::fmt;

/// A fixed-capacity stack.
///
/// The evaluator sizes this stack from the input token count, which is an
/// upper bound on the number of live operands of any postfix sequence. Unlike
/// a plain `Vec`, pushing beyond the capacity is refused rather than growing
/// the storage.
///
/// # Examples
///
/// ```
/// use rpn_core::stack::Stack;
///
/// let mut stack = Stack::try_new(2).unwrap();
/// assert!(stack.push(42));
/// assert!(stack.push(17));
/// assert!(!stack.push(5)); // full
/// assert_eq!(stack.pop(), Some(17));
/// assert_eq!(stack.peek(), Some(&42));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T> {
    /// The underlying storage for stack elements.
    items: Vec<T>,
    /// Maximum number of elements the stack accepts.
    capacity: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack holding at most `capacity` elements.
    ///
    /// The whole capacity is reserved up front, so a failed allocation is
    /// reported here instead of in the middle of a push.
    pub fn try_new(capacity: usize) -> Result<Self, TryReserveError> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self { items, capacity })
    }

    /// Pushes a value onto the stack.
    ///
    /// Returns `false`, dropping `value`, if the stack is already full.
    #[inline]
    #[must_use]
    pub fn push(&mut self, value: T) -> bool {
        if self.items.len() >= self.capacity {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Removes and returns the top value from the stack.
    ///
    /// Returns `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top value without removing it.
    ///
    /// Returns `None` if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the current number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum capacity of the stack.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears the stack, removing all values.
    ///
    /// This does not deallocate the underlying storage.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over references to the stack elements.
    ///
    /// The iterator yields elements from bottom to top.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
