use crate::{ListValue, TypedList, Value};

/// Forward-only reader over a [`TypedList`], positioned by index.
///
/// The cursor borrows the list, so the list cannot be mutated while a
/// traversal is in progress.
///
/// # Example
/// ```
/// # use typedlist::{AcceptedType, TypedList};
/// let mut list = TypedList::new(AcceptedType::String);
/// list.insert_multiple(["hello", "world"]).unwrap();
///
/// let mut c = list.cursor();
/// while c.is_valid() {
///     println!("{}: {:?}", c.position(), c.current());
///     c.advance();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a, V: ListValue = Value> {
    source: &'a [V],
    pos: usize,
}

impl<'a, V: ListValue> Cursor<'a, V> {
    #[inline]
    pub fn new(source: &'a TypedList<V>) -> Self {
        Self {
            source: source.as_slice(),
            pos: 0,
        }
    }

    /// Moves back to the first element.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Returns the element under the cursor, or `None` once past the end.
    #[inline]
    pub fn current(&self) -> Option<&'a V> {
        self.source.get(self.pos)
    }

    /// Returns the current position, which is also the index of [`Self::current`].
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos = self.pos.saturating_add(1);
    }

    /// Returns true if the position addresses an element.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.pos < self.source.len()
    }

    /// Returns the number of elements remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.pos)
    }
}

impl<'a, V: ListValue> Iterator for Cursor<'a, V> {
    type Item = (usize, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current()?;
        let index = self.pos;
        self.advance();
        Some((index, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<V: ListValue> ExactSizeIterator for Cursor<'_, V> {}
