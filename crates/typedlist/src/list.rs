use std::{any::Any, mem, ops::Deref, slice, vec};

use log::{debug, trace};

use crate::{
    AcceptedType, Composite, Cursor, Error, ListOptions, ListValue, RangeViolation, Result, Value,
};

/// An ordered list whose elements all belong to one [`AcceptedType`].
///
/// Every insertion and replacement goes through the type gate
/// ([`TypedList::accepts`]); a rejected value leaves the list untouched.
/// Indices are contiguous: removals shift the following elements left.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedList<V: ListValue = Value> {
    accepted: AcceptedType,
    elements: Vec<V>,
}

impl TypedList<Value> {
    /// Creates an empty list of dynamic [`Value`]s.
    pub fn new(accepted: AcceptedType) -> Self {
        Self::with_options(accepted)
    }

    /// Creates an empty list from a type tag such as `"integer"` or `"float"`.
    pub fn parse(tag: &str) -> Result<Self> {
        Ok(Self::new(AcceptedType::parse(tag)?))
    }
}

impl<V: ListValue> TypedList<V> {
    pub fn with_options(options: impl Into<ListOptions>) -> Self {
        let ListOptions { accepted, capacity } = options.into();
        Self {
            accepted,
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Builds a list from `values`, failing on the first value of the wrong type.
    pub fn from_values(
        accepted: AcceptedType,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self> {
        let mut list = Self::with_options(accepted);
        list.insert_many(values)?;
        Ok(list)
    }

    /// Returns the canonical accepted type.
    #[inline]
    pub fn accepted_type(&self) -> &AcceptedType {
        &self.accepted
    }

    /// Returns true if `value` would pass the type gate.
    #[inline]
    pub fn accepts(&self, value: &V) -> bool {
        value.is_a(&self.accepted)
    }

    fn check_type(&self, value: &V) -> Result<()> {
        if self.accepts(value) {
            return Ok(());
        }
        let found = value.kind_name().into_owned();
        trace!("Rejected {found} for list of {}", self.accepted);
        Err(Error::TypeMismatch {
            expected: self.accepted.clone(),
            found,
        })
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.elements.len(),
            })
        }
    }

    // ── Insertion ────────────────────────────────────────────────────

    /// Appends `value` if it passes the type gate.
    pub fn insert(&mut self, value: impl Into<V>) -> Result<()> {
        let value = value.into();
        self.check_type(&value)?;
        self.elements.push(value);
        Ok(())
    }

    /// Inserts each value in order.
    ///
    /// Not atomic: when a value is rejected, the values before it stay in
    /// the list. See [`TypedList::insert_many_atomic`] for all-or-nothing.
    pub fn insert_many<T: Into<V>>(&mut self, values: impl IntoIterator<Item = T>) -> Result<()> {
        for value in values {
            self.insert(value)?;
        }
        Ok(())
    }

    /// Inserts a fixed set of values, with the same partial-commit behavior
    /// as [`TypedList::insert_many`].
    #[inline]
    pub fn insert_multiple<T: Into<V>, const N: usize>(&mut self, values: [T; N]) -> Result<()> {
        self.insert_many(values)
    }

    /// Inserts all values, or none of them if any is rejected.
    pub fn insert_many_atomic<T: Into<V>>(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<()> {
        let values: Vec<V> = values.into_iter().map(Into::into).collect();
        values.iter().try_for_each(|value| self.check_type(value))?;
        debug!("Inserting {} values into list of {}", values.len(), self.accepted);
        self.elements.extend(values);
        Ok(())
    }

    // ── Positional access ────────────────────────────────────────────

    pub fn get(&self, index: usize) -> Result<&V> {
        self.check_index(index)?;
        Ok(&self.elements[index])
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// The bounds check runs before the type check.
    pub fn set(&mut self, index: usize, value: impl Into<V>) -> Result<V> {
        self.check_index(index)?;
        let value = value.into();
        self.check_type(&value)?;
        Ok(mem::replace(&mut self.elements[index], value))
    }

    /// Removes the element at `index` and shifts the following elements left.
    pub fn remove_at(&mut self, index: usize) -> Result<V> {
        self.check_index(index)?;
        Ok(self.elements.remove(index))
    }

    /// Removes the first element equal to `value`. Returns whether one was removed.
    pub fn remove(&mut self, value: &V) -> bool {
        match self.position(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Calls [`TypedList::remove`] once per value, left to right.
    /// Returns true if at least one call removed an element.
    pub fn remove_all<T: Into<V>>(&mut self, values: impl IntoIterator<Item = T>) -> bool {
        let mut removed = false;
        for value in values {
            if self.remove(&value.into()) {
                removed = true;
            }
        }
        removed
    }

    /// Removes every element. Always returns true.
    pub fn clear(&mut self) -> bool {
        debug!("Clearing {} values of {}", self.elements.len(), self.accepted);
        self.elements.clear();
        true
    }

    // ── Queries ──────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `len - 1`, or `0` for an empty list.
    ///
    /// `0` is ambiguous: combine with [`TypedList::is_empty`] to tell an empty
    /// list from a single-element one.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.elements.len().saturating_sub(1)
    }

    #[inline]
    pub fn contains(&self, value: &V) -> bool {
        self.elements.contains(value)
    }

    /// Returns the index of the first element equal to `value`.
    #[inline]
    pub fn position(&self, value: &V) -> Option<usize> {
        self.elements.iter().position(|v| v == value)
    }

    /// Returns the index of the first element equal to `value`, or `-1`.
    pub fn index_of(&self, value: &V) -> isize {
        self.position(value).map_or(-1, |index| index as isize)
    }

    // ── Derived views ────────────────────────────────────────────────

    /// Copies the inclusive range `[from, to]` into a new list of the same type.
    ///
    /// Fails if `from >= to`, if `from >= last_index()` or if
    /// `to > last_index()`, checked in that order. Because of
    /// [`TypedList::last_index`], lists shorter than two elements cannot be exported.
    pub fn export(&self, from: usize, to: usize) -> Result<Self> {
        let last = self.last_index();
        if from >= to {
            return Err(RangeViolation::FromNotBeforeTo { from, to }.into());
        }
        if from >= last {
            return Err(RangeViolation::FromNotBeforeLast { from, last }.into());
        }
        if to > last {
            return Err(RangeViolation::ToPastLast { to, last }.into());
        }

        debug!("Exporting [{from}, {to}] of list of {}", self.accepted);
        Self::from_values(self.accepted.clone(), self.elements[from..=to].iter().cloned())
    }

    /// Returns an independent copy of the elements.
    #[inline]
    pub fn to_vec(&self) -> Vec<V> {
        self.elements.clone()
    }

    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.elements
    }

    #[inline]
    pub fn into_vec(self) -> Vec<V> {
        self.elements
    }

    // ── Transforms ───────────────────────────────────────────────────

    /// Maps every element through `f`, in place or into a new list.
    ///
    /// Results are not checked against the accepted type.
    pub fn apply<F>(&mut self, f: F, produce_copy: bool) -> Applied<'_, V>
    where
        F: FnMut(&V) -> V,
    {
        if produce_copy {
            Applied::Copy(self.map_copy(f))
        } else {
            Applied::InPlace(self.map_in_place(f))
        }
    }

    /// Replaces every element with `f(element)`, in index order.
    ///
    /// If `f` panics, the elements before the panicking one stay replaced.
    /// Results are not checked against the accepted type.
    pub fn map_in_place<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&V) -> V,
    {
        debug!("Mapping {} values of {} in place", self.elements.len(), self.accepted);
        for slot in self.elements.iter_mut() {
            *slot = f(slot);
        }
        self
    }

    /// Builds a new list of the same accepted type from `f(element)`.
    ///
    /// Results are not checked against the accepted type.
    pub fn map_copy<F>(&self, f: F) -> Self
    where
        F: FnMut(&V) -> V,
    {
        debug!("Mapping {} values of {} into a copy", self.elements.len(), self.accepted);
        Self {
            accepted: self.accepted.clone(),
            elements: self.elements.iter().map(f).collect(),
        }
    }

    /// Fallible [`TypedList::map_in_place`]: stops at the first error.
    /// Elements before the failing one stay replaced.
    pub fn try_map_in_place<F, E>(&mut self, mut f: F) -> Result<&mut Self, E>
    where
        F: FnMut(&V) -> Result<V, E>,
    {
        for slot in self.elements.iter_mut() {
            *slot = f(slot)?;
        }
        Ok(self)
    }

    /// Like [`TypedList::apply`], but every result must pass the type gate.
    /// On a mismatch nothing is committed and the receiver is untouched.
    pub fn map_checked<F>(&mut self, f: F, produce_copy: bool) -> Result<Applied<'_, V>>
    where
        F: FnMut(&V) -> V,
    {
        let mapped: Vec<V> = self.elements.iter().map(f).collect();
        mapped.iter().try_for_each(|value| self.check_type(value))?;

        if produce_copy {
            Ok(Applied::Copy(Self {
                accepted: self.accepted.clone(),
                elements: mapped,
            }))
        } else {
            self.elements = mapped;
            Ok(Applied::InPlace(self))
        }
    }

    // ── Iteration ────────────────────────────────────────────────────

    #[inline]
    pub fn cursor(&self) -> Cursor<'_, V> {
        Cursor::new(self)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.elements.iter()
    }
}

/// Result of [`TypedList::apply`]: the receiver itself or a fresh copy.
#[derive(Debug)]
pub enum Applied<'a, V: ListValue = Value> {
    InPlace(&'a mut TypedList<V>),
    Copy(TypedList<V>),
}

impl<V: ListValue> Applied<'_, V> {
    #[inline]
    pub fn is_copy(&self) -> bool {
        matches!(self, Self::Copy(_))
    }

    /// Returns the new list for copy mode, `None` for in place.
    pub fn into_copy(self) -> Option<TypedList<V>> {
        match self {
            Self::Copy(list) => Some(list),
            Self::InPlace(_) => None,
        }
    }
}

impl<V: ListValue> Deref for Applied<'_, V> {
    type Target = TypedList<V>;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::InPlace(list) => &**list,
            Self::Copy(list) => list,
        }
    }
}

impl<'a, V: ListValue> IntoIterator for &'a TypedList<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: ListValue> IntoIterator for TypedList<V> {
    type Item = V;
    type IntoIter = vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<V: ListValue> Composite for TypedList<V> {
    fn type_name(&self) -> &'static str {
        "TypedList"
    }

    fn eq_composite(&self, other: &dyn Composite) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Builds a [`TypedList`] of [`Value`]s from a type tag and values.
///
/// Evaluates to `Result<TypedList>`.
///
/// ```
/// let list = typedlist::typed_list!("integer"; 1, 2, 3).unwrap();
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! typed_list {
    ($tag:expr) => {
        $crate::TypedList::parse($tag)
    };
    ($tag:expr; $($value:expr),+ $(,)?) => {
        $crate::TypedList::parse($tag).and_then(|mut list| {
            list.insert_multiple([$($crate::Value::from($value)),+])?;
            Ok(list)
        })
    };
}
