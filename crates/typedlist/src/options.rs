use crate::{AcceptedType, Result};

/// Options for creating a [`TypedList`](crate::TypedList).
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
    /// Element type every insertion is checked against.
    pub accepted: AcceptedType,
    /// Number of elements to reserve space for up front.
    pub capacity: usize,
}

impl ListOptions {
    pub fn new(accepted: AcceptedType) -> Self {
        Self {
            accepted,
            capacity: 0,
        }
    }

    /// Parses the accepted type from a tag such as `"string"` or `"float"`.
    pub fn parse(tag: &str) -> Result<Self> {
        Ok(Self::new(AcceptedType::parse(tag)?))
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl From<AcceptedType> for ListOptions {
    fn from(accepted: AcceptedType) -> Self {
        Self::new(accepted)
    }
}

impl From<(AcceptedType, usize)> for ListOptions {
    fn from((accepted, capacity): (AcceptedType, usize)) -> Self {
        Self::new(accepted).with_capacity(capacity)
    }
}
