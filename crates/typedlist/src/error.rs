use std::result;

use thiserror::Error;

use crate::AcceptedType;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for typedlist operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("The element should be of type {expected} but {found} found")]
    TypeMismatch {
        expected: AcceptedType,
        found: String,
    },
    #[error("Index out of bounds: index: {index}, len: {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error(transparent)]
    InvalidRange(#[from] RangeViolation),
    #[error("Invalid type descriptor: {0:?}")]
    InvalidTypeDescriptor(String),
}

/// The bound that an export range failed, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeViolation {
    #[error("The fromIndex should be less than toIndex")]
    FromNotBeforeTo { from: usize, to: usize },
    #[error("The fromIndex should be less than the last index which is {last}")]
    FromNotBeforeLast { from: usize, last: usize },
    #[error("The toIndex should be less than the last index which is {last}")]
    ToPastLast { to: usize, last: usize },
}
