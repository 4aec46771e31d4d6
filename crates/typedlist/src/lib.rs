#![doc = include_str!("../README.md")]

#[cfg(feature = "derive")]
pub use typedlist_derive::Composite;

mod composite;
mod cursor;
mod error;
mod kind;
mod list;
mod options;
mod value;

pub use composite::*;
pub use cursor::*;
pub use error::*;
pub use kind::*;
pub use list::*;
pub use options::*;
pub use value::*;
