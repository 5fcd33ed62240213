//! Immutable, type-homogeneous sequences with a fluent query API.
//!
//! ```
//! use sequin::Sequence;
//!
//! let sequence = Sequence::from_range(1, 10).unwrap();
//! let evens = sequence.filter(|item, _| item % 2 == 0);
//! assert_eq!(evens.to_array(), vec![2, 4, 6, 8, 10]);
//! assert_eq!(evens.average().unwrap(), 6.0);
//! ```
//!
//! All elements of a [`Sequence`] share one [`Kind`]. This is checked when a
//! sequence is constructed, and again whenever an operation builds a
//! sequence out of new elements. Dynamically typed data such as parsed JSON
//! is represented with [`Value`]:
//!
//! ```
//! use sequin::Sequence;
//!
//! let err = Sequence::from_json(r#"[1, "two"]"#).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     r#"Collection items must be of the same type. Expected "number", got "string" at index 1."#
//! );
//! ```
mod element;
pub mod error;
mod number;
mod sequence;
mod value;

pub use element::Element;
pub use error::{Error, Operation, Result};
pub use number::Number;
pub use sequence::Sequence;
pub use sequin_kind::Kind;
pub use value::Value;
