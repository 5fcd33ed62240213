//! The runtime kind of a sequence element.
//!
//! A sequence captures the kind of its first element when it is constructed
//! and requires every other element to have the same kind.
mod kind;

pub use kind::Kind;
