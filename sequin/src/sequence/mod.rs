/// A sequence is an immutable list of elements of a single kind, with a
/// query API on top.
///
/// The operators are spread over several modules, each adding methods to
/// `Sequence`.
mod aggregate;
mod core;
mod creation;
mod order;
mod query;
mod set;
mod transform;

pub use self::core::Sequence;
