use ordered_float::OrderedFloat;

use sequin_kind::Kind;

use crate::number::Number;

/// Something that can be stored in a [`Sequence`](crate::Sequence).
///
/// A sequence requires all its elements to have the same [`Kind`]. For most
/// Rust types this holds by construction, as every value of the type has the
/// same kind. Dynamic types such as [`Value`](crate::Value) report a kind per
/// value, and this is what the sequence checks.
///
/// To store your own types, give them a named kind:
///
/// ```
/// use sequin::{Element, Kind, Sequence};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Element for Person {
///     fn kind(&self) -> Kind {
///         Kind::Named("Person")
///     }
/// }
///
/// let people = Sequence::from_array([Person { name: "Ann".into(), age: 30 }]).unwrap();
/// assert_eq!(people.count(), 1);
/// ```
pub trait Element: Clone {
    /// The runtime kind of this value.
    fn kind(&self) -> Kind;

    /// This value as a number, if it is one.
    ///
    /// Only values of kind [`Kind::Number`] are expected to return a number.
    fn number(&self) -> Option<Number> {
        None
    }
}

macro_rules! integer_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn kind(&self) -> Kind {
                    Kind::Number
                }

                #[inline]
                fn number(&self) -> Option<Number> {
                    // u64 and usize may not fit; those are counted as floats
                    Some(match i64::try_from(*self) {
                        Ok(i) => Number::Integer(i),
                        Err(_) => Number::Float(*self as f64),
                    })
                }
            }
        )*
    };
}

integer_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn kind(&self) -> Kind {
                    Kind::Number
                }

                #[inline]
                fn number(&self) -> Option<Number> {
                    Some(Number::Float(f64::from(*self)))
                }
            }

            impl Element for OrderedFloat<$t> {
                #[inline]
                fn kind(&self) -> Kind {
                    Kind::Number
                }

                #[inline]
                fn number(&self) -> Option<Number> {
                    Some(Number::Float(f64::from(self.0)))
                }
            }
        )*
    };
}

float_element!(f32, f64);

impl Element for bool {
    fn kind(&self) -> Kind {
        Kind::Boolean
    }
}

impl Element for char {
    fn kind(&self) -> Kind {
        Kind::String
    }
}

impl Element for String {
    fn kind(&self) -> Kind {
        Kind::String
    }
}

impl Element for &'static str {
    fn kind(&self) -> Kind {
        Kind::String
    }
}

impl<T: Clone> Element for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<T: Element> Element for Option<T> {
    fn kind(&self) -> Kind {
        match self {
            Some(value) => value.kind(),
            None => Kind::Null,
        }
    }

    fn number(&self) -> Option<Number> {
        self.as_ref().and_then(|value| value.number())
    }
}
