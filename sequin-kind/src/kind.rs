use std::fmt;

/// The runtime kind of an element.
///
/// Integers and floats share the `Number` kind; the distinction between them
/// is numeric, not a matter of type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Sequence,
    /// A user-defined element type, identified by its name.
    Named(&'static str),
}

impl Kind {
    /// Look up a built-in kind by its name.
    ///
    /// Named kinds are never returned, as their names are not known here.
    pub fn by_name(name: &str) -> Option<Self> {
        use Kind::*;
        let kind = match name {
            "null" => Null,
            "boolean" => Boolean,
            "number" => Number,
            "string" => String,
            "array" => Array,
            "object" => Object,
            "sequence" => Sequence,
            _ => return None,
        };
        Some(kind)
    }

    /// The name of the kind as it appears in diagnostics.
    pub fn name(&self) -> &'static str {
        use Kind::*;
        match self {
            Null => "null",
            Boolean => "boolean",
            Number => "number",
            String => "string",
            Array => "array",
            Object => "object",
            Sequence => "sequence",
            Named(name) => *name,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Kind::Number)
    }

    /// Scalars hold a single value; the other kinds contain further values.
    pub fn is_scalar(&self) -> bool {
        use Kind::*;
        matches!(self, Null | Boolean | Number | String)
    }

    // used to order values of different kinds
    pub fn rank(&self) -> u8 {
        use Kind::*;
        match self {
            Null => 0,
            Boolean => 1,
            Number => 2,
            String => 3,
            Array => 4,
            Object => 5,
            Sequence => 6,
            Named(_) => 7,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
