//! Static classification of a type's wire representation.
//!
//! Every encodable type reports exactly one [`Shape`] through [`Write::SHAPE`](crate::Write).
//! The shape is a property of the type and never of a runtime value, so the encoding carries
//! no type tags beyond length prefixes and presence flags. A type with no implementation has
//! no shape and is rejected when the program is compiled.

/// The encoding strategy applied to a type, listed in order of precedence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    /// The type supplies its own encoding through [`EncodeHook`](crate::EncodeHook) or
    /// [`DecodeHook`](crate::DecodeHook).
    Hook,
    /// `[T; N]`: `N` elements, no length prefix.
    FixedArray,
    /// UTF-8 text: length prefix, then the bytes.
    Text,
    /// Raw byte sequence: length prefix, then the bytes.
    Blob,
    /// Sequence of `T`: length prefix, then each element.
    Array,
    /// Presence flag, then the value if present.
    Optional,
    /// Enumerated value: its integer representation, always fixed width.
    Enum,
    /// Single-byte unsigned integer, copied verbatim.
    Byte,
    /// Unsigned integer, varint or fixed width depending on [`Mode`](crate::Mode).
    Unsigned,
    /// Signed integer, float or boolean: always fixed width.
    Scalar,
    /// Ordered fields, concatenated with no tags.
    Aggregate,
}

impl Shape {
    /// Returns a short human-readable name, used as error context.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Hook => "hook",
            Shape::FixedArray => "fixed array",
            Shape::Text => "text",
            Shape::Blob => "blob",
            Shape::Array => "array",
            Shape::Optional => "optional",
            Shape::Enum => "enum",
            Shape::Byte => "byte",
            Shape::Unsigned => "unsigned",
            Shape::Scalar => "scalar",
            Shape::Aggregate => "aggregate",
        }
    }
}
