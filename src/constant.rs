//! Validated constants and their value types.

/// The value types a constant can be generated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `string`, rendered as a verbatim literal.
    Text,
    /// `bool`, rendered as the raw value text.
    Bool,
}

/// A type tag outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported type '{0}'")]
pub struct UnsupportedType(pub String);

impl ValueKind {
    /// Accepted type tags, in the order they are listed in diagnostics.
    pub const ALLOWED: [&'static str; 2] = ["string", "bool"];

    /// Resolves an optional type tag.
    ///
    /// A missing or empty tag means `string`. Tags are compared ordinally.
    pub fn resolve(tag: Option<&str>) -> Result<Self, UnsupportedType> {
        match tag {
            None | Some("") | Some("string") => Ok(Self::Text),
            Some("bool") => Ok(Self::Bool),
            Some(other) => Err(UnsupportedType(other.to_owned())),
        }
    }

    /// The C# keyword for this type.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Bool => "bool",
        }
    }

    /// Renders `value` as a C# literal of this type.
    ///
    /// Bool values are emitted unchanged; a value that is not `true` or
    /// `false` surfaces as a compile error in the generated file.
    pub fn literal(self, value: &str) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Text => std::borrow::Cow::Owned(crate::csharp::verbatim_string(value)),
            Self::Bool => std::borrow::Cow::Borrowed(value),
        }
    }
}

/// An item that passed validation and will be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantEntry<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub summary: Option<&'a str>,
    pub kind: ValueKind,
}
