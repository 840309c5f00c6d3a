//! Type descriptors for fields.

use crate::schema::{EnumId, InterfaceId, StructId, UnionId};

/// Scalar numeric kinds, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
}

impl Primitive {
    /// The mojom spelling, used in type descriptors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Int8 => "int8",
            Primitive::Uint8 => "uint8",
            Primitive::Int16 => "int16",
            Primitive::Uint16 => "uint16",
            Primitive::Int32 => "int32",
            Primitive::Uint32 => "uint32",
            Primitive::Int64 => "int64",
            Primitive::Uint64 => "uint64",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }
}

/// The base type of a [`Kind`], without the nullability modifier.
///
/// References to named types go through typed ids into the [`Schema`]
/// arena, so cyclic schemas (struct A holding a nullable struct B holding
/// a nullable struct A) are representable without ownership cycles.
///
/// [`Schema`]: crate::Schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Primitive(Primitive),
    String,
    Enum(EnumId),
    Struct(StructId),
    Union(UnionId),
    Interface(InterfaceId),
    Array(Box<Kind>),
    Map(Box<Kind>, Box<Kind>),
}

/// A fully-resolved field type: a base [`Type`] plus the orthogonal
/// nullability modifier.
///
/// Nullability is only meaningful on reference-like types (string, array,
/// map, struct, interface); consumers must ignore it on scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kind {
    pub nullable: bool,
    pub ty: Type,
}

impl Kind {
    pub fn new(ty: Type) -> Self {
        Self {
            nullable: false,
            ty,
        }
    }

    pub fn nullable(ty: Type) -> Self {
        Self { nullable: true, ty }
    }

    pub fn array(element: Kind) -> Self {
        Self::new(Type::Array(Box::new(element)))
    }

    pub fn map(key: Kind, value: Kind) -> Self {
        Self::new(Type::Map(Box::new(key), Box::new(value)))
    }
}

/// A resolved default literal attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Raw numeric literal as written in the schema (`"5"`, `"1.5"`).
    Number(String),
    Bool(bool),
    /// String contents, without surrounding quotes.
    String(String),
    /// A named enum constant, resolved to its integer payload.
    Enum { enum_id: EnumId, value: i64 },
}

impl DefaultValue {
    /// Whether this default is the zero value for a numeric field.
    ///
    /// `false` counts as zero, matching the loader's numeric view of
    /// booleans.
    pub fn is_zero(&self) -> bool {
        match self {
            DefaultValue::Number(raw) => raw.parse::<f64>().is_ok_and(|v| v == 0.0),
            DefaultValue::Bool(b) => !b,
            DefaultValue::String(_) => false,
            DefaultValue::Enum { .. } => false,
        }
    }

    /// Render the literal the way a numeric initializer embeds it.
    pub fn literal(&self) -> String {
        match self {
            DefaultValue::Number(raw) => raw.clone(),
            DefaultValue::Bool(b) => b.to_string(),
            DefaultValue::String(s) => s.clone(),
            DefaultValue::Enum { value, .. } => value.to_string(),
        }
    }
}

/// One declared field of a struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub kind: Kind,
    pub default: Option<DefaultValue>,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
        }
    }

    pub fn with_default(name: impl Into<String>, kind: Kind, default: DefaultValue) -> Self {
        Self {
            name: name.into(),
            kind,
            default: Some(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_as_str() {
        assert_eq!(Primitive::Bool.as_str(), "bool");
        assert_eq!(Primitive::Int32.as_str(), "int32");
        assert_eq!(Primitive::Uint64.as_str(), "uint64");
        assert_eq!(Primitive::Double.as_str(), "double");
    }

    #[test]
    fn test_default_is_zero() {
        assert!(DefaultValue::Number("0".into()).is_zero());
        assert!(DefaultValue::Number("0.0".into()).is_zero());
        assert!(DefaultValue::Number("-0".into()).is_zero());
        assert!(!DefaultValue::Number("5".into()).is_zero());
        assert!(DefaultValue::Bool(false).is_zero());
        assert!(!DefaultValue::Bool(true).is_zero());
        assert!(!DefaultValue::String(String::new()).is_zero());
    }

    #[test]
    fn test_kind_constructors() {
        let k = Kind::array(Kind::new(Type::Primitive(Primitive::Int8)));
        assert!(!k.nullable);
        match k.ty {
            Type::Array(elem) => assert_eq!(elem.ty, Type::Primitive(Primitive::Int8)),
            other => panic!("expected array, got {other:?}"),
        }

        let k = Kind::nullable(Type::String);
        assert!(k.nullable);
    }
}
