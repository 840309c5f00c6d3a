//! Kind categories and the primitive type tables.

use mojobind_schema::{Kind, Primitive, Type};

/// Category of a resolved base type.
///
/// Matching on `Type` is exhaustive everywhere in this crate; a new
/// `Type` variant fails the build in every resolver rather than falling
/// into a runtime default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Numeric,
    String,
    Enum,
    Struct,
    Union,
    Interface,
    Array,
    Map,
}

/// Categorize a base type.
pub fn classify(ty: &Type) -> Category {
    match ty {
        Type::Primitive(_) => Category::Numeric,
        Type::String => Category::String,
        Type::Enum(_) => Category::Enum,
        Type::Struct(_) => Category::Struct,
        Type::Union(_) => Category::Union,
        Type::Interface(_) => Category::Interface,
        Type::Array(_) => Category::Array,
        Type::Map(_, _) => Category::Map,
    }
}

/// Whether a kind is a scalar numeric/boolean, i.e. bridges to `NSNumber`
/// in container positions and to a plain C type otherwise.
pub fn is_numeric(kind: &Kind) -> bool {
    matches!(kind.ty, Type::Primitive(_))
}

/// Native C type for a scalar.
pub fn objc_numeric_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Bool => "bool",
        Primitive::Int8 => "int8_t",
        Primitive::Uint8 => "uint8_t",
        Primitive::Int16 => "int16_t",
        Primitive::Uint16 => "uint16_t",
        Primitive::Int32 => "int32_t",
        Primitive::Uint32 => "uint32_t",
        Primitive::Int64 => "int64_t",
        Primitive::Uint64 => "uint64_t",
        Primitive::Float => "float",
        Primitive::Double => "double",
    }
}

/// `NSNumber` accessor extracting a scalar at the matching width.
pub fn nsnumber_getter(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Bool => "boolValue",
        Primitive::Int8 => "charValue",
        Primitive::Uint8 => "unsignedCharValue",
        Primitive::Int16 => "shortValue",
        Primitive::Uint16 => "unsignedShortValue",
        Primitive::Int32 => "intValue",
        Primitive::Uint32 => "unsignedIntValue",
        Primitive::Int64 => "longLongValue",
        Primitive::Uint64 => "unsignedLongLongValue",
        Primitive::Float => "floatValue",
        Primitive::Double => "doubleValue",
    }
}
