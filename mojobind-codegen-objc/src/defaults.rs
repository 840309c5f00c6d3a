//! Default-value expressions for wrapper properties.

use mojobind_schema::{DefaultValue, Field, Type};

use crate::binder::Binder;
use crate::classify::is_numeric;
use crate::error::{Result, Site};

/// Whether an initializer line is required for a field at all.
///
/// Without an explicit default, only required reference types need one:
/// a non-nullable `NSString`/`NSArray`/`NSDictionary`/struct property
/// must never be left nil. An explicit numeric zero is a no-op
/// initializer and is elided.
pub fn needs_assignment(field: &Field) -> bool {
    match &field.default {
        None => {
            !field.kind.nullable
                && matches!(
                    field.kind.ty,
                    Type::String | Type::Array(_) | Type::Map(_, _) | Type::Struct(_)
                )
        }
        Some(default) => !(is_numeric(&field.kind) && default.is_zero()),
    }
}

impl Binder<'_> {
    /// Default-value expression for a wrapper property.
    ///
    /// Nullable kinds with no declared default get `nil`; required
    /// reference kinds get an empty-but-valid literal; numerics and enums
    /// get zero unless the schema declares otherwise. Enum zero is an
    /// explicit cast, never an implicit integer.
    pub fn default_value(&self, site: &Site<'_>, field: &Field) -> Result<String> {
        let kind = &field.kind;
        // Nullability is ignored on scalars rather than producing nil.
        if kind.nullable && field.default.is_none() && !is_numeric(kind) {
            return Ok("nil".to_string());
        }
        match &kind.ty {
            Type::Primitive(_) => Ok(field
                .default
                .as_ref()
                .map_or_else(|| "0".to_string(), DefaultValue::literal)),
            Type::Enum(id) => {
                let value = match &field.default {
                    Some(DefaultValue::Enum { value, .. }) => value.to_string(),
                    Some(other) => other.literal(),
                    None => "0".to_string(),
                };
                Ok(format!(
                    "static_cast<{}>({value})",
                    self.enum_type_name(*id)
                ))
            }
            Type::String => Ok(match &field.default {
                Some(default) => format!("@\"{}\"", default.literal()),
                None => "@\"\"".to_string(),
            }),
            // Container and struct defaults are not independently
            // specifiable; they always construct empty.
            Type::Array(_) => Ok("@[]".to_string()),
            Type::Map(_, _) => Ok("@{}".to_string()),
            Type::Struct(id) => Ok(format!("[[{} alloc] init]", self.struct_class_name(*id))),
            Type::Interface(_) | Type::Union(_) => {
                Err(site.unrecognized(self.schema().describe(kind)))
            }
        }
    }
}
