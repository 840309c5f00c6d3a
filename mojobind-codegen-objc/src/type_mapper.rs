//! Wrapper property types and modifiers.

use mojobind_schema::{Kind, Type};

use crate::binder::Binder;
use crate::classify::objc_numeric_type;
use crate::error::{Result, Site};

impl Binder<'_> {
    /// Objective-C type of a kind.
    ///
    /// `as_element` selects the boxed form for scalars: Objective-C
    /// containers only hold reference types, so `array<int32>` becomes
    /// `NSArray<NSNumber *> *` while a bare `int32` property stays
    /// `int32_t`. Map keys and values always resolve as elements.
    pub fn wrapper_type(&self, site: &Site<'_>, kind: &Kind, as_element: bool) -> Result<String> {
        match &kind.ty {
            Type::Struct(id) => Ok(format!("{} *", self.struct_class_name(*id))),
            Type::Enum(id) => Ok(self.enum_type_name(*id)),
            Type::Interface(id) => {
                let def = &self.schema()[*id];
                Ok(format!("id<{}{}>", self.prefix(def.module), def.name))
            }
            Type::String => Ok("NSString *".to_string()),
            Type::Array(element) => {
                let inner = self.wrapper_type(site, element, true)?;
                Ok(format!("NSArray<{inner}> *"))
            }
            Type::Map(key, value) => {
                let key_type = self.wrapper_type(site, key, true)?;
                let value_type = self.wrapper_type(site, value, true)?;
                Ok(format!("NSDictionary<{key_type}, {value_type}> *"))
            }
            Type::Primitive(primitive) => {
                if as_element {
                    Ok("NSNumber *".to_string())
                } else {
                    Ok(objc_numeric_type(*primitive).to_string())
                }
            }
            Type::Union(_) => Err(site.unrecognized(self.schema().describe(kind))),
        }
    }
}

/// `@property` attribute list for a kind: `nonatomic` always, `copy` for
/// value-semantics reference types, `nullable` when the kind is.
pub fn property_modifiers(kind: &Kind) -> String {
    let mut modifiers = vec!["nonatomic"];
    if matches!(
        kind.ty,
        Type::Array(_) | Type::String | Type::Map(_, _) | Type::Struct(_)
    ) {
        modifiers.push("copy");
    }
    if kind.nullable {
        modifiers.push("nullable");
    }
    modifiers.join(", ")
}
