//! Bidirectional conversion expression synthesis.
//!
//! The two entry points mirror each other: [`Binder::cpp_to_objc`]
//! produces the expression a wrapper initializer uses to adopt a C++
//! value, [`Binder::objc_to_cpp`] the expression that rebuilds the C++
//! value from the wrapper. Both recurse through named helpers
//! parameterized by the current accessor string.
//!
//! Composite (struct) container elements get per-element expressions in
//! both directions: a struct wrapper does not box a scalar, it holds an
//! independently-lifetime-managed native object, and `StructPtr` is
//! move-only, so each element must express its own ownership transfer
//! instead of going through a bulk copy helper.

use mojobind_schema::{Field, Kind, StructId, Type};

use crate::binder::Binder;
use crate::classify::{nsnumber_getter, objc_numeric_type};
use crate::error::{Result, Site};
use crate::naming::{cpp_namespace, property_name};

/// What a conversion expression does with the underlying native value.
///
/// Tagged on every synthesized expression so the emission layer can pick
/// the matching construction idiom without re-deriving it from the
/// expression text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Yields an owned native handle (a fresh `StructPtr`).
    Transfers,
    /// Yields a pointer into wrapper-owned memory (`UTF8String`).
    Borrows,
    /// Yields an independent copy of the value.
    Copies,
}

/// A synthesized conversion expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionExpr {
    pub text: String,
    pub ownership: Ownership,
}

impl ConversionExpr {
    fn transfers(text: String) -> Self {
        Self {
            text,
            ownership: Ownership::Transfers,
        }
    }

    fn borrows(text: String) -> Self {
        Self {
            text,
            ownership: Ownership::Borrows,
        }
    }

    fn copies(text: String) -> Self {
        Self {
            text,
            ownership: Ownership::Copies,
        }
    }
}

impl Binder<'_> {
    /// Expression adopting a field of the C++ struct `obj` into the
    /// wrapper representation.
    pub fn cpp_to_objc(&self, site: &Site<'_>, field: &Field, obj: &str) -> Result<ConversionExpr> {
        let accessor = format!("{obj}.{}", field.name);
        self.cpp_value_to_objc(site, &field.kind, &accessor)
    }

    fn cpp_value_to_objc(
        &self,
        site: &Site<'_>,
        kind: &Kind,
        accessor: &str,
    ) -> Result<ConversionExpr> {
        match &kind.ty {
            // Widening into NSNumber-compatible scalars is implicit.
            Type::Primitive(_) => Ok(ConversionExpr::copies(accessor.to_string())),
            Type::Struct(id) => {
                let base = self.wrap_cpp_struct(*id, &format!("*{accessor}"));
                if kind.nullable {
                    let class = self.struct_class_name(*id);
                    Ok(ConversionExpr::copies(format!(
                        "^{class} *{{\n\
                         \x20   if ({accessor}.get() != nullptr) {{\n\
                         \x20       return {base};\n\
                         \x20   }}\n\
                         \x20   return nil;\n\
                         }}()"
                    )))
                } else {
                    Ok(ConversionExpr::copies(base))
                }
            }
            Type::Enum(id) => Ok(ConversionExpr::copies(format!(
                "static_cast<{}>({accessor})",
                self.enum_type_name(*id)
            ))),
            Type::String => Ok(ConversionExpr::copies(format!(
                "[NSString stringWithUTF8String:{accessor}.c_str()]"
            ))),
            Type::Array(element) => match &element.ty {
                Type::String | Type::Primitive(_) => Ok(ConversionExpr::copies(format!(
                    "NSArrayFromVector({accessor})"
                ))),
                Type::Struct(id) => {
                    let wrap = self.wrap_cpp_struct(*id, "*o");
                    Ok(ConversionExpr::copies(format!(
                        "^{{\n\
                         \x20   const auto a = [NSMutableArray new];\n\
                         \x20   for (const auto& o : {accessor}) {{\n\
                         \x20       [a addObject:{wrap}];\n\
                         \x20   }}\n\
                         \x20   return a;\n\
                         }}()"
                    )))
                }
                _ => Err(site.unsupported("array element", self.schema().describe(element))),
            },
            Type::Map(key, value) => {
                if key.ty != Type::String {
                    return Err(site.unsupported("map key", self.schema().describe(key)));
                }
                match &value.ty {
                    Type::String | Type::Primitive(_) => Ok(ConversionExpr::copies(format!(
                        "NSDictionaryFromMap({accessor})"
                    ))),
                    Type::Struct(id) => {
                        let wrap = self.wrap_cpp_struct(*id, "*item.second");
                        Ok(ConversionExpr::copies(format!(
                            "^{{\n\
                             \x20   const auto d = [NSMutableDictionary new];\n\
                             \x20   for (const auto& item : {accessor}) {{\n\
                             \x20       d[[NSString stringWithUTF8String:item.first.c_str()]] = {wrap};\n\
                             \x20   }}\n\
                             \x20   return d;\n\
                             }}()"
                        )))
                    }
                    _ => Err(site.unsupported("map value", self.schema().describe(value))),
                }
            }
            Type::Interface(_) | Type::Union(_) => {
                Err(site.unrecognized(self.schema().describe(kind)))
            }
        }
    }

    /// Expression rebuilding the C++ form of a field from the wrapper
    /// instance `obj`.
    pub fn objc_to_cpp(&self, site: &Site<'_>, field: &Field, obj: &str) -> Result<ConversionExpr> {
        let accessor = format!("{obj}.{}", property_name(&field.name));
        self.objc_value_to_cpp(site, &field.kind, &accessor)
    }

    fn objc_value_to_cpp(
        &self,
        site: &Site<'_>,
        kind: &Kind,
        accessor: &str,
    ) -> Result<ConversionExpr> {
        match &kind.ty {
            Type::Primitive(_) => Ok(ConversionExpr::copies(accessor.to_string())),
            Type::Struct(_) => {
                if kind.nullable {
                    Ok(ConversionExpr::transfers(format!(
                        "{accessor} != nil ? {accessor}.cppObjPtr : nullptr"
                    )))
                } else {
                    Ok(ConversionExpr::transfers(format!("{accessor}.cppObjPtr")))
                }
            }
            Type::Enum(id) => {
                let def = &self.schema()[*id];
                let namespace = cpp_namespace(&self.schema()[def.module].namespace);
                Ok(ConversionExpr::copies(format!(
                    "static_cast<{namespace}::{}>({accessor})",
                    def.name
                )))
            }
            Type::String => Ok(ConversionExpr::borrows(format!("{accessor}.UTF8String"))),
            Type::Array(element) => match &element.ty {
                Type::String => Ok(ConversionExpr::copies(format!(
                    "VectorFromNSArray({accessor})"
                ))),
                Type::Primitive(primitive) => {
                    let ctype = objc_numeric_type(*primitive);
                    let getter = nsnumber_getter(*primitive);
                    Ok(ConversionExpr::copies(format!(
                        "^{{\n\
                         \x20   std::vector<{ctype}> array;\n\
                         \x20   for (NSNumber *number in {accessor}) {{\n\
                         \x20       array.push_back(number.{getter});\n\
                         \x20   }}\n\
                         \x20   return array;\n\
                         }}()"
                    )))
                }
                Type::Struct(id) => {
                    let def = &self.schema()[*id];
                    let namespace = cpp_namespace(&self.schema()[def.module].namespace);
                    let class = self.struct_class_name(*id);
                    Ok(ConversionExpr::transfers(format!(
                        "^{{\n\
                         \x20   std::vector<{namespace}::{name}Ptr> array;\n\
                         \x20   for ({class} *obj in {accessor}) {{\n\
                         \x20       array.push_back(obj.cppObjPtr);\n\
                         \x20   }}\n\
                         \x20   return array;\n\
                         }}()",
                        name = def.name
                    )))
                }
                _ => Err(site.unsupported("array element", self.schema().describe(element))),
            },
            Type::Map(key, value) => {
                if key.ty != Type::String {
                    return Err(site.unsupported("map key", self.schema().describe(key)));
                }
                match &value.ty {
                    Type::Primitive(primitive) => {
                        let ctype = objc_numeric_type(*primitive);
                        let getter = nsnumber_getter(*primitive);
                        Ok(ConversionExpr::copies(self.flat_map_block(
                            &format!("base::flat_map<std::string, {ctype}>"),
                            accessor,
                            &format!("{accessor}[key].{getter}"),
                        )))
                    }
                    Type::String => Ok(ConversionExpr::copies(self.flat_map_block(
                        "base::flat_map<std::string, std::string>",
                        accessor,
                        &format!("{accessor}[key].UTF8String"),
                    ))),
                    Type::Struct(id) => {
                        let def = &self.schema()[*id];
                        let namespace = cpp_namespace(&self.schema()[def.module].namespace);
                        Ok(ConversionExpr::transfers(self.flat_map_block(
                            &format!("base::flat_map<std::string, {namespace}::{}Ptr>", def.name),
                            accessor,
                            &format!("{accessor}[key].cppObjPtr"),
                        )))
                    }
                    _ => Err(site.unsupported("map value", self.schema().describe(value))),
                }
            }
            Type::Interface(_) | Type::Union(_) => {
                Err(site.unrecognized(self.schema().describe(kind)))
            }
        }
    }

    /// Copy-constructing wrapper instantiation from a dereferenced C++
    /// value.
    fn wrap_cpp_struct(&self, id: StructId, value: &str) -> String {
        let class = self.struct_class_name(id);
        let name = &self.schema()[id].name;
        format!("[[{class} alloc] initWith{name}:{value}]")
    }

    fn flat_map_block(&self, map_type: &str, accessor: &str, entry: &str) -> String {
        format!(
            "^{{\n\
             \x20   {map_type} map;\n\
             \x20   for (NSString *key in {accessor}) {{\n\
             \x20       map[key.UTF8String] = {entry};\n\
             \x20   }}\n\
             \x20   return map;\n\
             }}()"
        )
    }
}
