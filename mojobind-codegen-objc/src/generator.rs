//! Export-record assembly.

use mojobind_schema::{ModuleId, Schema};

use crate::binder::Binder;
use crate::convert::ConversionExpr;
use crate::defaults;
use crate::error::{Result, Site};
use crate::exports::module_exports;
use crate::naming::{enum_constant_name, property_name};
use crate::type_mapper::property_modifiers;

/// Receiver naming the C++ value in native→wrapper expressions.
const CPP_RECEIVER: &str = "obj";
/// Receiver naming the wrapper instance in wrapper→native expressions.
const OBJC_RECEIVER: &str = "self";

/// Everything synthesized for one field.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    /// Schema-side field name.
    pub name: String,
    pub property_name: String,
    pub modifiers: String,
    pub wrapper_type: String,
    pub default_value: String,
    pub needs_assignment: bool,
    /// C++ → Objective-C, against the `obj` receiver.
    pub to_wrapper: ConversionExpr,
    /// Objective-C → C++, against the `self` receiver.
    pub to_native: ConversionExpr,
}

/// One struct of the closure, materialized for emission.
#[derive(Debug, Clone)]
pub struct StructBinding {
    pub name: String,
    pub class_name: String,
    pub fields: Vec<FieldBinding>,
}

#[derive(Debug, Clone)]
pub struct EnumConstantBinding {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone)]
pub struct EnumBinding {
    pub name: String,
    pub type_name: String,
    pub constants: Vec<EnumConstantBinding>,
}

#[derive(Debug, Clone)]
pub struct InterfaceBinding {
    pub name: String,
    pub protocol_name: String,
}

/// Flat export record for one module, handed to the emission driver.
#[derive(Debug, Clone)]
pub struct ModuleBindings {
    /// Basename of the module path, e.g. `geo.mojom`; artifact names
    /// derive from it.
    pub module_name: String,
    pub namespace: String,
    pub class_prefix: String,
    /// Struct closure in insertion order, own structs first.
    pub structs: Vec<StructBinding>,
    /// Enum closure: own enums, nested enums, foreign enums pulled in by
    /// the struct closure, interface enums last.
    pub enums: Vec<EnumBinding>,
    pub interfaces: Vec<InterfaceBinding>,
    pub unions: Vec<String>,
    pub imports: Vec<String>,
}

/// Assembles the export record for one module.
///
/// Synthesis is pure and touches no I/O; a failing field aborts the whole
/// module so the emission driver never sees a partial record.
pub struct Generator<'a> {
    schema: &'a Schema,
    module: ModuleId,
    excluded_types: Vec<String>,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema, module: ModuleId) -> Self {
        Self {
            schema,
            module,
            excluded_types: Vec::new(),
        }
    }

    /// Type names to leave out of the struct closure entirely.
    pub fn exclude_types(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.excluded_types.extend(names);
        self
    }

    pub fn bindings(&self) -> Result<ModuleBindings> {
        let schema = self.schema;
        let home = &schema[self.module];
        let binder = Binder::new(schema);
        let exports = module_exports(schema, self.module, &self.excluded_types);

        let mut structs = Vec::with_capacity(exports.structs.len());
        for &id in &exports.structs {
            let def = &schema[id];
            let namespace = &schema[def.module].namespace;
            let mut fields = Vec::with_capacity(def.fields.len());
            for field in &def.fields {
                let site = Site::new(namespace, &def.name, &field.name);
                fields.push(FieldBinding {
                    name: field.name.clone(),
                    property_name: property_name(&field.name),
                    modifiers: property_modifiers(&field.kind),
                    wrapper_type: binder.wrapper_type(&site, &field.kind, false)?,
                    default_value: binder.default_value(&site, field)?,
                    needs_assignment: defaults::needs_assignment(field),
                    to_wrapper: binder.cpp_to_objc(&site, field, CPP_RECEIVER)?,
                    to_native: binder.objc_to_cpp(&site, field, OBJC_RECEIVER)?,
                });
            }
            structs.push(StructBinding {
                name: def.name.clone(),
                class_name: binder.struct_class_name(id),
                fields,
            });
        }

        let enums = exports
            .enums
            .iter()
            .map(|&id| {
                let def = &schema[id];
                EnumBinding {
                    name: def.name.clone(),
                    type_name: binder.enum_type_name(id),
                    constants: def
                        .values
                        .iter()
                        .map(|value| EnumConstantBinding {
                            name: enum_constant_name(&value.name),
                            value: value.value,
                        })
                        .collect(),
                }
            })
            .collect();

        let interfaces = home
            .interfaces
            .iter()
            .map(|&id| {
                let def = &schema[id];
                InterfaceBinding {
                    name: def.name.clone(),
                    protocol_name: format!("{}{}", binder.prefix(def.module), def.name),
                }
            })
            .collect();

        Ok(ModuleBindings {
            module_name: home.name().to_string(),
            namespace: home.namespace.clone(),
            class_prefix: binder.prefix(self.module),
            structs,
            enums,
            interfaces,
            unions: home.unions.iter().map(|&id| schema[id].name.clone()).collect(),
            imports: home.imports.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use mojobind_schema::{DefaultValue, Kind, Primitive, SchemaBuilder, Type};

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_point_scenario() {
        let mut builder = SchemaBuilder::new();
        let geo = builder.module("geo.mojom", "geo/geo.mojom");
        let point = builder.structure(geo, "Point");
        builder.field(point, "x", Kind::new(Type::Primitive(Primitive::Int32)));
        builder.field_with_default(
            point,
            "y",
            Kind::new(Type::Primitive(Primitive::Int32)),
            DefaultValue::Number("5".into()),
        );
        let schema = builder.finish();

        let bindings = Generator::new(&schema, geo).bindings().unwrap();
        assert_eq!(bindings.module_name, "geo.mojom");
        assert_eq!(bindings.class_prefix, "Geo");
        assert_eq!(bindings.structs.len(), 1);

        let point = &bindings.structs[0];
        assert_eq!(point.class_name, "GeoPoint");
        let [x, y] = point.fields.as_slice() else {
            panic!("expected two fields");
        };

        // Unboxed native-width properties.
        assert_eq!(x.wrapper_type, "int32_t");
        assert_eq!(y.wrapper_type, "int32_t");
        // Only the non-zero default needs an initializer.
        assert!(!x.needs_assignment);
        assert!(y.needs_assignment);
        assert_eq!(y.default_value, "5");
        // Pass-through accessors in both directions.
        assert_eq!(x.to_wrapper.text, "obj.x");
        assert_eq!(x.to_native.text, "self.x");
        assert_eq!(y.to_wrapper.text, "obj.y");
        assert_eq!(y.to_native.text, "self.y");
    }

    #[test]
    fn test_record_carries_enums_interfaces_unions_imports() {
        let mut builder = SchemaBuilder::new();
        let geo = builder.module("geo.mojom", "geo.mojom");
        builder.enumeration(geo, "Status", &[("kOk", 0), ("kLost", 1)]);
        builder.interface(geo, "Pager");
        builder.union(geo, "Shape");
        builder.import(geo, "net.mojom");
        let schema = builder.finish();

        let bindings = Generator::new(&schema, geo).bindings().unwrap();
        assert_eq!(bindings.enums.len(), 1);
        assert_eq!(bindings.enums[0].type_name, "GeoStatus");
        assert_eq!(bindings.enums[0].constants[0].name, "Ok");
        assert_eq!(bindings.enums[0].constants[1].value, 1);
        assert_eq!(bindings.interfaces[0].protocol_name, "GeoPager");
        assert_eq!(bindings.unions, vec!["Shape"]);
        assert_eq!(bindings.imports, vec!["net.mojom"]);
    }

    #[test]
    fn test_failing_field_aborts_the_module() {
        let mut builder = SchemaBuilder::new();
        let geo = builder.module("geo.mojom", "geo.mojom");
        let point = builder.structure(geo, "Point");
        builder.field(point, "x", Kind::new(Type::Primitive(Primitive::Int32)));
        let bad = builder.structure(geo, "Bad");
        builder.field(
            bad,
            "index",
            Kind::map(
                Kind::new(Type::Primitive(Primitive::Int32)),
                Kind::new(Type::String),
            ),
        );
        let schema = builder.finish();

        let err = Generator::new(&schema, geo).bindings().unwrap_err();
        assert!(matches!(err, Error::UnsupportedContainerElement { .. }));
    }

    #[test]
    fn test_exclusion_reaches_the_record() {
        let mut builder = SchemaBuilder::new();
        let geo = builder.module("geo.mojom", "geo.mojom");
        builder.structure(geo, "Point");
        builder.structure(geo, "InternalOnly");
        let schema = builder.finish();

        let bindings = Generator::new(&schema, geo)
            .exclude_types(["InternalOnly".to_string()])
            .bindings()
            .unwrap();
        let names: Vec<_> = bindings.structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Point"]);
    }
}
