//! Snapshot tests for the synthesized binding artifacts.
//!
//! These lock the exact expression text the emission driver receives.
//! Run `cargo insta review` to update snapshots when making intentional
//! changes.

use mojobind_codegen_objc::{Generator, ModuleBindings, Ownership};
use mojobind_schema::{DefaultValue, Kind, Primitive, Schema, SchemaBuilder, Type};

/// A representative two-module schema: geo.mojom declares the types under
/// generation, net.mojom contributes a foreign struct pulled in through a
/// field.
fn geo_schema() -> (Schema, mojobind_schema::ModuleId) {
    let mut builder = SchemaBuilder::new();
    let net = builder.module("net.mojom", "net/net.mojom");
    let endpoint = builder.structure(net, "Endpoint");
    builder.field(endpoint, "host", Kind::new(Type::String));
    builder.field(endpoint, "port", Kind::new(Type::Primitive(Primitive::Uint16)));

    let geo = builder.module("geo.mojom", "geo/geo.mojom");
    let status = builder.enumeration(geo, "Status", &[("kOk", 0), ("kLost", 1)]);
    let point = builder.structure(geo, "Point");
    builder.field(point, "x", Kind::new(Type::Primitive(Primitive::Int32)));
    builder.field_with_default(
        point,
        "y",
        Kind::new(Type::Primitive(Primitive::Int32)),
        DefaultValue::Number("5".into()),
    );
    let route = builder.structure(geo, "Route");
    builder.field(route, "label", Kind::nullable(Type::String));
    builder.field(route, "status", Kind::new(Type::Enum(status)));
    builder.field(route, "origin", Kind::nullable(Type::Struct(point)));
    builder.field(route, "points", Kind::array(Kind::new(Type::Struct(point))));
    builder.field(route, "endpoint", Kind::new(Type::Struct(endpoint)));
    builder.field(
        route,
        "weights",
        Kind::map(
            Kind::new(Type::String),
            Kind::new(Type::Primitive(Primitive::Double)),
        ),
    );
    builder.import(geo, "net/net.mojom");
    (builder.finish(), geo)
}

fn geo_bindings() -> ModuleBindings {
    let (schema, geo) = geo_schema();
    Generator::new(&schema, geo)
        .bindings()
        .expect("generation failed")
}

fn field<'a>(
    bindings: &'a ModuleBindings,
    struct_name: &str,
    field_name: &str,
) -> &'a mojobind_codegen_objc::FieldBinding {
    bindings
        .structs
        .iter()
        .find(|s| s.name == struct_name)
        .unwrap_or_else(|| panic!("no struct {struct_name}"))
        .fields
        .iter()
        .find(|f| f.name == field_name)
        .unwrap_or_else(|| panic!("no field {field_name}"))
}

#[test]
fn point_scenario_passes_through_unboxed() {
    let bindings = geo_bindings();
    assert_eq!(bindings.class_prefix, "Geo");
    assert_eq!(bindings.module_name, "geo.mojom");

    let x = field(&bindings, "Point", "x");
    insta::assert_snapshot!(x.wrapper_type, @"int32_t");
    insta::assert_snapshot!(x.to_wrapper.text, @"obj.x");
    insta::assert_snapshot!(x.to_native.text, @"self.x");
    assert!(!x.needs_assignment);

    let y = field(&bindings, "Point", "y");
    assert!(y.needs_assignment);
    insta::assert_snapshot!(y.default_value, @"5");
}

#[test]
fn nullable_string_field() {
    let bindings = geo_bindings();
    let label = field(&bindings, "Route", "label");
    insta::assert_snapshot!(label.wrapper_type, @"NSString *");
    insta::assert_snapshot!(label.modifiers, @"nonatomic, copy, nullable");
    insta::assert_snapshot!(label.default_value, @"nil");
    insta::assert_snapshot!(label.to_wrapper.text, @"[NSString stringWithUTF8String:obj.label.c_str()]");
    insta::assert_snapshot!(label.to_native.text, @"self.label.UTF8String");
    assert_eq!(label.to_native.ownership, Ownership::Borrows);
}

#[test]
fn enum_field_casts_each_direction() {
    let bindings = geo_bindings();
    let status = field(&bindings, "Route", "status");
    insta::assert_snapshot!(status.wrapper_type, @"GeoStatus");
    insta::assert_snapshot!(status.default_value, @"static_cast<GeoStatus>(0)");
    insta::assert_snapshot!(status.to_wrapper.text, @"static_cast<GeoStatus>(obj.status)");
    insta::assert_snapshot!(status.to_native.text, @"static_cast<geo::mojom::Status>(self.status)");
}

#[test]
fn nullable_struct_field_guards() {
    let bindings = geo_bindings();
    let origin = field(&bindings, "Route", "origin");
    insta::assert_snapshot!(origin.wrapper_type, @"GeoPoint *");
    insta::assert_snapshot!(origin.to_wrapper.text, @r"
^GeoPoint *{
    if (obj.origin.get() != nullptr) {
        return [[GeoPoint alloc] initWithPoint:*obj.origin];
    }
    return nil;
}()
");
    insta::assert_snapshot!(origin.to_native.text, @"self.origin != nil ? self.origin.cppObjPtr : nullptr");
    assert_eq!(origin.to_native.ownership, Ownership::Transfers);
}

#[test]
fn struct_array_field_converts_per_element() {
    let bindings = geo_bindings();
    let points = field(&bindings, "Route", "points");
    insta::assert_snapshot!(points.wrapper_type, @"NSArray<GeoPoint *> *");
    insta::assert_snapshot!(points.default_value, @"@[]");
    insta::assert_snapshot!(points.to_wrapper.text, @r"
^{
    const auto a = [NSMutableArray new];
    for (const auto& o : obj.points) {
        [a addObject:[[GeoPoint alloc] initWithPoint:*o]];
    }
    return a;
}()
");
    insta::assert_snapshot!(points.to_native.text, @r"
^{
    std::vector<geo::mojom::PointPtr> array;
    for (GeoPoint *obj in self.points) {
        array.push_back(obj.cppObjPtr);
    }
    return array;
}()
");
}

#[test]
fn numeric_map_field_bulk_in_per_entry_out() {
    let bindings = geo_bindings();
    let weights = field(&bindings, "Route", "weights");
    insta::assert_snapshot!(weights.wrapper_type, @"NSDictionary<NSString *, NSNumber *> *");
    insta::assert_snapshot!(weights.to_wrapper.text, @"NSDictionaryFromMap(obj.weights)");
    insta::assert_snapshot!(weights.to_native.text, @r"
^{
    base::flat_map<std::string, double> map;
    for (NSString *key in self.weights) {
        map[key.UTF8String] = self.weights[key].doubleValue;
    }
    return map;
}()
");
}

#[test]
fn foreign_struct_is_declared_with_owning_prefix() {
    let bindings = geo_bindings();
    let endpoint = field(&bindings, "Route", "endpoint");
    insta::assert_snapshot!(endpoint.wrapper_type, @"NetEndpoint *");

    // The closure materializes net.Endpoint in geo's record.
    let names: Vec<_> = bindings.structs.iter().map(|s| s.class_name.as_str()).collect();
    assert_eq!(names, vec!["GeoPoint", "GeoRoute", "NetEndpoint"]);

    // And its own fields are fully synthesized there.
    let host = field(&bindings, "Endpoint", "host");
    insta::assert_snapshot!(host.to_wrapper.text, @"[NSString stringWithUTF8String:obj.host.c_str()]");
}

#[test]
fn numeric_pass_through_is_symmetric_for_every_width() {
    // Every scalar width converts as a bare accessor in both directions,
    // so composing the two conversions is the identity on the value.
    let widths = [
        Primitive::Bool,
        Primitive::Int8,
        Primitive::Uint8,
        Primitive::Int16,
        Primitive::Uint16,
        Primitive::Int32,
        Primitive::Uint32,
        Primitive::Int64,
        Primitive::Uint64,
        Primitive::Float,
        Primitive::Double,
    ];

    let mut builder = SchemaBuilder::new();
    let m = builder.module("widths.mojom", "widths.mojom");
    let s = builder.structure(m, "AllWidths");
    for (i, width) in widths.iter().enumerate() {
        builder.field(s, format!("v{i}"), Kind::new(Type::Primitive(*width)));
    }
    let schema = builder.finish();

    let bindings = Generator::new(&schema, m).bindings().unwrap();
    for (i, f) in bindings.structs[0].fields.iter().enumerate() {
        assert_eq!(f.to_wrapper.text, format!("obj.v{i}"));
        assert_eq!(f.to_native.text, format!("self.v{i}"));
        assert_eq!(f.to_wrapper.ownership, Ownership::Copies);
        assert_eq!(f.to_native.ownership, Ownership::Copies);
    }
}
