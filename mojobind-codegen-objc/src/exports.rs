//! Reachable-type closure per module.

use indexmap::IndexSet;
use mojobind_schema::{EnumId, Kind, ModuleId, Schema, StructId, Type};

/// The deduplicated, insertion-ordered sets of struct and enum types a
/// module's generated output must declare to compile standalone. Ordering
/// is reproducible build-to-build but otherwise not significant.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModuleExports {
    pub structs: IndexSet<StructId>,
    pub enums: IndexSet<EnumId>,
}

/// Compute the export closure of a module.
///
/// Seeds with the module's own structs (minus `excluded_types`) and its
/// own top-level enums, then expands to a fixed point: every field of
/// every struct in the growing set pulls in the foreign struct/enum types
/// it references, directly or as a container element, along with their
/// nested enums. Wrappers are only generated for foreign types actually
/// used within this module's own types. Membership is checked before
/// expansion, so cyclic schemas terminate.
pub fn module_exports(schema: &Schema, module: ModuleId, excluded_types: &[String]) -> ModuleExports {
    let mut exports = ModuleExports::default();
    let home = &schema[module];

    for &id in &home.structs {
        if !excluded_types.contains(&schema[id].name) {
            exports.structs.insert(id);
        }
    }
    exports.enums.extend(home.enums.iter().copied());

    let mut i = 0;
    while i < exports.structs.len() {
        let id = exports.structs[i];
        i += 1;
        exports.enums.extend(schema[id].enums.iter().copied());
        for field in &schema[id].fields {
            visit_kind(schema, module, &field.kind, &mut exports);
        }
    }

    for &id in &home.interfaces {
        exports.enums.extend(schema[id].enums.iter().copied());
    }

    exports
}

/// Pull foreign struct/enum references out of one kind, unwrapping
/// container element kinds.
fn visit_kind(schema: &Schema, home: ModuleId, kind: &Kind, exports: &mut ModuleExports) {
    match &kind.ty {
        Type::Struct(id) => {
            if schema[*id].module != home {
                exports.structs.insert(*id);
            }
        }
        Type::Enum(id) => {
            if schema[*id].module != home {
                exports.enums.insert(*id);
            }
        }
        Type::Array(element) => visit_kind(schema, home, element, exports),
        Type::Map(key, value) => {
            visit_kind(schema, home, key, exports);
            visit_kind(schema, home, value, exports);
        }
        // Interfaces are remoted, not re-declared; unions have no
        // wrapper declaration at all.
        Type::Primitive(_) | Type::String | Type::Interface(_) | Type::Union(_) => {}
    }
}
