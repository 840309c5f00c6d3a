//! The schema arena: modules and the named types they declare.

use std::ops::Index;

use crate::kind::{Field, Kind, Type};

macro_rules! arena_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) u32);

        impl $name {
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Identity of a [`Module`] within a [`Schema`].
    ModuleId
);
arena_id!(
    /// Identity of a [`StructDef`] within a [`Schema`].
    StructId
);
arena_id!(
    /// Identity of an [`EnumDef`] within a [`Schema`].
    EnumId
);
arena_id!(
    /// Identity of an [`InterfaceDef`] within a [`Schema`].
    InterfaceId
);
arena_id!(
    /// Identity of a [`UnionDef`] within a [`Schema`].
    UnionId
);

/// One mojom module: a dotted namespace plus the types it declares.
#[derive(Debug, Clone)]
pub struct Module {
    /// Dotted namespace ending in the reserved `mojom` segment,
    /// e.g. `brave_wallet.mojom`.
    pub namespace: String,
    /// Source path of the module, e.g. `geo/geo.mojom`. The emission
    /// driver derives artifact names from its basename.
    pub path: String,
    pub structs: Vec<StructId>,
    pub enums: Vec<EnumId>,
    pub interfaces: Vec<InterfaceId>,
    pub unions: Vec<UnionId>,
    /// Paths of imported modules, carried through to the export record.
    pub imports: Vec<String>,
}

impl Module {
    /// Basename of the module path, used to name generated artifacts.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A struct declaration. `enums` lists enums declared nested inside the
/// struct body; they are not members of the owning module's `enums`.
#[derive(Debug, Clone)]
pub struct StructDef {
    pub name: String,
    pub module: ModuleId,
    pub fields: Vec<Field>,
    pub enums: Vec<EnumId>,
}

/// One named constant of an enum, with its resolved integer payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone)]
pub struct EnumDef {
    pub name: String,
    pub module: ModuleId,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone)]
pub struct InterfaceDef {
    pub name: String,
    pub module: ModuleId,
    pub enums: Vec<EnumId>,
}

#[derive(Debug, Clone)]
pub struct UnionDef {
    pub name: String,
    pub module: ModuleId,
}

/// Arena of all modules and named types in one generation run.
///
/// Identity of a named type is its id; two kinds referencing the same
/// `StructId` reference the same declaration, which is what closure
/// computation dedups on.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    pub(crate) modules: Vec<Module>,
    pub(crate) structs: Vec<StructDef>,
    pub(crate) enums: Vec<EnumDef>,
    pub(crate) interfaces: Vec<InterfaceDef>,
    pub(crate) unions: Vec<UnionDef>,
}

impl Schema {
    pub fn modules(&self) -> impl Iterator<Item = (ModuleId, &Module)> {
        self.modules
            .iter()
            .enumerate()
            .map(|(i, m)| (ModuleId(i as u32), m))
    }

    /// Owning module of the named type behind a kind, if any.
    ///
    /// Containers report the module of their element type only when the
    /// element is itself a named type; primitives and strings have none.
    pub fn owning_module(&self, ty: &Type) -> Option<ModuleId> {
        match ty {
            Type::Struct(id) => Some(self[*id].module),
            Type::Enum(id) => Some(self[*id].module),
            Type::Interface(id) => Some(self[*id].module),
            Type::Union(id) => Some(self[*id].module),
            Type::Primitive(_) | Type::String | Type::Array(_) | Type::Map(_, _) => None,
        }
    }

    /// Human-readable descriptor for a kind, used in error messages.
    ///
    /// Named types are qualified by their owning namespace; nullability
    /// renders as a trailing `?`.
    pub fn describe(&self, kind: &Kind) -> String {
        let base = match &kind.ty {
            Type::Primitive(p) => p.as_str().to_string(),
            Type::String => "string".to_string(),
            Type::Enum(id) => {
                let def = &self[*id];
                format!("{}.{}", self[def.module].namespace, def.name)
            }
            Type::Struct(id) => {
                let def = &self[*id];
                format!("{}.{}", self[def.module].namespace, def.name)
            }
            Type::Union(id) => {
                let def = &self[*id];
                format!("{}.{}", self[def.module].namespace, def.name)
            }
            Type::Interface(id) => {
                let def = &self[*id];
                format!("{}.{}", self[def.module].namespace, def.name)
            }
            Type::Array(elem) => format!("array<{}>", self.describe(elem)),
            Type::Map(key, value) => {
                format!("map<{}, {}>", self.describe(key), self.describe(value))
            }
        };
        if kind.nullable {
            format!("{base}?")
        } else {
            base
        }
    }
}

macro_rules! arena_index {
    ($id:ident => $field:ident : $def:ty) => {
        impl Index<$id> for Schema {
            type Output = $def;

            fn index(&self, id: $id) -> &$def {
                &self.$field[id.index()]
            }
        }
    };
}

arena_index!(ModuleId => modules: Module);
arena_index!(StructId => structs: StructDef);
arena_index!(EnumId => enums: EnumDef);
arena_index!(InterfaceId => interfaces: InterfaceDef);
arena_index!(UnionId => unions: UnionDef);
