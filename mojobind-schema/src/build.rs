//! Incremental schema construction.
//!
//! Loaders resolve declarations in whatever order the source text allows;
//! the builder hands out ids immediately so cyclic references (struct A
//! holding a nullable struct B holding a nullable struct A) can be wired
//! up before either struct's fields exist.

use crate::kind::{DefaultValue, Field, Kind};
use crate::schema::{
    EnumDef, EnumId, EnumValue, InterfaceDef, InterfaceId, Module, ModuleId, Schema, StructDef,
    StructId, UnionDef, UnionId,
};

/// Builder for a [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module(&mut self, namespace: impl Into<String>, path: impl Into<String>) -> ModuleId {
        let id = ModuleId(self.schema.modules.len() as u32);
        self.schema.modules.push(Module {
            namespace: namespace.into(),
            path: path.into(),
            structs: Vec::new(),
            enums: Vec::new(),
            interfaces: Vec::new(),
            unions: Vec::new(),
            imports: Vec::new(),
        });
        id
    }

    /// Declare a struct in a module. Fields are attached separately with
    /// [`SchemaBuilder::field`] once the types they reference exist.
    pub fn structure(&mut self, module: ModuleId, name: impl Into<String>) -> StructId {
        let id = StructId(self.schema.structs.len() as u32);
        self.schema.structs.push(StructDef {
            name: name.into(),
            module,
            fields: Vec::new(),
            enums: Vec::new(),
        });
        self.schema.modules[module.index()].structs.push(id);
        id
    }

    pub fn field(&mut self, target: StructId, name: impl Into<String>, kind: Kind) {
        self.schema.structs[target.index()]
            .fields
            .push(Field::new(name, kind));
    }

    pub fn field_with_default(
        &mut self,
        target: StructId,
        name: impl Into<String>,
        kind: Kind,
        default: DefaultValue,
    ) {
        self.schema.structs[target.index()]
            .fields
            .push(Field::with_default(name, kind, default));
    }

    /// Declare a top-level enum in a module.
    pub fn enumeration(
        &mut self,
        module: ModuleId,
        name: impl Into<String>,
        values: &[(&str, i64)],
    ) -> EnumId {
        let id = self.push_enum(module, name, values);
        self.schema.modules[module.index()].enums.push(id);
        id
    }

    /// Declare an enum nested inside a struct body. Nested enums belong
    /// to the struct, not to the module's top-level enum list.
    pub fn struct_enum(
        &mut self,
        target: StructId,
        name: impl Into<String>,
        values: &[(&str, i64)],
    ) -> EnumId {
        let module = self.schema.structs[target.index()].module;
        let id = self.push_enum(module, name, values);
        self.schema.structs[target.index()].enums.push(id);
        id
    }

    /// Declare an enum nested inside an interface body.
    pub fn interface_enum(
        &mut self,
        target: InterfaceId,
        name: impl Into<String>,
        values: &[(&str, i64)],
    ) -> EnumId {
        let module = self.schema.interfaces[target.index()].module;
        let id = self.push_enum(module, name, values);
        self.schema.interfaces[target.index()].enums.push(id);
        id
    }

    pub fn interface(&mut self, module: ModuleId, name: impl Into<String>) -> InterfaceId {
        let id = InterfaceId(self.schema.interfaces.len() as u32);
        self.schema.interfaces.push(InterfaceDef {
            name: name.into(),
            module,
            enums: Vec::new(),
        });
        self.schema.modules[module.index()].interfaces.push(id);
        id
    }

    pub fn union(&mut self, module: ModuleId, name: impl Into<String>) -> UnionId {
        let id = UnionId(self.schema.unions.len() as u32);
        self.schema.unions.push(UnionDef {
            name: name.into(),
            module,
        });
        self.schema.modules[module.index()].unions.push(id);
        id
    }

    pub fn import(&mut self, module: ModuleId, path: impl Into<String>) {
        self.schema.modules[module.index()].imports.push(path.into());
    }

    pub fn finish(self) -> Schema {
        self.schema
    }

    fn push_enum(
        &mut self,
        module: ModuleId,
        name: impl Into<String>,
        values: &[(&str, i64)],
    ) -> EnumId {
        let id = EnumId(self.schema.enums.len() as u32);
        self.schema.enums.push(EnumDef {
            name: name.into(),
            module,
            values: values
                .iter()
                .map(|(name, value)| EnumValue {
                    name: (*name).to_string(),
                    value: *value,
                })
                .collect(),
        });
        id
    }
}
