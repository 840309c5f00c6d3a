//! Per-run synthesis context.

use std::cell::RefCell;
use std::collections::HashMap;

use mojobind_schema::{EnumId, ModuleId, Schema, StructId};

use crate::naming;

/// Synthesis context for one generation run.
///
/// Holds the schema plus a memo of module prefixes, which every resolved
/// wrapper type and conversion expression goes through. Memoization is an
/// efficiency concern only; prefixes are pure functions of the namespace.
pub struct Binder<'a> {
    schema: &'a Schema,
    prefixes: RefCell<HashMap<ModuleId, String>>,
}

impl<'a> Binder<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            prefixes: RefCell::new(HashMap::new()),
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Class prefix of a module, memoized for the run.
    pub fn prefix(&self, module: ModuleId) -> String {
        if let Some(prefix) = self.prefixes.borrow().get(&module) {
            return prefix.clone();
        }
        let prefix = naming::class_prefix(&self.schema[module].namespace);
        self.prefixes
            .borrow_mut()
            .insert(module, prefix.clone());
        prefix
    }

    /// Prefixed wrapper class name of a struct, using the owning
    /// module's prefix so a type keeps one name across every module that
    /// re-declares it.
    pub fn struct_class_name(&self, id: StructId) -> String {
        let def = &self.schema[id];
        format!("{}{}", self.prefix(def.module), def.name)
    }

    /// Prefixed wrapper name of an enum.
    pub fn enum_type_name(&self, id: EnumId) -> String {
        let def = &self.schema[id];
        format!("{}{}", self.prefix(def.module), def.name)
    }
}
