//! Resolved mojom module model for the mojobind binding generator.
//!
//! This crate provides the fully-resolved type descriptors the code
//! generators consume. A schema loader is expected to hand over a
//! [`Schema`] satisfying the invariants documented on each type: every
//! kind resolved (no forward-reference placeholders), every struct, enum,
//! and interface carrying its owning module, enum values carrying resolved
//! integer payloads.
//!
//! # Architecture
//!
//! ```text
//! .mojom text → schema loader (external) → mojobind-schema → codegen
//! ```
//!
//! The model is designed to be:
//! - Target-language agnostic (no Objective-C/C++ concerns)
//! - Cycle-safe (types reference each other through typed ids into an
//!   arena, so `A → B → A` schemas traverse without ownership knots)
//! - Self-contained (no external dependencies beyond std)

mod build;
mod kind;
mod schema;

pub use build::SchemaBuilder;
pub use kind::{DefaultValue, Field, Kind, Primitive, Type};
pub use schema::{
    EnumDef, EnumId, EnumValue, InterfaceDef, InterfaceId, Module, ModuleId, Schema, StructDef,
    StructId, UnionDef, UnionId,
};
