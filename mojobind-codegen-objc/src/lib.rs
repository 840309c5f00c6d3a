//! Objective-C binding generator core for resolved mojom modules.
//!
//! Given a [`mojobind_schema::Schema`], this crate synthesizes, per
//! struct field, the four artifacts an Objective-C wrapper needs: the
//! declared property type, its default-value expression, and the two
//! conversion expressions bridging the C++ representation and the
//! Objective-C one. It also computes the per-module closure of struct and
//! enum types the generated output must declare to compile standalone.
//!
//! Rendering those artifacts into header/source text is the emission
//! driver's job; it implements [`ModuleRenderer`] and receives a flat
//! [`ModuleBindings`] export record.
//!
//! # Module Organization
//!
//! - [`classify`] - Kind categories and the primitive type tables
//! - [`naming`] - property/enum-constant/class-prefix identifier rules
//! - [`binder`] - per-run synthesis context ([`Binder`])
//! - [`type_mapper`] - wrapper property types and modifiers
//! - [`defaults`] - default-value expressions and elision
//! - [`convert`] - bidirectional conversion expression synthesis
//! - [`exports`] - reachable-type closure per module
//! - [`generator`] - export-record assembly ([`Generator`])
//! - [`emit`] - artifact writing boundary

pub mod binder;
pub mod classify;
pub mod convert;
pub mod defaults;
pub mod emit;
mod error;
pub mod exports;
pub mod generator;
pub mod naming;
pub mod type_mapper;

pub use binder::Binder;
pub use convert::{ConversionExpr, Ownership};
pub use emit::{ModuleRenderer, generate_files};
pub use error::{Error, Result, Site};
pub use exports::{ModuleExports, module_exports};
pub use generator::{
    EnumBinding, EnumConstantBinding, FieldBinding, Generator, InterfaceBinding, ModuleBindings,
    StructBinding,
};
