use miette::Diagnostic;
use thiserror::Error;

/// Result type for binding synthesis.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures crossing the generator boundary.
///
/// None of these are recoverable: there is deliberately no fallback
/// rendering for an unsupported combination, since degraded output would
/// be silently wrong glue code. A module that fails never hands a partial
/// export record downstream.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Array element, map key, or map value outside the supported matrix.
    #[error(
        "unsupported {slot} kind `{descriptor}` on field `{field}` of `{container}` in {namespace}"
    )]
    #[diagnostic(
        code(mojobind::unsupported_container_element),
        help("array elements and map values may be strings, numerics, or structs; map keys must be strings")
    )]
    UnsupportedContainerElement {
        slot: &'static str,
        descriptor: String,
        namespace: String,
        container: String,
        field: String,
    },

    /// A kind no resolver or synthesizer has a mapping for, e.g. a union
    /// property. Indicates a schema/type-system mismatch, not a
    /// recoverable condition.
    #[error("unrecognized kind `{descriptor}` on field `{field}` of `{container}` in {namespace}")]
    #[diagnostic(code(mojobind::unrecognized_kind))]
    UnrecognizedKind {
        descriptor: String,
        namespace: String,
        container: String,
        field: String,
    },

    /// The emission driver was invoked without a destination directory.
    #[error("no output directory given to generate files")]
    #[diagnostic(code(mojobind::missing_output_target))]
    MissingOutputTarget,
}

/// Where synthesis is currently happening, for error reporting.
///
/// Carries the owning namespace, the struct being generated, and the
/// field under synthesis so failures name the offending descriptor
/// precisely.
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    pub namespace: &'a str,
    pub container: &'a str,
    pub field: &'a str,
}

impl<'a> Site<'a> {
    pub fn new(namespace: &'a str, container: &'a str, field: &'a str) -> Self {
        Self {
            namespace,
            container,
            field,
        }
    }

    pub fn unsupported(&self, slot: &'static str, descriptor: impl Into<String>) -> Error {
        Error::UnsupportedContainerElement {
            slot,
            descriptor: descriptor.into(),
            namespace: self.namespace.to_string(),
            container: self.container.to_string(),
            field: self.field.to_string(),
        }
    }

    pub fn unrecognized(&self, descriptor: impl Into<String>) -> Error {
        Error::UnrecognizedKind {
            descriptor: descriptor.into(),
            namespace: self.namespace.to_string(),
            container: self.container.to_string(),
            field: self.field.to_string(),
        }
    }
}
