//! Artifact writing boundary.
//!
//! Template rendering belongs to the emission driver; it implements
//! [`ModuleRenderer`] and this module only validates the destination and
//! writes the three artifacts a module produces.

use std::path::{Path, PathBuf};

use eyre::Result;

use crate::error::Error;
use crate::generator::ModuleBindings;

/// Renders a module's export record into artifact text.
pub trait ModuleRenderer {
    /// Public header (`{name}.objc.h`).
    fn header(&self, bindings: &ModuleBindings) -> String;

    /// Private header with the C++ bridging declarations
    /// (`{name}.objc+private.h`).
    fn private_header(&self, bindings: &ModuleBindings) -> String;

    /// Implementation file (`{name}.objc.mm`).
    fn source(&self, bindings: &ModuleBindings) -> String;
}

/// Write the three artifacts for one module, returning their paths.
///
/// All contents are rendered before the first write, so a renderer panic
/// or an invalid target leaves no partial output behind.
pub fn generate_files(
    renderer: &dyn ModuleRenderer,
    bindings: &ModuleBindings,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    if output_dir.as_os_str().is_empty() {
        return Err(Error::MissingOutputTarget.into());
    }

    let name = &bindings.module_name;
    let artifacts = [
        (format!("{name}.objc.h"), renderer.header(bindings)),
        (
            format!("{name}.objc+private.h"),
            renderer.private_header(bindings),
        ),
        (format!("{name}.objc.mm"), renderer.source(bindings)),
    ];

    let mut written = Vec::with_capacity(artifacts.len());
    for (filename, content) in artifacts {
        let path = output_dir.join(filename);
        write_file(&path, &content)?;
        written.push(path);
    }
    Ok(written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
