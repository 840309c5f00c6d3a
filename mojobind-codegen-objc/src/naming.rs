//! Identifier rules for the Objective-C surface.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Property names that collide with `NSObject` selectors and their
/// substitutes. Intentionally incomplete; extend it as collisions with
/// the wrapper runtime surface.
static RESERVED_PROPERTY_NAMES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("description", "desc"),
            ("debugDescription", "debugDesc"),
            ("hash", "hash_"),
            ("isProxy", "proxy"),
            ("zone", "zone_"),
            ("class", "class_"),
            ("dealloc", "dealloc_"),
            ("finalize", "finalize_"),
            ("copy", "copy_"),
        ])
    });

/// Snake-cased field name to Objective-C property name.
///
/// Input already in lowerCamel passes through unchanged, so the
/// transform is idempotent. The result is substituted when it collides
/// with a reserved selector.
pub fn property_name(name: &str) -> String {
    let camel = if !name.contains('_') && name.chars().next().is_some_and(|c| c.is_lowercase()) {
        name.to_string()
    } else {
        let mut parts = name.split('_');
        let mut out = parts.next().unwrap_or("").to_lowercase();
        for part in parts {
            out.push_str(&capitalize(part));
        }
        out
    };
    match RESERVED_PROPERTY_NAMES.get(camel.as_str()) {
        Some(substitute) => (*substitute).to_string(),
        None => camel,
    }
}

/// Enum constant name to Objective-C constant name.
///
/// `k`-prefixed upper-camel constants are already cased correctly and
/// only lose the prefix; this takes precedence over recapitalization.
/// Everything else is treated as snake case and upper-cameled.
pub fn enum_constant_name(name: &str) -> String {
    let mut chars = name.chars();
    if chars.next() == Some('k') && chars.next().is_some_and(|c| c.is_uppercase()) {
        return name[1..].to_string();
    }
    name.split('_').map(capitalize).collect()
}

/// Namespace-derived prefix for every wrapper type declared from a
/// module. The wrapper surface has one flat identifier namespace, so the
/// prefix is what keeps `a.mojom.Item` and `b.mojom.Item` apart.
///
/// Strips the reserved `mojom` namespace segment, then upper-camels the
/// remainder. Some modules don't use snake_cased namespaces, so the value
/// is normalized through lower-snake first for consistent output.
pub fn class_prefix(namespace: &str) -> String {
    let base = namespace.strip_suffix(".mojom").unwrap_or(namespace);
    let base = base.replace('.', "_");
    to_upper_camel(&to_lower_snake(&base))
}

/// C++ namespace of a module, `::`-separated. The `mojom` segment is
/// kept: `geo.mojom` names types under `geo::mojom`.
pub fn cpp_namespace(namespace: &str) -> String {
    namespace.replace('.', "::")
}

/// Convert a string to lower_snake_case (e.g. "BraveWallet" -> "brave_wallet").
pub fn to_lower_snake(s: &str) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push('_');
        }
        for lower in c.to_lowercase() {
            out.push(lower);
        }
    }
    out.replace('-', "_")
}

/// Convert a string to UpperCamelCase (e.g. "brave_wallet" -> "BraveWallet").
pub fn to_upper_camel(s: &str) -> String {
    s.split('_').map(capitalize).collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
    }
}
