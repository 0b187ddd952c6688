//! Glide dependency lock (`glide.lock`) model and bundled-Provides derivation.

use serde::{Deserialize, Deserializer};

use crate::domain::AppError;

pub const PROVIDES_HEADER: &str = "# Main package Provides";
pub const BUNDLED_OPEN: &str = "%if 0%{?with_bundled}";
pub const BUNDLED_CLOSE: &str = "%endif";

/// Parsed `glide.lock`. Keys not modelled here (`repo`, `vcs`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GlideLock {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub imports: Vec<GlideImport>,
    #[serde(default, rename = "testImports", deserialize_with = "null_as_empty")]
    pub test_imports: Vec<GlideImport>,
}

/// A single locked Go import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GlideImport {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subpackages: Vec<String>,
}

// `subpackages:` with no items is YAML null.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GlideLock {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Build the `Provides: bundled(golang(...))` block for every runtime import
/// subpackage, wrapped in the `with_bundled` conditional.
pub fn bundled_provides(lock: &GlideLock) -> Vec<String> {
    let mut lines = vec![PROVIDES_HEADER.to_string(), BUNDLED_OPEN.to_string()];

    for import in &lock.imports {
        for subpackage in &import.subpackages {
            let name = join_import_path(&import.name, subpackage);
            lines.push(format!(
                "Provides: bundled(golang({})) = %{{version}}-{}",
                name, import.version
            ));
        }
    }

    lines.push(BUNDLED_CLOSE.to_string());
    lines
}

/// Join an import root and a subpackage, then clean the result lexically the
/// way slash-separated Go import paths are cleaned.
pub fn join_import_path(root: &str, subpackage: &str) -> String {
    let joined = match (root.is_empty(), subpackage.is_empty()) {
        (true, true) => return String::new(),
        (true, false) => subpackage.to_string(),
        (false, true) => root.to_string(),
        (false, false) => format!("{}/{}", root, subpackage),
    };
    clean_path(&joined)
}

fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(last) if *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    match (rooted, body.is_empty()) {
        (true, _) => format!("/{}", body),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
