//! Built-in profiles and preamble templates compiled into the binary.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, Profile};

static PROFILES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/profiles");
static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

pub const DEFAULT_PROFILE: &str = "kompose";

/// Catalog of built-in profiles.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedProfiles;

impl EmbeddedProfiles {
    pub fn new() -> Self {
        Self
    }

    /// All built-in profiles, sorted by name.
    pub fn list(&self) -> Result<Vec<Profile>, AppError> {
        let mut profiles = Vec::new();
        for file in PROFILES_DIR.files() {
            if file.path().extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }
            let content = file.contents_utf8().ok_or_else(|| {
                AppError::config_error(format!(
                    "Embedded profile is not UTF-8: {}",
                    file.path().display()
                ))
            })?;
            profiles.push(Profile::parse(content)?);
        }
        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(profiles)
    }

    pub fn get(&self, name: &str) -> Result<Profile, AppError> {
        let profiles = self.list()?;
        let available = profiles.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ");
        profiles
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AppError::ProfileNotFound { name: name.to_string(), available })
    }

    /// Preamble template shipped with the binary, by file name.
    pub fn template(&self, name: &str) -> Option<&'static str> {
        TEMPLATES_DIR.get_file(name).and_then(|file| file.contents_utf8())
    }
}
