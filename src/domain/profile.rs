//! Packaging profile: everything that differs between packaged projects.

use serde::Deserialize;

use crate::domain::AppError;

/// One packaging variant, loaded from TOML.
///
/// String fields are templates; they are rendered against the release and
/// import-path variables before use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Go import path of the project, e.g. `github.com/kubernetes/kompose`.
    pub import_path: String,
    /// Directory and basename of the generated spec file.
    pub package: String,
    /// Name of the preamble template that replaces the generated header.
    pub preamble: String,
    #[serde(default = "default_truncate_before")]
    pub truncate_before: String,
    #[serde(default = "default_provides_before")]
    pub provides_before: String,
    pub generator: GeneratorConfig,
    pub lock: LockConfig,
    #[serde(default, rename = "replace")]
    pub replacements: Vec<Replacement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LockConfig {
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Replace the first line equal to `anchor` with `lines`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Replacement {
    pub anchor: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

fn default_truncate_before() -> String {
    "%if ! 0%{?with_bundled}".to_string()
}

fn default_provides_before() -> String {
    "%description".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Profile {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let profile: Profile = toml::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let invalid = |reason: &str| AppError::InvalidProfile {
            profile: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if self.import_path.trim().is_empty() {
            return Err(invalid("import_path must not be empty"));
        }
        if self.package.trim().is_empty() || self.package.contains('/') {
            return Err(invalid("package must be a non-empty name without '/'"));
        }
        if self.preamble.trim().is_empty() {
            return Err(invalid("preamble must name a template"));
        }
        if self.truncate_before.is_empty() || self.provides_before.is_empty() {
            return Err(invalid("anchors must not be empty"));
        }
        if self.generator.command.trim().is_empty() {
            return Err(invalid("generator.command must not be empty"));
        }
        if self.lock.url.trim().is_empty() {
            return Err(invalid("lock.url must not be empty"));
        }
        if self.lock.timeout_secs == 0 {
            return Err(invalid("lock.timeout_secs must be greater than 0"));
        }
        if let Some(index) = self.replacements.iter().position(|r| r.anchor.is_empty()) {
            return Err(invalid(&format!("replace[{}].anchor must not be empty", index)));
        }
        Ok(())
    }

    /// Split the import path into `(provider, project, repo)`.
    ///
    /// `github.com/kubernetes/kompose` yields `("github", "kubernetes", "kompose")`.
    /// Missing segments come back empty.
    pub fn import_segments(&self) -> (String, String, String) {
        let mut segments = self.import_path.split('/').filter(|s| !s.is_empty());
        let host = segments.next().unwrap_or_default();
        let provider = host.split('.').next().unwrap_or_default().to_string();
        let project = segments.next().unwrap_or_default().to_string();
        let repo = segments.next_back().unwrap_or_default().to_string();
        (provider, project, repo)
    }

    /// Path of the generated spec file relative to the working directory.
    pub fn spec_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.package).join(format!("{}.spec", self.package))
    }
}
