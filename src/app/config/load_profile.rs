//! Profile resolution: built-in by name, or a TOML file on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::domain::{AppError, Profile};
use crate::services::EmbeddedProfiles;

/// A profile together with its preamble template text.
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub profile: Profile,
    pub preamble: String,
}

/// Load a built-in profile by name.
pub fn load_builtin(name: &str) -> Result<LoadedProfile, AppError> {
    let catalog = EmbeddedProfiles::new();
    let profile = catalog.get(name)?;
    let preamble = builtin_preamble(&catalog, &profile)?;
    Ok(LoadedProfile { profile, preamble })
}

/// Load a profile from a TOML file.
///
/// The preamble is looked up next to the profile file first, then among the
/// built-in templates.
pub fn load_from_file(path: &Path) -> Result<LoadedProfile, AppError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            AppError::config_error(format!("Profile file not found: {}", path.display()))
        }
        _ => AppError::Io(e),
    })?;
    let profile = Profile::parse(&content)?;

    let local = path.parent().unwrap_or_else(|| Path::new(".")).join(&profile.preamble);
    if local.is_file() {
        debug!("Using preamble template {}", local.display());
        let preamble = fs::read_to_string(&local)?;
        return Ok(LoadedProfile { profile, preamble });
    }

    let preamble = builtin_preamble(&EmbeddedProfiles::new(), &profile)?;
    Ok(LoadedProfile { profile, preamble })
}

fn builtin_preamble(catalog: &EmbeddedProfiles, profile: &Profile) -> Result<String, AppError> {
    catalog.template(&profile.preamble).map(str::to_string).ok_or_else(|| AppError::InvalidProfile {
        profile: profile.name.clone(),
        reason: format!("preamble template '{}' not found", profile.preamble),
    })
}
