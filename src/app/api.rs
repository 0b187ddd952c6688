//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::app::config::{self, LoadedProfile};
use crate::app::{
    AppContext,
    commands::{generate, profiles},
};
use crate::services::{
    CommandSpecGenerator, DEFAULT_PROFILE, EmbeddedProfiles, FileLockSource, HttpLockSource,
};

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::app::commands::profiles::ProfileSummary;
pub use crate::domain::{AppError, ReleaseInfo};

/// Inputs for [`generate`], as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub commit: String,
    pub version: String,
    /// Built-in profile name. Ignored when `config` is set.
    pub profile: Option<String>,
    /// Profile TOML file on disk.
    pub config: Option<PathBuf>,
    pub generator: Option<String>,
    pub skip_generate: bool,
    pub spec: Option<PathBuf>,
    pub lock_url: Option<String>,
    /// Local lock file; takes precedence over any URL.
    pub lock_file: Option<PathBuf>,
    pub strict: bool,
    /// Defaults to the current directory.
    pub working_dir: Option<PathBuf>,
}

/// Resolve the profile named by the request.
pub fn load_profile(request: &GenerateRequest) -> Result<LoadedProfile, AppError> {
    match &request.config {
        Some(path) => config::load_from_file(path),
        None => config::load_builtin(request.profile.as_deref().unwrap_or(DEFAULT_PROFILE)),
    }
}

/// Generate and patch the spec file, returning the final text.
pub fn generate(request: &GenerateRequest) -> Result<GenerateOutcome, AppError> {
    let loaded = load_profile(request)?;
    let working_dir = match &request.working_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let mut options = GenerateOptions {
        release: ReleaseInfo::new(&request.commit, &request.version)?,
        generator_command: request.generator.clone(),
        skip_generate: request.skip_generate,
        spec_path: request.spec.clone(),
        lock_location: request.lock_url.clone(),
        lock_path: None,
        strict: request.strict,
        working_dir,
    };

    match &request.lock_file {
        Some(path) => {
            options.lock_path = Some(options.working_dir.join(path));
            let ctx = AppContext::new(CommandSpecGenerator::new(), FileLockSource);
            generate::execute(&ctx, &loaded, &options)
        }
        None => {
            let locks = HttpLockSource::new(loaded.profile.lock.timeout_secs)?;
            let ctx = AppContext::new(CommandSpecGenerator::new(), locks);
            generate::execute(&ctx, &loaded, &options)
        }
    }
}

/// List built-in profiles.
pub fn profiles() -> Result<Vec<ProfileSummary>, AppError> {
    profiles::list(&EmbeddedProfiles::new())
}
