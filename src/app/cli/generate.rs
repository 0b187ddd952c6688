//! Generate command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::app::api::{self, GenerateRequest};
use crate::domain::AppError;

#[derive(Args)]
pub struct GenerateArgs {
    /// Commit at which release was done
    #[arg(long)]
    commit: String,
    /// Version of the current release
    #[arg(long = "version", value_name = "VERSION")]
    release_version: String,
    /// Built-in profile to use
    #[arg(short, long, conflicts_with = "config")]
    profile: Option<String>,
    /// Profile TOML file to use instead of a built-in profile
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Spec generator command (overrides the profile)
    #[arg(long, conflicts_with = "skip_generate")]
    generator: Option<String>,
    /// Patch an existing spec file without running the generator
    #[arg(long)]
    skip_generate: bool,
    /// Spec file to patch (defaults to <package>/<package>.spec)
    #[arg(long)]
    spec: Option<PathBuf>,
    /// URL of the Glide lock file (overrides the profile)
    #[arg(long, conflicts_with = "lock_file")]
    lock_url: Option<String>,
    /// Read the Glide lock from a local file
    #[arg(long)]
    lock_file: Option<PathBuf>,
    /// Write the spec file here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Fail when an anchor line is missing
    #[arg(long)]
    strict: bool,
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let request = GenerateRequest {
        commit: args.commit,
        version: args.release_version,
        profile: args.profile,
        config: args.config,
        generator: args.generator,
        skip_generate: args.skip_generate,
        spec: args.spec,
        lock_url: args.lock_url,
        lock_file: args.lock_file,
        strict: args.strict,
        working_dir: None,
    };

    let outcome = api::generate(&request)?;

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", outcome.spec))?;
            info!("Wrote {} ({} bundled Provides)", path.display(), outcome.provides);
        }
        None => println!("{}", outcome.spec),
    }

    if !outcome.missing_anchors.is_empty() {
        info!("{} anchor(s) were not found and left unpatched", outcome.missing_anchors.len());
    }
    Ok(())
}
