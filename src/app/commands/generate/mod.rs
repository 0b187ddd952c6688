//! Spec file generation: run the generator, then patch its output.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::app::AppContext;
use crate::app::config::LoadedProfile;
use crate::domain::{AppError, GlideLock, ReleaseInfo, SpecFile, bundled_provides};
use crate::ports::{GeneratorInvocation, LockSource, SpecGenerator};
use crate::services::{TemplateContext, render_all, render_template};

/// Options for a single generate run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub release: ReleaseInfo,
    /// Replaces the profile's generator command.
    pub generator_command: Option<String>,
    /// Patch an existing spec file without running the generator.
    pub skip_generate: bool,
    /// Spec file to patch instead of `<package>/<package>.spec`.
    pub spec_path: Option<PathBuf>,
    /// Replaces the profile's lock URL. Rendered as a template.
    pub lock_location: Option<String>,
    /// Local lock file read as-is. Takes precedence over `lock_location`.
    pub lock_path: Option<PathBuf>,
    /// Fail when an anchor line is missing instead of skipping it.
    pub strict: bool,
    /// Directory the generator runs in and relative paths resolve against.
    pub working_dir: PathBuf,
}

/// Result of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Final spec text, without a trailing newline.
    pub spec: String,
    /// Number of bundled Provides lines emitted.
    pub provides: usize,
    /// Anchors that were not present and therefore skipped.
    pub missing_anchors: Vec<String>,
}

pub fn execute<G, L>(
    ctx: &AppContext<G, L>,
    loaded: &LoadedProfile,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    G: SpecGenerator,
    L: LockSource,
{
    let profile = &loaded.profile;
    let vars = TemplateContext::for_release(profile, &options.release);

    if options.skip_generate {
        info!("Skipping spec file generation");
    } else {
        info!("Creating spec file using gofed...");
        let invocation = GeneratorInvocation {
            command: match &options.generator_command {
                Some(command) => command.clone(),
                None => render_template(&profile.generator.command, &vars, "generator.command")?,
            },
            args: render_all(&profile.generator.args, &vars, "generator.args")?,
            working_dir: Some(options.working_dir.clone()),
        };
        ctx.generator().generate(&invocation)?;
    }

    info!("Editing spec file...");
    let spec_path = options
        .working_dir
        .join(options.spec_path.clone().unwrap_or_else(|| profile.spec_path()));
    debug!("Reading {}", spec_path.display());
    let content = fs::read_to_string(&spec_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::SpecFileNotFound(spec_path.display().to_string()),
        _ => AppError::Io(e),
    })?;

    let mut spec = SpecFile::parse(&content);
    let mut anchors = AnchorReport::new(options.strict);

    let truncate_before = render_template(&profile.truncate_before, &vars, "truncate_before")?;
    anchors.check(spec.truncate_before(&truncate_before), &truncate_before)?;

    let preamble = render_template(&loaded.preamble, &vars, &profile.preamble)?;
    let preamble = preamble.strip_suffix('\n').unwrap_or(&preamble);
    spec.prepend(preamble.split('\n'));

    let lock_location = match &options.lock_path {
        Some(path) => path.display().to_string(),
        None => {
            let template = options.lock_location.as_deref().unwrap_or(&profile.lock.url);
            render_template(template, &vars, "lock.url")?
        }
    };
    info!("Fetching dependency lock from {}", lock_location);
    let lock = GlideLock::parse(&ctx.locks().fetch(&lock_location)?)?;

    let mut provides = bundled_provides(&lock);
    let provides_count = provides.len().saturating_sub(3);
    debug!("Derived {} bundled Provides from {} imports", provides_count, lock.imports.len());
    provides.push(String::new());

    let provides_before = render_template(&profile.provides_before, &vars, "provides_before")?;
    anchors.check(spec.insert_before(&provides_before, provides), &provides_before)?;

    info!("Done editing spec file.");
    for (index, replacement) in profile.replacements.iter().enumerate() {
        let anchor =
            render_template(&replacement.anchor, &vars, &format!("replace[{}].anchor", index))?;
        let lines = render_all(&replacement.lines, &vars, &format!("replace[{}].lines", index))?;
        anchors.check(spec.replace(&anchor, lines), &anchor)?;
    }

    Ok(GenerateOutcome {
        spec: spec.render(),
        provides: provides_count,
        missing_anchors: anchors.missing,
    })
}

struct AnchorReport {
    strict: bool,
    missing: Vec<String>,
}

impl AnchorReport {
    fn new(strict: bool) -> Self {
        Self { strict, missing: Vec::new() }
    }

    fn check(&mut self, found: bool, anchor: &str) -> Result<(), AppError> {
        if found {
            return Ok(());
        }
        if self.strict {
            return Err(AppError::AnchorNotFound(anchor.to_string()));
        }
        warn!("Anchor line not found, skipping: {}", anchor);
        self.missing.push(anchor.to_string());
        Ok(())
    }
}
