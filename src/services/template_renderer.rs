//! Strict `{{ var }}` interpolation for profile strings and preamble templates.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, Profile, ReleaseInfo};

/// Variables available to profile templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Context for rendering `profile` at `release`.
    pub fn for_release(profile: &Profile, release: &ReleaseInfo) -> Self {
        let (provider, project, repo) = profile.import_segments();
        Self::new()
            .with_var("name", profile.name.as_str())
            .with_var("commit", release.commit.as_str())
            .with_var("shortcommit", release.short_commit())
            .with_var("version", release.version.as_str())
            .with_var("import_path", profile.import_path.as_str())
            .with_var("package", profile.package.as_str())
            .with_var("provider", provider)
            .with_var("project", project)
            .with_var("repo", repo)
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render a template string. Only `{{ ... }}` interpolation is allowed;
/// undefined variables are errors.
pub fn render_template(
    template: &str,
    context: &TemplateContext,
    template_name: &str,
) -> Result<String, AppError> {
    if !template.contains("{{") && !template.contains("{%") && !template.contains("{#") {
        return Ok(template.to_string());
    }
    if let Some(token) = disallowed_template_token(template) {
        return Err(AppError::TemplateRender {
            template: template_name.to_string(),
            reason: format!("template syntax '{}' is not allowed", token),
        });
    }

    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env
    });

    env.render_str(template, &context.variables).map_err(|err| AppError::TemplateRender {
        template: template_name.to_string(),
        reason: err.to_string(),
    })
}

/// Render each entry of `templates`, naming errors after `field[index]`.
pub fn render_all(
    templates: &[String],
    context: &TemplateContext,
    field: &str,
) -> Result<Vec<String>, AppError> {
    templates
        .iter()
        .enumerate()
        .map(|(index, template)| render_template(template, context, &format!("{}[{}]", field, index)))
        .collect()
}

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}
