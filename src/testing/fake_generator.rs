use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{GeneratorInvocation, SpecGenerator};

/// Writes a canned spec file instead of running gofed.
#[derive(Default)]
pub struct FakeSpecGenerator {
    pub invocations: Mutex<Vec<GeneratorInvocation>>,
    output: Option<(PathBuf, String)>,
    fail_with: Option<String>,
}

impl FakeSpecGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `content` to `relative_path` under the invocation's working dir.
    pub fn writing(relative_path: impl Into<PathBuf>, content: &str) -> Self {
        Self { output: Some((relative_path.into(), content.to_string())), ..Self::default() }
    }

    pub fn failing(details: &str) -> Self {
        Self { fail_with: Some(details.to_string()), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<GeneratorInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl SpecGenerator for FakeSpecGenerator {
    fn generate(&self, invocation: &GeneratorInvocation) -> Result<(), AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        if let Some(details) = &self.fail_with {
            return Err(AppError::GeneratorFailed {
                command: invocation.display(),
                details: details.clone(),
            });
        }

        if let Some((relative, content)) = &self.output {
            let root = invocation.working_dir.clone().unwrap_or_default();
            let path = root.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        Ok(())
    }
}
