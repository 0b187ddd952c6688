use std::path::PathBuf;

use crate::domain::AppError;

/// A fully rendered spec generator command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInvocation {
    pub command: String,
    pub args: Vec<String>,
    /// Directory the generator runs in; its output lands relative to it.
    pub working_dir: Option<PathBuf>,
}

impl GeneratorInvocation {
    pub fn display(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Produces the initial RPM spec file on disk.
pub trait SpecGenerator {
    fn generate(&self, invocation: &GeneratorInvocation) -> Result<(), AppError>;
}
