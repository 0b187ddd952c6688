//! Spec generator implementation that shells out to an external command.

use std::env;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::domain::AppError;
use crate::ports::{GeneratorInvocation, SpecGenerator};

/// Runs the generator as a child process and forwards its stdout to the log.
#[derive(Debug, Clone, Default)]
pub struct CommandSpecGenerator;

impl CommandSpecGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SpecGenerator for CommandSpecGenerator {
    fn generate(&self, invocation: &GeneratorInvocation) -> Result<(), AppError> {
        let program = resolve_program(&invocation.command)?;
        debug!("Running {} ({})", invocation.display(), program.display());

        let mut command = Command::new(&program);
        command.args(&invocation.args).stdin(Stdio::null()).stdout(Stdio::piped());
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        let failed = |details: String| AppError::GeneratorFailed {
            command: invocation.display(),
            details,
        };

        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::GeneratorNotFound(invocation.command.clone()),
            _ => failed(format!("error starting command: {}", e)),
        })?;

        if let Some(stdout) = child.stdout.take() {
            forward_output(BufReader::new(stdout));
        }

        let status = child.wait().map_err(|e| failed(format!("error waiting for command: {}", e)))?;
        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exit status {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(failed(details));
        }

        Ok(())
    }
}

/// Log every line of `reader` until EOF. Bytes are not required to be UTF-8.
/// After a read error the rest is drained so the child never sees a closed pipe.
fn forward_output<R: BufRead>(mut reader: R) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                info!("{}", line.trim_end_matches(['\n', '\r']));
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("Stopped logging generator output: {}", e);
                if let Err(e) = io::copy(&mut reader, &mut io::sink()) {
                    debug!("Failed to drain generator output: {}", e);
                }
                break;
            }
        }
    }
}

/// Locate `command` the way a shell would. Commands containing a path
/// separator are used as given.
fn resolve_program(command: &str) -> Result<PathBuf, AppError> {
    if command.contains('/') {
        let path = PathBuf::from(command);
        return if is_executable(&path) {
            Ok(path)
        } else {
            Err(AppError::GeneratorNotFound(command.to_string()))
        };
    }

    let Some(paths) = env::var_os("PATH") else {
        return Err(AppError::GeneratorNotFound(command.to_string()));
    };

    env::split_paths(&paths)
        .map(|dir| dir.join(command))
        .find(|candidate| is_executable(candidate))
        .ok_or_else(|| AppError::GeneratorNotFound(command.to_string()))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata().map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
