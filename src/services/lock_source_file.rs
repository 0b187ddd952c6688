use std::fs;
use std::io::ErrorKind;

use crate::domain::AppError;
use crate::ports::LockSource;

/// Reads the dependency lock from a local file instead of the network.
#[derive(Debug, Clone, Default)]
pub struct FileLockSource;

impl LockSource for FileLockSource {
    fn fetch(&self, location: &str) -> Result<String, AppError> {
        fs::read_to_string(location).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::LockFetch {
                location: location.to_string(),
                details: "file not found".to_string(),
            },
            _ => AppError::Io(e),
        })
    }
}
