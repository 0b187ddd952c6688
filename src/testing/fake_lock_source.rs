use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::LockSource;

/// Serves lock documents from memory and records requested locations.
#[derive(Default)]
pub struct FakeLockSource {
    documents: HashMap<String, String>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeLockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, location: &str, content: &str) -> Self {
        self.documents.insert(location.to_string(), content.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl LockSource for FakeLockSource {
    fn fetch(&self, location: &str) -> Result<String, AppError> {
        self.requested.lock().unwrap().push(location.to_string());
        self.documents.get(location).cloned().ok_or_else(|| AppError::LockFetch {
            location: location.to_string(),
            details: "HTTP status 404".to_string(),
        })
    }
}
