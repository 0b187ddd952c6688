use crate::domain::AppError;

/// Retrieves the raw dependency lock document.
pub trait LockSource {
    /// Fetch the document at `location` (a URL or a path, depending on the source).
    fn fetch(&self, location: &str) -> Result<String, AppError>;
}
