//! Release coordinates spliced into the generator command line and spec text.

use crate::domain::AppError;

/// The commit and version being packaged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub commit: String,
    pub version: String,
}

impl ReleaseInfo {
    pub fn new(commit: &str, version: &str) -> Result<Self, AppError> {
        Ok(Self {
            commit: validate_field("commit", commit)?,
            version: validate_field("version", version)?,
        })
    }

    /// First seven characters of the commit, as `%{shortcommit}` expands to.
    pub fn short_commit(&self) -> &str {
        let end = self.commit.char_indices().nth(7).map(|(i, _)| i).unwrap_or(self.commit.len());
        &self.commit[..end]
    }
}

fn validate_field(field: &'static str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidRelease {
            field,
            value: value.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidRelease {
            field,
            value: value.to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_commit_and_version() {
        let release = ReleaseInfo::new("135165b39c55d4e2ea9a1f8b3e6d1d8a7f51a6a9", "0.7.0").unwrap();
        assert_eq!(release.short_commit(), "135165b");
        assert_eq!(release.version, "0.7.0");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let release = ReleaseInfo::new(" abc ", "1.0\n").unwrap();
        assert_eq!(release.commit, "abc");
        assert_eq!(release.version, "1.0");
        assert_eq!(release.short_commit(), "abc");
    }

    #[test]
    fn rejects_empty_commit() {
        let err = ReleaseInfo::new("", "1.0").unwrap_err();
        assert!(matches!(err, AppError::InvalidRelease { field: "commit", .. }));
    }

    #[test]
    fn rejects_embedded_whitespace() {
        let err = ReleaseInfo::new("abc", "1.0 beta").unwrap_err();
        assert!(matches!(err, AppError::InvalidRelease { field: "version", .. }));
    }
}
