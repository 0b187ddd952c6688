use crate::domain::AppError;
use crate::services::EmbeddedProfiles;

/// Summary of a built-in profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    pub description: String,
    pub import_path: String,
    pub package: String,
}

pub fn list(catalog: &EmbeddedProfiles) -> Result<Vec<ProfileSummary>, AppError> {
    Ok(catalog
        .list()?
        .into_iter()
        .map(|profile| ProfileSummary {
            name: profile.name,
            description: profile.description,
            import_path: profile.import_path,
            package: profile.package,
        })
        .collect())
}
