pub mod error;
pub mod glide;
pub mod profile;
pub mod release;
pub mod spec_file;

pub use error::AppError;
pub use glide::{GlideImport, GlideLock, bundled_provides};
pub use profile::{GeneratorConfig, LockConfig, Profile, Replacement};
pub use release::ReleaseInfo;
pub use spec_file::SpecFile;
