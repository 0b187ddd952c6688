//! kompose-rpmspec: generate the kompose RPM spec file with gofed and patch it
//! for a release (preamble, bundled Provides, build/test macros, completions).

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOutcome, GenerateRequest, ProfileSummary};
pub use domain::{AppError, GlideLock, Profile, ReleaseInfo, SpecFile, bundled_provides};
