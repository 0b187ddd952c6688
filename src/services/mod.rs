mod embedded_profiles;
mod gofed_command;
mod lock_source_file;
mod lock_source_http;
mod template_renderer;

pub use embedded_profiles::{DEFAULT_PROFILE, EmbeddedProfiles};
pub use gofed_command::CommandSpecGenerator;
pub use lock_source_file::FileLockSource;
pub use lock_source_http::HttpLockSource;
pub use template_renderer::{TemplateContext, render_all, render_template};
