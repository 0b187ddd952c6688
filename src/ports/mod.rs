mod lock_source;
mod spec_generator;

pub use lock_source::LockSource;
pub use spec_generator::{GeneratorInvocation, SpecGenerator};
