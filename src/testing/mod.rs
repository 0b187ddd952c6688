mod fake_generator;
mod fake_lock_source;

pub use fake_generator::FakeSpecGenerator;
pub use fake_lock_source::FakeLockSource;
