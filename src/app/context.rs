use crate::ports::{LockSource, SpecGenerator};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: SpecGenerator, L: LockSource> {
    generator: G,
    locks: L,
}

impl<G: SpecGenerator, L: LockSource> AppContext<G, L> {
    /// Create a new application context.
    pub fn new(generator: G, locks: L) -> Self {
        Self { generator, locks }
    }

    /// Get a reference to the spec generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a reference to the dependency lock source.
    pub fn locks(&self) -> &L {
        &self.locks
    }
}
