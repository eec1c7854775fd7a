//! Session identifier generation.

/// Produces opaque, practically collision-free session identifiers.
pub trait SessionIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

impl<F> SessionIdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}
