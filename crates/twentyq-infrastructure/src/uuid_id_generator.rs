//! UUID-based session identifiers.

use twentyq_core::session::SessionIdGenerator;
use uuid::Uuid;

/// Generates random v4 UUID strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSessionIdGenerator;

impl SessionIdGenerator for UuidSessionIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
