pub mod config_service;
pub mod memory_session_repository;
pub mod paths;
pub mod uuid_id_generator;

pub use crate::config_service::{ConfigError, ConfigService};
pub use crate::memory_session_repository::InMemorySessionRepository;
pub use crate::paths::TwentyqPaths;
pub use crate::uuid_id_generator::UuidSessionIdGenerator;
