//! Domain layer for twentyq.
//!
//! Holds the session model, the storage contract every backend must honour,
//! the intent/outcome vocabulary of the rules engine, and the shared error
//! type.

pub mod config;
pub mod error;
pub mod game;
pub mod session;

// Re-export common error type
pub use error::{GameError, Result};
