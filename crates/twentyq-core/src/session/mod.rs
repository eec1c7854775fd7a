//! Session domain module.
//!
//! This module contains the session domain model, the repository contract,
//! and the identifier generator seam.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `Question`, `SessionView`)
//! - `repository`: Repository trait for session storage
//! - `id`: Identifier generator trait (`SessionIdGenerator`)
//!
//! # Usage
//!
//! ```ignore
//! use twentyq_core::session::{Session, SessionRepository, SessionIdGenerator};
//! ```

mod id;
mod model;
mod repository;

// Re-export public API
pub use id::SessionIdGenerator;
pub use model::{MAX_QUESTIONS, Question, Session, SessionState, SessionView};
pub use repository::SessionRepository;
