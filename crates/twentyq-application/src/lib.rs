//! Application layer for twentyq.
//!
//! This crate provides the game rules engine, which coordinates between the
//! domain model and a session repository.

pub mod game_usecase;

pub use game_usecase::GameUseCase;
