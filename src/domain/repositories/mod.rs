//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ShortenRepository`] - Short link CRUD and access counting
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod error;
pub mod shorten_repository;

pub use error::{PersistenceCause, RepositoryError};
pub use shorten_repository::ShortenRepository;

#[cfg(test)]
pub use shorten_repository::MockShortenRepository;
