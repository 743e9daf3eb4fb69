//! Domain layer containing business entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions and their error type
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits
//! are implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
