//! PostgreSQL repository implementations.
//!
//! # Repositories
//!
//! - [`PgShortenRepository`] - Link storage, lookup, and access counting
//!
//! [`schema`] holds startup-time schema switches.

pub mod pg_shorten_repository;
pub mod schema;

pub use pg_shorten_repository::PgShortenRepository;
