//! Core domain entities.
//!
//! The service has a single entity, [`ShortenedLink`], plus the
//! [`NewShortenedLink`] input used when inserting it.

pub mod shortened_link;

pub use shortened_link::{NewShortenedLink, ShortenedLink};
