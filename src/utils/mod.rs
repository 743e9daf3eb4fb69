//! Utility functions shared by the service and HTTP layers.
//!
//! - [`url_validator`] - Loose URL shape validation
//! - [`code_generator`] - Random short code generation

pub mod code_generator;
pub mod url_validator;
