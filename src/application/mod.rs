//! # Application Layer
//!
//! Use cases wiring the domain services to the infrastructure ports.

pub mod dto;
pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
