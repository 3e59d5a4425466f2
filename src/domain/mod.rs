//! # Domain Layer
//!
//! Freight quotation model and the pure logic around it.
//!
//! - [`entities`]: requests, offers, quotes and metrics reports
//! - [`value_objects`]: identifiers, timestamps and checked arithmetic
//! - [`services`]: validation, normalization and aggregation
//! - [`errors`]: error taxonomy of the domain services

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
