//! # Infrastructure Layer
//!
//! Adapters for external systems.
//!
//! - [`carrier_api`]: outbound HTTP to the carrier quotation API
//! - [`persistence`]: quote storage

pub mod carrier_api;
pub mod persistence;
