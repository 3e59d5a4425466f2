//! # API Layer
//!
//! Inbound interfaces.

pub mod rest;
