//! # PostgreSQL Repositories
//!
//! sqlx-backed implementations. Schema lives in `migrations/`.

pub mod quote_repository;

pub use quote_repository::PostgresQuoteRepository;
