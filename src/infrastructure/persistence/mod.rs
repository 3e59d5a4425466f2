//! # Persistence Layer
//!
//! Repository port and its implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`QuoteRepository`]: persistence for simulated quotes
//!
//! ## Implementations
//!
//! - `in_memory`: in-process storage for tests and local runs
//! - `postgres`: PostgreSQL via sqlx

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use in_memory::InMemoryQuoteRepository;
pub use postgres::PostgresQuoteRepository;
pub use traits::{QuoteRepository, RepositoryError, RepositoryResult};
