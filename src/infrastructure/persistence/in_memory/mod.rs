//! # In-Memory Repositories
//!
//! In-memory implementations for testing without database dependencies.
//!
//! Storage is an `Arc<RwLock<Vec<_>>>`, so clones share state.

pub mod quote_repository;

pub use quote_repository::InMemoryQuoteRepository;
