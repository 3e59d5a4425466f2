//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! [`QuoteRepository`] stores each successful simulation as a [`Quote`] and
//! serves the most recent ones back for metrics.
//!
//! # Examples
//!
//! ```ignore
//! use freight_quote::infrastructure::persistence::traits::QuoteRepository;
//!
//! async fn latest(repo: &impl QuoteRepository) {
//!     let recent = repo.find_recent(10).await.unwrap();
//!     println!("Found {} quotes", recent.len());
//! }
//! ```

use crate::domain::entities::Quote;
use crate::domain::value_objects::QuoteId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::not_found("row", "unknown"),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::connection(error.to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::serialization(error.to_string())
            }
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Self::duplicate("row", db.message().to_string())
            }
            other => Self::query(other.to_string()),
        }
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for stored quotes.
#[async_trait]
pub trait QuoteRepository: Send + Sync + fmt::Debug {
    /// Saves a quote together with its offers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if a quote with the same ID
    /// already exists.
    async fn save(&self, quote: &Quote) -> RepositoryResult<()>;

    /// Gets a quote by ID.
    ///
    /// Returns `None` if the quote does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    async fn get(&self, id: &QuoteId) -> RepositoryResult<Option<Quote>>;

    /// Returns up to `limit` quotes, newest first.
    ///
    /// Offers keep the order they were saved in.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn find_recent(&self, limit: usize) -> RepositoryResult<Vec<Quote>>;

    /// Counts stored quotes.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn count(&self) -> RepositoryResult<u64>;
}
