//! # In-Memory Quote Repository
//!
//! In-memory implementation of [`QuoteRepository`].
//!
//! Quotes are kept in insertion order. Used by tests and by the server when
//! `storage = "memory"`.

use crate::domain::entities::Quote;
use crate::domain::value_objects::QuoteId;
use crate::infrastructure::persistence::traits::{
    QuoteRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`QuoteRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuoteRepository {
    storage: Arc<RwLock<Vec<Quote>>>,
}

impl InMemoryQuoteRepository {
    /// Creates a new empty in-memory quote repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn save(&self, quote: &Quote) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        if storage.iter().any(|q| q.id() == quote.id()) {
            return Err(RepositoryError::duplicate("Quote", quote.id().to_string()));
        }
        storage.push(quote.clone());
        Ok(())
    }

    async fn get(&self, id: &QuoteId) -> RepositoryResult<Option<Quote>> {
        let storage = self.storage.read().await;
        Ok(storage.iter().find(|q| q.id() == *id).cloned())
    }

    async fn find_recent(&self, limit: usize) -> RepositoryResult<Vec<Quote>> {
        let storage = self.storage.read().await;
        let mut quotes: Vec<(usize, &Quote)> = storage.iter().enumerate().collect();
        // Newest first; later insertion breaks timestamp ties.
        quotes.sort_by(|(ia, a), (ib, b)| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| ib.cmp(ia))
        });
        Ok(quotes
            .into_iter()
            .take(limit)
            .map(|(_, q)| q.clone())
            .collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::CarrierOffer;
    use crate::domain::value_objects::Timestamp;
    use rust_decimal::Decimal;

    fn quote_at(secs: i64, carrier: &str) -> Quote {
        Quote::from_parts(
            QuoteId::new_v4(),
            vec![CarrierOffer::new(carrier, "Normal", 3, Decimal::new(100, 0))],
            Timestamp::from_secs(secs).unwrap(),
        )
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryQuoteRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.find_recent(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryQuoteRepository::new();
        let quote = quote_at(1_700_000_000, "Correios");

        repo.save(&quote).await.unwrap();

        let retrieved = repo.get(&quote.id()).await.unwrap();
        assert_eq!(retrieved, Some(quote));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryQuoteRepository::new();
        assert!(repo.get(&QuoteId::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let repo = InMemoryQuoteRepository::new();
        let quote = quote_at(1_700_000_000, "Correios");

        repo.save(&quote).await.unwrap();
        let err = repo.save(&quote).await.unwrap_err();

        assert!(err.is_duplicate());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn find_recent_is_newest_first_and_limited() {
        let repo = InMemoryQuoteRepository::new();
        repo.save(&quote_at(1_700_000_100, "B")).await.unwrap();
        repo.save(&quote_at(1_700_000_300, "D")).await.unwrap();
        repo.save(&quote_at(1_700_000_000, "A")).await.unwrap();
        repo.save(&quote_at(1_700_000_200, "C")).await.unwrap();

        let recent = repo.find_recent(3).await.unwrap();

        let carriers: Vec<&str> = recent.iter().map(|q| q.offers()[0].name()).collect();
        assert_eq!(carriers, vec!["D", "C", "B"]);
    }

    #[tokio::test]
    async fn find_recent_breaks_ties_by_insertion() {
        let repo = InMemoryQuoteRepository::new();
        repo.save(&quote_at(1_700_000_000, "first")).await.unwrap();
        repo.save(&quote_at(1_700_000_000, "second")).await.unwrap();

        let recent = repo.find_recent(1).await.unwrap();

        assert_eq!(recent[0].offers()[0].name(), "second");
    }

    #[tokio::test]
    async fn find_recent_zero_limit() {
        let repo = InMemoryQuoteRepository::new();
        repo.save(&quote_at(1_700_000_000, "A")).await.unwrap();
        assert!(repo.find_recent(0).await.unwrap().is_empty());
    }
}
