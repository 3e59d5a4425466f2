//! # PostgreSQL Quote Repository
//!
//! PostgreSQL implementation of [`QuoteRepository`] using sqlx.
//!
//! A quote is split across two tables: `quotes` holds the header and
//! `carrier_offers` holds one row per offer, keyed by `(quote_id, position)`
//! so offers come back in the order they were saved.
//!
//! `TIMESTAMPTZ` keeps microseconds, so `created_at` read back may be
//! truncated relative to the in-process value.

use crate::domain::entities::{CarrierOffer, Quote};
use crate::domain::value_objects::{QuoteId, Timestamp};
use crate::infrastructure::persistence::traits::{
    QuoteRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// PostgreSQL implementation of [`QuoteRepository`].
///
/// # Examples
///
/// ```ignore
/// use freight_quote::infrastructure::persistence::postgres::PostgresQuoteRepository;
///
/// let repo = PostgresQuoteRepository::connect("postgres://...", 5).await?;
/// repo.run_migrations().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresQuoteRepository {
    pool: PgPool,
}

impl PostgresQuoteRepository {
    /// Creates a repository over an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool to `database_url`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the database is unreachable.
    pub async fn connect(database_url: &str, max_connections: u32) -> RepositoryResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if a migration fails.
    pub async fn run_migrations(&self) -> RepositoryResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::internal(format!("migration failed: {}", e)))
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn load_offers(&self, ids: &[Uuid]) -> RepositoryResult<HashMap<Uuid, Vec<CarrierOffer>>> {
        let rows: Vec<OfferRow> = sqlx::query_as(
            r#"
            SELECT quote_id, name, service, deadline, price
            FROM carrier_offers
            WHERE quote_id = ANY($1)
            ORDER BY quote_id, position ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(group_offers(rows))
    }
}

#[async_trait]
impl QuoteRepository for PostgresQuoteRepository {
    async fn save(&self, quote: &Quote) -> RepositoryResult<()> {
        let quote_id = *quote.id().as_uuid();
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO quotes (id, created_at) VALUES ($1, $2)")
            .bind(quote_id)
            .bind(*quote.created_at().as_datetime())
            .execute(&mut *tx)
            .await?;

        for (position, offer) in quote.offers().iter().enumerate() {
            let position = i32::try_from(position)
                .map_err(|_| RepositoryError::internal("too many offers in one quote"))?;
            sqlx::query(
                r#"
                INSERT INTO carrier_offers (quote_id, position, name, service, deadline, price)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(quote_id)
            .bind(position)
            .bind(offer.name())
            .bind(offer.service())
            .bind(offer.deadline())
            .bind(offer.price())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        debug!(quote_id = %quote.id(), offers = quote.offers().len(), "quote saved");
        Ok(())
    }

    async fn get(&self, id: &QuoteId) -> RepositoryResult<Option<Quote>> {
        let row: Option<QuoteRow> =
            sqlx::query_as("SELECT id, created_at FROM quotes WHERE id = $1")
                .bind(*id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut offers = self.load_offers(&[row.id]).await?;
        Ok(Some(row.into_quote(&mut offers)))
    }

    async fn find_recent(&self, limit: usize) -> RepositoryResult<Vec<Quote>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<QuoteRow> = sqlx::query_as(
            r#"
            SELECT id, created_at
            FROM quotes
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut offers = self.load_offers(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| row.into_quote(&mut offers))
            .collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quotes")
            .fetch_one(&self.pool)
            .await?;

        u64::try_from(count).map_err(|e| RepositoryError::serialization(e.to_string()))
    }
}

/// Row type for quote header queries.
#[derive(Debug, sqlx::FromRow)]
struct QuoteRow {
    id: Uuid,
    created_at: DateTime<Utc>,
}

impl QuoteRow {
    /// Builds the quote, taking its offers out of `offers`.
    fn into_quote(self, offers: &mut HashMap<Uuid, Vec<CarrierOffer>>) -> Quote {
        Quote::from_parts(
            QuoteId::from_uuid(self.id),
            offers.remove(&self.id).unwrap_or_default(),
            Timestamp::from(self.created_at),
        )
    }
}

/// Row type for offer queries.
#[derive(Debug, sqlx::FromRow)]
struct OfferRow {
    quote_id: Uuid,
    name: String,
    service: String,
    deadline: i64,
    price: Decimal,
}

/// Groups position-ordered offer rows by quote.
fn group_offers(rows: Vec<OfferRow>) -> HashMap<Uuid, Vec<CarrierOffer>> {
    rows.into_iter().fold(HashMap::new(), |mut acc, row| {
        acc.entry(row.quote_id)
            .or_insert_with(Vec::new)
            .push(CarrierOffer::new(row.name, row.service, row.deadline, row.price));
        acc
    })
}
