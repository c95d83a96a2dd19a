use crate::dto::quote_dto::NewQuote;
use crate::model::quote::Quote;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{error, info};

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn create(&self, new_quote: NewQuote) -> RepositoryResult<Quote>;
    async fn list_all(&self) -> RepositoryResult<Vec<Quote>>;
    async fn delete_by_id(&self, id: u64) -> RepositoryResult<()>;
}

/// In-process quote store.
///
/// Records are held in insertion order behind a `RwLock`; ids come from a
/// monotonic counter and are never reused after a delete.
pub struct InMemoryQuoteRepository {
    quotes: RwLock<Vec<Quote>>,
    next_id: AtomicU64,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        InMemoryQuoteRepository {
            quotes: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryQuoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    #[tracing::instrument(skip(self), fields(new_quote = ?new_quote))]
    async fn create(&self, new_quote: NewQuote) -> RepositoryResult<Quote> {
        info!(new_quote = ?new_quote, "Creating new quote");
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let time = chrono::Utc::now().to_rfc3339();
        let quote = Quote {
            id: Some(id),
            name: new_quote.name,
            email: new_quote.email,
            service: new_quote.service,
            description: Some(new_quote.description),
            created_at: Some(time.clone()),
            updated_at: Some(time),
        };

        let mut quotes = self.quotes.write().await;
        quotes.push(quote.clone());
        info!("Quote created successfully");
        Ok(quote)
    }

    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> RepositoryResult<Vec<Quote>> {
        let quotes = self.quotes.read().await;
        info!("Fetched {} quotes", quotes.len());
        Ok(quotes.clone())
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete_by_id(&self, id: u64) -> RepositoryResult<()> {
        info!("Deleting quote with ID: {}", id);
        let mut quotes = self.quotes.write().await;
        match quotes.iter().position(|q| q.id == Some(id)) {
            Some(index) => {
                quotes.remove(index);
                info!("Quote deleted successfully for ID: {}", id);
                Ok(())
            }
            None => {
                error!("No quote found to delete for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "No quote found to delete for ID: {}",
                    id
                )))
            }
        }
    }
}
