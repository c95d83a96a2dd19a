use crate::dto::quote_dto::NewQuote;
use crate::model::quote::Quote;
use crate::repository::quote_repo::QuoteRepository;
use crate::util::error::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn register_quote(&self, new_quote: NewQuote) -> Result<Quote, ServiceError>;
    async fn list_quotes(&self) -> Result<Vec<Quote>, ServiceError>;
    async fn delete_quote(&self, id: u64) -> Result<(), ServiceError>;
}

pub struct QuoteServiceImpl {
    pub quote_repo: Arc<dyn QuoteRepository>,
}

impl QuoteServiceImpl {
    pub fn new(quote_repo: Arc<dyn QuoteRepository>) -> Self {
        QuoteServiceImpl { quote_repo }
    }
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    #[instrument(skip(self, new_quote), fields(new_quote = ?new_quote))]
    async fn register_quote(&self, new_quote: NewQuote) -> Result<Quote, ServiceError> {
        info!("Registering new quote");
        let res = self.quote_repo.create(new_quote).await;
        match &res {
            Ok(_) => info!("Quote registered successfully"),
            Err(e) => error!("Failed to register quote: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_quotes(&self) -> Result<Vec<Quote>, ServiceError> {
        info!("Listing quotes");
        let res = self.quote_repo.list_all().await;
        match &res {
            Ok(quotes) => info!("Fetched {} quotes", quotes.len()),
            Err(e) => error!("Failed to list quotes: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_quote(&self, id: u64) -> Result<(), ServiceError> {
        info!("Deleting quote");
        let res = self.quote_repo.delete_by_id(id).await;
        match &res {
            Ok(_) => info!("Quote deleted successfully"),
            Err(e) => error!("Failed to delete quote: {e}"),
        }
        res.map_err(ServiceError::from)
    }
}
