use async_trait::async_trait;

use crate::{ArticleInput, EngineError, Fundamentals, NewsRecord, PricePoint, StockRecord};

/// Upstream market-data acquisition. Implementations live outside the
/// engine and report missing data as `EngineError::DataUnavailable`.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn price_history(&self, symbol: &str) -> Result<Vec<PricePoint>, EngineError>;
    async fn fundamentals(&self, symbol: &str) -> Result<Fundamentals, EngineError>;
}

/// Upstream news acquisition, delivering article text together with
/// pre-extracted entities and candidate facts.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn article(&self, article_id: &str) -> Result<ArticleInput, EngineError>;
}

/// Persistence for computed records, keyed by symbol or article id
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn put_stock(&self, record: &StockRecord) -> Result<(), EngineError>;
    async fn get_stock(&self, symbol: &str) -> Result<Option<StockRecord>, EngineError>;
    async fn put_news(&self, article_id: &str, record: &NewsRecord) -> Result<(), EngineError>;
    async fn get_news(&self, article_id: &str) -> Result<Option<NewsRecord>, EngineError>;
}
