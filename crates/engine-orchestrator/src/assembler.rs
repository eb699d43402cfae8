use engine_core::{
    ArticleInput, Fundamentals, FundamentalsBlock, IndicatorSet, NewsClassification, NewsRecord,
    Observed, PriceBlock, PricePoint, SignalSet, StockRecord,
};

pub struct ResultAssembler;

impl ResultAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Merge computed blocks into the stock output record. Absent values
    /// render as the "Unavailable" sentinel; no further derivation happens
    /// here. `as_of` comes from the last price point so identical inputs
    /// always serialize identically.
    pub fn assemble_stock(
        &self,
        symbol: &str,
        series: &[PricePoint],
        fundamentals: &Fundamentals,
        technicals: IndicatorSet,
        signals: SignalSet,
    ) -> StockRecord {
        let current = series.last().map(|p| p.close);
        let change_percent = match series {
            [.., prev, last] if prev.close != 0.0 => {
                Some((last.close - prev.close) / prev.close * 100.0)
            }
            _ => None,
        };

        StockRecord {
            symbol: symbol.to_string(),
            price: PriceBlock {
                current: Observed::from_option(current),
                change_percent: Observed::from_option(change_percent),
            },
            fundamentals: FundamentalsBlock {
                revenue: Observed::from_option(fundamentals.revenue),
                net_profit: Observed::from_option(fundamentals.net_profit),
                debt: Observed::from_option(fundamentals.debt),
                pe_ratio: Observed::from_option(fundamentals.pe_ratio),
                market_cap: Observed::from_option(fundamentals.market_cap),
                sector: Observed::from_option(fundamentals.sector.clone()),
            },
            technicals,
            signals,
            as_of: Observed::from_option(series.last().map(|p| p.timestamp)),
        }
    }

    /// Merge a classification into the news output record
    pub fn assemble_news(
        &self,
        article: &ArticleInput,
        classification: NewsClassification,
    ) -> NewsRecord {
        NewsRecord {
            headline: article.headline.clone(),
            source: article.source.clone(),
            published_at: article.published_at,
            scope: classification.scope,
            news_type: classification.news_type,
            entities: classification.entities,
            impact: classification.impact,
            facts: classification.facts,
        }
    }
}

impl Default for ResultAssembler {
    fn default() -> Self {
        Self::new()
    }
}
