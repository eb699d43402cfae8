use engine_core::{
    ArticleInput, EngineError, Fundamentals, NewsRecord, PricePoint, StockRecord, ThresholdConfig,
};
use news_classification::NewsRuleClassifier;
use signal_derivation::SignalDeriver;
use technical_indicators::IndicatorCalculator;

pub mod assembler;
pub use assembler::ResultAssembler;


/// Deterministic stock pipeline: indicators, then signals, then the
/// assembled output record. Stateless per invocation; safe to share
/// across threads.
pub struct StockEngine {
    calculator: IndicatorCalculator,
    deriver: SignalDeriver,
    assembler: ResultAssembler,
    config: ThresholdConfig,
}

impl StockEngine {
    pub fn new(config: ThresholdConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            calculator: IndicatorCalculator::new(),
            deriver: SignalDeriver::new(),
            assembler: ResultAssembler::new(),
            config,
        })
    }

    /// Load thresholds from the environment once, then serve read-only
    pub fn from_env() -> Result<Self, EngineError> {
        Self::new(ThresholdConfig::from_env()?)
    }

    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Full derivation for one symbol. Identical inputs always produce
    /// identical records.
    pub fn analyze(
        &self,
        symbol: &str,
        series: &[PricePoint],
        fundamentals: &Fundamentals,
    ) -> Result<StockRecord, EngineError> {
        let technicals = self.calculator.calculate(series, &self.config)?;
        let signals = self.deriver.derive(&technicals, fundamentals, &self.config);
        let record = self
            .assembler
            .assemble_stock(symbol, series, fundamentals, technicals, signals);
        tracing::debug!(symbol, "stock record assembled");
        Ok(record)
    }
}

/// Rule-based article pipeline: classification, then the assembled record
pub struct NewsEngine {
    classifier: NewsRuleClassifier,
    assembler: ResultAssembler,
    config: ThresholdConfig,
}

impl NewsEngine {
    pub fn new(config: ThresholdConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            classifier: NewsRuleClassifier::new(),
            assembler: ResultAssembler::new(),
            config,
        })
    }

    pub fn from_env() -> Result<Self, EngineError> {
        Self::new(ThresholdConfig::from_env()?)
    }

    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    pub fn analyze(&self, article: &ArticleInput) -> Result<NewsRecord, EngineError> {
        let classification = self.classifier.classify(article, &self.config)?;
        Ok(self.assembler.assemble_news(article, classification))
    }
}
