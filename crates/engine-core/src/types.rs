use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Sentinel rendered in output records for any field that could not be
/// computed from the available inputs.
pub const UNAVAILABLE: &str = "Unavailable";

/// Single close observation in a chronological price series
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Named fundamental metrics. Absence is explicit (`None`), never inferred.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fundamentals {
    pub revenue: Option<f64>,
    pub net_profit: Option<f64>,
    pub debt: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<f64>,
    pub sector: Option<String>,
}

/// A computed value or an explicit absence. The absence serializes as the
/// literal string "Unavailable" so records keep every schema field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observed<T> {
    Value(T),
    Unavailable,
}

impl<T> Observed<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Observed::Value(v),
            None => Observed::Unavailable,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Observed::Value(v) => Some(v),
            Observed::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Observed::Unavailable)
    }
}

impl<T> From<Option<T>> for Observed<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T: Serialize> Serialize for Observed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Observed::Value(v) => v.serialize(serializer),
            Observed::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Observed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        if raw.as_str() == Some(UNAVAILABLE) {
            return Ok(Observed::Unavailable);
        }
        T::deserialize(raw).map(Observed::Value).map_err(DeError::custom)
    }
}

/// MACD classification from the fast/slow EMA difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacdSignal {
    Positive,
    Negative,
    Neutral,
}

/// Latest close relative to a moving average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaPosition {
    Above,
    Below,
}

/// Annualized volatility bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
    Sideways,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Valuation {
    Undervalued,
    Fair,
    Overvalued,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Momentum {
    Strong,
    Moderate,
    Weak,
}

/// Technical indicators computed from a price series. Each field is absent
/// when the series is too short or an intermediate value was non-finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: Observed<f64>,
    pub macd: Observed<MacdSignal>,
    pub ma_20: Observed<MaPosition>,
    pub ma_50: Observed<MaPosition>,
    pub ma_200: Observed<MaPosition>,
    pub volatility: Observed<VolatilityLevel>,
}

/// Categorical signals derived from indicators and fundamentals.
/// Always total: partial inputs fall back to the middle bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub trend: Trend,
    pub valuation: Valuation,
    pub risk: RiskLevel,
    pub momentum: Momentum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsScope {
    Global,
    Country,
    Sector,
    Company,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsType {
    Macro,
    Earnings,
    Policy,
    Geopolitical,
    Corporate,
    Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactDirection {
    Positive,
    Negative,
    Neutral,
    Unclear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
}

/// Entities pre-extracted from an article by the upstream NLP collaborator.
/// Ordered sets keep serialization byte-stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEntities {
    pub countries: BTreeSet<String>,
    pub sectors: BTreeSet<String>,
    pub companies: BTreeSet<String>,
    pub indices: BTreeSet<String>,
}

/// Factual market-impact categorization of an article's stated content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub direction: ImpactDirection,
    pub confidence: f64,
    pub time_horizon: TimeHorizon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsClassification {
    pub scope: NewsScope,
    pub news_type: NewsType,
    pub impact: ImpactAssessment,
    pub facts: Vec<String>,
    pub entities: NewsEntities,
}

/// Classifier input: article text plus pre-extracted entities and candidate
/// facts. Extraction itself happens upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleInput {
    pub headline: String,
    pub body: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub entities: NewsEntities,
    pub candidate_facts: Vec<String>,
}

/// Price block of the stock output record
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceBlock {
    pub current: Observed<f64>,
    pub change_percent: Observed<f64>,
}

/// Fundamentals as rendered in the output record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalsBlock {
    pub revenue: Observed<f64>,
    pub net_profit: Observed<f64>,
    pub debt: Observed<f64>,
    pub pe_ratio: Observed<f64>,
    pub market_cap: Observed<f64>,
    pub sector: Observed<String>,
}

/// Complete stock output record. `as_of` is the timestamp of the last
/// price point, so identical inputs always produce identical bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRecord {
    pub symbol: String,
    pub price: PriceBlock,
    pub fundamentals: FundamentalsBlock,
    pub technicals: IndicatorSet,
    pub signals: SignalSet,
    pub as_of: Observed<DateTime<Utc>>,
}

/// Complete news output record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRecord {
    pub headline: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub scope: NewsScope,
    pub news_type: NewsType,
    pub entities: NewsEntities,
    pub impact: ImpactAssessment,
    pub facts: Vec<String>,
}
