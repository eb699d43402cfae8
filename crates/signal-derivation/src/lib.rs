use engine_core::{
    Fundamentals, IndicatorSet, MaPosition, MacdSignal, Momentum, Observed, RiskLevel, SignalSet,
    ThresholdConfig, Trend, Valuation, VolatilityLevel,
};


/// Everything a signal predicate may inspect
pub struct SignalInputs<'a> {
    pub indicators: &'a IndicatorSet,
    pub fundamentals: &'a Fundamentals,
    pub config: &'a ThresholdConfig,
}

type Predicate = fn(&SignalInputs<'_>) -> bool;

/// Ordered (predicate, result) pairs: first match wins, fallback otherwise
fn first_match<S: Copy>(rules: &[(Predicate, S)], fallback: S, inputs: &SignalInputs<'_>) -> S {
    rules
        .iter()
        .find(|(predicate, _)| predicate(inputs))
        .map(|(_, signal)| *signal)
        .unwrap_or(fallback)
}

const TREND_RULES: &[(Predicate, Trend)] = &[
    (above_all_mas, Trend::Bullish),
    (below_all_mas, Trend::Bearish),
];

const VALUATION_RULES: &[(Predicate, Valuation)] = &[
    (pe_under_low_bound, Valuation::Undervalued),
    (pe_over_high_bound, Valuation::Overvalued),
];

const RISK_RULES: &[(Predicate, RiskLevel)] = &[
    (volatility_is_low, RiskLevel::Low),
    (volatility_is_high, RiskLevel::High),
];

const MOMENTUM_RULES: &[(Predicate, Momentum)] = &[
    (rsi_high_and_macd_positive, Momentum::Strong),
    (rsi_low_and_macd_negative, Momentum::Weak),
];

fn above_all_mas(inputs: &SignalInputs<'_>) -> bool {
    let i = inputs.indicators;
    [i.ma_20, i.ma_50, i.ma_200]
        .iter()
        .all(|ma| *ma == Observed::Value(MaPosition::Above))
}

fn below_all_mas(inputs: &SignalInputs<'_>) -> bool {
    let i = inputs.indicators;
    [i.ma_20, i.ma_50, i.ma_200]
        .iter()
        .all(|ma| *ma == Observed::Value(MaPosition::Below))
}

fn pe_under_low_bound(inputs: &SignalInputs<'_>) -> bool {
    matches!(inputs.fundamentals.pe_ratio,
        Some(pe) if pe.is_finite() && pe < inputs.config.pe_undervalued)
}

fn pe_over_high_bound(inputs: &SignalInputs<'_>) -> bool {
    matches!(inputs.fundamentals.pe_ratio,
        Some(pe) if pe.is_finite() && pe > inputs.config.pe_overvalued)
}

fn volatility_is_low(inputs: &SignalInputs<'_>) -> bool {
    inputs.indicators.volatility == Observed::Value(VolatilityLevel::Low)
}

fn volatility_is_high(inputs: &SignalInputs<'_>) -> bool {
    inputs.indicators.volatility == Observed::Value(VolatilityLevel::High)
}

fn rsi_high_and_macd_positive(inputs: &SignalInputs<'_>) -> bool {
    let i = inputs.indicators;
    matches!(i.rsi, Observed::Value(rsi) if rsi > inputs.config.rsi_overbought)
        && i.macd == Observed::Value(MacdSignal::Positive)
}

fn rsi_low_and_macd_negative(inputs: &SignalInputs<'_>) -> bool {
    let i = inputs.indicators;
    matches!(i.rsi, Observed::Value(rsi) if rsi < inputs.config.rsi_oversold)
        && i.macd == Observed::Value(MacdSignal::Negative)
}

pub struct SignalDeriver;

impl SignalDeriver {
    pub fn new() -> Self {
        Self
    }

    /// Total derivation: partial or absent inputs resolve to the middle
    /// bucket of each signal, never to an error.
    pub fn derive(
        &self,
        indicators: &IndicatorSet,
        fundamentals: &Fundamentals,
        config: &ThresholdConfig,
    ) -> SignalSet {
        let inputs = SignalInputs {
            indicators,
            fundamentals,
            config,
        };
        SignalSet {
            trend: first_match(TREND_RULES, Trend::Sideways, &inputs),
            valuation: first_match(VALUATION_RULES, Valuation::Fair, &inputs),
            risk: first_match(RISK_RULES, RiskLevel::Medium, &inputs),
            momentum: first_match(MOMENTUM_RULES, Momentum::Moderate, &inputs),
        }
    }
}

impl Default for SignalDeriver {
    fn default() -> Self {
        Self::new()
    }
}
