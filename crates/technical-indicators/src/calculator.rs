use engine_core::{
    EngineError, IndicatorSet, MaPosition, MacdSignal, Observed, PricePoint, ThresholdConfig,
    VolatilityLevel,
};

use crate::indicators::{macd_diff, realized_volatility, rsi, sma};

/// EMA differences inside this band classify as Neutral
const MACD_EPSILON: f64 = 1e-9;

pub struct IndicatorCalculator;

impl IndicatorCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full indicator set for a chronological close series.
    /// Short history degrades individual indicators to absent; a malformed
    /// series fails the whole invocation.
    pub fn calculate(
        &self,
        series: &[PricePoint],
        config: &ThresholdConfig,
    ) -> Result<IndicatorSet, EngineError> {
        validate_series(series)?;

        let closes: Vec<f64> = series.iter().map(|p| p.close).collect();
        let current = closes.last().copied();

        let set = IndicatorSet {
            rsi: Observed::from_option(rsi(&closes, config.rsi_period)),
            macd: Observed::from_option(
                macd_diff(&closes, config.macd_fast, config.macd_slow).map(classify_macd),
            ),
            ma_20: ma_position(&closes, config.ma_short, current),
            ma_50: ma_position(&closes, config.ma_medium, current),
            ma_200: ma_position(&closes, config.ma_long, current),
            volatility: Observed::from_option(
                realized_volatility(&closes, config.volatility_min_points)
                    .map(|v| classify_volatility(v, config)),
            ),
        };

        if set.rsi.is_unavailable() || set.ma_200.is_unavailable() {
            tracing::debug!(points = series.len(), "incomplete history, some indicators absent");
        }
        Ok(set)
    }
}

impl Default for IndicatorCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Strictly increasing timestamps and finite closes; anything else fails
/// the invocation rather than degrading to absent.
fn validate_series(series: &[PricePoint]) -> Result<(), EngineError> {
    for point in series {
        if !point.close.is_finite() {
            return Err(EngineError::InvalidInput(format!(
                "non-finite close at {}",
                point.timestamp
            )));
        }
    }
    for pair in series.windows(2) {
        if pair[1].timestamp <= pair[0].timestamp {
            return Err(EngineError::InvalidInput(format!(
                "timestamps not strictly increasing at {}",
                pair[1].timestamp
            )));
        }
    }
    Ok(())
}

fn classify_macd(diff: f64) -> MacdSignal {
    if diff > MACD_EPSILON {
        MacdSignal::Positive
    } else if diff < -MACD_EPSILON {
        MacdSignal::Negative
    } else {
        MacdSignal::Neutral
    }
}

fn classify_volatility(volatility: f64, config: &ThresholdConfig) -> VolatilityLevel {
    if volatility < config.volatility_low {
        VolatilityLevel::Low
    } else if volatility > config.volatility_high {
        VolatilityLevel::High
    } else {
        VolatilityLevel::Moderate
    }
}

fn ma_position(closes: &[f64], window: usize, current: Option<f64>) -> Observed<MaPosition> {
    let position = match (current, sma(closes, window)) {
        (Some(close), Some(ma)) => Some(if close > ma {
            MaPosition::Above
        } else {
            MaPosition::Below
        }),
        _ => None,
    };
    Observed::from_option(position)
}
