use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::EngineError;

/// All numeric thresholds and periods used by the engine. Loaded once at
/// startup and shared read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub ma_short: usize,
    pub ma_medium: usize,
    pub ma_long: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub volatility_low: f64,
    pub volatility_high: f64,
    pub volatility_min_points: usize,
    pub pe_undervalued: f64,
    pub pe_overvalued: f64,
    pub confidence_threshold: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            ma_short: 20,
            ma_medium: 50,
            ma_long: 200,
            rsi_overbought: 60.0,
            rsi_oversold: 40.0,
            volatility_low: 15.0,
            volatility_high: 30.0,
            volatility_min_points: 14,
            pe_undervalued: 15.0,
            pe_overvalued: 30.0,
            confidence_threshold: 0.4,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, EngineError> {
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| {
            EngineError::Configuration(format!("{} has invalid value {:?}", key, raw))
        }),
        Err(_) => Ok(default),
    }
}

impl ThresholdConfig {
    /// Load overrides from the environment (and a .env file when present).
    /// A variable that is present but malformed is fatal; a missing one
    /// falls back to its default.
    pub fn from_env() -> Result<Self, EngineError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            rsi_period: env_or("RSI_PERIOD", defaults.rsi_period)?,
            macd_fast: env_or("MACD_FAST", defaults.macd_fast)?,
            macd_slow: env_or("MACD_SLOW", defaults.macd_slow)?,
            ma_short: env_or("MA_SHORT", defaults.ma_short)?,
            ma_medium: env_or("MA_MEDIUM", defaults.ma_medium)?,
            ma_long: env_or("MA_LONG", defaults.ma_long)?,
            rsi_overbought: env_or("RSI_OVERBOUGHT", defaults.rsi_overbought)?,
            rsi_oversold: env_or("RSI_OVERSOLD", defaults.rsi_oversold)?,
            volatility_low: env_or("VOLATILITY_LOW_THRESHOLD", defaults.volatility_low)?,
            volatility_high: env_or("VOLATILITY_HIGH_THRESHOLD", defaults.volatility_high)?,
            volatility_min_points: env_or("VOLATILITY_MIN_POINTS", defaults.volatility_min_points)?,
            pe_undervalued: env_or("PE_UNDERVALUED", defaults.pe_undervalued)?,
            pe_overvalued: env_or("PE_OVERVALUED", defaults.pe_overvalued)?,
            confidence_threshold: env_or("CONFIDENCE_THRESHOLD", defaults.confidence_threshold)?,
        };
        config.validate()?;
        tracing::info!("threshold configuration loaded");
        Ok(config)
    }

    /// Reject threshold combinations that cannot produce meaningful signals
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rsi_period == 0 {
            return Err(EngineError::Configuration(
                "RSI period must be at least 1".into(),
            ));
        }
        if self.macd_fast == 0 || self.macd_fast >= self.macd_slow {
            return Err(EngineError::Configuration(format!(
                "MACD fast period {} must be shorter than slow period {}",
                self.macd_fast, self.macd_slow
            )));
        }
        if self.ma_short == 0 || self.ma_short >= self.ma_medium || self.ma_medium >= self.ma_long {
            return Err(EngineError::Configuration(format!(
                "moving average windows must be strictly increasing, got {}/{}/{}",
                self.ma_short, self.ma_medium, self.ma_long
            )));
        }
        if self.rsi_oversold >= self.rsi_overbought {
            return Err(EngineError::Configuration(format!(
                "RSI oversold bound {} must be below overbought bound {}",
                self.rsi_oversold, self.rsi_overbought
            )));
        }
        if self.volatility_low <= 0.0 || self.volatility_low >= self.volatility_high {
            return Err(EngineError::Configuration(format!(
                "volatility bounds must satisfy 0 < low < high, got {}/{}",
                self.volatility_low, self.volatility_high
            )));
        }
        if self.volatility_min_points < 2 {
            return Err(EngineError::Configuration(
                "volatility needs at least 2 points of history".into(),
            ));
        }
        if self.pe_undervalued >= self.pe_overvalued {
            return Err(EngineError::Configuration(format!(
                "PE undervalued bound {} must be below overvalued bound {}",
                self.pe_undervalued, self.pe_overvalued
            )));
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(EngineError::Configuration(format!(
                "confidence threshold {} must be within [0, 1]",
                self.confidence_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(ThresholdConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_macd_periods() {
        let config = ThresholdConfig {
            macd_fast: 26,
            macd_slow: 12,
            ..ThresholdConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_confidence_threshold() {
        let config = ThresholdConfig {
            confidence_threshold: 1.5,
            ..ThresholdConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_increasing_ma_windows() {
        let config = ThresholdConfig {
            ma_short: 50,
            ma_medium: 50,
            ..ThresholdConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_env_value_is_fatal() {
        env::set_var("RSI_PERIOD", "fourteen");
        let result = ThresholdConfig::from_env();
        env::remove_var("RSI_PERIOD");
        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }
}
