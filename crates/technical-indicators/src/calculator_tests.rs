#[cfg(test)]
mod tests {
    use super::super::calculator::IndicatorCalculator;
    use chrono::{Duration, TimeZone, Utc};
    use engine_core::{
        EngineError, MaPosition, MacdSignal, Observed, PricePoint, ThresholdConfig,
        VolatilityLevel,
    };

    fn series(closes: &[f64]) -> Vec<PricePoint> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                timestamp: start + Duration::days(i as i64),
                close,
            })
            .collect()
    }

    #[test]
    fn empty_series_yields_all_absent() {
        let calculator = IndicatorCalculator::new();
        let set = calculator
            .calculate(&[], &ThresholdConfig::default())
            .unwrap();

        assert!(set.rsi.is_unavailable());
        assert!(set.macd.is_unavailable());
        assert!(set.ma_20.is_unavailable());
        assert!(set.ma_50.is_unavailable());
        assert!(set.ma_200.is_unavailable());
        assert!(set.volatility.is_unavailable());
    }

    #[test]
    fn single_point_yields_all_absent() {
        let calculator = IndicatorCalculator::new();
        let set = calculator
            .calculate(&series(&[100.0]), &ThresholdConfig::default())
            .unwrap();

        assert!(set.rsi.is_unavailable());
        assert!(set.volatility.is_unavailable());
    }

    #[test]
    fn short_series_degrades_only_long_indicators() {
        let closes: Vec<f64> = (1..=30).map(|i| 100.0 + i as f64).collect();
        let calculator = IndicatorCalculator::new();
        let set = calculator
            .calculate(&series(&closes), &ThresholdConfig::default())
            .unwrap();

        // 30 points: RSI(14), MACD(26) and MA20 resolve, MA50/MA200 cannot
        assert!(!set.rsi.is_unavailable());
        assert!(!set.macd.is_unavailable());
        assert!(!set.ma_20.is_unavailable());
        assert!(set.ma_50.is_unavailable());
        assert!(set.ma_200.is_unavailable());
    }

    #[test]
    fn rejects_non_monotonic_timestamps() {
        let mut points = series(&[100.0, 101.0, 102.0]);
        points[2].timestamp = points[0].timestamp;

        let calculator = IndicatorCalculator::new();
        let result = calculator.calculate(&points, &ThresholdConfig::default());

        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn rejects_duplicate_timestamps() {
        let mut points = series(&[100.0, 101.0]);
        points[1].timestamp = points[0].timestamp;

        let calculator = IndicatorCalculator::new();
        let result = calculator.calculate(&points, &ThresholdConfig::default());

        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn rejects_non_finite_close() {
        let mut points = series(&[100.0, 101.0, 102.0]);
        points[1].close = f64::NAN;

        let calculator = IndicatorCalculator::new();
        let result = calculator.calculate(&points, &ThresholdConfig::default());

        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn uptrend_classifies_bullish_indicators() {
        let closes: Vec<f64> = (1..=250).map(|i| i as f64).collect();
        let calculator = IndicatorCalculator::new();
        let set = calculator
            .calculate(&series(&closes), &ThresholdConfig::default())
            .unwrap();

        match set.rsi {
            Observed::Value(rsi) => assert!(rsi > 60.0),
            Observed::Unavailable => panic!("rsi absent"),
        }
        assert_eq!(set.macd, Observed::Value(MacdSignal::Positive));
        assert_eq!(set.ma_20, Observed::Value(MaPosition::Above));
        assert_eq!(set.ma_50, Observed::Value(MaPosition::Above));
        assert_eq!(set.ma_200, Observed::Value(MaPosition::Above));
        assert!(!set.volatility.is_unavailable());
    }

    #[test]
    fn downtrend_classifies_bearish_indicators() {
        let closes: Vec<f64> = (1..=250).map(|i| 500.0 - i as f64).collect();
        let calculator = IndicatorCalculator::new();
        let set = calculator
            .calculate(&series(&closes), &ThresholdConfig::default())
            .unwrap();

        assert_eq!(set.macd, Observed::Value(MacdSignal::Negative));
        assert_eq!(set.ma_20, Observed::Value(MaPosition::Below));
        assert_eq!(set.ma_50, Observed::Value(MaPosition::Below));
        assert_eq!(set.ma_200, Observed::Value(MaPosition::Below));
    }

    #[test]
    fn close_equal_to_ma_counts_as_below() {
        let closes = vec![100.0; 20];
        let calculator = IndicatorCalculator::new();
        let set = calculator
            .calculate(&series(&closes), &ThresholdConfig::default())
            .unwrap();

        assert_eq!(set.ma_20, Observed::Value(MaPosition::Below));
    }

    #[test]
    fn flat_series_is_neutral_macd_and_low_volatility() {
        let closes = vec![100.0; 30];
        let calculator = IndicatorCalculator::new();
        let set = calculator
            .calculate(&series(&closes), &ThresholdConfig::default())
            .unwrap();

        assert_eq!(set.macd, Observed::Value(MacdSignal::Neutral));
        assert_eq!(set.volatility, Observed::Value(VolatilityLevel::Low));
    }

    #[test]
    fn large_swings_classify_high_volatility() {
        let closes: Vec<f64> = (0..30)
            .map(|i| if i % 2 == 0 { 100.0 } else { 110.0 })
            .collect();
        let calculator = IndicatorCalculator::new();
        let set = calculator
            .calculate(&series(&closes), &ThresholdConfig::default())
            .unwrap();

        assert_eq!(set.volatility, Observed::Value(VolatilityLevel::High));
    }
}
