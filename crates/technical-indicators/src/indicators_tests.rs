#[cfg(test)]
mod tests {
    use super::super::indicators::*;
    use approx::assert_relative_eq;

    fn sample_prices() -> Vec<f64> {
        vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ]
    }

    #[test]
    fn test_sma_trailing_window() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3).unwrap();

        // (3+4+5)/3
        assert_relative_eq!(result, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sma_insufficient_data() {
        let data = vec![1.0, 2.0];
        assert_eq!(sma(&data, 5), None);
    }

    #[test]
    fn test_sma_zero_period() {
        let data = vec![1.0, 2.0, 3.0];
        assert_eq!(sma(&data, 0), None);
    }

    #[test]
    fn test_ema_hand_computed() {
        // Seed (22+24+23)/3 = 23, multiplier 0.5: 23 -> 24 -> 25
        let data = vec![22.0, 24.0, 23.0, 25.0, 26.0];
        let result = ema(&data, 3).unwrap();

        assert_relative_eq!(result, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ema_insufficient_data() {
        let data = vec![22.0, 24.0];
        assert_eq!(ema(&data, 3), None);
    }

    #[test]
    fn test_rsi_within_bounds() {
        let result = rsi(&sample_prices(), 14).unwrap();

        assert!(result >= 0.0 && result <= 100.0);
    }

    #[test]
    fn test_rsi_needs_period_plus_one() {
        let data = vec![1.0; 14];
        assert_eq!(rsi(&data, 14), None);

        let data = vec![1.0; 15];
        assert!(rsi(&data, 14).is_some());
    }

    #[test]
    fn test_rsi_all_gains_is_100() {
        let uptrend: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        let result = rsi(&uptrend, 14).unwrap();

        assert_relative_eq!(result, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rsi_hand_computed() {
        // Alternating 2,1,2,1 with period 2:
        // initial avg_gain 0.5 / avg_loss 0.5, one smoothing step
        // -> avg_gain 0.25 / avg_loss 0.75 -> RSI 25
        let data = vec![2.0, 1.0, 2.0, 1.0];
        let result = rsi(&data, 2).unwrap();

        assert_relative_eq!(result, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rsi_downtrend_is_low() {
        let downtrend: Vec<f64> = (1..=20).map(|i| 100.0 - i as f64).collect();
        let result = rsi(&downtrend, 14).unwrap();

        assert!(result < 10.0);
    }

    #[test]
    fn test_macd_diff_positive_in_uptrend() {
        let uptrend: Vec<f64> = (1..=60).map(|i| i as f64).collect();
        let result = macd_diff(&uptrend, 12, 26).unwrap();

        assert!(result > 0.0);
    }

    #[test]
    fn test_macd_diff_negative_in_downtrend() {
        let downtrend: Vec<f64> = (1..=60).map(|i| 200.0 - i as f64).collect();
        let result = macd_diff(&downtrend, 12, 26).unwrap();

        assert!(result < 0.0);
    }

    #[test]
    fn test_macd_diff_needs_slow_points() {
        let data: Vec<f64> = (1..=25).map(|i| i as f64).collect();
        assert_eq!(macd_diff(&data, 12, 26), None);

        let data: Vec<f64> = (1..=26).map(|i| i as f64).collect();
        assert!(macd_diff(&data, 12, 26).is_some());
    }

    #[test]
    fn test_macd_diff_rejects_inverted_periods() {
        let data: Vec<f64> = (1..=60).map(|i| i as f64).collect();
        assert_eq!(macd_diff(&data, 26, 12), None);
    }

    #[test]
    fn test_volatility_zero_for_constant_prices() {
        let data = vec![100.0; 20];
        let result = realized_volatility(&data, 14).unwrap();

        assert_relative_eq!(result, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_volatility_insufficient_history() {
        let data = vec![100.0; 13];
        assert_eq!(realized_volatility(&data, 14), None);
    }

    #[test]
    fn test_volatility_grows_with_swing_size() {
        let calm: Vec<f64> = (0..20)
            .map(|i| if i % 2 == 0 { 100.0 } else { 100.1 })
            .collect();
        let wild: Vec<f64> = (0..20)
            .map(|i| if i % 2 == 0 { 100.0 } else { 110.0 })
            .collect();

        let calm_vol = realized_volatility(&calm, 14).unwrap();
        let wild_vol = realized_volatility(&wild, 14).unwrap();

        assert!(wild_vol > calm_vol);
    }

    #[test]
    fn test_volatility_absent_on_zero_close() {
        // A zero close makes the following return non-finite
        let mut data = vec![100.0; 20];
        data[5] = 0.0;

        assert_eq!(realized_volatility(&data, 14), None);
    }
}
