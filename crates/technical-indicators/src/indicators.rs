use statrs::statistics::Statistics;

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Simple moving average over the trailing `period` values
pub fn sma(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    let window = &data[data.len() - period..];
    finite(window.iter().sum::<f64>() / period as f64)
}

/// Exponential moving average, seeded with the SMA of the first `period`
/// values and recursed with multiplier 2/(period+1)
pub fn ema(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut value = data[..period].iter().sum::<f64>() / period as f64;
    for &close in &data[period..] {
        value = (close - value) * multiplier + value;
    }
    finite(value)
}

/// Relative Strength Index with Wilder smoothing. Needs `period + 1`
/// closes; a window with no losses reports 100.
pub fn rsi(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(data.len() - 1);
    let mut losses = Vec::with_capacity(data.len() - 1);
    for pair in data.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;
    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }
    let rs = avg_gain / avg_loss;
    finite(100.0 - (100.0 / (1.0 + rs)))
}

/// Fast EMA minus slow EMA over the full series. Needs `slow` closes.
pub fn macd_diff(data: &[f64], fast: usize, slow: usize) -> Option<f64> {
    if fast == 0 || slow <= fast || data.len() < slow {
        return None;
    }
    let ema_fast = ema(data, fast)?;
    let ema_slow = ema(data, slow)?;
    finite(ema_fast - ema_slow)
}

/// Annualized percentage volatility: population standard deviation of
/// consecutive percentage returns scaled by sqrt(252)
pub fn realized_volatility(data: &[f64], min_points: usize) -> Option<f64> {
    if data.len() < min_points.max(2) {
        return None;
    }
    let returns: Vec<f64> = data
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0] * 100.0)
        .collect();
    if returns.iter().any(|r| !r.is_finite()) {
        return None;
    }
    finite(returns.population_std_dev() * TRADING_DAYS_PER_YEAR.sqrt())
}
