use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::entities::demand_forecast;

/// Per-month demand factor from the forecast's seasonal array.
///
/// Fail-open on every malformed shape: a missing array, an array that is
/// not exactly 12 entries, or an entry that is absent, non-finite or
/// non-positive all read as 1.0. A bad seasonal profile degrades the
/// forecast to its base rate, it never aborts the run.
pub fn seasonal_multiplier(seasonal: Option<&serde_json::Value>, month0: usize) -> f64 {
    let Some(values) = seasonal.and_then(|v| v.as_array()) else {
        return 1.0;
    };
    if values.len() != 12 {
        return 1.0;
    }
    match values.get(month0).and_then(|v| v.as_f64()) {
        Some(m) if m.is_finite() && m > 0.0 => m,
        _ => 1.0,
    }
}

/// Effective daily demand rate for a pair on the evaluation date.
///
/// A missing or disabled forecast yields zero: the engine does not invent
/// demand, and a zero rate pushes days-of-cover to the unlimited sentinel
/// downstream, excluding the pair from suggestion generation.
pub fn effective_daily_rate(
    forecast: Option<&demand_forecast::Model>,
    evaluation_date: chrono::NaiveDate,
) -> Decimal {
    let Some(forecast) = forecast.filter(|f| f.enabled) else {
        return Decimal::ZERO;
    };

    use chrono::Datelike;
    let month0 = evaluation_date.month0() as usize;
    let multiplier = seasonal_multiplier(forecast.seasonal_multipliers.as_ref(), month0);

    forecast.effective_base_rate()
        * Decimal::from_f64(multiplier).filter(|m| *m > Decimal::ZERO).unwrap_or(Decimal::ONE)
}
