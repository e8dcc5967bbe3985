use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::entities::safety_stock_rule::{self, ThresholdType};

/// Minimum acceptable stock level for a pair, in whole units.
///
/// An explicit rule wins; otherwise the global default days-of-cover
/// applies. Days-of-cover thresholds round up — rounding down would
/// under-provision the buffer. Negative rule values clamp to zero.
pub fn resolve_safety_threshold(
    rule: Option<&safety_stock_rule::Model>,
    daily_rate: Decimal,
    default_safety_days: i64,
) -> i64 {
    let threshold = match rule {
        Some(rule) => match rule.threshold_type {
            ThresholdType::AbsoluteUnits => rule.threshold_value,
            ThresholdType::DaysOfCover => (daily_rate * rule.threshold_value).ceil(),
        },
        None => (daily_rate * Decimal::from(default_safety_days.max(0))).ceil(),
    };

    threshold.max(Decimal::ZERO).to_i64().unwrap_or(0)
}
