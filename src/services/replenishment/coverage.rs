use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Sentinel for "effectively unlimited" cover. A large finite value rather
/// than infinity so downstream comparisons stay well-defined.
pub const UNLIMITED_DAYS: i64 = 999;

/// Days-of-cover projection for one (product, location) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StockCoverage {
    pub days_remaining: i64,
    pub projected_stockout: Option<NaiveDate>,
}

/// Projects how long current stock lasts at the effective daily rate.
///
/// In-transit stock counts toward cover only when the global policy flag
/// says so. A non-positive rate projects the unlimited sentinel and no
/// stockout date.
pub fn project_coverage(
    current_stock: i64,
    in_transit: i64,
    daily_rate: Decimal,
    include_in_transit: bool,
    today: NaiveDate,
) -> StockCoverage {
    if daily_rate <= Decimal::ZERO {
        return StockCoverage {
            days_remaining: UNLIMITED_DAYS,
            projected_stockout: None,
        };
    }

    let total_stock = current_stock + if include_in_transit { in_transit } else { 0 };
    let days = (Decimal::from(total_stock.max(0)) / daily_rate)
        .floor()
        .to_i64()
        .unwrap_or(UNLIMITED_DAYS)
        .min(UNLIMITED_DAYS);

    let projected_stockout = if days == UNLIMITED_DAYS {
        None
    } else {
        today.checked_add_signed(Duration::days(days))
    };

    StockCoverage {
        days_remaining: days,
        projected_stockout,
    }
}
