use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Smallest incremental unit a replenishment may be ordered in. A policy
/// constant until lot sizes move onto the product record.
pub const MIN_ORDER_QUANTITY: i64 = 1;

/// Recommended replenishment quantity: restock to a target coverage window,
/// rounded up to whole lots, never less than one lot.
///
/// Callers gate on the coverage window before asking for a quantity;
/// healthy pairs never reach this computation.
pub fn recommended_quantity(
    daily_rate: Decimal,
    target_coverage_days: i64,
    current_stock: i64,
    in_transit: i64,
    min_order_qty: i64,
) -> i64 {
    let lot = min_order_qty.max(1);

    let target_stock = (daily_rate * Decimal::from(target_coverage_days.max(0)))
        .ceil()
        .to_i64()
        .unwrap_or(0);
    let needed = target_stock - current_stock - in_transit;

    // Round up to a whole number of lots; the floor keeps the result at
    // one lot minimum even when nothing is needed.
    let lots = (needed + lot - 1).div_euclid(lot);
    (lots * lot).max(lot)
}

/// Coverage window to restock toward: the planned horizon, or the pair's
/// days-of-cover equivalent when one is expressible, whichever is longer.
pub fn target_coverage_days(
    planned_days: i64,
    rule_days_of_cover: Option<i64>,
    default_safety_days: i64,
) -> i64 {
    planned_days.max(rule_days_of_cover.unwrap_or(default_safety_days))
}
