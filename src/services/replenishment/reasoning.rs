use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entities::replenishment_suggestion::{SuggestionType, Urgency};

use super::coverage::{StockCoverage, UNLIMITED_DAYS};
use super::sourcing::SourcingDecision;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningKind {
    Info,
    Warning,
    Calculation,
}

/// One line of the audit trail attached to a suggestion. Append-only and
/// never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReasoningItem {
    pub kind: ReasoningKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl ReasoningItem {
    fn info(message: impl Into<String>, value: Option<serde_json::Value>) -> Self {
        Self {
            kind: ReasoningKind::Info,
            message: message.into(),
            value,
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: ReasoningKind::Warning,
            message: message.into(),
            value: None,
        }
    }

    fn calculation(message: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: ReasoningKind::Calculation,
            message: message.into(),
            value: Some(value),
        }
    }
}

/// Inputs already computed by the engine stages, assembled into an ordered,
/// operator-readable trail.
pub struct ReasoningContext<'a> {
    pub current_stock: i64,
    pub in_transit: i64,
    pub daily_rate: Decimal,
    pub coverage: &'a StockCoverage,
    pub urgency: Urgency,
    pub safety_threshold: i64,
    pub recommended_quantity: i64,
    pub sourcing: &'a SourcingDecision,
}

pub fn build_reasoning(ctx: &ReasoningContext<'_>) -> Vec<ReasoningItem> {
    let mut trail = Vec::with_capacity(8);

    trail.push(ReasoningItem::info(
        format!("Current stock: {} units", ctx.current_stock),
        Some(json!(ctx.current_stock)),
    ));

    if ctx.in_transit > 0 {
        trail.push(ReasoningItem::info(
            format!("In transit to destination: {} units", ctx.in_transit),
            Some(json!(ctx.in_transit)),
        ));
    }

    trail.push(ReasoningItem::calculation(
        format!("Effective daily demand: {} units/day", ctx.daily_rate),
        json!(ctx.daily_rate.to_string()),
    ));

    let days_display = if ctx.coverage.days_remaining >= UNLIMITED_DAYS {
        "Unlimited".to_string()
    } else {
        format!("{} days", ctx.coverage.days_remaining)
    };
    trail.push(ReasoningItem::calculation(
        format!("Stock remaining: {}", days_display),
        json!(ctx.coverage.days_remaining),
    ));

    match ctx.urgency {
        Urgency::Critical => trail.push(ReasoningItem::warning(format!(
            "Critical: projected stockout within {} days",
            ctx.coverage.days_remaining
        ))),
        Urgency::Warning => trail.push(ReasoningItem::warning(
            "Stock is below the warning threshold".to_string(),
        )),
        Urgency::Planned | Urgency::Monitor => {}
    }

    trail.push(ReasoningItem::calculation(
        format!("Safety stock threshold: {} units", ctx.safety_threshold),
        json!(ctx.safety_threshold),
    ));

    trail.push(ReasoningItem::calculation(
        format!("Recommended quantity: {} units", ctx.recommended_quantity),
        json!(ctx.recommended_quantity),
    ));

    trail.push(sourcing_line(ctx.sourcing));
    trail
}

fn sourcing_line(sourcing: &SourcingDecision) -> ReasoningItem {
    match sourcing.suggestion_type {
        SuggestionType::Transfer => {
            let name = sourcing.source_location_name.as_deref().unwrap_or("warehouse");
            let available = sourcing.source_available_quantity.unwrap_or(0);
            ReasoningItem::info(
                format!("Transfer from {} ({} units available)", name, available),
                Some(json!(available)),
            )
        }
        SuggestionType::PurchaseOrder => match (&sourcing.supplier_name, sourcing.supplier_lead_time_days) {
            (Some(supplier), Some(lead_time)) => ReasoningItem::info(
                format!(
                    "Purchase order from {} (lead time {} days)",
                    supplier, lead_time
                ),
                Some(json!(lead_time)),
            ),
            _ => ReasoningItem::info(
                "No warehouse stock available; purchase order via default route".to_string(),
                None,
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn coverage(days: i64) -> StockCoverage {
        StockCoverage {
            days_remaining: days,
            projected_stockout: None,
        }
    }

    fn transfer_decision() -> SourcingDecision {
        SourcingDecision {
            suggestion_type: SuggestionType::Transfer,
            source_location_id: Some(Uuid::new_v4()),
            source_location_name: Some("Central WH".into()),
            source_available_quantity: Some(500),
            supplier_id: None,
            supplier_name: None,
            supplier_lead_time_days: None,
            transit_days: 7,
            transport_method: Some("internal_transfer".into()),
        }
    }

    fn po_decision(with_supplier: bool) -> SourcingDecision {
        SourcingDecision {
            suggestion_type: SuggestionType::PurchaseOrder,
            source_location_id: None,
            source_location_name: None,
            source_available_quantity: None,
            supplier_id: with_supplier.then(Uuid::new_v4),
            supplier_name: with_supplier.then(|| "Acme Components".to_string()),
            supplier_lead_time_days: with_supplier.then_some(30),
            transit_days: 44,
            transport_method: Some("sea".into()),
        }
    }

    #[test]
    fn trail_orders_inputs_before_decision() {
        let cov = coverage(10);
        let sourcing = transfer_decision();
        let trail = build_reasoning(&ReasoningContext {
            current_stock: 100,
            in_transit: 20,
            daily_rate: dec!(10),
            coverage: &cov,
            urgency: Urgency::Planned,
            safety_threshold: 140,
            recommended_quantity: 40,
            sourcing: &sourcing,
        });

        let messages: Vec<_> = trail.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Current stock: 100 units",
                "In transit to destination: 20 units",
                "Effective daily demand: 10 units/day",
                "Stock remaining: 10 days",
                "Safety stock threshold: 140 units",
                "Recommended quantity: 40 units",
                "Transfer from Central WH (500 units available)",
            ]
        );
    }

    #[test]
    fn zero_in_transit_is_omitted() {
        let cov = coverage(10);
        let sourcing = po_decision(true);
        let trail = build_reasoning(&ReasoningContext {
            current_stock: 100,
            in_transit: 0,
            daily_rate: dec!(10),
            coverage: &cov,
            urgency: Urgency::Planned,
            safety_threshold: 140,
            recommended_quantity: 40,
            sourcing: &sourcing,
        });
        assert!(trail.iter().all(|i| !i.message.contains("In transit")));
    }

    #[test]
    fn critical_urgency_adds_a_warning_line() {
        let cov = coverage(2);
        let sourcing = po_decision(true);
        let trail = build_reasoning(&ReasoningContext {
            current_stock: 20,
            in_transit: 0,
            daily_rate: dec!(10),
            coverage: &cov,
            urgency: Urgency::Critical,
            safety_threshold: 140,
            recommended_quantity: 120,
            sourcing: &sourcing,
        });
        assert!(trail
            .iter()
            .any(|i| i.kind == ReasoningKind::Warning && i.message.starts_with("Critical")));
    }

    #[test]
    fn unlimited_cover_renders_as_unlimited() {
        let cov = coverage(UNLIMITED_DAYS);
        let sourcing = po_decision(false);
        let trail = build_reasoning(&ReasoningContext {
            current_stock: 100,
            in_transit: 0,
            daily_rate: dec!(0),
            coverage: &cov,
            urgency: Urgency::Monitor,
            safety_threshold: 0,
            recommended_quantity: 1,
            sourcing: &sourcing,
        });
        assert!(trail.iter().any(|i| i.message == "Stock remaining: Unlimited"));
    }

    #[test]
    fn missing_supplier_gets_the_fallback_line() {
        let sourcing = po_decision(false);
        assert_eq!(
            sourcing_line(&sourcing).message,
            "No warehouse stock available; purchase order via default route"
        );
    }
}
