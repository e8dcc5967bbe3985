//! Replenishment suggestion engine.
//!
//! One run loads a read-only planning snapshot, evaluates every
//! (active product, sink location) pair, and atomically replaces the
//! pending suggestion set with the fresh batch. Each stage of the per-pair
//! computation lives in its own module; this module composes them.

pub mod coverage;
pub mod demand;
pub mod publisher;
pub mod quantity;
pub mod reasoning;
pub mod safety_stock;
pub mod settings;
pub mod snapshot;
pub mod sourcing;
pub mod urgency;

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::replenishment_suggestion::{
    self, SuggestionStatus, SuggestionType, Urgency,
};
use crate::entities::safety_stock_rule::ThresholdType;
use crate::entities::{location, product};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};

use self::quantity::MIN_ORDER_QUANTITY;
use self::reasoning::ReasoningContext;
use self::settings::EngineParams;
use self::snapshot::PlanningSnapshot;
use self::sourcing::{
    FirstListedSupplier, FixedLaneEstimator, SupplierResolver, TransitEstimator,
};

/// Counts per urgency tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct UrgencyBreakdown {
    pub critical: u64,
    pub warning: u64,
    pub planned: u64,
    pub monitor: u64,
}

/// Counts per suggestion type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct TypeBreakdown {
    pub transfer: u64,
    pub purchase_order: u64,
}

/// Outcome of a run, and the shape of the pending-set stats query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RunSummary {
    pub total: u64,
    pub by_urgency: UrgencyBreakdown,
    pub by_type: TypeBreakdown,
}

impl RunSummary {
    pub fn tally(entries: impl Iterator<Item = (Urgency, SuggestionType)>) -> Self {
        let mut summary = Self::default();
        for (urgency, suggestion_type) in entries {
            summary.total += 1;
            match urgency {
                Urgency::Critical => summary.by_urgency.critical += 1,
                Urgency::Warning => summary.by_urgency.warning += 1,
                Urgency::Planned => summary.by_urgency.planned += 1,
                Urgency::Monitor => summary.by_urgency.monitor += 1,
            }
            match suggestion_type {
                SuggestionType::Transfer => summary.by_type.transfer += 1,
                SuggestionType::PurchaseOrder => summary.by_type.purchase_order += 1,
            }
        }
        summary
    }
}

/// Service wrapper around the engine, owning its injectable sourcing
/// policies.
#[derive(Clone)]
pub struct ReplenishmentService {
    db: Arc<DatabaseConnection>,
    event_sender: EventSender,
    supplier_resolver: Arc<dyn SupplierResolver>,
    transit_estimator: Arc<dyn TransitEstimator>,
}

impl ReplenishmentService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: EventSender) -> Self {
        Self {
            db,
            event_sender,
            supplier_resolver: Arc::new(FirstListedSupplier),
            transit_estimator: Arc::new(FixedLaneEstimator::default()),
        }
    }

    pub fn with_policies(
        mut self,
        supplier_resolver: Arc<dyn SupplierResolver>,
        transit_estimator: Arc<dyn TransitEstimator>,
    ) -> Self {
        self.supplier_resolver = supplier_resolver;
        self.transit_estimator = transit_estimator;
        self
    }

    /// Runs the engine once: snapshot, evaluate every pair, publish.
    ///
    /// Missing reference data degrades the run, it never fails it: with no
    /// sink locations or no active products the run short-circuits to a
    /// zero summary without touching the suggestion table.
    #[instrument(skip(self))]
    pub async fn generate(&self) -> Result<RunSummary, ServiceError> {
        let params = EngineParams::resolve(self.db.as_ref()).await?;
        let snapshot = PlanningSnapshot::load(self.db.as_ref()).await?;

        if snapshot.sink_locations.is_empty() || snapshot.products.is_empty() {
            info!(
                sinks = snapshot.sink_locations.len(),
                products = snapshot.products.len(),
                "nothing to evaluate; skipping run"
            );
            return Ok(RunSummary::default());
        }

        let today = Utc::now().date_naive();
        let mut batch = Vec::new();
        for destination in &snapshot.sink_locations {
            for product in &snapshot.products {
                if let Some(suggestion) = evaluate_pair(
                    &snapshot,
                    &params,
                    self.supplier_resolver.as_ref(),
                    self.transit_estimator.as_ref(),
                    product,
                    destination,
                    today,
                ) {
                    batch.push(suggestion);
                }
            }
        }

        publisher::publish_batch(self.db.as_ref(), &batch).await?;

        let summary = RunSummary::tally(batch.iter().map(|s| (s.urgency, s.suggestion_type)));
        for suggestion in batch.iter().filter(|s| s.urgency == Urgency::Critical) {
            let event = Event::CriticalStockDetected {
                product_id: suggestion.product_id,
                location_id: suggestion.location_id,
                days_of_stock_remaining: suggestion.days_of_stock_remaining,
                recommended_quantity: suggestion.recommended_quantity,
            };
            if let Err(err) = self.event_sender.send(event).await {
                warn!(error = %err, "failed to emit critical stock event");
            }
        }
        let event = Event::ReplenishmentRunCompleted {
            total: summary.total,
            critical: summary.by_urgency.critical,
        };
        if let Err(err) = self.event_sender.send(event).await {
            warn!(error = %err, "failed to emit run-completed event");
        }
        info!(
            total = summary.total,
            critical = summary.by_urgency.critical,
            "replenishment run completed"
        );
        Ok(summary)
    }

    /// Pending suggestion counts by urgency tier and type. Read-only.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<RunSummary, ServiceError> {
        let pending = replenishment_suggestion::Entity::find()
            .filter(replenishment_suggestion::Column::Status.eq(SuggestionStatus::Pending))
            .all(self.db.as_ref())
            .await?;
        Ok(RunSummary::tally(
            pending.iter().map(|s| (s.urgency, s.suggestion_type)),
        ))
    }
}

/// Evaluates one (product, destination) pair, producing at most one
/// suggestion. Pure over the snapshot, safe to parallelize across pairs.
fn evaluate_pair(
    snapshot: &PlanningSnapshot,
    params: &EngineParams,
    supplier_resolver: &dyn SupplierResolver,
    transit_estimator: &dyn TransitEstimator,
    product: &product::Model,
    destination: &location::Model,
    today: NaiveDate,
) -> Option<replenishment_suggestion::Model> {
    let forecast = snapshot.forecast(product.id, destination.id);
    let daily_rate = demand::effective_daily_rate(forecast, today);

    let current_stock = snapshot.on_hand_quantity(product.id, destination.id);
    let in_transit = snapshot.in_transit_quantity(product.id, destination.id);

    let cover = coverage::project_coverage(
        current_stock,
        in_transit,
        daily_rate,
        params.include_in_transit,
        today,
    );

    // Healthy pairs (including every zero-demand pair, which projects the
    // unlimited sentinel) are excluded up front.
    if cover.days_remaining > params.thresholds.skip_window_days() {
        return None;
    }

    let rule = snapshot.safety_rule(product.id, destination.id);
    let safety_threshold =
        safety_stock::resolve_safety_threshold(rule, daily_rate, params.default_safety_days);

    let rule_days_of_cover = rule
        .filter(|r| r.threshold_type == ThresholdType::DaysOfCover)
        .and_then(|r| r.threshold_value.ceil().to_i64());
    let window = quantity::target_coverage_days(
        params.thresholds.planned_days,
        rule_days_of_cover,
        params.default_safety_days,
    );
    let recommended = quantity::recommended_quantity(
        daily_rate,
        window,
        current_stock,
        in_transit,
        MIN_ORDER_QUANTITY,
    );
    if recommended <= 0 {
        return None;
    }

    let urgency = urgency::classify_urgency(cover.days_remaining, &params.thresholds);
    let sourcing = sourcing::resolve_sourcing(
        snapshot,
        product.id,
        destination,
        recommended,
        supplier_resolver,
        transit_estimator,
    );

    let estimated_arrival = today
        .checked_add_signed(Duration::days(sourcing.transit_days))
        .unwrap_or(today);

    let trail = reasoning::build_reasoning(&ReasoningContext {
        current_stock,
        in_transit,
        daily_rate,
        coverage: &cover,
        urgency,
        safety_threshold,
        recommended_quantity: recommended,
        sourcing: &sourcing,
    });

    let reserved_stock = 0;
    Some(replenishment_suggestion::Model {
        id: Uuid::new_v4(),
        suggestion_type: sourcing.suggestion_type,
        urgency,
        status: SuggestionStatus::Pending,
        product_id: product.id,
        product_sku: product.sku.clone(),
        product_name: product.name.clone(),
        location_id: destination.id,
        location_name: destination.name.clone(),
        current_stock,
        in_transit_stock: in_transit,
        reserved_stock,
        available_stock: current_stock - reserved_stock,
        daily_demand_rate: daily_rate,
        weekly_demand_rate: daily_rate * Decimal::from(7),
        days_of_stock_remaining: cover.days_remaining,
        projected_stockout_date: cover.projected_stockout,
        safety_stock_threshold: safety_threshold,
        recommended_quantity: recommended,
        estimated_arrival_date: estimated_arrival,
        source_location_id: sourcing.source_location_id,
        source_location_name: sourcing.source_location_name.clone(),
        source_available_quantity: sourcing.source_available_quantity,
        supplier_id: sourcing.supplier_id,
        supplier_name: sourcing.supplier_name.clone(),
        supplier_lead_time_days: sourcing.supplier_lead_time_days,
        transit_days: sourcing.transit_days,
        transport_method: sourcing.transport_method.clone(),
        reasoning: serde_json::to_value(&trail).unwrap_or_else(|_| serde_json::Value::Array(vec![])),
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::snapshot::test_support::SnapshotBuilder;
    use super::*;
    use crate::entities::location::LocationType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sink() -> location::Model {
        location::Model {
            id: Uuid::new_v4(),
            name: "Marketplace EU".into(),
            location_type: LocationType::Sink,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn widget() -> product::Model {
        product::Model {
            id: Uuid::new_v4(),
            sku: "SKU-100".into(),
            name: "Widget".into(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn evaluate(
        snapshot: &PlanningSnapshot,
        product: &product::Model,
        destination: &location::Model,
    ) -> Option<replenishment_suggestion::Model> {
        evaluate_pair(
            snapshot,
            &EngineParams::default(),
            &FirstListedSupplier,
            &FixedLaneEstimator::default(),
            product,
            destination,
            today(),
        )
    }

    #[test]
    fn purchase_order_scenario_end_to_end() {
        let destination = sink();
        let product = widget();
        let snapshot = SnapshotBuilder::new()
            .stock(product.id, destination.id, 100)
            .forecast(product.id, destination.id, dec!(10))
            .supplier("Acme Components", 30)
            .default_route("sea", 14)
            .build();

        let suggestion = evaluate(&snapshot, &product, &destination).expect("suggestion");

        assert_eq!(suggestion.days_of_stock_remaining, 10);
        assert_eq!(suggestion.urgency, Urgency::Planned);
        assert_eq!(suggestion.safety_stock_threshold, 140);
        assert_eq!(suggestion.recommended_quantity, 40);
        assert_eq!(suggestion.suggestion_type, SuggestionType::PurchaseOrder);
        assert_eq!(
            suggestion.estimated_arrival_date,
            today() + Duration::days(44)
        );
        assert_eq!(suggestion.supplier_name.as_deref(), Some("Acme Components"));
        assert_eq!(suggestion.status, SuggestionStatus::Pending);
        assert_eq!(suggestion.weekly_demand_rate, dec!(70));
    }

    #[test]
    fn transfer_scenario_end_to_end() {
        let destination = sink();
        let product = widget();
        let snapshot = SnapshotBuilder::new()
            .stock(product.id, destination.id, 100)
            .forecast(product.id, destination.id, dec!(10))
            .source_location("Central WH", 500, product.id)
            .supplier("Acme Components", 30)
            .default_route("sea", 14)
            .build();

        let suggestion = evaluate(&snapshot, &product, &destination).expect("suggestion");

        assert_eq!(suggestion.suggestion_type, SuggestionType::Transfer);
        assert_eq!(suggestion.source_available_quantity, Some(500));
        assert_eq!(
            suggestion.estimated_arrival_date,
            today() + Duration::days(7)
        );
    }

    #[test]
    fn zero_rate_pair_is_excluded() {
        let destination = sink();
        let product = widget();
        let snapshot = SnapshotBuilder::new()
            .stock(product.id, destination.id, 100)
            .build();

        assert!(evaluate(&snapshot, &product, &destination).is_none());
    }

    #[test]
    fn healthy_pair_is_excluded() {
        let destination = sink();
        let product = widget();
        // 1000 units at 10/day = 100 days of cover, far past 2x planned
        let snapshot = SnapshotBuilder::new()
            .stock(product.id, destination.id, 1000)
            .forecast(product.id, destination.id, dec!(10))
            .build();

        assert!(evaluate(&snapshot, &product, &destination).is_none());
    }

    #[test]
    fn reasoning_trail_is_attached_verbatim() {
        let destination = sink();
        let product = widget();
        let snapshot = SnapshotBuilder::new()
            .stock(product.id, destination.id, 100)
            .forecast(product.id, destination.id, dec!(10))
            .supplier("Acme Components", 30)
            .build();

        let suggestion = evaluate(&snapshot, &product, &destination).expect("suggestion");
        let trail = suggestion.reasoning.as_array().expect("json array");
        assert!(!trail.is_empty());
        assert_eq!(trail[0]["message"], "Current stock: 100 units");
    }

    #[test]
    fn tally_counts_by_tier_and_type() {
        let summary = RunSummary::tally(
            vec![
                (Urgency::Critical, SuggestionType::PurchaseOrder),
                (Urgency::Critical, SuggestionType::Transfer),
                (Urgency::Planned, SuggestionType::Transfer),
            ]
            .into_iter(),
        );
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_urgency.critical, 2);
        assert_eq!(summary.by_urgency.planned, 1);
        assert_eq!(summary.by_type.transfer, 2);
        assert_eq!(summary.by_type.purchase_order, 1);
    }
}
