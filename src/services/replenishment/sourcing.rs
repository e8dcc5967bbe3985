use uuid::Uuid;

use crate::entities::replenishment_suggestion::SuggestionType;
use crate::entities::{location, supplier};

use super::snapshot::PlanningSnapshot;

/// Fallback transit when no default shipping route is configured: assume
/// standard sea freight.
pub const FALLBACK_ROUTE_TRANSIT_DAYS: i64 = 14;
pub const FALLBACK_TRANSPORT_METHOD: &str = "sea";

/// Picks the purchasing source for a purchase-order suggestion.
///
/// The shipped policy takes the first supplier in the loaded set — a known
/// placeholder, kept injectable so a product→supplier relationship can
/// replace it without touching the engine.
pub trait SupplierResolver: Send + Sync {
    fn resolve<'a>(
        &self,
        product_id: Uuid,
        suppliers: &'a [supplier::Model],
    ) -> Option<&'a supplier::Model>;
}

/// Estimates transfer transit between two internal locations.
///
/// The shipped policy is a fixed short-haul lane, not a routing
/// calculation; real lane data can replace it behind this trait.
pub trait TransitEstimator: Send + Sync {
    fn transfer_transit_days(
        &self,
        source: &location::Model,
        destination: &location::Model,
    ) -> i64;
}

pub struct FirstListedSupplier;

impl SupplierResolver for FirstListedSupplier {
    fn resolve<'a>(
        &self,
        _product_id: Uuid,
        suppliers: &'a [supplier::Model],
    ) -> Option<&'a supplier::Model> {
        suppliers.first()
    }
}

pub struct FixedLaneEstimator {
    pub transit_days: i64,
}

impl Default for FixedLaneEstimator {
    fn default() -> Self {
        Self { transit_days: 7 }
    }
}

impl TransitEstimator for FixedLaneEstimator {
    fn transfer_transit_days(
        &self,
        _source: &location::Model,
        _destination: &location::Model,
    ) -> i64 {
        self.transit_days
    }
}

/// A warehouse able to donate stock, ranked by available quantity.
#[derive(Clone, Debug)]
pub struct SourceCandidate {
    pub location_id: Uuid,
    pub location_name: String,
    pub available_quantity: i64,
}

/// Resolved fulfillment path for one suggestion.
#[derive(Clone, Debug)]
pub struct SourcingDecision {
    pub suggestion_type: SuggestionType,
    pub source_location_id: Option<Uuid>,
    pub source_location_name: Option<String>,
    pub source_available_quantity: Option<i64>,
    pub supplier_id: Option<Uuid>,
    pub supplier_name: Option<String>,
    pub supplier_lead_time_days: Option<i32>,
    pub transit_days: i64,
    pub transport_method: Option<String>,
}

/// Warehouses holding any stock of the product, best-stocked first.
/// The destination itself never donates to itself.
pub fn rank_source_candidates(
    snapshot: &PlanningSnapshot,
    product_id: Uuid,
    destination_id: Uuid,
) -> Vec<SourceCandidate> {
    let mut candidates: Vec<SourceCandidate> = snapshot
        .source_locations
        .iter()
        .filter(|loc| loc.id != destination_id)
        .filter_map(|loc| {
            let available = snapshot.on_hand_quantity(product_id, loc.id);
            (available > 0).then(|| SourceCandidate {
                location_id: loc.id,
                location_name: loc.name.clone(),
                available_quantity: available,
            })
        })
        .collect();

    // Deterministic order: quantity descending, name as tie-break.
    candidates.sort_by(|a, b| {
        b.available_quantity
            .cmp(&a.available_quantity)
            .then_with(|| a.location_name.cmp(&b.location_name))
    });
    candidates
}

/// Arbitrates between the transfer and purchase-order paths.
///
/// Transfer wins iff the best source can cover the full recommended
/// quantity. Missing sourcing data never blocks the decision — a
/// purchase-order suggestion with null supplier fields and the fallback
/// route duration is still emitted.
pub fn resolve_sourcing(
    snapshot: &PlanningSnapshot,
    product_id: Uuid,
    destination: &location::Model,
    recommended_qty: i64,
    supplier_resolver: &dyn SupplierResolver,
    transit_estimator: &dyn TransitEstimator,
) -> SourcingDecision {
    let candidates = rank_source_candidates(snapshot, product_id, destination.id);

    if let Some((best, source)) = candidates.first().and_then(|best| {
        snapshot
            .source_locations
            .iter()
            .find(|loc| loc.id == best.location_id)
            .map(|loc| (best, loc))
    }) {
        if best.available_quantity >= recommended_qty {
            return SourcingDecision {
                suggestion_type: SuggestionType::Transfer,
                source_location_id: Some(best.location_id),
                source_location_name: Some(best.location_name.clone()),
                source_available_quantity: Some(best.available_quantity),
                supplier_id: None,
                supplier_name: None,
                supplier_lead_time_days: None,
                transit_days: transit_estimator.transfer_transit_days(source, destination),
                transport_method: Some("internal_transfer".to_string()),
            };
        }
    }

    let supplier = supplier_resolver.resolve(product_id, &snapshot.suppliers);
    let (route_days, method) = match &snapshot.default_route {
        Some(route) => {
            let days = route.total_transit_days();
            if days > 0 {
                (days, route.primary_transport_method())
            } else {
                (
                    FALLBACK_ROUTE_TRANSIT_DAYS,
                    Some(FALLBACK_TRANSPORT_METHOD.to_string()),
                )
            }
        }
        None => (
            FALLBACK_ROUTE_TRANSIT_DAYS,
            Some(FALLBACK_TRANSPORT_METHOD.to_string()),
        ),
    };
    let lead_time = supplier.map(|s| s.lead_time_days as i64).unwrap_or(0);

    SourcingDecision {
        suggestion_type: SuggestionType::PurchaseOrder,
        source_location_id: None,
        source_location_name: None,
        source_available_quantity: candidates.first().map(|c| c.available_quantity),
        supplier_id: supplier.map(|s| s.id),
        supplier_name: supplier.map(|s| s.name.clone()),
        supplier_lead_time_days: supplier.map(|s| s.lead_time_days),
        transit_days: route_days + lead_time,
        transport_method: method,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::location::LocationType;
    use crate::services::replenishment::snapshot::test_support::SnapshotBuilder;
    use chrono::Utc;

    fn dest() -> location::Model {
        location::Model {
            id: Uuid::new_v4(),
            name: "Marketplace EU".into(),
            location_type: LocationType::Sink,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn transfer_wins_when_best_source_covers_the_quantity() {
        let destination = dest();
        let product_id = Uuid::new_v4();
        let snapshot = SnapshotBuilder::new()
            .source_location("Central WH", 500, product_id)
            .source_location("Overflow WH", 80, product_id)
            .supplier("Acme Components", 30)
            .build();

        let decision = resolve_sourcing(
            &snapshot,
            product_id,
            &destination,
            40,
            &FirstListedSupplier,
            &FixedLaneEstimator::default(),
        );

        assert_eq!(decision.suggestion_type, SuggestionType::Transfer);
        assert_eq!(decision.source_available_quantity, Some(500));
        assert_eq!(decision.source_location_name.as_deref(), Some("Central WH"));
        assert_eq!(decision.transit_days, 7);
        assert_eq!(decision.supplier_id, None);
    }

    #[test]
    fn purchase_order_when_sources_cannot_cover() {
        let destination = dest();
        let product_id = Uuid::new_v4();
        let snapshot = SnapshotBuilder::new()
            .source_location("Central WH", 10, product_id)
            .supplier("Acme Components", 30)
            .default_route("sea", 14)
            .build();

        let decision = resolve_sourcing(
            &snapshot,
            product_id,
            &destination,
            40,
            &FirstListedSupplier,
            &FixedLaneEstimator::default(),
        );

        assert_eq!(decision.suggestion_type, SuggestionType::PurchaseOrder);
        assert_eq!(decision.supplier_name.as_deref(), Some("Acme Components"));
        assert_eq!(decision.transit_days, 44);
        assert_eq!(decision.transport_method.as_deref(), Some("sea"));
    }

    #[test]
    fn missing_supplier_and_route_still_yields_a_decision() {
        let destination = dest();
        let product_id = Uuid::new_v4();
        let snapshot = SnapshotBuilder::new().build();

        let decision = resolve_sourcing(
            &snapshot,
            product_id,
            &destination,
            40,
            &FirstListedSupplier,
            &FixedLaneEstimator::default(),
        );

        assert_eq!(decision.suggestion_type, SuggestionType::PurchaseOrder);
        assert_eq!(decision.supplier_id, None);
        assert_eq!(decision.transit_days, FALLBACK_ROUTE_TRANSIT_DAYS);
    }

    #[test]
    fn candidates_rank_by_available_quantity() {
        let product_id = Uuid::new_v4();
        let snapshot = SnapshotBuilder::new()
            .source_location("Small WH", 5, product_id)
            .source_location("Big WH", 300, product_id)
            .source_location("Empty WH", 0, product_id)
            .build();

        let ranked = rank_source_candidates(&snapshot, product_id, Uuid::new_v4());
        let names: Vec<_> = ranked.iter().map(|c| c.location_name.as_str()).collect();
        assert_eq!(names, vec!["Big WH", "Small WH"]);
    }
}
