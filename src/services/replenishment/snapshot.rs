use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::entities::transfer::TransferStatus;
use crate::entities::{
    demand_forecast, location, product, safety_stock_rule, shipping_route, stock_batch, supplier,
    transfer,
};
use crate::errors::ServiceError;

/// Read-only view of planning state, loaded once per engine run.
///
/// Built before any pair is evaluated and never mutated afterwards, so the
/// per-pair stage can be parallelized over shared references without locks.
#[derive(Clone, Debug, Default)]
pub struct PlanningSnapshot {
    pub sink_locations: Vec<location::Model>,
    pub source_locations: Vec<location::Model>,
    pub products: Vec<product::Model>,
    on_hand: HashMap<(Uuid, Uuid), i64>,
    in_transit: HashMap<(Uuid, Uuid), i64>,
    forecasts: HashMap<(Uuid, Uuid), demand_forecast::Model>,
    safety_rules: HashMap<(Uuid, Uuid), safety_stock_rule::Model>,
    pub suppliers: Vec<supplier::Model>,
    pub default_route: Option<shipping_route::Model>,
}

impl PlanningSnapshot {
    #[instrument(skip(db))]
    pub async fn load(db: &DatabaseConnection) -> Result<Self, ServiceError> {
        let locations = location::Entity::find()
            .filter(location::Column::IsActive.eq(true))
            .all(db)
            .await?;
        let (sink_locations, source_locations): (Vec<_>, Vec<_>) =
            locations.into_iter().partition(|loc| loc.is_sink());

        let products = product::Entity::find()
            .filter(product::Column::IsActive.eq(true))
            .all(db)
            .await?;

        let mut on_hand: HashMap<(Uuid, Uuid), i64> = HashMap::new();
        for batch in stock_batch::Entity::find().all(db).await? {
            *on_hand
                .entry((batch.product_id, batch.location_id))
                .or_default() += batch.quantity.max(0);
        }

        let mut in_transit: HashMap<(Uuid, Uuid), i64> = HashMap::new();
        let open_transfers = transfer::Entity::find()
            .filter(transfer::Column::Status.eq(TransferStatus::InTransit))
            .all(db)
            .await?;
        for t in open_transfers {
            *in_transit
                .entry((t.product_id, t.destination_location_id))
                .or_default() += t.quantity.max(0);
        }

        let mut forecasts = HashMap::new();
        for forecast in demand_forecast::Entity::find().all(db).await? {
            forecasts.insert((forecast.product_id, forecast.location_id), forecast);
        }

        // First active rule per pair wins; at most one should exist.
        let mut safety_rules = HashMap::new();
        let rules = safety_stock_rule::Entity::find()
            .filter(safety_stock_rule::Column::IsActive.eq(true))
            .all(db)
            .await?;
        for rule in rules {
            safety_rules
                .entry((rule.product_id, rule.location_id))
                .or_insert(rule);
        }

        // Ordered so "first supplier in the loaded set" is well-defined.
        let suppliers = supplier::Entity::find()
            .filter(supplier::Column::IsActive.eq(true))
            .order_by_asc(supplier::Column::CreatedAt)
            .all(db)
            .await?;

        let default_route = shipping_route::Entity::find()
            .filter(shipping_route::Column::IsDefault.eq(true))
            .filter(shipping_route::Column::IsActive.eq(true))
            .one(db)
            .await?;

        let snapshot = Self {
            sink_locations,
            source_locations,
            products,
            on_hand,
            in_transit,
            forecasts,
            safety_rules,
            suppliers,
            default_route,
        };
        debug!(
            sinks = snapshot.sink_locations.len(),
            sources = snapshot.source_locations.len(),
            products = snapshot.products.len(),
            suppliers = snapshot.suppliers.len(),
            "planning snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn on_hand_quantity(&self, product_id: Uuid, location_id: Uuid) -> i64 {
        self.on_hand
            .get(&(product_id, location_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn in_transit_quantity(&self, product_id: Uuid, location_id: Uuid) -> i64 {
        self.in_transit
            .get(&(product_id, location_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn forecast(&self, product_id: Uuid, location_id: Uuid) -> Option<&demand_forecast::Model> {
        self.forecasts.get(&(product_id, location_id))
    }

    pub fn safety_rule(
        &self,
        product_id: Uuid,
        location_id: Uuid,
    ) -> Option<&safety_stock_rule::Model> {
        self.safety_rules.get(&(product_id, location_id))
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::entities::location::LocationType;
    use chrono::Utc;
    use serde_json::json;

    /// In-memory snapshot assembly for engine unit tests.
    pub struct SnapshotBuilder {
        snapshot: PlanningSnapshot,
    }

    impl SnapshotBuilder {
        pub fn new() -> Self {
            Self {
                snapshot: PlanningSnapshot::default(),
            }
        }

        pub fn source_location(mut self, name: &str, on_hand: i64, product_id: Uuid) -> Self {
            let id = Uuid::new_v4();
            self.snapshot.source_locations.push(location::Model {
                id,
                name: name.to_string(),
                location_type: LocationType::Source,
                is_active: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            });
            self.snapshot.on_hand.insert((product_id, id), on_hand);
            self
        }

        pub fn stock(mut self, product_id: Uuid, location_id: Uuid, quantity: i64) -> Self {
            self.snapshot.on_hand.insert((product_id, location_id), quantity);
            self
        }

        pub fn in_transit(mut self, product_id: Uuid, location_id: Uuid, quantity: i64) -> Self {
            self.snapshot
                .in_transit
                .insert((product_id, location_id), quantity);
            self
        }

        pub fn forecast(
            mut self,
            product_id: Uuid,
            location_id: Uuid,
            rate: rust_decimal::Decimal,
        ) -> Self {
            self.snapshot.forecasts.insert(
                (product_id, location_id),
                demand_forecast::Model {
                    id: Uuid::new_v4(),
                    product_id,
                    location_id,
                    base_daily_rate: rate,
                    manual_override_rate: None,
                    seasonal_multipliers: None,
                    trend_rate: None,
                    enabled: true,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                },
            );
            self
        }

        pub fn safety_rule(
            mut self,
            product_id: Uuid,
            location_id: Uuid,
            rule: safety_stock_rule::Model,
        ) -> Self {
            self.snapshot
                .safety_rules
                .insert((product_id, location_id), rule);
            self
        }

        pub fn supplier(mut self, name: &str, lead_time_days: i32) -> Self {
            self.snapshot.suppliers.push(supplier::Model {
                id: Uuid::new_v4(),
                name: name.to_string(),
                lead_time_days,
                is_active: true,
                created_at: Utc::now(),
            });
            self
        }

        pub fn default_route(mut self, method: &str, transit_days: i64) -> Self {
            self.snapshot.default_route = Some(shipping_route::Model {
                id: Uuid::new_v4(),
                name: format!("default {}", method),
                legs: json!([{ "transport_method": method, "transit_days": transit_days }]),
                is_default: true,
                is_active: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            });
            self
        }

        pub fn build(self) -> PlanningSnapshot {
            self.snapshot
        }
    }
}
