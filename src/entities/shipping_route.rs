use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// External shipping route: an ordered sequence of legs stored as JSON.
/// The route flagged default+active supplies the fallback transit duration
/// and transport method for purchase-order replenishment.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shipping_routes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// JSON array of `RouteLeg`s in travel order.
    pub legs: Json,
    pub is_default: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub transport_method: String,
    pub transit_days: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    fn parsed_legs(&self) -> Vec<RouteLeg> {
        serde_json::from_value(self.legs.clone()).unwrap_or_default()
    }

    /// Total transit duration over all legs. Malformed leg data reads as an
    /// empty route (0 days); callers apply their own fallback.
    pub fn total_transit_days(&self) -> i64 {
        self.parsed_legs()
            .iter()
            .map(|leg| leg.transit_days.max(0))
            .sum()
    }

    /// Transport method of the first leg, if any.
    pub fn primary_transport_method(&self) -> Option<String> {
        self.parsed_legs().first().map(|leg| leg.transport_method.clone())
    }
}
