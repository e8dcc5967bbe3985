use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory location. Sink locations face end-customer demand (marketplace
/// fulfillment points); source locations are owned or 3PL warehouses whose
/// stock can be transferred out.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub location_type: LocationType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// Sales-channel fulfillment point (e.g. marketplace-managed warehouse).
    #[sea_orm(string_value = "sink")]
    Sink,
    /// Owned or third-party warehouse holding transferable stock.
    #[sea_orm(string_value = "source")]
    Source,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_sink(&self) -> bool {
        self.location_type == LocationType::Sink
    }

    pub fn is_source(&self) -> bool {
        self.location_type == LocationType::Source
    }
}
