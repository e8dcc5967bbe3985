use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Demand forecast for a (product, location) pair.
///
/// `seasonal_multipliers` is a JSON array of 12 per-month factors
/// (index 0 = January). A missing or malformed array means no seasonal
/// adjustment. `trend_rate` is advisory and not applied to the rate.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "demand_forecasts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_id: Uuid,
    pub location_id: Uuid,
    pub base_daily_rate: Decimal,
    pub manual_override_rate: Option<Decimal>,
    pub seasonal_multipliers: Option<Json>,
    pub trend_rate: Option<Decimal>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The stored rate with any manual override applied. Negative values
    /// are clamped to zero rather than rejected.
    pub fn effective_base_rate(&self) -> Decimal {
        let rate = self.manual_override_rate.unwrap_or(self.base_daily_rate);
        rate.max(Decimal::ZERO)
    }
}
