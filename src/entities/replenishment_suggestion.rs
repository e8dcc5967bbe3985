use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Output of one replenishment engine run for a (product, sink-location)
/// pair. The engine only ever creates rows in `Pending` status; acceptance
/// and dismissal belong to the consuming workflow.
///
/// The reasoning trail is stored verbatim — it is not re-derivable from the
/// other columns and must be persisted, not recomputed on read.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "replenishment_suggestions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub suggestion_type: SuggestionType,
    pub urgency: Urgency,
    pub status: SuggestionStatus,

    pub product_id: Uuid,
    pub product_sku: String,
    pub product_name: String,
    pub location_id: Uuid,
    pub location_name: String,

    pub current_stock: i64,
    pub in_transit_stock: i64,
    pub reserved_stock: i64,
    pub available_stock: i64,

    pub daily_demand_rate: Decimal,
    pub weekly_demand_rate: Decimal,
    pub days_of_stock_remaining: i64,
    pub projected_stockout_date: Option<NaiveDate>,

    pub safety_stock_threshold: i64,
    pub recommended_quantity: i64,
    pub estimated_arrival_date: NaiveDate,

    pub source_location_id: Option<Uuid>,
    pub source_location_name: Option<String>,
    pub source_available_quantity: Option<i64>,
    pub supplier_id: Option<Uuid>,
    pub supplier_name: Option<String>,
    pub supplier_lead_time_days: Option<i32>,
    pub transit_days: i64,
    pub transport_method: Option<String>,

    pub reasoning: Json,
    pub generated_at: DateTime<Utc>,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SuggestionType {
    #[sea_orm(string_value = "transfer")]
    Transfer,
    #[sea_orm(string_value = "purchase_order")]
    PurchaseOrder,
}

/// Urgency tiers ordered by decreasing time-to-stockout.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Urgency {
    #[sea_orm(string_value = "critical")]
    Critical,
    #[sea_orm(string_value = "warning")]
    Warning,
    #[sea_orm(string_value = "planned")]
    Planned,
    #[sea_orm(string_value = "monitor")]
    Monitor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "dismissed")]
    Dismissed,
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
