use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Singleton configuration row for the replenishment engine. When absent,
/// the engine falls back to hard-coded defaults (3/7/14 day urgency
/// thresholds, 14 safety days, in-transit stock included).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "engine_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub critical_days: i64,
    pub warning_days: i64,
    pub planned_days: i64,
    pub default_safety_days: i64,
    pub include_in_transit: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
