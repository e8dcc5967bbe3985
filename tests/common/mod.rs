#![allow(dead_code)]

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use serde_json::json;
use uuid::Uuid;

use supplyline_api::entities::location::LocationType;
use supplyline_api::entities::safety_stock_rule::ThresholdType;
use supplyline_api::entities::transfer::TransferStatus;
use supplyline_api::entities::{
    demand_forecast, engine_settings, location, product, replenishment_suggestion,
    safety_stock_rule, shipping_route, stock_batch, supplier, transfer,
};
use supplyline_api::migrator::Migrator;

/// Fresh in-memory database with the full schema applied. A single
/// connection keeps every session on the same in-memory store.
pub async fn setup_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

pub async fn seed_location(
    db: &DatabaseConnection,
    name: &str,
    location_type: LocationType,
) -> location::Model {
    location::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        location_type: Set(location_type),
        is_active: Set(true),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert location")
}

pub async fn seed_product(db: &DatabaseConnection, sku: &str, name: &str) -> product::Model {
    product::ActiveModel {
        id: Set(Uuid::new_v4()),
        sku: Set(sku.to_string()),
        name: Set(name.to_string()),
        is_active: Set(true),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert product")
}

pub async fn seed_stock(
    db: &DatabaseConnection,
    product_id: Uuid,
    location_id: Uuid,
    quantity: i64,
) -> stock_batch::Model {
    stock_batch::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        location_id: Set(location_id),
        quantity: Set(quantity),
        batch_code: Set(None),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert stock batch")
}

pub async fn seed_in_transit(
    db: &DatabaseConnection,
    product_id: Uuid,
    source_id: Uuid,
    destination_id: Uuid,
    quantity: i64,
) -> transfer::Model {
    transfer::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        source_location_id: Set(source_id),
        destination_location_id: Set(destination_id),
        quantity: Set(quantity),
        status: Set(TransferStatus::InTransit),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert transfer")
}

pub async fn seed_forecast(
    db: &DatabaseConnection,
    product_id: Uuid,
    location_id: Uuid,
    rate: Decimal,
    enabled: bool,
) -> demand_forecast::Model {
    demand_forecast::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        location_id: Set(location_id),
        base_daily_rate: Set(rate),
        manual_override_rate: Set(None),
        seasonal_multipliers: Set(None),
        trend_rate: Set(None),
        enabled: Set(enabled),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert forecast")
}

pub async fn seed_safety_rule(
    db: &DatabaseConnection,
    product_id: Uuid,
    location_id: Uuid,
    threshold_type: ThresholdType,
    value: Decimal,
) -> safety_stock_rule::Model {
    safety_stock_rule::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        location_id: Set(location_id),
        threshold_type: Set(threshold_type),
        threshold_value: Set(value),
        is_active: Set(true),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert safety rule")
}

pub async fn seed_supplier(
    db: &DatabaseConnection,
    name: &str,
    lead_time_days: i32,
) -> supplier::Model {
    supplier::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        lead_time_days: Set(lead_time_days),
        is_active: Set(true),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert supplier")
}

pub async fn seed_default_route(
    db: &DatabaseConnection,
    method: &str,
    transit_days: i64,
) -> shipping_route::Model {
    shipping_route::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(format!("default {}", method)),
        legs: Set(json!([
            { "transport_method": method, "transit_days": transit_days }
        ])),
        is_default: Set(true),
        is_active: Set(true),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert shipping route")
}

pub async fn seed_settings(
    db: &DatabaseConnection,
    critical: i64,
    warning: i64,
    planned: i64,
    default_safety_days: i64,
    include_in_transit: bool,
) -> engine_settings::Model {
    engine_settings::ActiveModel {
        id: Set(Uuid::new_v4()),
        critical_days: Set(critical),
        warning_days: Set(warning),
        planned_days: Set(planned),
        default_safety_days: Set(default_safety_days),
        include_in_transit: Set(include_in_transit),
        updated_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert settings")
}

/// A stale pending suggestion, for verifying replace/untouched semantics.
pub async fn seed_pending_suggestion(
    db: &DatabaseConnection,
    product: &product::Model,
    location: &location::Model,
) -> replenishment_suggestion::Model {
    use supplyline_api::entities::replenishment_suggestion::{
        SuggestionStatus, SuggestionType, Urgency,
    };

    replenishment_suggestion::ActiveModel {
        id: Set(Uuid::new_v4()),
        suggestion_type: Set(SuggestionType::PurchaseOrder),
        urgency: Set(Urgency::Planned),
        status: Set(SuggestionStatus::Pending),
        product_id: Set(product.id),
        product_sku: Set(product.sku.clone()),
        product_name: Set(product.name.clone()),
        location_id: Set(location.id),
        location_name: Set(location.name.clone()),
        current_stock: Set(10),
        in_transit_stock: Set(0),
        reserved_stock: Set(0),
        available_stock: Set(10),
        daily_demand_rate: Set(Decimal::ONE),
        weekly_demand_rate: Set(Decimal::from(7)),
        days_of_stock_remaining: Set(10),
        projected_stockout_date: Set(None),
        safety_stock_threshold: Set(14),
        recommended_quantity: Set(4),
        estimated_arrival_date: Set(Utc::now().date_naive()),
        source_location_id: Set(None),
        source_location_name: Set(None),
        source_available_quantity: Set(None),
        supplier_id: Set(None),
        supplier_name: Set(None),
        supplier_lead_time_days: Set(None),
        transit_days: Set(14),
        transport_method: Set(Some("sea".to_string())),
        reasoning: Set(json!([])),
        generated_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert pending suggestion")
}
