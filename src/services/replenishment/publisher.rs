use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, Set,
    TransactionTrait,
};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entities::replenishment_suggestion::{self, SuggestionStatus, Urgency};
use crate::entities::notification;
use crate::errors::ServiceError;

/// Replaces the pending suggestion set with a freshly computed batch and
/// raises one notification per critical suggestion.
///
/// The batch is fully computed before anything is written; delete and
/// insert run in one transaction so a failed publish leaves the previous
/// pending set untouched and readers never observe an empty window.
#[instrument(skip(db, suggestions), fields(batch = suggestions.len()))]
pub async fn publish_batch(
    db: &DatabaseConnection,
    suggestions: &[replenishment_suggestion::Model],
) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    replenishment_suggestion::Entity::delete_many()
        .filter(replenishment_suggestion::Column::Status.eq(SuggestionStatus::Pending))
        .exec(&txn)
        .await?;

    if !suggestions.is_empty() {
        let rows: Vec<replenishment_suggestion::ActiveModel> = suggestions
            .iter()
            .cloned()
            .map(IntoActiveModel::into_active_model)
            .collect();
        replenishment_suggestion::Entity::insert_many(rows)
            .exec(&txn)
            .await?;

        let alerts: Vec<notification::ActiveModel> = suggestions
            .iter()
            .filter(|s| s.urgency == Urgency::Critical)
            .map(critical_notification)
            .collect();
        if !alerts.is_empty() {
            let alert_count = alerts.len();
            notification::Entity::insert_many(alerts).exec(&txn).await?;
            info!(alerts = alert_count, "raised critical stock notifications");
        }
    }

    txn.commit().await?;
    Ok(())
}

fn critical_notification(
    suggestion: &replenishment_suggestion::Model,
) -> notification::ActiveModel {
    notification::ActiveModel {
        id: Set(Uuid::new_v4()),
        notification_type: Set("replenishment_critical".to_string()),
        title: Set(format!(
            "Critical stock: {} at {}",
            suggestion.product_sku, suggestion.location_name
        )),
        message: Set(format!(
            "{} has {} days of stock remaining at {}; recommended replenishment is {} units",
            suggestion.product_name,
            suggestion.days_of_stock_remaining,
            suggestion.location_name,
            suggestion.recommended_quantity
        )),
        entity_type: Set("replenishment_suggestion".to_string()),
        entity_id: Set(suggestion.id),
        payload: Set(json!({
            "product_id": suggestion.product_id,
            "location_id": suggestion.location_id,
            "days_of_stock_remaining": suggestion.days_of_stock_remaining,
            "recommended_quantity": suggestion.recommended_quantity,
        })),
        is_read: Set(false),
        created_at: Set(Utc::now()),
    }
}
