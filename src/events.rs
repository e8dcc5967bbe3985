use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// Events raised by background computations for in-process consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    ReplenishmentRunCompleted {
        total: u64,
        critical: u64,
    },
    CriticalStockDetected {
        product_id: Uuid,
        location_id: Uuid,
        days_of_stock_remaining: i64,
        recommended_quantity: i64,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously. Failures are reported as strings so
    /// emitters can log-and-continue; event delivery is best effort.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Drains the event channel, logging each event. Runs for the lifetime of
/// the process; exits when every sender is dropped.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        match &event {
            Event::ReplenishmentRunCompleted { total, critical } => {
                info!(total, critical, "replenishment run completed");
            }
            Event::CriticalStockDetected {
                product_id,
                location_id,
                days_of_stock_remaining,
                ..
            } => {
                warn!(
                    %product_id,
                    %location_id,
                    days = days_of_stock_remaining,
                    "critical stock level detected"
                );
            }
        }
    }
    info!("event channel closed; processor shutting down");
}
