pub mod common;
pub mod replenishment;

use std::sync::Arc;

use crate::db::DbPool;
use crate::events::EventSender;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers.
#[derive(Clone)]
pub struct AppServices {
    pub replenishment: Arc<crate::services::replenishment::ReplenishmentService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        let replenishment = Arc::new(crate::services::replenishment::ReplenishmentService::new(
            db_pool,
            event_sender,
        ));
        Self { replenishment }
    }
}
