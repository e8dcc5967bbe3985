use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::debug;

use crate::entities::engine_settings;
use crate::errors::ServiceError;

use super::urgency::UrgencyThresholds;

/// Resolved engine configuration for one run. Loaded from the singleton
/// settings row, falling back to shipped defaults when none exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineParams {
    pub thresholds: UrgencyThresholds,
    pub default_safety_days: i64,
    pub include_in_transit: bool,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            thresholds: UrgencyThresholds {
                critical_days: 3,
                warning_days: 7,
                planned_days: 14,
            },
            default_safety_days: 14,
            include_in_transit: true,
        }
    }
}

impl EngineParams {
    /// Loads and validates the run configuration. Threshold ordering is
    /// checked here, once, so a misconfigured record fails the run up
    /// front instead of producing non-monotonic urgency tiers.
    pub async fn resolve(db: &DatabaseConnection) -> Result<Self, ServiceError> {
        let params = match engine_settings::Entity::find().one(db).await? {
            Some(row) => Self {
                thresholds: UrgencyThresholds {
                    critical_days: row.critical_days,
                    warning_days: row.warning_days,
                    planned_days: row.planned_days,
                },
                default_safety_days: row.default_safety_days.max(0),
                include_in_transit: row.include_in_transit,
            },
            None => {
                debug!("no engine settings record; using shipped defaults");
                Self::default()
            }
        };
        params.thresholds.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_defaults_match_documented_values() {
        let params = EngineParams::default();
        assert_eq!(params.thresholds.critical_days, 3);
        assert_eq!(params.thresholds.warning_days, 7);
        assert_eq!(params.thresholds.planned_days, 14);
        assert_eq!(params.default_safety_days, 14);
        assert!(params.include_in_transit);
    }

    #[test]
    fn shipped_defaults_pass_validation() {
        assert!(EngineParams::default().thresholds.validate().is_ok());
    }
}
