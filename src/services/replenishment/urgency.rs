use serde::{Deserialize, Serialize};

use crate::entities::replenishment_suggestion::Urgency;
use crate::errors::ServiceError;

/// Ascending day-count boundaries between urgency tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyThresholds {
    pub critical_days: i64,
    pub warning_days: i64,
    pub planned_days: i64,
}

impl UrgencyThresholds {
    /// Classification is only monotonic when critical < warning < planned.
    /// Violations are a configuration error and fail the run up front.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.critical_days < 0 {
            return Err(ServiceError::ValidationError(format!(
                "urgency thresholds must be non-negative, got critical={}",
                self.critical_days
            )));
        }
        if self.critical_days >= self.warning_days || self.warning_days >= self.planned_days {
            return Err(ServiceError::ValidationError(format!(
                "urgency thresholds must be strictly ascending: critical={} warning={} planned={}",
                self.critical_days, self.warning_days, self.planned_days
            )));
        }
        Ok(())
    }

    /// Pairs with more than twice the planned window of cover are healthy
    /// and excluded from suggestion generation.
    pub fn skip_window_days(&self) -> i64 {
        self.planned_days * 2
    }
}

/// Maps days of remaining cover onto an urgency tier. Total over all inputs.
pub fn classify_urgency(days_remaining: i64, thresholds: &UrgencyThresholds) -> Urgency {
    if days_remaining <= thresholds.critical_days {
        Urgency::Critical
    } else if days_remaining <= thresholds.warning_days {
        Urgency::Warning
    } else if days_remaining <= thresholds.planned_days {
        Urgency::Planned
    } else {
        Urgency::Monitor
    }
}
