//! Health report returned by `GET /api/health`.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Healthy,
    Degraded,
}

/// State of one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentState {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceState,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub mapping_store: ComponentCheck,
    pub analytics_store: ComponentCheck,
    pub analytics_queue: ComponentCheck,
}

impl HealthChecks {
    /// `Healthy` only if every component is ok.
    pub fn overall(&self) -> ServiceState {
        let all_ok = [
            &self.mapping_store,
            &self.analytics_store,
            &self.analytics_queue,
        ]
        .iter()
        .all(|check| check.status == ComponentState::Ok);

        if all_ok {
            ServiceState::Healthy
        } else {
            ServiceState::Degraded
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: ComponentState,
    pub message: String,
}

impl ComponentCheck {
    /// Builds an `ok` check when `healthy` holds, an `error` check otherwise.
    pub fn from_check(healthy: bool, ok: impl Into<String>, error: impl Into<String>) -> Self {
        if healthy {
            Self {
                status: ComponentState::Ok,
                message: ok.into(),
            }
        } else {
            Self {
                status: ComponentState::Error,
                message: error.into(),
            }
        }
    }
}
