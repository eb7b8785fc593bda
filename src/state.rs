//! Shared application state.

use std::sync::Arc;

use crate::application::services::{AuthService, RedirectService, SlugService};
use crate::domain::analytics_queue::AnalyticsQueue;
use crate::domain::repositories::{AnalyticsRepository, MappingStore};

/// Everything a handler needs, built once at startup and never mutated.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub slug_service: Arc<SlugService<dyn MappingStore>>,
    pub redirect_service: Arc<RedirectService<dyn MappingStore>>,
    pub auth_service: Arc<AuthService>,
    pub mapping_store: Arc<dyn MappingStore>,
    pub analytics_repository: Arc<dyn AnalyticsRepository>,
    pub analytics: AnalyticsQueue,
}

impl AppState {
    /// Wires the services on top of the given stores.
    ///
    /// # Arguments
    ///
    /// - `mapping_store` - slug → URL store
    /// - `analytics_repository` - analytics table, used directly only by the
    ///   health check; writes go through `analytics`
    /// - `analytics` - queue drained by the analytics worker
    /// - `api_token` - bearer secret for the write endpoints
    pub fn new(
        mapping_store: Arc<dyn MappingStore>,
        analytics_repository: Arc<dyn AnalyticsRepository>,
        analytics: AnalyticsQueue,
        api_token: &str,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(mapping_store.clone(), analytics.clone()));
        let redirect_service = Arc::new(RedirectService::new(
            mapping_store.clone(),
            analytics.clone(),
        ));

        Self {
            slug_service,
            redirect_service,
            auth_service: Arc::new(AuthService::new(api_token)),
            mapping_store,
            analytics_repository,
            analytics,
        }
    }
}
