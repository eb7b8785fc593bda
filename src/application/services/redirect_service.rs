//! Slug resolution service.

use std::sync::Arc;

use crate::domain::analytics_event::AnalyticsEvent;
use crate::domain::analytics_queue::AnalyticsQueue;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Resolves slugs to their original URLs and counts clicks.
pub struct RedirectService<M: MappingStore + ?Sized> {
    store: Arc<M>,
    analytics: AnalyticsQueue,
}

impl<M: MappingStore + ?Sized> RedirectService<M> {
    /// Creates a new redirect service.
    pub fn new(store: Arc<M>, analytics: AnalyticsQueue) -> Self {
        Self { store, analytics }
    }

    /// Returns the URL stored for `slug`.
    ///
    /// On success a click is submitted to the analytics queue; the click is
    /// counted later and its failure never reaches the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `slug` is empty.
    /// Returns [`AppError::NotFound`] if nothing is stored under `slug`.
    /// Returns [`AppError::Internal`] if the lookup fails.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        if slug.is_empty() {
            return Err(AppError::bad_request("No slug provided"));
        }

        let Some(original_url) = self.store.get(slug).await? else {
            return Err(AppError::not_found("Item not found"));
        };

        self.analytics.submit(AnalyticsEvent::clicked(slug));

        Ok(original_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMappingStore;
    use serde_json::json;
    use tokio::sync::mpsc;

    fn service(
        store: MockMappingStore,
    ) -> (
        RedirectService<MockMappingStore>,
        mpsc::Receiver<AnalyticsEvent>,
    ) {
        let (queue, rx) = AnalyticsQueue::channel(16);
        (RedirectService::new(Arc::new(store), queue), rx)
    }

    #[tokio::test]
    async fn test_resolve_known_slug() {
        let mut mock_store = MockMappingStore::new();
        mock_store
            .expect_get()
            .withf(|slug| slug == "abc234")
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let (service, mut rx) = service(mock_store);

        let url = service.resolve("abc234").await.unwrap();

        assert_eq!(url, "https://example.com");
        assert_eq!(rx.try_recv().unwrap(), AnalyticsEvent::clicked("abc234"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_resolve_unknown_slug() {
        let mut mock_store = MockMappingStore::new();
        mock_store.expect_get().times(1).returning(|_| Ok(None));

        let (service, mut rx) = service(mock_store);

        let result = service.resolve("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_resolve_empty_slug() {
        let mut mock_store = MockMappingStore::new();
        mock_store.expect_get().times(0);

        let (service, _rx) = service(mock_store);

        let err = service.resolve("").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "No slug provided");
    }

    #[tokio::test]
    async fn test_resolve_store_failure_is_internal() {
        let mut mock_store = MockMappingStore::new();
        mock_store
            .expect_get()
            .times(1)
            .returning(|_| Err(AppError::internal("Mapping store error", json!({}))));

        let (service, mut rx) = service(mock_store);

        let result = service.resolve("abc234").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_resolve_each_hit_submits_one_click() {
        let mut mock_store = MockMappingStore::new();
        mock_store
            .expect_get()
            .times(3)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let (service, mut rx) = service(mock_store);

        for _ in 0..3 {
            service.resolve("abc234").await.unwrap();
        }

        for _ in 0..3 {
            assert_eq!(rx.try_recv().unwrap(), AnalyticsEvent::clicked("abc234"));
        }
        assert!(rx.try_recv().is_err());
    }
}
