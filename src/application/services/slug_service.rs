//! Slug creation service.

use std::sync::Arc;

use tracing::info;

use crate::domain::analytics_event::AnalyticsEvent;
use crate::domain::analytics_queue::AnalyticsQueue;
use crate::domain::entities::{PremiumMode, SlugMapping};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::generate_slug;

/// Service for writing slug mappings.
///
/// Every successful write is followed by an analytics-row insert submitted to
/// the [`AnalyticsQueue`]; the caller never waits on it.
///
/// Collision handling is asymmetric: premium creation checks the
/// store first, premium update and random generation do not.
pub struct SlugService<M: MappingStore + ?Sized> {
    store: Arc<M>,
    analytics: AnalyticsQueue,
}

impl<M: MappingStore + ?Sized> SlugService<M> {
    /// Creates a new slug service.
    pub fn new(store: Arc<M>, analytics: AnalyticsQueue) -> Self {
        Self { store, analytics }
    }

    /// Stores `original_url` under a freshly generated slug and returns it.
    ///
    /// The URL must already be validated. The generated slug is not checked
    /// against existing mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the mapping write fails.
    pub async fn create_slug(&self, original_url: &str) -> Result<String, AppError> {
        let slug = generate_slug();

        self.store.put(&slug, original_url).await?;
        self.analytics
            .submit(AnalyticsEvent::row_created(&slug, original_url));

        info!(slug = %slug, "Slug created");
        Ok(slug)
    }

    /// Writes a caller-chosen slug.
    ///
    /// # Modes
    ///
    /// - [`PremiumMode::Create`] - fails if the slug already resolves, no write
    /// - [`PremiumMode::Update`] - overwrites whatever is stored
    ///
    /// Both modes insert a new analytics row on success, so repeated updates
    /// leave several rows for the same slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is taken on create.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn write_premium_slug(
        &self,
        mapping: &SlugMapping,
        mode: PremiumMode,
    ) -> Result<(), AppError> {
        if mode == PremiumMode::Create && self.store.get(&mapping.slug).await?.is_some() {
            return Err(AppError::conflict("Short URL already in use"));
        }

        self.store.put(&mapping.slug, &mapping.original_url).await?;
        self.analytics.submit(AnalyticsEvent::row_created(
            &mapping.slug,
            &mapping.original_url,
        ));

        info!(slug = %mapping.slug, update = mode.is_update(), "Premium slug written");
        Ok(())
    }
}
