//! Analytics work items for asynchronous processing.

/// A unit of analytics work produced on the request path.
///
/// Events are handed to [`crate::domain::analytics_queue::AnalyticsQueue`]
/// and applied later by
/// [`crate::domain::analytics_worker::run_analytics_worker`], so the response
/// never waits on the analytics store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    /// A mapping was written; insert a row with zero clicks.
    RowCreated { slug: String, original_url: String },
    /// A slug was resolved; add one click.
    Clicked { slug: String },
}

impl AnalyticsEvent {
    pub fn row_created(slug: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self::RowCreated {
            slug: slug.into(),
            original_url: original_url.into(),
        }
    }

    pub fn clicked(slug: impl Into<String>) -> Self {
        Self::Clicked { slug: slug.into() }
    }

    /// Slug the event refers to.
    pub fn slug(&self) -> &str {
        match self {
            Self::RowCreated { slug, .. } | Self::Clicked { slug } => slug,
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RowCreated { .. } => "row_created",
            Self::Clicked { .. } => "clicked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_created_event() {
        let event = AnalyticsEvent::row_created("abc234", "https://example.com");

        assert_eq!(event.slug(), "abc234");
        assert_eq!(event.kind(), "row_created");
        assert_eq!(
            event,
            AnalyticsEvent::RowCreated {
                slug: "abc234".to_string(),
                original_url: "https://example.com".to_string(),
            }
        );
    }

    #[test]
    fn test_clicked_event() {
        let event = AnalyticsEvent::clicked("promo");

        assert_eq!(event.slug(), "promo");
        assert_eq!(event.kind(), "clicked");
    }
}
