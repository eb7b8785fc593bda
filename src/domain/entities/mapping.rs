//! Slug mapping entity.

/// A slug and the original URL it resolves to.
///
/// Built only from validated input: the URL has passed
/// [`crate::utils::is_valid_url`] and the slug is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugMapping {
    pub slug: String,
    pub original_url: String,
}

impl SlugMapping {
    pub fn new(slug: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            original_url: original_url.into(),
        }
    }
}

/// How a premium (caller-chosen) slug is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumMode {
    /// Fails if the slug already resolves to something.
    Create,
    /// Overwrites unconditionally.
    Update,
}

impl PremiumMode {
    pub fn is_update(self) -> bool {
        matches!(self, PremiumMode::Update)
    }

    /// Failure message reported by the premium routes.
    pub fn failure_message(self) -> &'static str {
        match self {
            PremiumMode::Create => "Some Error creating rule",
            PremiumMode::Update => "Some Error updating rule",
        }
    }

    /// Success message reported by the premium routes.
    pub fn success_message(self) -> &'static str {
        match self {
            PremiumMode::Create => "Premium Route Created",
            PremiumMode::Update => "Premium Rule Updated",
        }
    }
}
