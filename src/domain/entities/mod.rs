//! Core domain entities.
//!
//! - [`SlugMapping`] - A slug and the URL it resolves to
//! - [`PremiumMode`] - Create-vs-update semantics of a premium write
//! - [`AnalyticsRow`] / [`NewAnalyticsRow`] - Per-slug click counter rows

pub mod analytics;
pub mod mapping;

pub use analytics::{AnalyticsRow, NewAnalyticsRow};
pub use mapping::{PremiumMode, SlugMapping};
