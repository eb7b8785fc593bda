//! Domain layer containing business entities and the store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (`SlugMapping`, `AnalyticsRow`)
//! - [`repositories`] - Store trait definitions implemented by the
//!   infrastructure layer
//! - [`analytics_event`] - Background analytics work items
//! - [`analytics_queue`] - Fire-and-forget submission of analytics work
//! - [`analytics_worker`] - Background worker applying analytics writes
//!
//! # Analytics Flow
//!
//! 1. A service finishes its awaited mapping write or lookup
//! 2. An [`analytics_event::AnalyticsEvent`] is submitted through
//!    [`analytics_queue::AnalyticsQueue::submit`] without waiting
//! 3. [`analytics_worker::run_analytics_worker`] applies it via
//!    [`repositories::AnalyticsRepository`]
//! 4. Failures are logged once and dropped

pub mod analytics_event;
pub mod analytics_queue;
pub mod analytics_worker;
pub mod entities;
pub mod repositories;
