//! Background worker applying analytics writes.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::domain::analytics_event::AnalyticsEvent;
use crate::domain::entities::NewAnalyticsRow;
use crate::domain::repositories::AnalyticsRepository;

/// Events buffered per shard before the dispatcher waits.
const SHARD_BUFFER: usize = 256;

/// Consumes analytics events until every sender is dropped.
///
/// Events are split over `concurrency` shards by slug. Each shard applies its
/// events one at a time, so the events of one slug are written in the order
/// they were submitted and a click never overtakes the row insert before it.
/// Failed writes are logged and dropped without retry. When the channel
/// closes, every shard finishes its backlog before the worker returns.
pub async fn run_analytics_worker<R>(
    mut rx: mpsc::Receiver<AnalyticsEvent>,
    repository: Arc<R>,
    concurrency: usize,
) where
    R: AnalyticsRepository + ?Sized + 'static,
{
    let shards = concurrency.max(1);
    info!(shards, "Analytics worker started");

    let mut senders = Vec::with_capacity(shards);
    let mut tasks = JoinSet::new();
    for _ in 0..shards {
        let (tx, shard_rx) = mpsc::channel(SHARD_BUFFER);
        senders.push(tx);
        tasks.spawn(run_shard(shard_rx, repository.clone()));
    }

    while let Some(event) = rx.recv().await {
        let shard = shard_for(event.slug(), shards);
        if let Err(mpsc::error::SendError(event)) = senders[shard].send(event).await {
            error!(
                slug = event.slug(),
                kind = event.kind(),
                shard,
                "Analytics shard stopped, dropping event"
            );
            metrics::counter!("analytics_events_dropped_total").increment(1);
        }
    }

    drop(senders);
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            error!("Analytics shard panicked: {}", e);
        }
    }
    info!("Analytics worker stopped");
}

async fn run_shard<R>(mut rx: mpsc::Receiver<AnalyticsEvent>, repository: Arc<R>)
where
    R: AnalyticsRepository + ?Sized,
{
    while let Some(event) = rx.recv().await {
        apply_event(repository.as_ref(), event).await;
    }
}

/// Maps a slug to one of `shards` shards. Stable for the life of the process.
fn shard_for(slug: &str, shards: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    slug.hash(&mut hasher);
    (hasher.finish() % shards as u64) as usize
}

/// Applies a single event. Returns `true` if the store accepted the write.
pub async fn apply_event<R>(repository: &R, event: AnalyticsEvent) -> bool
where
    R: AnalyticsRepository + ?Sized,
{
    match event {
        AnalyticsEvent::RowCreated { slug, original_url } => {
            match repository
                .insert_row(NewAnalyticsRow::new(slug.clone(), original_url))
                .await
            {
                Ok(()) => {
                    debug!(slug = %slug, "Analytics row inserted");
                    true
                }
                Err(e) => {
                    error!(slug = %slug, "Failed to insert analytics row: {}", e);
                    metrics::counter!("analytics_events_failed_total").increment(1);
                    false
                }
            }
        }
        AnalyticsEvent::Clicked { slug } => match repository.increment_clicks(&slug).await {
            Ok(0) => {
                warn!(slug = %slug, "Click recorded for slug without analytics row");
                true
            }
            Ok(rows) => {
                debug!(slug = %slug, rows, "Click counted");
                true
            }
            Err(e) => {
                error!(slug = %slug, "Failed to count click: {}", e);
                metrics::counter!("analytics_events_failed_total").increment(1);
                false
            }
        },
    }
}
