//! Asynchronous enrichment of markers with descriptive text.
//!
//! Each marker gets exactly one fetch, fired at startup and never retried or
//! cancelled. Fetches run on the async runtime and report back through an
//! unbounded channel as [`AnnotationUpdate`] messages keyed by marker id, so
//! all registry mutation stays on the caller's loop. A failed fetch is fully
//! recovered by storing [`FALLBACK_ANNOTATION`] instead of the summary.

use std::sync::Arc;

use maybe_sync::{MaybeSend, MaybeSync};
use tokio::sync::mpsc;

use crate::error::OrteliusError;
use crate::marker::MarkerId;

mod opensearch;
pub use opensearch::OpensearchProvider;

/// Annotation text stored when the fetch for a marker fails for any reason.
pub const FALLBACK_ANNOTATION: &str = "No Wikipedia data available.";

/// Source of descriptive text for a place title.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait AnnotationProvider: MaybeSend + MaybeSync {
    /// Fetches a one-line description for the given place title.
    async fn fetch(&self, title: &str) -> Result<String, OrteliusError>;
}

/// A completed annotation fetch.
#[derive(Debug)]
pub struct AnnotationUpdate {
    /// The marker the fetch was issued for.
    pub marker_id: MarkerId,
    /// The fetched summary, or the error the fetch failed with.
    pub result: Result<String, OrteliusError>,
}

pub(crate) type AnnotationSender = mpsc::UnboundedSender<AnnotationUpdate>;
pub(crate) type AnnotationReceiver = mpsc::UnboundedReceiver<AnnotationUpdate>;

pub(crate) fn channel() -> (AnnotationSender, AnnotationReceiver) {
    mpsc::unbounded_channel()
}

/// Fires the single fetch for one marker. The result is handed back through
/// the channel; if the receiver is gone the completion is dropped silently.
pub(crate) fn spawn_fetch(
    provider: Arc<dyn AnnotationProvider>,
    marker_id: MarkerId,
    title: String,
    sender: AnnotationSender,
) {
    crate::async_runtime::spawn(async move {
        let result = provider.fetch(&title).await;
        if let Err(err) = &result {
            log::debug!("annotation fetch for {title:?} failed: {err}");
        }

        let _ = sender.send(AnnotationUpdate { marker_id, result });
    });
}
