use crate::config::AdvisoryConfig;
use crate::data;
use crate::models::{AdvisoryBundle, GeoLocation};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delivered over the service channel when a fetch completes. The
/// request id lets the receiver drop stale deliveries.
#[derive(Debug)]
pub struct AdvisoryEvent {
    pub request_id: u64,
    pub bundle: AdvisoryBundle,
}

/// Serves the static advisory tables after a simulated lookup latency.
/// The fetch has the external shape of a pipeline (location -> weather
/// and soil lookup -> recommendation synthesis) but no stage performs
/// a real lookup; every completed request delivers the same tables.
pub struct AdvisoryService {
    latency: Duration,
    tx: mpsc::UnboundedSender<AdvisoryEvent>,
    in_flight: Option<JoinHandle<()>>,
    next_request_id: u64,
}

impl AdvisoryService {
    pub fn new(config: &AdvisoryConfig) -> (Self, mpsc::UnboundedReceiver<AdvisoryEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                latency: Duration::from_millis(config.latency_ms),
                tx,
                in_flight: None,
                next_request_id: 0,
            },
            rx,
        )
    }

    /// Start a fetch for this location, aborting any outstanding one
    /// first so a superseded request can never land its snapshot.
    /// Returns the request id to match against delivered events.
    pub fn request(&mut self, location: &GeoLocation) -> u64 {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                handle.abort();
                tracing::debug!("Superseded in-flight advisory fetch");
            }
        }

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        let tx = self.tx.clone();
        let latency = self.latency;

        tracing::debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            request_id,
            "Advisory fetch started"
        );

        self.in_flight = Some(tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let bundle = data::sample_bundle();
            match bundle.validate() {
                Ok(()) => {
                    // Receiver gone means the app is shutting down.
                    let _ = tx.send(AdvisoryEvent { request_id, bundle });
                }
                Err(e) => tracing::warn!("Advisory bundle rejected at ingestion: {}", e),
            }
        }));

        request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(latency_ms: u64) -> (AdvisoryService, mpsc::UnboundedReceiver<AdvisoryEvent>) {
        AdvisoryService::new(&AdvisoryConfig { latency_ms })
    }

    fn delhi() -> GeoLocation {
        GeoLocation::manual("Delhi", 28.6139, 77.2090)
    }

    #[tokio::test]
    async fn fetch_delivers_the_full_bundle_after_latency() {
        let (mut service, mut rx) = service(10);
        let id = service.request(&delhi());
        let event = rx.recv().await.expect("fetch should deliver");
        assert_eq!(event.request_id, id);
        assert_eq!(event.bundle.crops.len(), 3);
        assert!(event.bundle.validate().is_ok());
    }

    #[tokio::test]
    async fn superseding_request_aborts_the_stale_fetch() {
        let (mut service, mut rx) = service(30);
        service.request(&delhi());
        let second = service.request(&GeoLocation::manual("Mumbai", 28.6139, 77.2090));

        tokio::time::sleep(Duration::from_millis(120)).await;

        let mut delivered = Vec::new();
        while let Ok(event) = rx.try_recv() {
            delivered.push(event.request_id);
        }
        // Only the superseding request lands; the stale one was aborted
        // mid-latency, so no mixed snapshot is possible.
        assert_eq!(delivered, vec![second]);
    }

    #[tokio::test]
    async fn request_ids_increase_monotonically() {
        let (mut service, _rx) = service(5);
        let a = service.request(&delhi());
        let b = service.request(&delhi());
        let c = service.request(&delhi());
        assert!(a < b && b < c);
    }
}
