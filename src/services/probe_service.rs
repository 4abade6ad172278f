// src/services/probe_service.rs
//
// Probe Service
//
// Fetches one URL, validates the bytes, and reports either a validated
// payload or a soft failure. Failures here are routine: a non-success
// status, a network error, a timeout, and a validation reject all collapse
// to the same SoftFailure signal. Callers only learn THAT a source failed,
// never why; the reason is kept for logging and events.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::{validated_payload, ProbeFailureReason, ProbeOutcome};
use crate::error::{AppError, AppResult};
use crate::integrations::ResourceFetcher;

/// Per-attempt bounds for a single probe.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Hard deadline for one fetch attempt
    pub attempt_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            attempt_timeout: Duration::from_secs(5),
        }
    }
}

/// Source Prober: one URL in, one `ProbeOutcome` out.
pub struct ProbeService {
    fetcher: Arc<dyn ResourceFetcher>,
    config: ProbeConfig,
}

impl ProbeService {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self::with_config(fetcher, ProbeConfig::default())
    }

    pub fn with_config(fetcher: Arc<dyn ResourceFetcher>, config: ProbeConfig) -> Self {
        Self { fetcher, config }
    }

    /// Fetches `url` once and validates the response as an icon whose byte
    /// count must clear `min_bytes`.
    pub async fn probe(&self, url: &str, min_bytes: usize) -> ProbeOutcome {
        let fetched = match self.fetcher.fetch(url, self.config.attempt_timeout).await {
            Ok(fetched) => fetched,
            Err(err) => {
                log::debug!("probe {}: transport failure: {}", url, err);
                return ProbeOutcome::SoftFailure(ProbeFailureReason::Transport);
            }
        };

        if !fetched.is_success() {
            log::debug!("probe {}: status {}", url, fetched.status);
            return ProbeOutcome::SoftFailure(ProbeFailureReason::Protocol);
        }

        match validated_payload(&fetched.content_type, fetched.bytes, min_bytes) {
            Some(payload) => {
                log::debug!(
                    "probe {}: accepted {} ({} bytes)",
                    url,
                    payload.mime_type(),
                    payload.byte_count()
                );
                ProbeOutcome::Success(payload)
            }
            None => {
                log::debug!("probe {}: content rejected ({})", url, fetched.content_type);
                ProbeOutcome::SoftFailure(ProbeFailureReason::Content)
            }
        }
    }

    /// Fetches `url` and deserializes the body as JSON, under the same
    /// per-attempt timeout as a probe. Used for manifest expansion.
    pub async fn fetch_json<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let fetched = self.fetcher.fetch(url, self.config.attempt_timeout).await?;
        if !fetched.is_success() {
            return Err(AppError::Status(fetched.status));
        }
        Ok(serde_json::from_slice(&fetched.bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::{FetchedResource, MockResourceFetcher};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut cursor = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .unwrap();
        cursor.into_inner()
    }

    fn fetcher_returning(resource: FetchedResource) -> MockResourceFetcher {
        let mut fetcher = MockResourceFetcher::new();
        fetcher
            .expect_fetch()
            .returning(move |_, _| Ok(resource.clone()));
        fetcher
    }

    #[tokio::test]
    async fn test_probe_success_on_valid_icon() {
        let fetcher = fetcher_returning(FetchedResource {
            status: 200,
            content_type: "image/png".to_string(),
            bytes: png_bytes(64, 64),
        });
        let probe = ProbeService::new(Arc::new(fetcher));

        let outcome = probe.probe("https://ex.com/icon.png", 0).await;
        let payload = outcome.into_payload().expect("payload");
        assert_eq!(payload.mime_type(), "image/png");
    }

    #[tokio::test]
    async fn test_probe_soft_fails_on_error_status() {
        let fetcher = fetcher_returning(FetchedResource {
            status: 404,
            content_type: "image/png".to_string(),
            bytes: png_bytes(64, 64),
        });
        let probe = ProbeService::new(Arc::new(fetcher));

        assert!(!probe.probe("https://ex.com/icon.png", 0).await.is_success());
    }

    #[tokio::test]
    async fn test_probe_soft_fails_on_transport_error() {
        let mut fetcher = MockResourceFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_, _| Err(AppError::Other("connection refused".to_string())));
        let probe = ProbeService::new(Arc::new(fetcher));

        let outcome = probe.probe("https://unreachable.example", 0).await;
        assert!(matches!(
            outcome,
            ProbeOutcome::SoftFailure(ProbeFailureReason::Transport)
        ));
    }

    #[tokio::test]
    async fn test_probe_soft_fails_below_byte_floor() {
        let bytes = png_bytes(64, 64);
        let floor = bytes.len() + 1;
        let fetcher = fetcher_returning(FetchedResource {
            status: 200,
            content_type: "image/png".to_string(),
            bytes,
        });
        let probe = ProbeService::new(Arc::new(fetcher));

        let outcome = probe.probe("https://ex.com/icon.png", floor).await;
        assert!(matches!(
            outcome,
            ProbeOutcome::SoftFailure(ProbeFailureReason::Content)
        ));
    }

    #[tokio::test]
    async fn test_probe_passes_configured_timeout_to_fetcher() {
        let mut fetcher = MockResourceFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|_, timeout| *timeout == Duration::from_millis(1234))
            .returning(|_, _| Err(AppError::Other("nope".to_string())));

        let probe = ProbeService::with_config(
            Arc::new(fetcher),
            ProbeConfig {
                attempt_timeout: Duration::from_millis(1234),
            },
        );

        probe.probe("https://ex.com/icon.png", 0).await;
    }

    #[tokio::test]
    async fn test_fetch_json_rejects_error_status() {
        let fetcher = fetcher_returning(FetchedResource {
            status: 500,
            content_type: "application/json".to_string(),
            bytes: b"{}".to_vec(),
        });
        let probe = ProbeService::new(Arc::new(fetcher));

        let result: AppResult<serde_json::Value> =
            probe.fetch_json("https://ex.com/manifest.json").await;
        assert!(result.is_err());
    }
}
