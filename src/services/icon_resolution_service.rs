// src/services/icon_resolution_service.rs
//
// Icon Resolution Service
//
// Walks an ordered chain of icon sources and stops at the first validated
// success. The chain, in order:
//
// 1. Parsed candidates (size-ranked), manifest entries expanded,
//    og-image deferred
// 2. Well-known static paths under the page origin
// 3. Third-party icon services, queried by bare domain
// 4. The origin's root favicon
// 5. The deferred og-image, if any
//
// Sources are attempted strictly sequentially; one failure (including a
// timeout) unblocks the next attempt. Absence of an icon is a normal,
// representable outcome: this service never returns an error.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{
    bare_domain, page_origin, rank_candidates, resolve_href, IconCandidate, IconKind,
    ValidatedPayload, MANIFEST_MIN_SIZE,
};
use crate::events::{EventBus, IconResolutionExhausted, IconResolved};
use crate::services::probe_service::ProbeService;

// ============================================================================
// TUNING
// ============================================================================

/// Tuning knobs for the fallback chain.
///
/// The byte floors are coarse quality heuristics, not exact size checks:
/// a source must weigh at least this much to be worth keeping. Bigger
/// declared sizes earn a more lenient floor, because a source that admits
/// its size needs less corroboration than an unlabeled one.
#[derive(Debug, Clone)]
pub struct ResolutionTuning {
    /// Floor for candidates declaring at least `large_size_px`
    pub lenient_min_bytes: usize,

    /// Floor for candidates declaring at least `mid_size_px`
    pub default_min_bytes: usize,

    /// Floor for small or unknown declared sizes
    pub strict_min_bytes: usize,

    /// Declared size from which the lenient floor applies
    pub large_size_px: u32,

    /// Declared size from which the default floor applies
    pub mid_size_px: u32,

    /// Floor for well-known static paths
    pub well_known_min_bytes: usize,

    /// Floor for third-party services; strict because these endpoints
    /// answer 200 with placeholder images for unknown domains
    pub service_min_bytes: usize,

    /// Floor for the root favicon; loosest of all, favicons are
    /// legitimately tiny
    pub favicon_min_bytes: usize,

    /// Conventional static icon locations probed under the page origin
    pub well_known_paths: Vec<String>,

    /// Third-party icon service URLs with a `{domain}` placeholder
    pub icon_service_templates: Vec<String>,
}

impl Default for ResolutionTuning {
    fn default() -> Self {
        Self {
            lenient_min_bytes: 256,
            default_min_bytes: 512,
            strict_min_bytes: 1024,
            large_size_px: 128,
            mid_size_px: 48,
            well_known_min_bytes: 256,
            service_min_bytes: 1000,
            favicon_min_bytes: 100,
            well_known_paths: [
                "/apple-touch-icon.png",
                "/apple-touch-icon-precomposed.png",
                "/apple-touch-icon-180x180.png",
                "/apple-touch-icon-152x152.png",
                "/apple-touch-icon-120x120.png",
                "/android-chrome-512x512.png",
                "/android-chrome-192x192.png",
                "/favicon-196x196.png",
                "/favicon-96x96.png",
                "/favicon-32x32.png",
            ]
            .map(str::to_string)
            .to_vec(),
            icon_service_templates: [
                "https://logo.clearbit.com/{domain}",
                "https://icon.horse/icon/{domain}",
                "https://www.google.com/s2/favicons?domain={domain}&sz=256",
                "https://www.google.com/s2/favicons?domain={domain}&sz=128",
                "https://icons.duckduckgo.com/ip3/{domain}.ico",
            ]
            .map(str::to_string)
            .to_vec(),
        }
    }
}

impl ResolutionTuning {
    /// The byte floor a candidate must clear, given its declared size.
    pub fn min_bytes_for_declared(&self, size_hint: u32) -> usize {
        if size_hint >= self.large_size_px {
            self.lenient_min_bytes
        } else if size_hint >= self.mid_size_px {
            self.default_min_bytes
        } else {
            self.strict_min_bytes
        }
    }
}

// ============================================================================
// MANIFEST SHAPE
// ============================================================================

/// The slice of a web app manifest the chain cares about.
#[derive(Debug, Deserialize)]
struct WebManifest {
    #[serde(default)]
    icons: Vec<ManifestIcon>,
}

#[derive(Debug, Deserialize)]
struct ManifestIcon {
    src: String,
    #[serde(default)]
    sizes: Option<String>,
}

// ============================================================================
// CHAIN SOURCES
// ============================================================================

/// One attemptable source in the ordered chain.
enum ChainSource {
    /// Probe this URL directly
    Direct { url: String, min_bytes: usize },

    /// Fetch a manifest, pick its best icon, probe that
    Manifest { url: String },
}

// ============================================================================
// ICON RESOLUTION SERVICE
// ============================================================================

pub struct IconResolutionService {
    probe: Arc<ProbeService>,
    event_bus: Arc<EventBus>,
    tuning: ResolutionTuning,
}

impl IconResolutionService {
    pub fn new(probe: Arc<ProbeService>, event_bus: Arc<EventBus>) -> Self {
        Self::with_tuning(probe, event_bus, ResolutionTuning::default())
    }

    pub fn with_tuning(
        probe: Arc<ProbeService>,
        event_bus: Arc<EventBus>,
        tuning: ResolutionTuning,
    ) -> Self {
        Self {
            probe,
            event_bus,
            tuning,
        }
    }

    /// Resolves the best available icon for `domain`.
    ///
    /// `page_url` anchors origin-relative sources; without it the origin is
    /// assumed to be `https://{domain}`. `candidates` are pre-parsed markup
    /// candidates; pass an empty list to enter the chain at the well-known
    /// paths.
    ///
    /// Returns `None` only after every source in every step soft-failed.
    pub async fn resolve(
        &self,
        domain: &str,
        page_url: Option<&str>,
        candidates: Vec<IconCandidate>,
    ) -> Option<ValidatedPayload> {
        let origin = page_url
            .and_then(page_origin)
            .unwrap_or_else(|| format!("https://{}", domain.trim()));

        let sources = self.build_chain(domain, &origin, candidates);
        let total = sources.len();

        // First success over an ordered sequence of fallible sources.
        for (index, source) in sources.into_iter().enumerate() {
            if let Some((source_url, payload)) = self.try_source(source).await {
                self.event_bus.emit(IconResolved::new(
                    domain.to_string(),
                    source_url,
                    payload.mime_type().to_string(),
                    payload.byte_count(),
                    index + 1,
                ));
                return Some(payload);
            }
        }

        log::debug!("icon resolution for {} exhausted {} sources", domain, total);
        self.event_bus
            .emit(IconResolutionExhausted::new(domain.to_string(), total));
        None
    }

    /// Assembles the full ordered source list for one resolution request.
    fn build_chain(
        &self,
        domain: &str,
        origin: &str,
        candidates: Vec<IconCandidate>,
    ) -> Vec<ChainSource> {
        let mut sources: Vec<ChainSource> = Vec::new();
        let mut deferred: Vec<ChainSource> = Vec::new();

        // Step 1: parsed candidates, best declared size first. Social
        // preview images are often oversized or off-topic, so og-image is
        // retried only as the explicit last resort.
        for candidate in rank_candidates(candidates) {
            match candidate.kind {
                IconKind::OgImage => deferred.push(ChainSource::Direct {
                    min_bytes: self.tuning.min_bytes_for_declared(candidate.size_hint),
                    url: candidate.url,
                }),
                IconKind::Manifest => sources.push(ChainSource::Manifest {
                    url: candidate.url,
                }),
                _ => sources.push(ChainSource::Direct {
                    min_bytes: self.tuning.min_bytes_for_declared(candidate.size_hint),
                    url: candidate.url,
                }),
            }
        }

        // Step 2: well-known static paths under the origin
        for path in &self.tuning.well_known_paths {
            sources.push(ChainSource::Direct {
                url: format!("{}{}", origin, path),
                min_bytes: self.tuning.well_known_min_bytes,
            });
        }

        // Step 3: third-party icon services, bare domain substituted
        let bare = bare_domain(domain);
        for template in &self.tuning.icon_service_templates {
            sources.push(ChainSource::Direct {
                url: template.replace("{domain}", &bare),
                min_bytes: self.tuning.service_min_bytes,
            });
        }

        // Step 4: the root favicon
        sources.push(ChainSource::Direct {
            url: format!("{}/favicon.ico", origin),
            min_bytes: self.tuning.favicon_min_bytes,
        });

        // Step 5: deferred og-image
        sources.extend(deferred);
        sources
    }

    async fn try_source(&self, source: ChainSource) -> Option<(String, ValidatedPayload)> {
        match source {
            ChainSource::Direct { url, min_bytes } => {
                let payload = self.probe.probe(&url, min_bytes).await.into_payload()?;
                Some((url, payload))
            }
            ChainSource::Manifest { url } => self.resolve_manifest(&url).await,
        }
    }

    /// Expands a manifest reference: fetch it as JSON, keep icons declaring
    /// at least MANIFEST_MIN_SIZE, probe the largest.
    async fn resolve_manifest(
        &self,
        manifest_url: &str,
    ) -> Option<(String, ValidatedPayload)> {
        let manifest: WebManifest = match self.probe.fetch_json(manifest_url).await {
            Ok(manifest) => manifest,
            Err(err) => {
                log::debug!("manifest {}: {}", manifest_url, err);
                return None;
            }
        };

        let (edge, icon) = manifest
            .icons
            .iter()
            .filter_map(|icon| {
                let edge = icon
                    .sizes
                    .as_deref()
                    .and_then(crate::domain::max_declared_edge)?;
                if edge >= MANIFEST_MIN_SIZE {
                    Some((edge, icon))
                } else {
                    None
                }
            })
            .max_by_key(|(edge, _)| *edge)?;

        let icon_url = resolve_href(manifest_url, &icon.src)?;
        let payload = self
            .probe
            .probe(&icon_url, self.tuning.min_bytes_for_declared(edge))
            .await
            .into_payload()?;
        Some((icon_url, payload))
    }
}
