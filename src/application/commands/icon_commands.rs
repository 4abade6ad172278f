// src/application/commands/icon_commands.rs
//
// Icon Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic
//
// Every handler here upholds the pipeline's external contract: a payload
// or an empty value, never an error.

use crate::application::{dto::*, state::AppState};
use crate::domain::IconCandidate;

/// Fetch a page and report its title and icon candidates.
/// Failure of any kind yields the empty reply.
pub async fn fetch_page_info(state: &AppState, url: &str) -> PageInfoDto {
    let info = state.page_service.fetch_site_info(url).await;
    PageInfoDto::from(info)
}

/// Resolve the best icon using caller-supplied pre-parsed candidates.
/// Returns the encoded payload, or `None` when the chain is exhausted.
pub async fn resolve_icon(
    state: &AppState,
    domain: &str,
    page_url: Option<&str>,
    candidates: Vec<IconCandidateDto>,
) -> Option<String> {
    let candidates: Vec<IconCandidate> =
        candidates.into_iter().map(IconCandidate::from).collect();

    state
        .icon_resolution_service
        .resolve(domain, page_url, candidates)
        .await
        .map(|payload| payload.as_data_uri())
}

/// Resolve the best icon without pre-parsed candidates, entering the chain
/// at the well-known paths.
pub async fn resolve_icon_fallback(
    state: &AppState,
    domain: &str,
    page_url: Option<&str>,
) -> Option<String> {
    state
        .icon_resolution_service
        .resolve(domain, page_url, Vec::new())
        .await
        .map(|payload| payload.as_data_uri())
}
