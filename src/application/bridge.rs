// src/application/bridge.rs
//
// Delegation Bridge
//
// A restricted caller context (the dashboard webview) cannot fetch
// arbitrary third-party markup itself. The bridge lets it delegate that
// work to the privileged backend through one-shot request/response
// exchanges with no persistent connection.
//
// Contract: a transport failure (privileged side gone, channel closed,
// reply never arrives) resolves the caller's request to the empty value
// within a bounded time. The caller has no other recovery path, so no
// bridge method returns an error or hangs.
//
// The handle is an injected capability: callers receive it explicitly,
// there is no global "is the bridge available" flag to consult.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::application::commands;
use crate::application::dto::{IconCandidateDto, PageInfoDto};
use crate::application::state::AppState;

/// Requests queued ahead of the privileged side before senders wait.
const REQUEST_BUFFER: usize = 16;

/// Default bound on waiting for the privileged side to answer. Generous:
/// a full chain walk takes several seconds when many sources time out.
pub const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// PROTOCOL
// ============================================================================

/// The three exchanges a restricted caller may delegate.
#[derive(Debug)]
pub enum BridgeRequest {
    /// Fetch a page; reply with its title and icon candidates
    FetchPage {
        url: String,
        reply: oneshot::Sender<PageInfoDto>,
    },

    /// Run the fallback chain with pre-parsed candidates
    ResolveIcon {
        domain: String,
        page_url: Option<String>,
        candidates: Vec<IconCandidateDto>,
        reply: oneshot::Sender<Option<String>>,
    },

    /// Run the fallback chain from the well-known paths only
    ResolveIconFallback {
        domain: String,
        page_url: Option<String>,
        reply: oneshot::Sender<Option<String>>,
    },
}

/// Outcome of one exchange: the value, or an explicit marker that the
/// privileged side was unreachable. Internal to the bridge; the public
/// handle methods flatten `Unavailable` into the empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeOutcome<T> {
    Value(T),
    Unavailable,
}

impl<T> BridgeOutcome<T> {
    pub fn into_value(self) -> Option<T> {
        match self {
            BridgeOutcome::Value(value) => Some(value),
            BridgeOutcome::Unavailable => None,
        }
    }
}

// ============================================================================
// CALLER SIDE
// ============================================================================

/// The capability handed to restricted callers.
#[derive(Debug, Clone)]
pub struct BridgeHandle {
    tx: mpsc::Sender<BridgeRequest>,
    reply_timeout: Duration,
}

impl BridgeHandle {
    /// Fetch a page's title and icon candidates. Transport failure yields
    /// the empty reply.
    pub async fn fetch_page(&self, url: &str) -> PageInfoDto {
        let url = url.to_string();
        match self
            .exchange(|reply| BridgeRequest::FetchPage { url, reply })
            .await
        {
            BridgeOutcome::Value(info) => info,
            BridgeOutcome::Unavailable => PageInfoDto::default(),
        }
    }

    /// Resolve an icon from pre-parsed candidates. Transport failure and
    /// chain exhaustion are both `None`.
    pub async fn resolve_icon(
        &self,
        domain: &str,
        page_url: Option<&str>,
        candidates: Vec<IconCandidateDto>,
    ) -> Option<String> {
        let domain = domain.to_string();
        let page_url = page_url.map(str::to_string);
        self.exchange(|reply| BridgeRequest::ResolveIcon {
            domain,
            page_url,
            candidates,
            reply,
        })
        .await
        .into_value()
        .flatten()
    }

    /// Resolve an icon without candidates, entering the chain at the
    /// well-known paths.
    pub async fn resolve_icon_fallback(
        &self,
        domain: &str,
        page_url: Option<&str>,
    ) -> Option<String> {
        let domain = domain.to_string();
        let page_url = page_url.map(str::to_string);
        self.exchange(|reply| BridgeRequest::ResolveIconFallback {
            domain,
            page_url,
            reply,
        })
        .await
        .into_value()
        .flatten()
    }

    /// One request/response round trip. Every failure mode (send into a
    /// closed channel, dropped reply sender, reply deadline exceeded)
    /// collapses to `Unavailable`.
    async fn exchange<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> BridgeRequest,
    ) -> BridgeOutcome<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        if self.tx.send(build(reply_tx)).await.is_err() {
            log::warn!("bridge send failed: privileged side is gone");
            return BridgeOutcome::Unavailable;
        }

        match tokio::time::timeout(self.reply_timeout, reply_rx).await {
            Ok(Ok(value)) => BridgeOutcome::Value(value),
            Ok(Err(_)) => {
                log::warn!("bridge reply channel closed without an answer");
                BridgeOutcome::Unavailable
            }
            Err(_) => {
                log::warn!(
                    "bridge reply not received within {:?}",
                    self.reply_timeout
                );
                BridgeOutcome::Unavailable
            }
        }
    }
}

// ============================================================================
// PRIVILEGED SIDE
// ============================================================================

/// Serves delegated requests against the application state.
pub struct BridgeServer {
    state: Arc<AppState>,
    rx: mpsc::Receiver<BridgeRequest>,
}

impl BridgeServer {
    /// Creates a connected handle/server pair with the default reply bound.
    pub fn channel(state: Arc<AppState>) -> (BridgeHandle, BridgeServer) {
        Self::channel_with_timeout(state, DEFAULT_REPLY_TIMEOUT)
    }

    pub fn channel_with_timeout(
        state: Arc<AppState>,
        reply_timeout: Duration,
    ) -> (BridgeHandle, BridgeServer) {
        let (tx, rx) = mpsc::channel(REQUEST_BUFFER);
        (
            BridgeHandle { tx, reply_timeout },
            BridgeServer { state, rx },
        )
    }

    /// Serves requests sequentially until every handle is dropped.
    pub async fn run(mut self) {
        while let Some(request) = self.rx.recv().await {
            self.handle(request).await;
        }
    }

    async fn handle(&self, request: BridgeRequest) {
        // A dropped reply receiver means the caller gave up; ignore it.
        match request {
            BridgeRequest::FetchPage { url, reply } => {
                let _ = reply.send(commands::fetch_page_info(&self.state, &url).await);
            }
            BridgeRequest::ResolveIcon {
                domain,
                page_url,
                candidates,
                reply,
            } => {
                let _ = reply.send(
                    commands::resolve_icon(&self.state, &domain, page_url.as_deref(), candidates)
                        .await,
                );
            }
            BridgeRequest::ResolveIconFallback {
                domain,
                page_url,
                reply,
            } => {
                let _ = reply.send(
                    commands::resolve_icon_fallback(&self.state, &domain, page_url.as_deref())
                        .await,
                );
            }
        }
    }
}
