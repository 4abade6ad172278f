// src/main.rs
//
// Diagnostic entry point: resolve the icon for a URL given on the command
// line and print what the pipeline found.

use std::sync::Arc;

use anyhow::Context;

use navhub::application::bridge::BridgeServer;
use navhub::application::state::AppState;
use navhub::events::register_log_handlers;
use navhub::integrations::HttpResourceFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let url = std::env::args()
        .nth(1)
        .context("usage: navhub <page-url>")?;
    let domain = navhub::domain::host_of(&url)
        .with_context(|| format!("no host in url: {}", url))?;

    // 1. INFRASTRUCTURE
    let fetcher = Arc::new(HttpResourceFetcher::new()?);

    // 2. SERVICES + STATE
    let state = Arc::new(AppState::new(fetcher));
    register_log_handlers(&state.event_bus);

    // 3. BRIDGE
    let (bridge, server) = BridgeServer::channel(Arc::clone(&state));
    tokio::spawn(server.run());

    // 4. RESOLVE
    let page = bridge.fetch_page(&url).await;
    println!("title: {}", page.title.as_deref().unwrap_or("(none)"));
    println!("candidates: {}", page.candidates.len());
    for candidate in &page.candidates {
        println!("  {:>4}px {:<16} {}", candidate.size_hint, candidate.kind.to_string(), candidate.url);
    }

    match bridge.resolve_icon(&domain, Some(&url), page.candidates).await {
        Some(data_uri) => {
            let preview_len = data_uri.len().min(64);
            println!("icon: {} ({} chars)", &data_uri[..preview_len], data_uri.len());
        }
        None => println!("icon: none found"),
    }

    Ok(())
}
