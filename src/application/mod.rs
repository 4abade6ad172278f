// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE domain and services
// - It provides the boundary between restricted callers and the pipeline
// - It translates between DTOs and domain entities

pub mod bridge;
pub mod commands;
pub mod dto;
pub mod state;

pub use bridge::{BridgeHandle, BridgeOutcome, BridgeRequest, BridgeServer};
pub use commands::*;
pub use dto::*;
pub use state::AppState;
