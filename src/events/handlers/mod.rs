// src/events/handlers/mod.rs
mod log_handler;

pub use log_handler::register_log_handlers;
