//! Catalog API Library
//!
//! REST service exposing CRUD operations over catalog items.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod openapi;
pub mod repositories;
pub mod tracing;

use axum::Router;
use repositories::{InMemoryItemsRepository, ItemsRepository};
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::AppConfig,
    pub items: Arc<dyn ItemsRepository>,
}

impl AppState {
    pub fn new(config: crate::config::AppConfig, items: Arc<dyn ItemsRepository>) -> Self {
        Self { config, items }
    }

    /// State backed by the in-memory repository, seeded when configured.
    pub fn in_memory(config: crate::config::AppConfig) -> Self {
        let repository = if config.seed_sample_items {
            InMemoryItemsRepository::with_sample_items()
        } else {
            InMemoryItemsRepository::new()
        };
        Self::new(config, Arc::new(repository))
    }
}

/// Full application router: items, health and API docs behind the
/// request-id and HTTP tracing layers.
pub fn app_router(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/items", handlers::items::items_routes())
        .nest("/health", health::health_routes())
        .merge(openapi::swagger_ui())
        .layer(crate::tracing::configure_http_tracing())
        // Outermost so the trace span and every response carry the id
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}
