use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::backend::{StoreFactory, UserStore};
use crate::config::AppConfig;
use crate::logging::logging_middleware;
use crate::resource;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub config: Arc<AppConfig>,
    /// Source of the reference date for age checks
    pub clock: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, config: Arc<AppConfig>) -> Self {
        AppState {
            store,
            config,
            clock: crate::utils::today,
        }
    }

    pub fn from_config(config: AppConfig) -> Self {
        let store = StoreFactory::create(&config.storage);
        AppState::new(store, Arc::new(config))
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/users",
            post(resource::user::create_user).get(resource::user::list_users),
        )
        .route(
            "/validate/{field}",
            post(resource::validate::validate_single_field),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
