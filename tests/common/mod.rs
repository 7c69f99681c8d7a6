#![allow(dead_code)]

use axum::Router;
use chrono::NaiveDate;
use registration_server::config::{AppConfig, ServerConfig, StorageConfig};
use registration_server::{build_router, AppState};
use serde_json::{json, Value};

/// Reference date used by every HTTP test
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

pub fn create_test_app_config(max_users: usize) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        storage: StorageConfig { max_users },
    }
}

/// Router with an empty in-memory user list and a fixed clock
pub fn setup_test_app(app_config: AppConfig) -> Router {
    let state = AppState::from_config(app_config).with_clock(fixed_today);
    build_router(state)
}

pub fn create_test_registration_json(first_name: &str, last_name: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": last_name,
        "email": "kany.chheng@gmail.com",
        "birthDate": "1998-03-22",
        "city": "Paris",
        "postalCode": "75015"
    })
}
