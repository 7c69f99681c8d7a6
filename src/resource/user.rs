use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::extractors::RegistrationJson;
use crate::models::{RegisteredUser, UserListResponse};
use crate::startup::AppState;
use crate::validation::{accept, Registration};

/// Validates a submitted registration and, when every field passes, adds it
/// to the user list.
pub async fn create_user(
    State(state): State<AppState>,
    RegistrationJson(payload): RegistrationJson<Value>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let record = Registration::from_json(&payload);

    let registration = match accept(&record, state.today()) {
        Ok(registration) => registration,
        Err(errors) => {
            debug!(
                fields = ?errors.keys().collect::<Vec<_>>(),
                "Registration rejected"
            );
            return Err((StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))));
        }
    };

    let user = state
        .store
        .add_user(RegisteredUser::new(registration))
        .await
        .map_err(|e| e.to_response())?;

    info!(user_id = %user.id, "Registration accepted");

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

/// Lists accepted registrations in the order they were made
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, (StatusCode, Json<Value>)> {
    let users = state.store.list_users().await.map_err(|e| e.to_response())?;
    Ok(Json(UserListResponse::new(users)))
}
