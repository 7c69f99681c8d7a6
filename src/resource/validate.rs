use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::AppError;
use crate::extractors::RegistrationJson;
use crate::startup::AppState;
use crate::validation::{validate_field, Field, ValidationError};

/// Runs the rule for a single field, as the form does when a field loses
/// focus. The body is `{"value": ...}`; a missing or non-string value is
/// reported as a required-field failure.
pub async fn validate_single_field(
    State(state): State<AppState>,
    Path(field_name): Path<String>,
    RegistrationJson(body): RegistrationJson<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let field = Field::parse(&field_name).ok_or_else(|| {
        AppError::NotFound(format!("Unknown field: {}", field_name)).to_response()
    })?;

    let outcome = match body.get("value").and_then(Value::as_str) {
        Some(value) => validate_field(field, value, state.today()),
        None => Err(ValidationError::required(field)),
    };

    let body = match outcome {
        Ok(value) => json!({ "valid": true, "value": value }),
        Err(error) => {
            debug!(field = %field, code = %error.code, "Field rejected");
            json!({ "valid": false, "error": error })
        }
    };

    Ok(Json(body))
}
