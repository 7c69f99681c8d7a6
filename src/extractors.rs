use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// JSON body extractor whose rejections are `{"error": ...}` bodies with the
/// status axum chose, so clients of the form API only ever parse JSON
pub struct RegistrationJson<T>(pub T);

impl<T, S> FromRequest<S> for RegistrationJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RegistrationJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| RegistrationJson(value))
            .map_err(RegistrationJsonRejection)
    }
}

pub struct RegistrationJsonRejection(JsonRejection);

impl IntoResponse for RegistrationJsonRejection {
    fn into_response(self) -> Response {
        let detail = match &self.0 {
            JsonRejection::MissingJsonContentType(_) => {
                "Content-Type must be application/json".to_string()
            }
            rejection => format!("Invalid JSON: {}", rejection.body_text()),
        };

        (self.0.status(), Json(json!({ "error": detail }))).into_response()
    }
}
