use axum::{
    extract::Request,
    http::{HeaderMap, Method, Uri},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use std::time::Instant;
use tracing::info;

/// Emits one `access_log` line per request
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let client = client_address(request.headers());

    let response = next.run(request).await;

    info!(
        target: "access_log",
        "{} {} \"{}\" {} {}ms",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        client,
        format_request(&method, &uri),
        response.status().as_u16(),
        start.elapsed().as_millis(),
    );

    response
}

fn client_address(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .or_else(|| headers.get("x-real-ip"))
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string()
}

fn format_request(method: &Method, uri: &Uri) -> String {
    format!("{} {} HTTP/1.1", method, uri)
}
