//! Access logging middleware

use axum::{
    body::{Body, HttpBody},
    http::{Method, Request, StatusCode, Version},
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Log one line per handled request
///
/// The byte count is the exact length of the response body, which every
/// response of this service knows up front.
pub async fn access_log(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let version = req.version();

    let response = next.run(req).await;

    let bytes = response.body().size_hint().exact().unwrap_or(0);
    info!(
        "{}",
        access_line(&method, &path, version, response.status(), bytes)
    );

    response
}

/// Format an access log line as `"GET / HTTP/1.1" 200 42`
pub fn access_line(
    method: &Method,
    path: &str,
    version: Version,
    status: StatusCode,
    bytes: u64,
) -> String {
    format!(
        "\"{} {} {:?}\" {} {}",
        method,
        path,
        version,
        status.as_u16(),
        bytes
    )
}
