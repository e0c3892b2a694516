use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Log `<METHOD> <uri> - <status> - <ms>ms` once the response is ready.
///
/// Responses with status >= 400 log at `error`, everything else at `info`.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    if status.is_client_error() || status.is_server_error() {
        tracing::error!(
            %method,
            %uri,
            status = status.as_u16(),
            elapsed_ms,
            "{method} {uri} - {} - {elapsed_ms}ms",
            status.as_u16()
        );
    } else {
        tracing::info!(
            %method,
            %uri,
            status = status.as_u16(),
            elapsed_ms,
            "{method} {uri} - {} - {elapsed_ms}ms",
            status.as_u16()
        );
    }

    response
}
