use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Log one line per request: status, duration, method, path
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16();

    if status < 400 {
        tracing::info!("{} | {:>5}ms | {} {}", status, duration.as_millis(), method, uri.path());
    } else {
        tracing::warn!("{} | {:>5}ms | {} {}", status, duration.as_millis(), method, uri.path());
    }

    response
}
