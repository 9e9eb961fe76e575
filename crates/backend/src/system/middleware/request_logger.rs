use axum::body::{Body, HttpBody};
use axum::http::header::CONTENT_LENGTH;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_size;

/// Logs every HTTP request on one console line:
/// local time | duration | response size | status | method path
///
/// Time is cyan for 2xx responses and yellow otherwise. The same data goes
/// to the tracing log file without colors. The body is passed through
/// untouched, so static files keep streaming.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();
    let size = response_size(&response);
    let size_label = size.map(format_size).unwrap_or_else(|| "-".to_string());
    let color_code = if status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>10} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        duration.as_millis(),
        size_label,
        status.as_u16(),
        method,
        uri.path()
    );
    tracing::debug!(
        status = status.as_u16(),
        elapsed_ms = duration.as_millis() as u64,
        size = size.unwrap_or_default(),
        "{} {}",
        method,
        uri.path()
    );

    response
}

/// Body size without reading the body: `Content-Length` first, then the
/// body's exact size hint. `None` for streamed bodies of unknown length.
fn response_size(response: &Response) -> Option<usize> {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok())
        .or_else(|| {
            response
                .body()
                .size_hint()
                .exact()
                .and_then(|n| usize::try_from(n).ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_size_from_buffered_body() {
        let response = Response::new(Body::from("hello"));
        assert_eq!(response_size(&response), Some(5));
    }

    #[test]
    fn test_content_length_wins() {
        let mut response = Response::new(Body::empty());
        response
            .headers_mut()
            .insert(CONTENT_LENGTH, HeaderValue::from_static("2048"));
        assert_eq!(response_size(&response), Some(2048));
    }
}
