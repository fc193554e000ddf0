//! Static assets for the dashboard.
//!
//! Files are looked up in the configured directory first; anything not found
//! there falls back to the assets compiled into the binary, so the dashboard
//! works without a `static/` directory next to it.

mod resolve;

#[cfg(test)]
mod tests;

pub use resolve::{ResolveError, relative_static_path, resolve_on_disk};

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, StatusCode};
use rust_embed::RustEmbed;
use std::path::Path;

/// Larger files are refused rather than buffered in memory.
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct DashboardAssets;

pub struct StaticResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub async fn serve_static(static_dir: &Path, route_prefix: &str, request_path: &str) -> StaticResponse {
    let relative = match relative_static_path(route_prefix, request_path) {
        Ok(p) => p,
        Err(e) => return error_response(map_resolve_error(e)),
    };

    match resolve_on_disk(static_dir, &relative) {
        Ok(path) => return read_file(&path).await,
        Err(ResolveError::Forbidden) => return error_response(StatusCode::FORBIDDEN),
        Err(_) => {}
    }

    // Embedded assets are keyed with forward slashes.
    let key = relative.to_string_lossy().replace('\\', "/");
    match DashboardAssets::get(&key) {
        Some(asset) => ok_response(&relative, Bytes::from(asset.data.into_owned())),
        None => error_response(StatusCode::NOT_FOUND),
    }
}

async fn read_file(path: &Path) -> StaticResponse {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(m) => m,
        Err(_) => return error_response(StatusCode::NOT_FOUND),
    };

    // Guard against memory exhaustion.
    if metadata.len() > MAX_FILE_SIZE {
        return error_response(StatusCode::FORBIDDEN);
    }

    match tokio::fs::read(path).await {
        Ok(data) => ok_response(path, Bytes::from(data)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "static file read failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn ok_response(path: &Path, body: Bytes) -> StaticResponse {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        headers.insert(http::header::CONTENT_TYPE, value);
    }
    headers.insert(http::header::CONTENT_LENGTH, HeaderValue::from(body.len()));

    StaticResponse {
        status: StatusCode::OK,
        headers,
        body,
    }
}

fn map_resolve_error(err: ResolveError) -> StatusCode {
    match err {
        ResolveError::NotFound => StatusCode::NOT_FOUND,
        ResolveError::Forbidden => StatusCode::FORBIDDEN,
        ResolveError::BadPath => StatusCode::BAD_REQUEST,
    }
}

fn error_response(status: StatusCode) -> StaticResponse {
    let mut headers = HeaderMap::new();
    headers.insert(http::header::CONTENT_LENGTH, HeaderValue::from_static("0"));

    StaticResponse {
        status,
        headers,
        body: Bytes::new(),
    }
}
