//! Static file serving.
//!
//! Serves the widget's assets from a base directory by exact path.
//! No directory listing, no conditional or range requests, no compression.

pub mod mime;
pub mod resolver;

use std::path::PathBuf;

use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::config::StaticFilesConfig;

pub use mime::ContentType;

/// Static responder bound to one base directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    default_file: String,
}

impl StaticFiles {
    pub fn new(config: &StaticFilesConfig) -> Self {
        Self {
            root: config.root.clone(),
            default_file: config.default_file.clone(),
        }
    }

    /// Answer a request with the file's bytes or a 404.
    ///
    /// Lookup uses the path alone; the 404 body echoes the full target.
    pub async fn serve(&self, uri: &Uri) -> Response {
        let request_path = uri.path();
        let Some(file_path) = resolver::resolve(&self.root, request_path, &self.default_file) else {
            tracing::warn!(path = %request_path, "Rejected static path");
            return not_found(uri);
        };

        match tokio::fs::read(&file_path).await {
            Ok(data) => {
                let content_type = ContentType::from_path(&file_path);
                tracing::debug!(
                    path = %request_path,
                    file = %file_path.display(),
                    bytes = data.len(),
                    content_type = content_type.as_str(),
                    "Serving static file"
                );
                (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, HeaderValue::from_static(content_type.as_str()))],
                    data,
                )
                    .into_response()
            }
            Err(err) => {
                tracing::debug!(
                    path = %request_path,
                    file = %file_path.display(),
                    error = %err,
                    "Static file unavailable"
                );
                not_found(uri)
            }
        }
    }
}

fn not_found(uri: &Uri) -> Response {
    let target = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    (
        StatusCode::NOT_FOUND,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(ContentType::PlainText.as_str()),
        )],
        format!("404 Not Found: {}", resolver::sanitize_for_echo(target)),
    )
        .into_response()
}
