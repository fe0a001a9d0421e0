use axum::{
    body::Body,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::path::Path;

/// Compiled contact form UI (`trunk build` output in `ui/dist`).
/// Empty when the UI has not been built.
#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct Asset;

const INDEX: &str = "index.html";

pub struct UIHandler;

impl UIHandler {
    /// Serves a UI asset, falling back to `index.html` for page routes.
    /// Only GET and HEAD are answered; anything else is 405.
    pub async fn serve(method: Method, uri: Uri) -> Response {
        if method != Method::GET && method != Method::HEAD {
            tracing::debug!(%method, path = uri.path(), "no route for request");
            return (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "GET, HEAD")],
                "405 Method Not Allowed",
            )
                .into_response();
        }

        let path = match uri.path().trim_start_matches('/') {
            "" => INDEX,
            path => path,
        };

        if let Some(response) = Self::asset(path) {
            return response;
        }

        // Missing files with an extension are real 404s, not page routes
        if Path::new(path).extension().is_none() {
            if let Some(response) = Self::asset(INDEX) {
                return response;
            }
        }

        tracing::debug!(path, "UI asset not found");
        (StatusCode::NOT_FOUND, "404 Not Found").into_response()
    }

    fn asset(path: &str) -> Option<Response> {
        let content = Asset::get(path)?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        Some(
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                Body::from(content.data.into_owned()),
            )
                .into_response(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_with_extension_is_not_found() {
        let response = UIHandler::serve(Method::GET, Uri::from_static("/does-not-exist.js")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_never_gets_the_page() {
        for path in ["/", "/api/feedback", "/index.html"] {
            let response = UIHandler::serve(Method::POST, Uri::from_static(path)).await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(response.headers()[header::ALLOW], "GET, HEAD");
        }
    }
}
