//! # formkit - contact form server
//!
//! Receives submissions from the formkit contact form, re-validates them with
//! the same field declarations the browser uses, and keeps them in memory.
//! It also serves the compiled UI.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formkit::adapters::submission_store::SubmissionStore;
//! use formkit::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let store = SubmissionStore::new(settings.form.max_submissions);
//!     let app = formkit::create_app(&settings, store)?;
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:4351").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - **formkit-core**: rules, field specs, form controller (shared with the UI)
//! - **Adapters**: HTTP handlers and the submission store
//! - **Transport**: `reqwest` implementation of the submit transport
//! - **Config**: file + CLI settings

pub mod adapters;
pub mod cli;
pub mod config;
pub mod transport;

use crate::adapters::health_handler::HealthHandler;
use crate::adapters::submission_handler::{self, SubmissionState};
use crate::adapters::submission_store::SubmissionStore;
use crate::adapters::ui_handler::UIHandler;
use crate::config::Settings;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use formkit_core::contact::{contact_us_fields, CONTACT_US_ACTION};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Where stored submissions are listed when `form.expose_submissions` is on
pub const SUBMISSIONS_PATH: &str = "/admin/submissions";

/// Creates the Axum application router with all endpoints configured.
///
/// Submissions are accepted at [`CONTACT_US_ACTION`], the same path the
/// browser form posts to.
///
/// # Arguments
///
/// * `settings` - Application settings
/// * `store` - Submission store shared with the caller
pub fn create_app(settings: &Settings, store: SubmissionStore) -> anyhow::Result<Router> {
    let fields = contact_us_fields()?;
    let health_handler = Arc::new(HealthHandler::new(store.clone()));
    let submission_state = SubmissionState::new(fields, store);

    let mut form_router =
        Router::new().route(CONTACT_US_ACTION, post(submission_handler::submit));
    if settings.form.expose_submissions {
        tracing::warn!("stored submissions are readable at {}", SUBMISSIONS_PATH);
        form_router =
            form_router.route(SUBMISSIONS_PATH, get(submission_handler::list_submissions));
    }
    let form_router = form_router.with_state(submission_state);

    let mut app = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .merge(form_router)
        .fallback(UIHandler::serve);

    // A UI served from another origin (e.g. `trunk serve`) may only post
    if let Some(origin) = &settings.server.ui_origin {
        let origin: HeaderValue = origin.parse()?;
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT]),
        );
    }

    Ok(app.layer(TraceLayer::new_for_http()))
}
