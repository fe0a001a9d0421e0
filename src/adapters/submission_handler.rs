//! HTTP endpoints behind the form's action URL

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use formkit_core::{Errors, Fields, FormController, Notice, Values};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::submission_store::{Submission, SubmissionStore};

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-field messages when the payload failed validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Errors>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            errors: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            errors: None,
        }
    }

    pub fn invalid(errors: Errors) -> Self {
        Self {
            errors: Some(errors),
            ..Self::error(Notice::Invalid.message())
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubmissionReceipt {
    pub id: Uuid,
}

#[derive(Clone)]
pub struct SubmissionState {
    fields: Arc<Fields>,
    store: SubmissionStore,
}

impl SubmissionState {
    pub fn new(fields: Fields, store: SubmissionStore) -> Self {
        Self {
            fields: Arc::new(fields),
            store,
        }
    }
}

/// POST /api/contactus - Validate and record a form submission
pub async fn submit(
    State(state): State<SubmissionState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let Value::Object(map) = body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<SubmissionReceipt>::error(
                "Body must be a JSON object of field values",
            )),
        );
    };

    // Undeclared keys are not stored
    let values: Values = map
        .into_iter()
        .filter(|(id, _)| state.fields.get(id).is_some())
        .collect();

    let mut form = FormController::new(state.fields.as_ref().clone());
    form.set_values(values);

    if !form.validate_form() {
        let errors: Errors = form
            .errors()
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(id, message)| (id.clone(), message.clone()))
            .collect();
        tracing::info!(fields = ?errors.keys().collect::<Vec<_>>(), "rejected invalid submission");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::<SubmissionReceipt>::invalid(errors)),
        );
    }

    let submission = state.store.push(form.values().clone()).await;
    tracing::info!(id = %submission.id, "accepted submission");

    (
        StatusCode::OK,
        Json(ApiResponse::success(SubmissionReceipt { id: submission.id })),
    )
}

/// GET /admin/submissions - List recorded submissions, oldest first.
/// Only routed when `form.expose_submissions` is enabled.
pub async fn list_submissions(State(state): State<SubmissionState>) -> impl IntoResponse {
    let submissions: Vec<Submission> = state.store.list().await;
    (StatusCode::OK, Json(ApiResponse::success(submissions)))
}
