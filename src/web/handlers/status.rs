//! # Task Status Handler
//!
//! `GET /redis-status/{task_id}`: validate the id, read the status record from
//! the store once, and answer with a [`ResponseEnvelope`].

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{debug, error};

use crate::store::{self, TaskStatusRecord};
use crate::validation::validate_task_id;
use crate::web::response::{
    ResponseEnvelope, MESSAGE_FETCH_FAILED, MESSAGE_INVALID_TASK_ID,
};
use crate::web::state::AppState;

/// Look up a task's status record: GET /redis-status/{task_id}
///
/// - 400 when `task_id` is not UUID text; the store is not contacted
/// - 500 when the store errors or the fetch exceeds its time bound; not retried
/// - 200 otherwise, with `data` = the record (`{}` when no record exists)
pub async fn get_task_status(
    State(state): State<AppState>,
    task_id: Result<Path<String>, PathRejection>,
) -> ResponseEnvelope<TaskStatusRecord> {
    let task_id = match task_id {
        Ok(Path(task_id)) => task_id,
        Err(rejection) => {
            return ResponseEnvelope::failure(
                StatusCode::BAD_REQUEST,
                MESSAGE_INVALID_TASK_ID,
                rejection.body_text(),
            );
        }
    };

    if let Err(e) = validate_task_id(&task_id) {
        debug!(task_id = %task_id, error = %e, "Rejected task status lookup");
        return ResponseEnvelope::failure(StatusCode::BAD_REQUEST, MESSAGE_INVALID_TASK_ID, e);
    }

    let lookup = store::with_timeout(
        "HGETALL",
        state.fetch_timeout(),
        state.store.fetch_status(&task_id),
    )
    .await;

    match lookup {
        Ok(record) => {
            debug!(task_id = %task_id, fields = record.len(), "Task status fetched");
            ResponseEnvelope::success(record)
        }
        Err(e) => {
            error!(
                task_id = %task_id,
                provider = state.store.provider_name(),
                error = %e,
                "Failed to fetch task status"
            );
            ResponseEnvelope::failure(StatusCode::INTERNAL_SERVER_ERROR, MESSAGE_FETCH_FAILED, e)
        }
    }
}
