use crate::{auth::BearerClaims, error::AppError, models::NewTask, state::AppState};
use actix_web::{get, post, web, HttpResponse, Responder};
use log::info;
use serde_json::json;
use validator::Validate;

/// Creates a new task.
///
/// Requires a valid bearer token. `title` and `description` are read from the
/// query string. The task is not linked to the authenticated account.
///
/// ## Responses:
/// - `200 OK`: `{"message": "Task complete", "id": <int>}`.
/// - `400 Bad Request`: If `title` or `description` is missing.
/// - `401 Unauthorized`: Missing, invalid or expired token.
/// - `422 Unprocessable Entity`: If input validation on `NewTask` fails.
#[post("/task/")]
pub async fn create_task(
    state: web::Data<AppState>,
    claims: BearerClaims,
    task_data: web::Query<NewTask>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = state
        .tasks
        .insert(&task_data.title, &task_data.description)
        .await?;
    info!("User '{}' created task {}", claims.subject(), task.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task complete",
        "id": task.id
    })))
}

/// Retrieves a task by its integer id. No authentication is required.
///
/// ## Responses:
/// - `200 OK`: The `Task` object as JSON.
/// - `404 Not Found`: No task with that id.
#[get("/tasks/{task_id}")]
pub async fn get_task(
    state: web::Data<AppState>,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();

    match state.tasks.find_by_id(task_id).await? {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound("Task not found".into())),
    }
}
