use crate::i18n::Lang;
use crate::modules::students::model::{Student, StudentDto};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{info, instrument};

/// Creates a new student and returns it in the response.
#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = StudentDto,
    params(
        ("Accept-Language" = Option<String>, Header, description = "Language for the response message, defaults to en")
    ),
    responses(
        (status = 201, description = "Student created successfully", body = ApiResponse<Student>),
        (status = 400, description = "Malformed request body or duplicate email"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    lang: Lang,
    ValidatedJson(dto): ValidatedJson<StudentDto>,
) -> Result<ApiResponse<Student>, AppError> {
    let student = state.students.create(dto).await?;

    let message = state.messages.get("student.created", &lang);

    info!(student_id = student.id, "Student created successfully");
    Ok(ApiResponse::new(student, message, StatusCode::CREATED))
}

/// Fetches all students.
#[utoipa::path(
    get,
    path = "/api/v1/students",
    params(
        ("Accept-Language" = Option<String>, Header, description = "Language for the response message, defaults to en")
    ),
    responses(
        (status = 200, description = "List of students", body = ApiResponse<Vec<Student>>)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_all_students(
    State(state): State<AppState>,
    lang: Lang,
) -> Result<ApiResponse<Vec<Student>>, AppError> {
    let students = state.students.list_all().await?;

    let message = state.messages.get("students.retrieved", &lang);

    info!(count = students.len(), "Fetched all students");
    Ok(ApiResponse::new(students, message, StatusCode::OK))
}

/// Fetches a student by its ID. Responds with a localized not-found error
/// when no such student exists.
#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID"),
        ("Accept-Language" = Option<String>, Header, description = "Language for the response message, defaults to en")
    ),
    responses(
        (status = 200, description = "Student details", body = ApiResponse<Student>),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    lang: Lang,
) -> Result<ApiResponse<Student>, AppError> {
    let student = state.students.get_by_id(id).await?.ok_or_else(|| {
        AppError::not_found(anyhow::anyhow!(state.messages.get("student.not.found", &lang)))
    })?;

    let message = state.messages.get("student.retrieved", &lang);

    info!(student_id = id, "Fetched student");
    Ok(ApiResponse::new(student, message, StatusCode::OK))
}

/// Updates a student's information.
#[utoipa::path(
    put,
    path = "/api/v1/students/{id}",
    request_body = StudentDto,
    params(
        ("id" = i64, Path, description = "Student ID"),
        ("Accept-Language" = Option<String>, Header, description = "Language for the response message, defaults to en")
    ),
    responses(
        (status = 200, description = "Student updated successfully", body = ApiResponse<Student>),
        (status = 404, description = "Student not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    lang: Lang,
    ValidatedJson(dto): ValidatedJson<StudentDto>,
) -> Result<ApiResponse<Student>, AppError> {
    let student = state.students.update(id, dto).await?;

    let message = state.messages.get("student.updated", &lang);

    info!(student_id = id, "Updated student");
    Ok(ApiResponse::new(student, message, StatusCode::OK))
}

/// Deletes a student by its ID.
#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID"),
        ("Accept-Language" = Option<String>, Header, description = "Language for the response message, defaults to en")
    ),
    responses(
        (status = 204, description = "Student deleted successfully"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    lang: Lang,
) -> Result<ApiResponse<()>, AppError> {
    state.students.delete(id).await?;

    let message = state.messages.get("student.deleted", &lang);

    info!(student_id = id, "Deleted student");
    Ok(ApiResponse::new((), message, StatusCode::NO_CONTENT))
}
