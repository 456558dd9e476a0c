use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::logic::{aggregates, fetch, relations};
use crate::store::Dataset;

/// Shared, read-only dataset snapshot handed to every handler
pub type AppState = Arc<Dataset>;

pub type ApiResult = Result<Response, ApiError>;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "APIs are working correctly",
    })
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

// Students

pub async fn list_students(State(dataset): State<AppState>) -> Response {
    Json(&dataset.students).into_response()
}

pub async fn get_student(State(dataset): State<AppState>, Path(id): Path<String>) -> ApiResult {
    Ok(Json(fetch::get_student(&dataset, &id)?).into_response())
}

pub async fn get_student_enrollments(
    State(dataset): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(Json(relations::student_enrollments(&dataset, &id)?).into_response())
}

pub async fn get_student_courses(
    State(dataset): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(Json(relations::student_courses(&dataset, &id)?).into_response())
}

pub async fn get_student_gpa(State(dataset): State<AppState>, Path(id): Path<String>) -> ApiResult {
    Ok(Json(aggregates::student_gpa(&dataset, &id)?).into_response())
}

pub async fn get_student_schedule(
    State(dataset): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(Json(aggregates::student_schedule(&dataset, &id)?).into_response())
}

// Instructors

pub async fn list_instructors(State(dataset): State<AppState>) -> Response {
    Json(&dataset.instructors).into_response()
}

pub async fn get_instructor(State(dataset): State<AppState>, Path(id): Path<String>) -> ApiResult {
    Ok(Json(fetch::get_instructor(&dataset, &id)?).into_response())
}

pub async fn get_instructor_courses(
    State(dataset): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(Json(relations::instructor_courses(&dataset, &id)?).into_response())
}

pub async fn get_instructor_students(
    State(dataset): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(Json(aggregates::instructor_students(&dataset, &id)?).into_response())
}

// Courses

pub async fn list_courses(State(dataset): State<AppState>) -> Response {
    Json(&dataset.courses).into_response()
}

pub async fn get_course(State(dataset): State<AppState>, Path(id): Path<String>) -> ApiResult {
    Ok(Json(fetch::get_course(&dataset, &id)?).into_response())
}

pub async fn get_course_students(
    State(dataset): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(Json(relations::course_students(&dataset, &id)?).into_response())
}

pub async fn get_course_assignments(
    State(dataset): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(Json(relations::course_assignments(&dataset, &id)?).into_response())
}

pub async fn get_course_average(
    State(dataset): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(Json(aggregates::course_average(&dataset, &id)?).into_response())
}

// Enrollments

pub async fn list_enrollments(State(dataset): State<AppState>) -> Response {
    Json(&dataset.enrollments).into_response()
}

pub async fn get_enrollment(State(dataset): State<AppState>, Path(id): Path<String>) -> ApiResult {
    Ok(Json(fetch::get_enrollment(&dataset, &id)?).into_response())
}

pub async fn get_enrollment_grades(
    State(dataset): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(Json(relations::enrollment_grades(&dataset, &id)?).into_response())
}

// Assignments

pub async fn list_assignments(State(dataset): State<AppState>) -> Response {
    Json(&dataset.assignments).into_response()
}

pub async fn get_assignment(State(dataset): State<AppState>, Path(id): Path<String>) -> ApiResult {
    Ok(Json(fetch::get_assignment(&dataset, &id)?).into_response())
}

// Grades

pub async fn list_grades(State(dataset): State<AppState>) -> Response {
    Json(&dataset.grades).into_response()
}

pub async fn get_grade(State(dataset): State<AppState>, Path(id): Path<String>) -> ApiResult {
    Ok(Json(fetch::get_grade(&dataset, &id)?).into_response())
}
