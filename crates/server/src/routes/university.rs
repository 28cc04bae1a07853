use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};

use common::types::{Created, Message};
use models::lesson::{Lesson, LessonPatch, NewLesson};
use models::student::{NewStudent, Student, StudentPatch};

use crate::errors::JsonApiError;
use crate::state::UniversityState;

#[utoipa::path(post, path = "/register_student/", tag = "students",
    request_body = crate::openapi::NewStudentDoc,
    responses(
        (status = 200, description = "Student registered", body = crate::openapi::CreatedDoc),
        (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc)
    ))]
pub async fn register_student(
    State(state): State<UniversityState>,
    payload: Result<Json<NewStudent>, JsonRejection>,
) -> Result<Json<Created>, JsonApiError> {
    let Json(input) = payload?;
    let s = state.students.register(input).await?;
    Ok(Json(Created { message: "Student registered successfully".into(), id: s.id }))
}

#[utoipa::path(get, path = "/students/", tag = "students",
    responses((status = 200, description = "All students, possibly empty", body = [crate::openapi::StudentDoc])))]
pub async fn list_students(State(state): State<UniversityState>) -> Result<Json<Vec<Student>>, JsonApiError> {
    Ok(Json(state.students.list().await?))
}

#[utoipa::path(get, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = crate::openapi::StudentDoc),
        (status = 404, description = "Student not found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn get_student(
    State(state): State<UniversityState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Student>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.students.get(id).await?))
}

#[utoipa::path(put, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    request_body = crate::openapi::StudentPatchDoc,
    responses(
        (status = 200, description = "Merged student", body = crate::openapi::StudentDoc),
        (status = 400, description = "Empty or null patch", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Student not found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn update_student(
    State(state): State<UniversityState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<StudentPatch>, JsonRejection>,
) -> Result<Json<Student>, JsonApiError> {
    let Path(id) = id?;
    let Json(patch) = payload?;
    Ok(Json(state.students.update(id, patch).await?))
}

#[utoipa::path(delete, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Student not found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn delete_student(
    State(state): State<UniversityState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = id?;
    state.students.delete(id).await?;
    Ok(Json(Message::new("Student deleted successfully")))
}

#[utoipa::path(post, path = "/add_lesson/", tag = "lessons",
    request_body = crate::openapi::NewLessonDoc,
    responses(
        (status = 200, description = "Lesson added", body = crate::openapi::CreatedDoc),
        (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc)
    ))]
pub async fn add_lesson(
    State(state): State<UniversityState>,
    payload: Result<Json<NewLesson>, JsonRejection>,
) -> Result<Json<Created>, JsonApiError> {
    let Json(input) = payload?;
    let l = state.lessons.add(input).await?;
    Ok(Json(Created { message: "Lesson added successfully".into(), id: l.id }))
}

#[utoipa::path(get, path = "/lessons/", tag = "lessons",
    responses((status = 200, description = "All lessons, possibly empty", body = [crate::openapi::LessonDoc])))]
pub async fn list_lessons(State(state): State<UniversityState>) -> Result<Json<Vec<Lesson>>, JsonApiError> {
    Ok(Json(state.lessons.list().await?))
}

#[utoipa::path(get, path = "/lessons/{id}", tag = "lessons",
    params(("id" = i32, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "The lesson", body = crate::openapi::LessonDoc),
        (status = 404, description = "Lesson not found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn get_lesson(
    State(state): State<UniversityState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Lesson>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.lessons.get(id).await?))
}

#[utoipa::path(put, path = "/lessons/{id}", tag = "lessons",
    params(("id" = i32, Path, description = "Lesson id")),
    request_body = crate::openapi::LessonPatchDoc,
    responses(
        (status = 200, description = "Merged lesson", body = crate::openapi::LessonDoc),
        (status = 400, description = "Empty or null patch", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Lesson not found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn update_lesson(
    State(state): State<UniversityState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<LessonPatch>, JsonRejection>,
) -> Result<Json<Lesson>, JsonApiError> {
    let Path(id) = id?;
    let Json(patch) = payload?;
    Ok(Json(state.lessons.update(id, patch).await?))
}

#[utoipa::path(delete, path = "/lessons/{id}", tag = "lessons",
    params(("id" = i32, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "Lesson deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Lesson not found", body = crate::openapi::ErrorDoc)
    ))]
pub async fn delete_lesson(
    State(state): State<UniversityState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = id?;
    state.lessons.delete(id).await?;
    Ok(Json(Message::new("Lesson deleted successfully")))
}

pub fn router() -> Router<UniversityState> {
    Router::new()
        .route("/register_student/", post(register_student))
        .route("/add_lesson/", post(add_lesson))
        .route("/students/", get(list_students))
        .route("/students/:id", get(get_student).put(update_student).delete(delete_student))
        .route("/lessons/", get(list_lessons))
        .route("/lessons/:id", get(get_lesson).put(update_lesson).delete(delete_lesson))
}
