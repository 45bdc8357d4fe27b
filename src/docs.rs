use utoipa::OpenApi;

use crate::modules::students::model::{Student, StudentDto};
use crate::utils::response::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_all_students,
        crate::modules::students::controller::get_student_by_id,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            Student,
            StudentDto,
            ApiResponse<Student>,
            ApiResponse<Vec<Student>>,
        )
    ),
    tags(
        (name = "Students", description = "Student management endpoints")
    ),
    info(
        title = "Rollcall API",
        version = "0.1.0",
        description = "A student records REST API built with Rust, Axum, and PostgreSQL. Every response carries a uniform envelope with a localized message."
    )
)]
pub struct ApiDoc;
