//! Student domain model and input DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A student record as stored in the database.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Input payload for creating or updating a student.
///
/// Validated by the `ValidatedJson` extractor before a handler runs, so
/// handlers only ever see structurally valid data.
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct StudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(first_name: &str, last_name: &str, email: &str) -> StudentDto {
        StudentDto {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_student_dto_valid() {
        assert!(dto("John", "Doe", "john.doe@example.com").validate().is_ok());
    }

    #[test]
    fn test_student_dto_invalid_email() {
        assert!(dto("John", "Doe", "not-an-email").validate().is_err());
    }

    #[test]
    fn test_student_dto_empty_first_name() {
        assert!(dto("", "Doe", "john.doe@example.com").validate().is_err());
    }

    #[test]
    fn test_student_dto_long_last_name() {
        let long_name = "x".repeat(101);
        assert!(dto("John", &long_name, "john.doe@example.com").validate().is_err());
    }
}
