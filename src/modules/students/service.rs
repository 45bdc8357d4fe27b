use crate::modules::students::model::{Student, StudentDto};
use crate::utils::errors::AppError;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

/// Persistence and business rules for the student entity.
///
/// Handlers depend on this trait, never on a concrete backend; the
/// composition root decides which implementation is injected.
#[async_trait]
pub trait StudentService: Send + Sync {
    async fn create(&self, dto: StudentDto) -> Result<Student, AppError>;
    async fn list_all(&self) -> Result<Vec<Student>, AppError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;
    async fn update(&self, id: i64, dto: StudentDto) -> Result<Student, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgStudentService {
    db: PgPool,
}

impl PgStudentService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: sqlx::Error, email: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::bad_request(anyhow::anyhow!(
                "Student with email {} already exists",
                email
            ));
        }
    }
    AppError::database(anyhow::Error::from(e))
}

#[async_trait]
impl StudentService for PgStudentService {
    #[instrument(skip(self, dto))]
    async fn create(&self, dto: StudentDto) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email, created_at, updated_at
            "#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .fetch_one(&self.db)
        .await
        .map_err(|e| map_insert_error(e, &dto.email))?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM students
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("Failed to fetch students")
        .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("Failed to fetch student by ID")
        .map_err(AppError::database)?;

        Ok(student)
    }

    #[instrument(skip(self, dto))]
    async fn update(&self, id: i64, dto: StudentDto) -> Result<Student, AppError> {
        let updated = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET first_name = $1, last_name = $2, email = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, first_name, last_name, email, created_at, updated_at
            "#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| map_insert_error(e, &dto.email))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("Failed to delete student")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        Ok(())
    }
}

/// In-memory implementation with the same observable contract as
/// [`PgStudentService`]. Used by tests so the HTTP surface can be exercised
/// without a database.
#[cfg(any(test, feature = "test-utils"))]
pub struct InMemoryStudentService {
    students: std::sync::Mutex<Vec<Student>>,
    next_id: std::sync::atomic::AtomicI64,
}

#[cfg(any(test, feature = "test-utils"))]
impl InMemoryStudentService {
    pub fn new() -> Self {
        Self {
            students: std::sync::Mutex::new(Vec::new()),
            next_id: std::sync::atomic::AtomicI64::new(1),
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Default for InMemoryStudentService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl StudentService for InMemoryStudentService {
    async fn create(&self, dto: StudentDto) -> Result<Student, AppError> {
        let mut students = self.students.lock().unwrap();

        if students.iter().any(|s| s.email == dto.email) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Student with email {} already exists",
                dto.email
            )));
        }

        let id = self
            .next_id
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let now = chrono::Utc::now();
        let student = Student {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            created_at: now,
            updated_at: now,
        };

        students.push(student.clone());
        Ok(student)
    }

    async fn list_all(&self) -> Result<Vec<Student>, AppError> {
        let mut students = self.students.lock().unwrap().clone();
        students.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        });
        Ok(students)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let students = self.students.lock().unwrap();
        Ok(students.iter().find(|s| s.id == id).cloned())
    }

    async fn update(&self, id: i64, dto: StudentDto) -> Result<Student, AppError> {
        let mut students = self.students.lock().unwrap();

        if students.iter().any(|s| s.id != id && s.email == dto.email) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Student with email {} already exists",
                dto.email
            )));
        }

        let student = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        student.first_name = dto.first_name;
        student.last_name = dto.last_name;
        student.email = dto.email;
        student.updated_at = chrono::Utc::now();

        Ok(student.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut students = self.students.lock().unwrap();
        let position = students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        students.remove(position);
        Ok(())
    }
}
