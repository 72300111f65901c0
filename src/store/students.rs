// src/store/students.rs

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::student::{EditStudentRequest, RegisterStudentRequest, Student};

/// Stores a new student. `password_hash` must already be hashed.
pub async fn insert(
    pool: &SqlitePool,
    student: &RegisterStudentRequest,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO students (student_number, first_name, last_name, email, password, section)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&student.student_number)
    .bind(&student.first_name)
    .bind(&student.last_name)
    .bind(&student.email)
    .bind(password_hash)
    .bind(&student.section)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn find(pool: &SqlitePool, student_number: &str) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT student_number, first_name, last_name, email, password, section
        FROM students
        WHERE student_number = ?
        "#,
    )
    .bind(student_number)
    .fetch_optional(pool)
    .await
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT student_number, first_name, last_name, email, password, section
        FROM students
        ORDER BY section, last_name, first_name
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, student_number: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM students WHERE student_number = ?")
        .bind(student_number)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Applies the present fields of `changes`. `password_hash` replaces the
/// stored hash when given. Returns `false` when the student does not exist.
pub async fn update(
    pool: &SqlitePool,
    changes: &EditStudentRequest,
    password_hash: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE students SET ");
    let mut separated = builder.separated(", ");
    let mut touched = false;

    if let Some(first_name) = &changes.first_name {
        separated.push("first_name = ");
        separated.push_bind_unseparated(first_name);
        touched = true;
    }

    if let Some(last_name) = &changes.last_name {
        separated.push("last_name = ");
        separated.push_bind_unseparated(last_name);
        touched = true;
    }

    if let Some(email) = &changes.email {
        separated.push("email = ");
        separated.push_bind_unseparated(email);
        touched = true;
    }

    if let Some(section) = &changes.section {
        separated.push("section = ");
        separated.push_bind_unseparated(section);
        touched = true;
    }

    if let Some(hash) = password_hash {
        separated.push("password = ");
        separated.push_bind_unseparated(hash);
        touched = true;
    }

    if !touched {
        return Ok(find(pool, &changes.student_number).await?.is_some());
    }

    builder.push(" WHERE student_number = ");
    builder.push_bind(&changes.student_number);

    let result = builder.build().execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await
}
