// src/store/schema.rs

use sqlx::SqlitePool;

const TABLES: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS assessments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        time_limit INTEGER NOT NULL,
        questions TEXT NOT NULL,
        shuffle_questions BOOLEAN NOT NULL,
        section TEXT NOT NULL
    )
    "#,
    // Write-only history of every distribution; never read back.
    r#"
    CREATE TABLE IF NOT EXISTS distributed_assessments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        assessment_id INTEGER,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        time_limit INTEGER NOT NULL,
        questions TEXT NOT NULL,
        shuffle_questions BOOLEAN NOT NULL,
        section TEXT NOT NULL,
        distributed_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS students (
        student_number TEXT PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        password TEXT NOT NULL,
        section TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS assessment_results (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        assessment_id INTEGER NOT NULL,
        student_number TEXT NOT NULL,
        assessment TEXT NOT NULL,
        answers TEXT NOT NULL,
        time_taken INTEGER NOT NULL,
        total_points REAL NOT NULL,
        mistakes INTEGER NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
];

/// Creates the four tables if they are missing.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in TABLES {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
