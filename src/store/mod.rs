// src/store/mod.rs

//! Persistence gateway. Thin, parameterized queries over the four SQLite
//! tables; no transactions.

pub mod assessments;
pub mod reports;
pub mod results;
pub mod schema;
pub mod students;
