// src/handlers/mod.rs

pub mod assessments;
pub mod control;
pub mod pages;
pub mod scores;
pub mod students;
