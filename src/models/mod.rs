// src/models/mod.rs

pub mod assessment;
pub mod report;
pub mod restriction;
pub mod result;
pub mod student;
