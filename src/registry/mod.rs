// src/registry/mod.rs

//! In-memory state of the running service: which assessments are open and
//! which students are barred from them. Nothing here is persisted.

pub mod distribution;
pub mod restriction;

pub use distribution::DistributionRegistry;
pub use restriction::{ActivityOutcome, RestrictionRegistry};
