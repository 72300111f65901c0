// src/lib.rs

pub mod config;
pub mod eligibility;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

pub use routes::create_router;
