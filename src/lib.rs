//! Gradebook Core - grade engine and dashboard cache
//!
//! Computes letter grades, semester GPA and credit-weighted CGPA from raw
//! marks, and memoizes dashboard summaries in a bounded TTL cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod grades;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
