//! API Module
//!
//! HTTP handlers and routing for the grade service REST API.
//!
//! # Endpoints
//! - `POST /grades/lookup` - Grade for a single total mark
//! - `POST /grades/components` - Weighted mark and grade from four components
//! - `POST /gpa/semester` - GPA for one semester of subjects
//! - `POST /gpa/cumulative` - Credit-weighted CGPA across semesters
//! - `POST /performance` - Performance tier for a GPA
//! - `PUT|GET|DELETE /dashboard/:user_id/:education_level` - Cached dashboard summary
//! - `GET /stats` - Dashboard cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
