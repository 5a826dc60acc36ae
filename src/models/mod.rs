//! Request and Response models for the grade service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    validate_components, CumulativeRequest, DashboardRequest, MarksRequest, PerformanceRequest,
    SemesterRequest, SubjectInput,
};
pub use responses::{
    CumulativeResponse, DeleteResponse, ErrorResponse, GradeResponse, HealthResponse,
    StatsResponse,
};
