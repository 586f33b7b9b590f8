//! Community engagement form workflows: wizard flow, activity intake, and the
//! requirements verifier that decides Medicaid-style community engagement
//! eligibility for a reporting month.

pub mod config;
pub mod error;
pub mod forms;
pub mod telemetry;
