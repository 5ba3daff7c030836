//! Shared model for the data-quality check designer.
//!
//! Everything here is platform neutral: the browser frontend and the host
//! backend both depend on it, and all of it is testable natively.

pub mod error;
pub mod jobs;
pub mod model;
pub mod requests;
pub mod table;
