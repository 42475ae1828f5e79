//! Application use cases. Orchestrate domain logic via ports.

pub mod summary_service;

pub use summary_service::{SummaryReport, SummaryService, SummaryStats};
