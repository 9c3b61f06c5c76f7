//! Application Layer (Use Cases)
//!
//! Orchestrates request-log operations on top of the repository port.

mod briefing_log_service;

pub use briefing_log_service::BriefingLogService;
