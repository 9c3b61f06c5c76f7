//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod briefing_log_repository;

pub use briefing_log_repository::*;
