//! PostgreSQL Repository Implementations

mod briefing_log_repository;

pub use briefing_log_repository::PgBriefingLogRepository;
