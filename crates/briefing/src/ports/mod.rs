//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the briefing workflow
//! interacts with external systems (upstream services, persistence).
//!
//! Implementations of these traits live in the adapter layers.

pub mod repositories;
pub mod services;

// Re-exports
pub use repositories::*;
pub use services::*;
