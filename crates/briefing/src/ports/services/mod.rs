//! Service Ports
//!
//! Abstract interfaces for upstream services.

mod user_directory;
mod weather;

pub use user_directory::*;
pub use weather::*;
