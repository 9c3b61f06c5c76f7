//! Application Layer (Use Cases)
//!
//! Orchestrates upstream ports into briefings.

mod briefing_assembler;

pub use briefing_assembler::BriefingAssembler;
