//! CLI command implementations

pub mod assemble;
pub mod doctor;
pub mod list;
