//! assembly-core - Core types and logic for assembling capture transcripts
//!
//! Capture files are chronologically named turns of a conversation. This crate
//! discovers them, pairs them as prompt/response entries, and renders a single
//! Markdown transcript. No CLI or terminal dependencies.

pub mod types;
pub mod errors;
pub mod discovery;
pub mod render;
pub mod assembler;

pub use types::*;
pub use errors::*;
pub use discovery::*;
pub use render::*;
pub use assembler::*;
