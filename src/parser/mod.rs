// src/parser/mod.rs
pub mod resume;

// Re-export the core parsing surface for convenience
#[allow(unused_imports)]
pub use resume::{parse_resume_text, ParsedResume};
