//! I/O helpers: input adapters, result sink, narration and config.

pub mod columns;
pub mod config;
pub mod errors;
pub mod lines;
pub mod narration;
pub mod sink;
pub mod source;
pub mod table;
