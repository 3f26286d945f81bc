//! Deterministic, pure logic for sweepstake draws.
//!
//! Core modules must be free of I/O side effects. Randomness is injected by
//! the caller and progress is surfaced through events, so every outcome here
//! is reproducible in tests.

pub mod draw;
pub mod errors;
pub mod required_if;
pub mod types;
