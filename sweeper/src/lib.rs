//! Sweepstake draws: one random, distinct pick for every entrant.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure logic (validation, the draw itself, option rules).
//!   Randomness is injected and progress is reported as events, so every
//!   outcome is reproducible in tests.
//! - **[`io`]**: Side-effecting adapters (reading entrant/pick lists, writing
//!   results, narration, config).
//!
//! [`sweep`] coordinates both to implement `sweeper draw`.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod sweep;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
