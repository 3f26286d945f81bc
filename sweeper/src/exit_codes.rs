//! Stable exit codes for the sweeper CLI.

/// Draw completed and the result was printed (and written, if requested).
pub const OK: i32 = 0;
/// Draw failed: unreadable or invalid input, invalid draw, or write failure.
pub const INVALID: i32 = 1;
/// Command line was incomplete, e.g. a `.csv` source without a column.
pub const USAGE: i32 = 2;
