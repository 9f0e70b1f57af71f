//! Stable process exit codes.
//!
//! `2` is left to clap, which uses it for usage errors.

pub const OK: i32 = 0;
/// Anything not covered below, e.g. the terminal could not be read.
pub const FAILURE: i32 = 1;
/// No `.git` entry in the working directory; nothing was run.
pub const NOT_A_REPOSITORY: i32 = 3;
pub const STATUS_FAILED: i32 = 4;
pub const STAGE_FAILED: i32 = 5;
pub const COMMIT_FAILED: i32 = 6;
/// Everything up to the commit succeeded, the push did not.
pub const PUSH_FAILED: i32 = 7;
