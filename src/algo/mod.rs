//! Algorithm implementations for list diffing.
//!
//! - `trim`: common prefix/suffix stripping
//! - `script`: minimal insertion/deletion edit script (DP + backtrace)

mod script;
mod trim;

pub use script::{calculate, calculate_by, edit_distance};
pub use trim::{trim, Trimmed};
