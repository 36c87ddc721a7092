//! Prelude module for common imports.
//!
//! ```ignore
//! use list_diff::prelude::*;
//! ```

// Entry points
pub use crate::diff::{diff_sync, diff_sync_by, DiffOptions};

#[cfg(feature = "async")]
pub use crate::diff::{diff, diff_all, diff_with};

// Operations
pub use crate::operation::{apply, Operation, ScriptStats};

// Comparison
pub use crate::comparator::{Comparator, FnComparator, Natural};

// Execution
pub use crate::policy::{ExecutionMode, OffloadPolicy};

// Error
pub use crate::error::{ListDiffError, ListDiffResult};
