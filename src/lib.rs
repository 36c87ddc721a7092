//! list-diff - Minimal insertion/deletion edit scripts between two lists
//!
//! ## Core Concepts
//!
//! **Edit script**: an ordered list of [`Operation`]s. Each index refers to
//! the list as it stands after all earlier operations, so replaying the
//! script in order on the old list yields the new one. This makes it a
//! direct driver for incremental updates of a live list (an animated list
//! view, for instance) instead of rebuilding it.
//!
//! **Comparator**: items are only ever compared through an injected
//! [`Comparator`] (equality plus a consistent hash).
//!
//! **Offloading**: large diffs can run on a single-use worker thread while
//! the caller awaits the result. An [`OffloadPolicy`] decides from the
//! trimmed list sizes unless the caller forces a mode.
//!
//! ## Modules
//! - `algo`: prefix/suffix trimming and the DP edit script
//! - `operation`: `Operation`, `apply`, `ScriptStats`
//! - `comparator`: `Comparator`, `Natural`, `FnComparator`
//! - `policy`: `OffloadPolicy`, `ExecutionMode`
//! - `worker`: worker request/response protocol (requires `async`)
//! - `diff`: entry points
//!
//! ## Usage
//!
//! ```ignore
//! use list_diff::{diff, diff_sync, DiffOptions};
//!
//! let old = ["coconut", "nut", "peanut"];
//! let new = ["kiwi", "coconut", "maracuja", "nut", "banana"];
//!
//! // Inline, on the calling thread
//! let ops = diff_sync(&old, &new, None);
//!
//! // Async; offloaded when the lists are large enough
//! let ops = diff(&old, &new, DiffOptions::default()).await?;
//!
//! let mut list = old.to_vec();
//! list_diff::apply(&mut list, &ops)?;
//! assert_eq!(list, new);
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Algorithms: trim, edit script
pub mod algo;

/// Operation model
pub mod operation;

/// Comparison capability
pub mod comparator;

/// Offload policy and execution modes
pub mod policy;

/// Single-use diff worker
#[cfg(feature = "async")]
pub mod worker;

/// Entry points
pub mod diff;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Entry points
pub use diff::{diff_sync, diff_sync_by, DiffOptions};

#[cfg(feature = "async")]
pub use diff::{diff, diff_all, diff_with};

#[cfg(feature = "parallel")]
pub use diff::diff_sync_batch;

// Operations
pub use operation::{apply, Operation, ScriptStats};

// Comparison
pub use comparator::{Comparator, EqualsFn, FnComparator, HashFn, Natural};

// Execution
pub use policy::{ExecutionMode, OffloadPolicy, DEFAULT_OFFLOAD_THRESHOLD};

// Algorithms
pub use algo::{edit_distance, trim, Trimmed};

// Error types
pub use error::{ListDiffError, ListDiffResult};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fruit_script_replays() {
        let old = ["coconut", "nut", "peanut"];
        let new = ["kiwi", "coconut", "maracuja", "nut", "banana"];
        let ops = diff_sync(&old, &new, None);

        let rendered: Vec<String> = ops.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            [
                "Insertion of kiwi at 0.",
                "Insertion of maracuja at 2.",
                "Insertion of banana at 4.",
                "Deletion of peanut at 5.",
            ]
        );

        let mut list = old.to_vec();
        apply(&mut list, &ops).unwrap();
        assert_eq!(list, new);

        let stats = ScriptStats::of(&ops);
        assert_eq!(stats.inserted, 3);
        assert_eq!(stats.deleted, 1);
        assert_eq!(stats.edit_count(), edit_distance(&old, &new, |a, b| a == b));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_concurrent_invocations_are_independent() {
        let pairs: Vec<(Vec<u32>, Vec<u32>)> = (0..8)
            .map(|seed| {
                let old: Vec<u32> = (0..120).map(|i| (i * seed + 3) % 17).collect();
                let new: Vec<u32> = (0..110).map(|i| (i * (seed + 1)) % 19).collect();
                (old, new)
            })
            .collect();

        let results = diff_all(&pairs, DiffOptions::new().policy(OffloadPolicy::always()))
            .await
            .unwrap();

        for ((old, new), ops) in pairs.iter().zip(&results) {
            assert_eq!(ops, &diff_sync(old, new, None));
            let mut list = old.clone();
            apply(&mut list, ops).unwrap();
            assert_eq!(&list, new);
        }
    }
}
