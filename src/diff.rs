//! Diff entry points.
//!
//! # Pipeline
//!
//! ```text
//! options --(usage check)--> comparator
//! trim(old, new)            -> Trimmed { start, old', new' }
//! mode.offloads(|old'|, |new'|)
//!     inline  -> calculate(old', new')
//!     offload -> worker::run(WorkerRequest { old', new', comparator })
//! ops.shifted(start)        -> edit script for (old, new)
//! ```
//!
//! `diff_sync` never offloads and needs no hash function.

use std::fmt;
#[cfg(feature = "async")]
use std::future::Future;
#[cfg(feature = "async")]
use std::hash::Hash;

#[cfg(feature = "async")]
use futures_util::future::{self, Either, join_all};
use tracing::debug;

use crate::algo::{calculate, trim};
use crate::comparator::{EqualsFn, FnComparator, HashFn};
#[cfg(feature = "async")]
use crate::comparator::{Comparator, Natural, Resolved};
use crate::error::{ListDiffError, ListDiffResult};
use crate::operation::Operation;
use crate::policy::{ExecutionMode, OffloadPolicy};
#[cfg(feature = "async")]
use crate::worker::{self, WorkerRequest};

// =============================================================================
// Options
// =============================================================================

/// Options for [`diff`].
///
/// `are_equal` and `get_hash_code` go together: set both or neither.
pub struct DiffOptions<T> {
    /// Where the computation runs. Default: decided by [`OffloadPolicy::default`].
    pub mode: ExecutionMode,
    pub are_equal: Option<EqualsFn<T>>,
    pub get_hash_code: Option<HashFn<T>>,
}

impl<T> Default for DiffOptions<T> {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            are_equal: None,
            get_hash_code: None,
        }
    }
}

impl<T> Clone for DiffOptions<T> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            are_equal: self.are_equal,
            get_hash_code: self.get_hash_code,
        }
    }
}

impl<T> fmt::Debug for DiffOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffOptions")
            .field("mode", &self.mode)
            .field("are_equal", &self.are_equal.is_some())
            .field("get_hash_code", &self.get_hash_code.is_some())
            .finish()
    }
}

impl<T> DiffOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force inline (`false`) or offloaded (`true`) execution.
    pub fn spawn_worker(mut self, spawn: bool) -> Self {
        self.mode = ExecutionMode::forced(spawn);
        self
    }

    /// Let `policy` pick the execution mode.
    pub fn policy(mut self, policy: OffloadPolicy) -> Self {
        self.mode = ExecutionMode::Auto(policy);
        self
    }

    pub fn are_equal(mut self, are_equal: EqualsFn<T>) -> Self {
        self.are_equal = Some(are_equal);
        self
    }

    pub fn get_hash_code(mut self, get_hash_code: HashFn<T>) -> Self {
        self.get_hash_code = Some(get_hash_code);
        self
    }

    /// Set both comparison functions at once.
    pub fn compare_with(self, are_equal: EqualsFn<T>, get_hash_code: HashFn<T>) -> Self {
        self.are_equal(are_equal).get_hash_code(get_hash_code)
    }

    /// The custom comparator, if one was configured.
    ///
    /// Fails when only one of the two functions is set.
    pub fn comparator(&self) -> ListDiffResult<Option<FnComparator<T>>> {
        match (self.are_equal, self.get_hash_code) {
            (Some(equals), Some(hash)) => Ok(Some(FnComparator::new(equals, hash))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ListDiffError::IncompleteComparator {
                missing: "get_hash_code",
                given: "are_equal",
            }),
            (None, Some(_)) => Err(ListDiffError::IncompleteComparator {
                missing: "are_equal",
                given: "get_hash_code",
            }),
        }
    }
}

// =============================================================================
// Async entry points
// =============================================================================

/// Compute the edit script turning `old` into `new`.
///
/// The options are validated when this function is called, before either
/// list is read. A usage error comes back as an already-completed future:
/// it resolves on the first poll, without doing any work. Without custom
/// functions the items' own `PartialEq` and `Hash` are used.
///
/// # Example
///
/// ```ignore
/// let ops = diff(&["coconut", "nut"], &["kiwi", "coconut"], DiffOptions::default()).await?;
/// ```
#[cfg(feature = "async")]
pub fn diff<'a, T>(
    old: &'a [T],
    new: &'a [T],
    options: DiffOptions<T>,
) -> impl Future<Output = ListDiffResult<Vec<Operation<T>>>> + 'a
where
    T: PartialEq + Hash + Clone + Send + 'static,
{
    match options.comparator() {
        Ok(custom) => {
            let comparator = match custom {
                Some(custom) => Resolved::Custom(custom),
                None => Resolved::Natural(Natural),
            };
            Either::Left(diff_with(old, new, comparator, options.mode))
        }
        Err(err) => Either::Right(future::ready(Err(err))),
    }
}

/// Compute the edit script with an explicit comparator.
///
/// For item types without intrinsic equality, or comparators that are not
/// plain functions. The comparator must be `Send + 'static` because it may
/// be moved to a worker.
#[cfg(feature = "async")]
pub async fn diff_with<T, C>(
    old: &[T],
    new: &[T],
    comparator: C,
    mode: ExecutionMode,
) -> ListDiffResult<Vec<Operation<T>>>
where
    T: Clone + Send + 'static,
    C: Comparator<T> + Send + 'static,
{
    let trimmed = trim(old, new, |a, b| comparator.equals(a, b));
    let offload = mode.offloads(trimmed.old.len(), trimmed.new.len());
    debug!(
        start = trimmed.start,
        old_len = trimmed.old.len(),
        new_len = trimmed.new.len(),
        offload,
        "diffing lists"
    );

    let ops = if offload {
        let request = WorkerRequest::new(trimmed.old.to_vec(), trimmed.new.to_vec(), comparator);
        worker::run(request).await?
    } else {
        calculate(trimmed.old, trimmed.new, |a, b| comparator.equals(a, b))
    };

    Ok(rebase(ops, trimmed.start))
}

/// Diff many independent list pairs concurrently.
///
/// Each pair is a separate invocation with its own worker when offloaded.
/// Inline pairs run on the polling thread. Results keep the input order;
/// the first failure fails the batch.
#[cfg(feature = "async")]
pub async fn diff_all<T>(
    pairs: &[(Vec<T>, Vec<T>)],
    options: DiffOptions<T>,
) -> ListDiffResult<Vec<Vec<Operation<T>>>>
where
    T: PartialEq + Hash + Clone + Send + 'static,
{
    options.comparator()?;

    join_all(pairs.iter().map(|(old, new)| diff(old, new, options.clone())))
        .await
        .into_iter()
        .collect()
}

// =============================================================================
// Sync entry points
// =============================================================================

/// Compute the edit script on the calling thread.
///
/// Uses `are_equal` when given, `PartialEq` otherwise. Never fails.
pub fn diff_sync<T>(old: &[T], new: &[T], are_equal: Option<EqualsFn<T>>) -> Vec<Operation<T>>
where
    T: PartialEq + Clone,
{
    match are_equal {
        Some(are_equal) => diff_sync_by(old, new, are_equal),
        None => diff_sync_by(old, new, |a: &T, b: &T| a == b),
    }
}

/// [`diff_sync`] with any equality closure.
pub fn diff_sync_by<T: Clone>(
    old: &[T],
    new: &[T],
    eq: impl Fn(&T, &T) -> bool,
) -> Vec<Operation<T>> {
    let trimmed = trim(old, new, &eq);
    debug!(
        start = trimmed.start,
        old_len = trimmed.old.len(),
        new_len = trimmed.new.len(),
        "diffing lists inline"
    );
    rebase(calculate(trimmed.old, trimmed.new, eq), trimmed.start)
}

/// Run many inline diffs in parallel with rayon.
#[cfg(feature = "parallel")]
pub fn diff_sync_batch<T, F>(pairs: &[(Vec<T>, Vec<T>)], eq: F) -> Vec<Vec<Operation<T>>>
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> bool + Sync,
{
    use rayon::prelude::*;

    pairs.par_iter().map(|(old, new)| diff_sync_by(old, new, &eq)).collect()
}

/// Move operations computed on a trimmed window back to full-list indices.
#[inline]
fn rebase<T>(ops: Vec<Operation<T>>, start: usize) -> Vec<Operation<T>> {
    if start == 0 {
        return ops;
    }
    ops.into_iter().map(|op| op.shifted(start)).collect()
}

// =============================================================================
// Tests
// =============================================================================
