//! Minimal insertion/deletion edit scripts.
//!
//! Edit distance restricted to insertions and deletions (cost 1 each, no
//! substitution), followed by a backtrace that turns the cost table into
//! positional operations.
//!
//! # Algorithm
//!
//! ```text
//! D[0][j] = j
//! D[i][0] = i
//! D[i][j] = D[i-1][j-1]                      if old[i-1] == new[j-1]
//!         = 1 + min(D[i-1][j], D[i][j-1])    otherwise
//! ```
//!
//! `D[m][n]` is the length of the shortest script.
//!
//! # Indexing
//!
//! Replaying a script forward, the list at cell `(i, j)` is
//! `new[..j] ++ old[i..]`. Stepping back from `(i, j)` to `(i-1, j)` therefore
//! deletes `old[i-1]` at index `j`, and stepping to `(i, j-1)` inserts
//! `new[j-1]` at index `j-1`. The backtrace walks from `(m, n)` to `(0, 0)`
//! and the collected operations are reversed into application order.
//!
//! Ties between the two neighbours go to the deletion. Both choices are
//! minimal, but the produced script is pinned by callers, so the rule is
//! fixed.
//!
//! # Complexity
//!
//! - Time: O(m * n)
//! - Space: O(m * n) for the cost table

use crate::operation::Operation;

// =============================================================================
// Cost table
// =============================================================================

/// Flat `(rows) x (cols)` cost table, row-major for cache locality.
struct EditTable {
    data: Vec<usize>,
    cols: usize,
}

impl EditTable {
    /// Fill the table for `m` old items and `n` new items.
    ///
    /// `matches(i, j)` answers whether `old[i]` equals `new[j]`.
    fn build(m: usize, n: usize, matches: &impl Fn(usize, usize) -> bool) -> Self {
        let cols = n + 1;
        let mut table = Self { data: vec![0; (m + 1) * cols], cols };

        for j in 0..=n {
            table.set(0, j, j);
        }
        for i in 1..=m {
            table.set(i, 0, i);
            for j in 1..=n {
                let cost = if matches(i - 1, j - 1) {
                    table.get(i - 1, j - 1)
                } else {
                    1 + table.get(i - 1, j).min(table.get(i, j - 1))
                };
                table.set(i, j, cost);
            }
        }

        table
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> usize {
        self.data[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, val: usize) {
        self.data[i * self.cols + j] = val;
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Compute the minimal edit script turning `old` into `new`.
pub fn calculate<T: Clone>(
    old: &[T],
    new: &[T],
    eq: impl Fn(&T, &T) -> bool,
) -> Vec<Operation<T>> {
    calculate_by(old, new, |i, j| eq(&old[i], &new[j]))
}

/// Like [`calculate`], with equality answered by position.
///
/// `matches(i, j)` must report whether `old[i]` equals `new[j]`. This lets a
/// caller put cheaper checks (precomputed hashes, for instance) in front of
/// the real comparison.
pub fn calculate_by<T: Clone>(
    old: &[T],
    new: &[T],
    matches: impl Fn(usize, usize) -> bool,
) -> Vec<Operation<T>> {
    // Quick paths
    if old.is_empty() {
        return new.iter().cloned().enumerate().map(|(j, item)| Operation::insertion(j, item)).collect();
    }
    if new.is_empty() {
        return old.iter().cloned().map(|item| Operation::deletion(0, item)).collect();
    }

    let m = old.len();
    let n = new.len();
    let table = EditTable::build(m, n, &matches);

    let mut ops = Vec::with_capacity(table.get(m, n));
    let mut i = m;
    let mut j = n;

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && matches(i - 1, j - 1) {
            i -= 1;
            j -= 1;
        } else if j == 0 || (i > 0 && table.get(i - 1, j) <= table.get(i, j - 1)) {
            ops.push(Operation::deletion(j, old[i - 1].clone()));
            i -= 1;
        } else {
            ops.push(Operation::insertion(j - 1, new[j - 1].clone()));
            j -= 1;
        }
    }

    ops.reverse();
    ops
}

/// Length of the shortest insertion/deletion script between `old` and `new`.
pub fn edit_distance<T>(old: &[T], new: &[T], eq: impl Fn(&T, &T) -> bool) -> usize {
    if old.is_empty() || new.is_empty() {
        return old.len() + new.len();
    }
    let matches = |i: usize, j: usize| eq(&old[i], &new[j]);
    EditTable::build(old.len(), new.len(), &matches).get(old.len(), new.len())
}

// =============================================================================
// Tests
// =============================================================================
