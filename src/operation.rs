//! Operation model: the two edits an edit script is made of.
//!
//! Operations are positional. Each index is read against the list as it
//! stands after every earlier operation of the same script has been applied,
//! so a script must be replayed strictly in order.

use std::fmt;

use crate::error::{ListDiffError, ListDiffResult};

// =============================================================================
// Operation
// =============================================================================

/// A single edit in an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation<T> {
    /// Insert `item` at `index`
    Insertion { index: usize, item: T },
    /// Remove the item currently at `index`
    Deletion { index: usize, item: T },
}

impl<T> Operation<T> {
    /// Create an insertion.
    #[inline]
    pub fn insertion(index: usize, item: T) -> Self {
        Self::Insertion { index, item }
    }

    /// Create a deletion.
    #[inline]
    pub fn deletion(index: usize, item: T) -> Self {
        Self::Deletion { index, item }
    }

    #[inline]
    pub fn is_insertion(&self) -> bool {
        matches!(self, Self::Insertion { .. })
    }

    #[inline]
    pub fn is_deletion(&self) -> bool {
        matches!(self, Self::Deletion { .. })
    }

    /// Position this operation applies to.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Insertion { index, .. } | Self::Deletion { index, .. } => *index,
        }
    }

    /// The inserted or deleted item.
    #[inline]
    pub fn item(&self) -> &T {
        match self {
            Self::Insertion { item, .. } | Self::Deletion { item, .. } => item,
        }
    }

    #[inline]
    pub fn into_item(self) -> T {
        match self {
            Self::Insertion { item, .. } | Self::Deletion { item, .. } => item,
        }
    }

    /// Same operation moved `offset` positions towards the end of the list.
    ///
    /// Used to re-base operations computed on a trimmed window back into the
    /// coordinates of the full list.
    #[inline]
    pub fn shifted(self, offset: usize) -> Self {
        match self {
            Self::Insertion { index, item } => Self::Insertion { index: index + offset, item },
            Self::Deletion { index, item } => Self::Deletion { index: index + offset, item },
        }
    }

    /// Apply this operation to `list`.
    ///
    /// Deletions remove whatever sits at `index`; the stored item is not
    /// checked against it.
    pub fn apply_to(&self, list: &mut Vec<T>) -> ListDiffResult<()>
    where
        T: Clone,
    {
        match self {
            Self::Insertion { index, item } => {
                if *index > list.len() {
                    return Err(ListDiffError::IndexOutOfBounds { index: *index, len: list.len() });
                }
                list.insert(*index, item.clone());
            }
            Self::Deletion { index, .. } => {
                if *index >= list.len() {
                    return Err(ListDiffError::IndexOutOfBounds { index: *index, len: list.len() });
                }
                list.remove(*index);
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insertion { index, item } => write!(f, "Insertion of {item} at {index}."),
            Self::Deletion { index, item } => write!(f, "Deletion of {item} at {index}."),
        }
    }
}

/// Replay an edit script on `list`, in order.
///
/// Stops at the first operation that does not fit; `list` then holds the
/// state reached so far.
pub fn apply<T: Clone>(list: &mut Vec<T>, ops: &[Operation<T>]) -> ListDiffResult<()> {
    ops.iter().try_for_each(|op| op.apply_to(list))
}

// =============================================================================
// Statistics
// =============================================================================

/// Counts over an edit script
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ScriptStats {
    pub inserted: usize,
    pub deleted: usize,
}

impl ScriptStats {
    pub fn of<T>(ops: &[Operation<T>]) -> Self {
        ops.iter().fold(Self::default(), |mut stats, op| {
            if op.is_insertion() {
                stats.inserted += 1;
            } else {
                stats.deleted += 1;
            }
            stats
        })
    }

    /// Total number of operations
    pub fn edit_count(&self) -> usize {
        self.inserted + self.deleted
    }

    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}
