//! Comparison capability injected into the diff engine.
//!
//! A [`Comparator`] bundles the two functions the engine is allowed to use on
//! items: equality and a hash consistent with it. Keeping them together makes
//! "supply both or neither" a property of the type rather than a runtime check.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use rustc_hash::FxHasher;

/// Plain equality function. Being a `fn` pointer it cannot capture state.
pub type EqualsFn<T> = fn(&T, &T) -> bool;

/// Plain hash function. Must agree with the paired [`EqualsFn`].
pub type HashFn<T> = fn(&T) -> u64;

/// Equality plus a consistent hash.
///
/// Implementations must guarantee `equals(a, b) => hash(a) == hash(b)`.
/// The worker relies on it to reject unequal pairs by hash alone.
pub trait Comparator<T> {
    fn equals(&self, a: &T, b: &T) -> bool;

    fn hash(&self, item: &T) -> u64;
}

// =============================================================================
// Natural
// =============================================================================

/// Uses the item's own `PartialEq` and `Hash`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialEq + Hash> Comparator<T> for Natural {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash(&self, item: &T) -> u64 {
        fx_hash(item)
    }
}

/// Hash a value with `FxHasher`.
#[inline]
pub fn fx_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// FnComparator
// =============================================================================

/// Comparator built from a pair of plain functions.
pub struct FnComparator<T> {
    equals: EqualsFn<T>,
    hash: HashFn<T>,
    _item: PhantomData<fn(&T)>,
}

impl<T> FnComparator<T> {
    pub fn new(equals: EqualsFn<T>, hash: HashFn<T>) -> Self {
        Self { equals, hash, _item: PhantomData }
    }
}

// Manual impls: derives would demand `T: Clone`.
impl<T> Clone for FnComparator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FnComparator<T> {}

impl<T> std::fmt::Debug for FnComparator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

impl<T> Comparator<T> for FnComparator<T> {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }

    #[inline]
    fn hash(&self, item: &T) -> u64 {
        (self.hash)(item)
    }
}

// =============================================================================
// Either of the two
// =============================================================================

/// What a set of diff options resolves to.
#[derive(Debug, Clone, Copy)]
pub enum Resolved<T> {
    Natural(Natural),
    Custom(FnComparator<T>),
}

impl<T: PartialEq + Hash> Comparator<T> for Resolved<T> {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        match self {
            Self::Natural(c) => c.equals(a, b),
            Self::Custom(c) => c.equals(a, b),
        }
    }

    #[inline]
    fn hash(&self, item: &T) -> u64 {
        match self {
            Self::Natural(c) => Comparator::<T>::hash(c, item),
            Self::Custom(c) => c.hash(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(FnComparator<String>: Send, Sync, Copy);
    assert_impl_all!(Natural: Send, Sync, Copy);

    fn eq_ignore_case(a: &String, b: &String) -> bool {
        a.eq_ignore_ascii_case(b)
    }

    fn hash_ignore_case(s: &String) -> u64 {
        fx_hash(&s.to_ascii_lowercase())
    }

    #[test]
    fn test_natural() {
        assert!(Natural.equals(&1, &1));
        assert!(!Natural.equals(&1, &2));
        assert_eq!(Comparator::<&str>::hash(&Natural, &"a"), Comparator::<&str>::hash(&Natural, &"a"));
    }

    #[test]
    fn test_fn_comparator_is_consistent() {
        let cmp = FnComparator::new(eq_ignore_case, hash_ignore_case);
        let a = "Kiwi".to_string();
        let b = "kIWI".to_string();
        assert!(cmp.equals(&a, &b));
        assert_eq!(cmp.hash(&a), cmp.hash(&b));
        assert!(!cmp.equals(&a, &"nut".to_string()));
    }

    #[test]
    fn test_resolved_dispatch() {
        let natural: Resolved<String> = Resolved::Natural(Natural);
        let custom = Resolved::Custom(FnComparator::new(eq_ignore_case, hash_ignore_case));
        let a = "A".to_string();
        let b = "a".to_string();
        assert!(!natural.equals(&a, &b));
        assert!(custom.equals(&a, &b));
    }
}
