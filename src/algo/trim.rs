//! Common prefix/suffix trimming.
//!
//! Identical runs at either end of both lists never show up in a minimal
//! edit script; they only shift its indices. Cutting them off before the
//! O(n*m) table is built is an O(n) pass.

/// The window of both lists that actually differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trimmed<'a, T> {
    /// Length of the removed common prefix
    pub start: usize,
    pub old: &'a [T],
    pub new: &'a [T],
}

impl<T> Trimmed<'_, T> {
    /// Number of cells the edit table for this window needs, excluding the
    /// boundary row and column.
    #[inline]
    pub fn cells(&self) -> usize {
        self.old.len().saturating_mul(self.new.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.old.is_empty() && self.new.is_empty()
    }
}

/// Strip the common prefix and suffix of `old` and `new`.
///
/// The suffix walk never reaches into the matched prefix, so
/// `start + suffix <= min(old.len(), new.len())`.
pub fn trim<'a, T>(
    old: &'a [T],
    new: &'a [T],
    eq: impl Fn(&T, &T) -> bool,
) -> Trimmed<'a, T> {
    let n = old.len();
    let m = new.len();

    let mut prefix_len = 0;
    while prefix_len < n && prefix_len < m && eq(&old[prefix_len], &new[prefix_len]) {
        prefix_len += 1;
    }

    let mut suffix_len = 0;
    while suffix_len < (n - prefix_len)
        && suffix_len < (m - prefix_len)
        && eq(&old[n - 1 - suffix_len], &new[m - 1 - suffix_len])
    {
        suffix_len += 1;
    }

    Trimmed {
        start: prefix_len,
        old: &old[prefix_len..n - suffix_len],
        new: &new[prefix_len..m - suffix_len],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(a: &u32, b: &u32) -> bool {
        a == b
    }

    #[test]
    fn test_empty() {
        let empty: [u32; 0] = [];
        let t = trim(&empty, &empty, eq);
        assert_eq!(t.start, 0);
        assert!(t.is_empty());
    }

    #[test]
    fn test_prefix_and_suffix() {
        let old = [1, 2, 3, 100, 7, 8];
        let new = [1, 2, 3, 200, 201, 7, 8];
        let t = trim(&old, &new, eq);
        assert_eq!(t.start, 3);
        assert_eq!(t.old, &[100]);
        assert_eq!(t.new, &[200, 201]);
        assert_eq!(t.cells(), 2);
    }

    #[test]
    fn test_identical() {
        let list = [4, 5, 6];
        let t = trim(&list, &list, eq);
        assert_eq!(t.start, 3);
        assert!(t.is_empty());
    }

    #[test]
    fn test_overlap_is_not_double_counted() {
        // Every item of `old` matches both as prefix and as suffix.
        let old = [1, 1];
        let new = [1, 1, 1];
        let t = trim(&old, &new, eq);
        assert_eq!(t.start, 2);
        assert!(t.old.is_empty());
        assert_eq!(t.new, &[1]);
    }

    #[test]
    fn test_suffix_only() {
        let old = [9, 5, 6];
        let new = [5, 6];
        let t = trim(&old, &new, eq);
        assert_eq!(t.start, 0);
        assert_eq!(t.old, &[9]);
        assert!(t.new.is_empty());
    }

    #[test]
    fn test_nothing_shared() {
        let old = [1, 2];
        let new = [3];
        let t = trim(&old, &new, eq);
        assert_eq!(t.start, 0);
        assert_eq!(t.old, &old);
        assert_eq!(t.new, &new);
    }
}
