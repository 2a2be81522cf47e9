//! Ordered difference between two listings.

use std::cmp::Ordering;

/// Elements present in only one of two listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta<T> {
    /// Present in `after` only.
    pub added: Vec<T>,
    /// Present in `before` only.
    pub removed: Vec<T>,
}

impl<T> Delta<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Diff `before` against `after` by `key`.
///
/// Both inputs are sorted by `key` first, so callers may pass listings in
/// any order. Output lists are in key order. Elements with equal keys match
/// one-to-one.
#[must_use]
pub fn delta<T, K, F>(mut before: Vec<T>, mut after: Vec<T>, key: F) -> Delta<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    before.sort_by_cached_key(&key);
    after.sort_by_cached_key(&key);

    let mut added = Vec::new();
    let mut removed = Vec::new();
    let mut before = before.into_iter().peekable();
    let mut after = after.into_iter().peekable();

    loop {
        match (before.peek(), after.peek()) {
            (None, None) => break,
            (Some(_), None) => removed.extend(before.by_ref()),
            (None, Some(_)) => added.extend(after.by_ref()),
            (Some(b), Some(a)) => {
                let ordering = key(b).cmp(&key(a));
                match ordering {
                    Ordering::Equal => {
                        before.next();
                        after.next();
                    }
                    Ordering::Less => removed.extend(before.next()),
                    Ordering::Greater => added.extend(after.next()),
                }
            }
        }
    }

    Delta { added, removed }
}
