//! Labelled tensor indices.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A named tensor axis: physical site indices have `dim == 2`; link
/// indices start at `dim == 1` and grow as entanglement is discovered.
///
/// Two indices match (for contraction) iff they share an `id` *and*
/// the same `level` (prime level). Ids are minted from a process-wide
/// counter so indices from independently constructed circuits never
/// collide — this is what lets `overlap` share site indices between
/// two otherwise-unrelated `QCircuit`s.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Index {
    id: u64,
    level: u32,
    dim: usize,
    tag: &'static str,
}

impl Index {
    /// Mints a fresh index with a new process-wide unique id.
    pub fn new(dim: usize, tag: &'static str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            id,
            level: 0,
            dim,
            tag,
        }
    }

    /// The index dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The index's descriptive tag (e.g. `"site"`, `"link"`).
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The prime level of this index.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Returns a copy of this index with its dimension replaced.
    ///
    /// Used when a link index's dimension grows after an SVD discovers
    /// a non-trivial Schmidt rank; the id/level/tag stay the same so it
    /// is still recognized as "the same" index by its endpoints.
    pub fn with_dim(&self, dim: usize) -> Self {
        Self { dim, ..*self }
    }

    /// Returns a copy of this index with its prime level incremented by one.
    pub fn prime(&self) -> Self {
        Self {
            level: self.level + 1,
            ..*self
        }
    }

    /// Returns a copy of this index with prime level reset to zero.
    pub fn unprime(&self) -> Self {
        Self { level: 0, ..*self }
    }

    /// Whether `self` and `other` are the same index ignoring prime level.
    pub fn same_family(&self, other: &Index) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Index {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.level == other.level
    }
}

impl std::hash::Hash for Index {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.level.hash(state);
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.tag, self.id)?;
        if self.level > 0 {
            write!(f, "'{}", self.level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_indices_are_distinct() {
        let a = Index::new(2, "site");
        let b = Index::new(2, "site");
        assert_ne!(a, b);
    }

    #[test]
    fn test_prime_changes_identity_but_not_family() {
        let a = Index::new(2, "site");
        let ap = a.prime();
        assert_ne!(a, ap);
        assert!(a.same_family(&ap));
        assert_eq!(ap.unprime(), a);
    }

    #[test]
    fn test_with_dim_preserves_identity() {
        let a = Index::new(1, "link");
        let grown = a.with_dim(4);
        assert_eq!(a, grown);
        assert_eq!(grown.dim(), 4);
    }
}
