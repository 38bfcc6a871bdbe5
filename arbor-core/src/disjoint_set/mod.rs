//! Union-find (disjoint set union) over the elements `0..n`.
//!
//! Kruskal's algorithm drives one of these per call to detect cycles. Roots
//! are found iteratively and every visited node is re-pointed at the root on
//! the way back, so adversarial chains never recurse. Unions always attach the
//! second root beneath the first; there is no rank or size balancing.

use crate::error::DisjointSetError;

/// A partition of `0..n` into disjoint sets.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(sets.connected(1, 0)?);
/// assert!(!sets.connected(1, 2)?);
/// assert_eq!(sets.count(), 3);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    component_count: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            component_count: n,
        }
    }

    /// Returns the number of elements managed by the structure.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure manages no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the current number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn count(&self) -> usize { self.component_count }

    /// Returns the root of the set containing `element`, compressing the path
    /// walked to reach it.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfBounds`] when `element >= self.len()`.
    pub fn find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root of `right`'s set is attached beneath the root of `left`'s set.
    /// Returns `true` when two distinct sets were merged and `false` when the
    /// elements already shared a set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfBounds`] when either element is out of
    /// bounds. Nothing is modified in that case.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check(right)?;
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        self.parent[right_root] = left_root;
        self.component_count -= 1;
        Ok(true)
    }

    /// Returns `true` when both elements belong to the same set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfBounds`] when either element is out of
    /// bounds.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check(right)?;
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, element: usize) -> Result<(), DisjointSetError> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::OutOfBounds {
                element,
                len: self.parent.len(),
            })
        }
    }
}
