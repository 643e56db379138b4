//! Node identity for a balanced bipartite graph.
//!
//! ## Id Scheme
//!
//! Every node lives in a single flat id space `[0, 2n)`:
//!
//! ```text
//! global:  0 .. n-1   |   n .. 2n-1
//!          left       |   right
//! local:   0 .. n-1   |   0 .. n-1
//! ```
//!
//! Matrices and match arrays are indexed by local id; the search queue and
//! augmenting paths carry global ids.

/// Which side of the bipartite graph a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Row side of the cost matrix
    Left,
    /// Column side of the cost matrix
    Right,
}

impl Category {
    /// The other side
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Category::Left => Category::Right,
            Category::Right => Category::Left,
        }
    }
}

/// Converts between local and global node ids for a graph with `n` nodes per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpace {
    n: usize,
}

impl NodeSpace {
    /// Create an id space with `n` nodes on each side
    #[inline]
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Nodes per side
    #[inline]
    pub fn side_len(&self) -> usize {
        self.n
    }

    /// Total number of global ids (`2n`)
    #[inline]
    pub fn node_count(&self) -> usize {
        self.n * 2
    }

    /// Global id of a local id in the given category
    ///
    /// # Panics
    ///
    /// Panics if `local >= n`.
    ///
    /// # Example
    ///
    /// ```
    /// use bipartite_match::types::{Category, NodeSpace};
    ///
    /// let space = NodeSpace::new(3);
    /// assert_eq!(space.global_id(1, Category::Left), 1);
    /// assert_eq!(space.global_id(1, Category::Right), 4);
    /// ```
    #[inline]
    pub fn global_id(&self, local: usize, category: Category) -> usize {
        assert!(local < self.n, "local id {} out of range 0..{}", local, self.n);
        match category {
            Category::Left => local,
            Category::Right => self.n + local,
        }
    }

    /// Local id of a global id
    ///
    /// # Panics
    ///
    /// Panics if `global >= 2n`.
    #[inline]
    pub fn local_id(&self, global: usize) -> usize {
        assert!(
            global < self.node_count(),
            "global id {} out of range 0..{}",
            global,
            self.node_count()
        );
        if global < self.n {
            global
        } else {
            global - self.n
        }
    }

    /// True iff `global < n`
    #[inline]
    pub fn is_left(&self, global: usize) -> bool {
        assert!(
            global < self.node_count(),
            "global id {} out of range 0..{}",
            global,
            self.node_count()
        );
        global < self.n
    }

    #[inline]
    pub fn category(&self, global: usize) -> Category {
        if self.is_left(global) {
            Category::Left
        } else {
            Category::Right
        }
    }

    /// Global ids of all right-category nodes
    #[inline]
    pub fn right_ids(&self) -> std::ops::Range<usize> {
        self.n..self.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_local_round_trip() {
        let space = NodeSpace::new(5);

        for local in 0..5 {
            for category in [Category::Left, Category::Right] {
                let global = space.global_id(local, category);
                assert_eq!(space.local_id(global), local);
                assert_eq!(space.category(global), category);
            }
        }
    }

    #[test]
    fn test_is_left() {
        let space = NodeSpace::new(3);

        for global in 0..6 {
            assert_eq!(space.is_left(global), global < 3);
        }
    }

    #[test]
    fn test_fixture_ids() {
        // Same ids as the 3x3 regression fixture
        let space = NodeSpace::new(3);

        assert_eq!(space.global_id(1, Category::Left), 1);
        assert_eq!(space.local_id(5), 2);
        assert_eq!(space.local_id(2), 2);
        assert_eq!(space.right_ids().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Category::Left.opposite(), Category::Right);
        assert_eq!(Category::Right.opposite(), Category::Left);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_global_id_out_of_range() {
        NodeSpace::new(2).global_id(2, Category::Left);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_local_id_out_of_range() {
        NodeSpace::new(2).local_id(4);
    }

    #[test]
    fn test_empty_space() {
        let space = NodeSpace::new(0);
        assert_eq!(space.node_count(), 0);
        assert_eq!(space.right_ids().count(), 0);
    }
}
