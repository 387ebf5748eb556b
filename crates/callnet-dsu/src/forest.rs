//! Union-find forest backed by two flat arrays.

/// Disjoint-set forest over nodes `0..len`.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSets {
    /// Every node starts as its own singleton component.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Number of nodes in the universe.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the universe is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components currently present.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Representative of `x`'s component.
    ///
    /// Iterative: one pass to locate the root, a second to re-point the path.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the components of `x` and `y`.
    ///
    /// Returns `false` if they were already connected. On equal sizes the
    /// root of `y` goes under the root of `x`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let mut keep = self.find(x);
        let mut absorb = self.find(y);
        if keep == absorb {
            return false;
        }

        if self.size[keep] < self.size[absorb] {
            std::mem::swap(&mut keep, &mut absorb);
        }
        self.parent[absorb] = keep;
        self.size[keep] += self.size[absorb];
        self.components -= 1;
        true
    }

    /// Whether `x` and `y` share a component.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the component containing `x`, read from its representative.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Every current representative with its component size.
    pub fn representatives(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(node, &parent)| node == parent)
            .map(move |(root, _)| (root, self.size[root]))
    }
}
