//! Disjoint-set union over dense indices

/// Union-find over `0..len` with path compression and union by size.
///
/// Component sizes always sum to `len()`; only [`union`](Self::union)
/// changes which elements share a component.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Create `len` singleton components
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure holds no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct components
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Representative of `x`'s component
    ///
    /// Every node on the walked path is rewired directly to the root.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()`.
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

    /// Merge the components containing `a` and `b`
    ///
    /// The smaller root is attached under the larger one; on equal sizes
    /// `b`'s root goes under `a`'s. Returns `false` when they already
    /// share a component.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        self.components -= 1;
        true
    }

    /// Whether `a` and `b` are in the same component
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Size of the component containing `x`
    pub fn size_of(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Sizes of every component, largest first
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self
            .parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .map(|(i, _)| self.size[i])
            .collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut dsu = DisjointSet::new(4);
        assert_eq!(dsu.component_count(), 4);
        assert_eq!(dsu.find(2), 2);
        assert_eq!(dsu.component_sizes(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_union_reports_merge() {
        let mut dsu = DisjointSet::new(3);
        assert!(dsu.union(0, 1));
        assert!(!dsu.union(1, 0));
        assert!(dsu.connected(0, 1));
        assert!(!dsu.connected(0, 2));
        assert_eq!(dsu.component_count(), 2);
    }

    #[test]
    fn test_smaller_root_goes_under_larger() {
        let mut dsu = DisjointSet::new(5);
        dsu.union(1, 2);
        dsu.union(1, 3);
        // {1,2,3} is larger than {4}, so its root survives
        let big_root = dsu.find(1);
        dsu.union(4, 2);
        assert_eq!(dsu.find(4), big_root);
        assert_eq!(dsu.size_of(4), 4);
    }

    #[test]
    fn test_tie_keeps_first_root() {
        let mut dsu = DisjointSet::new(2);
        dsu.union(0, 1);
        assert_eq!(dsu.find(1), 0);
    }

    #[test]
    fn test_find_compresses_path() {
        let mut dsu = DisjointSet::new(4);
        // build a chain by hand so compression has work to do
        dsu.parent = vec![0, 0, 1, 2];
        dsu.size = vec![4, 1, 1, 1];
        dsu.components = 1;
        assert_eq!(dsu.find(3), 0);
        assert_eq!(dsu.parent, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_empty() {
        let dsu = DisjointSet::new(0);
        assert!(dsu.is_empty());
        assert!(dsu.component_sizes().is_empty());
    }
}
