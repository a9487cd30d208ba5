/// Union-find over the elements `0..len`.
///
/// Roots are self-parented. `find` compresses paths so that every element
/// visited during a lookup ends up pointing straight at its root.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        DisjointSet {
            parent: (0..len).collect(),
            components: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint groups left.
    pub fn components(&self) -> usize {
        self.components
    }

    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the groups of `a` and `b`. Returns `false` if they were already
    /// in the same group, in which case nothing changes.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_a] = root_b;
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn every_element_starts_as_its_own_root() {
        let mut sets = DisjointSet::new(5);
        for e in 0..5 {
            assert_eq!(sets.find(e), e);
        }
        assert_eq!(sets.components(), 5);
    }

    #[test]
    fn union_reports_whether_it_merged() {
        let mut sets = DisjointSet::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));
        assert_eq!(sets.components(), 1);
    }

    #[test]
    fn redundant_union_leaves_connectivity_alone() {
        let mut sets = DisjointSet::new(6);
        sets.union(0, 1);
        sets.union(1, 2);
        let before: Vec<bool> = (0..6).map(|e| sets.connected(0, e)).collect();
        assert!(!sets.union(2, 0));
        let after: Vec<bool> = (0..6).map(|e| sets.connected(0, e)).collect();
        assert_eq!(before, after);
        assert_eq!(after, vec![true, true, true, false, false, false]);
    }

    #[test]
    fn find_flattens_long_chains() {
        let n = 100_000;
        let mut sets = DisjointSet::new(n);
        // Build a single chain 0 -> 1 -> ... -> n-1 without recursion limits.
        for e in 0..n - 1 {
            sets.parent[e] = e + 1;
        }
        assert_eq!(sets.find(0), n - 1);
        for e in 0..n {
            assert_eq!(sets.parent[e], n - 1);
        }
    }

    #[test]
    fn matches_naive_labelling() {
        let n = 40;
        let mut rng = StdRng::seed_from_u64(7);
        let mut sets = DisjointSet::new(n);
        let mut labels: Vec<usize> = (0..n).collect();

        for _ in 0..60 {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            let expected_merge = labels[a] != labels[b];
            assert_eq!(sets.union(a, b), expected_merge);
            if expected_merge {
                let (from, to) = (labels[a], labels[b]);
                for label in labels.iter_mut() {
                    if *label == from {
                        *label = to;
                    }
                }
            }
            for x in 0..n {
                for y in 0..n {
                    assert_eq!(sets.connected(x, y), labels[x] == labels[y]);
                }
            }
        }
    }
}
