use std::fmt;

#[derive(Clone)]
pub struct Dsu {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl Dsu {
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), size: vec![1; n], sets: n }
    }
    pub fn len(&self) -> usize { self.parent.len() }
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the representative of the set containing `u`, compressing
    /// the path from `u` to the root. Panics if `u >= self.len()`.
    pub fn find(&mut self, u: usize) -> usize {
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = u;
        while cur != root {
            cur = std::mem::replace(&mut self.parent[cur], root);
        }
        root
    }
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let u = self.find(u);
        let v = self.find(v);
        if u == v {
            return false;
        }

        // Union by size; ties keep the left root.
        let (par, child) =
            if self.size[u] < self.size[v] { (v, u) } else { (u, v) };

        self.parent[child] = par;
        self.size[par] += self.size[child];
        self.sets -= 1;
        true
    }
    pub fn same(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }
    pub fn size(&mut self, u: usize) -> usize {
        let root = self.find(u);
        self.size[root]
    }
    /// Discards all state and reinitializes to `n` singletons.
    pub fn reset(&mut self, n: usize) {
        self.parent.clear();
        self.parent.extend(0..n);
        self.size.clear();
        self.size.resize(n, 1);
        self.sets = n;
    }

    fn root_of(&self, mut u: usize) -> usize {
        while self.parent[u] != u {
            u = self.parent[u];
        }
        u
    }
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut ptn = vec![vec![]; n];
        for i in 0..n {
            ptn[self.root_of(i)].push(i);
        }
        ptn
    }
    pub fn partition_len(&self) -> usize { self.sets }
}

struct AsSet<'a>(&'a Vec<usize>);
impl fmt::Debug for AsSet<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Debug for Dsu {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        fmt.debug_map()
            .entries(
                (0..self.parent.len())
                    .filter(|&i| !ptn[i].is_empty())
                    .map(|i| (i, AsSet(&ptn[i]))),
            )
            .finish()
    }
}

impl fmt::Display for Dsu {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        fmt.debug_set()
            .entries(
                ptn.iter().filter(|set| !set.is_empty()).map(|set| AsSet(set)),
            )
            .finish()
    }
}

#[test]
fn sanity_check() {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    let n = 24;
    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    let mut actual = Dsu::new(n);
    let mut expected = naive::DisjointSet::new(n);

    for _ in 0..3 * n {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        assert_eq!(actual.unite(u, v), expected.unite(u, v));
        for i in 0..n {
            for j in 0..n {
                assert_eq!(actual.same(i, j), expected.same(i, j));
            }
            assert_eq!(actual.size(i), expected.size(i));
        }
    }
}

#[test]
fn grouping() {
    let mut dsu = Dsu::new(10);
    for (u, v) in [(0, 1), (1, 4), (0, 8), (2, 3), (3, 9), (5, 6)] {
        assert!(dsu.unite(u, v));
    }

    assert!(dsu.same(1, 8));
    assert!(dsu.same(4, 0));
    assert!(!dsu.same(1, 9));
    assert!(!dsu.same(3, 6));

    assert_eq!(dsu.size(4), 4);
    assert_eq!(dsu.size(9), 3);
    assert_eq!(dsu.size(5), 2);
    assert_eq!(dsu.size(7), 1);
    assert_eq!(dsu.partition_len(), 4);

    assert!(!dsu.unite(8, 4));
    assert_eq!(dsu.size(8), 4);
}

#[test]
fn reset() {
    let mut dsu = Dsu::new(10);
    for (u, v) in [(0, 1), (1, 4), (0, 8), (2, 3), (3, 9), (5, 6)] {
        dsu.unite(u, v);
    }

    dsu.reset(5);
    assert_eq!(dsu.len(), 5);
    assert_eq!(dsu.partition_len(), 5);
    assert!(!dsu.same(1, 2));
    assert_eq!(dsu.size(4), 1);
}

#[test]
fn fresh_singletons() {
    let mut dsu = Dsu::new(4);
    for i in 0..4 {
        assert!(dsu.same(i, i));
        assert_eq!(dsu.size(i), 1);
        for j in 0..4 {
            if i != j {
                assert!(!dsu.same(i, j));
            }
        }
    }

    let dsu = Dsu::new(0);
    assert!(dsu.is_empty());
    assert_eq!(dsu.partition_len(), 0);
}

#[test]
fn debug_fmt() {
    let mut dsu = Dsu::new(8);
    dsu.unite(1, 5);
    dsu.unite(2, 4);
    dsu.unite(0, 2);
    dsu.unite(1, 6);
    dsu.unite(6, 7);
    assert_eq!(format!("{dsu}"), "{{1, 5, 6, 7}, {0, 2, 4}, {3}}");
    assert_eq!(format!("{dsu:?}"), "{1: {1, 5, 6, 7}, 2: {0, 2, 4}, 3: {3}}");
}
