pub struct DisjointSet(Vec<usize>);

impl DisjointSet {
    pub fn new(n: usize) -> Self { Self((0..n).collect()) }
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let (keep, gone) = (self.0[u], self.0[v]);
        if keep == gone {
            return false;
        }
        for label in &mut self.0 {
            if *label == gone {
                *label = keep;
            }
        }
        true
    }
    pub fn same(&self, u: usize, v: usize) -> bool { self.0[u] == self.0[v] }
    pub fn size(&self, u: usize) -> usize {
        self.0.iter().filter(|&&label| label == self.0[u]).count()
    }
}
