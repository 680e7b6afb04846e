use std::fmt::Debug;

use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// Due to this independence, we do not need to incorporate normalized-checks for undirected graphs
/// or self-loop checks in the generator itself as the overhead is minimal (`2 * n/(n - 1)` at most).
///
/// Filterings of this sort are thus up to the caller.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = GnpType::Prob(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        assert!(self.n > 0, "At least one node must be generated!");
        let p = match self.p {
            GnpType::NotSet => panic!("Probility of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = d / self.n as f64;
                assert!(
                    p.is_valid_probility(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        };

        let n = self.n;
        (0..n * n)
            .filter(move |_| rng.random_bool(p))
            .map(move |x| edge_from_index(x, n))
    }
}

/// `G(n) = G(n,1/2)` generators are uniform distributions over all graphs with `n` nodes.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gn {
    n: u64,
}

impl Gn {
    /// Creates a new `G(n)` generator
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Gn {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl GraphGenerator for Gn {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        assert!(self.n > 0, "At least one node must be generated!");
        let n = self.n;
        (0..n * n)
            .filter(move |_| rng.random_bool(0.5))
            .map(move |x| edge_from_index(x, n))
    }
}

/// Maps an index in `0..n*n` to the edge `(idx / n, idx % n)`
fn edge_from_index(idx: u64, n: u64) -> Edge {
    Edge((idx / n) as Node, (idx % n) as Node)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::repr::{AdjArray, AdjArrayUndir};

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        let empty = Gnp::new().nodes(10).prob(0.0).generate(rng);
        assert!(empty.is_empty());

        let full = Gnp::new().nodes(10).prob(1.0).generate(rng);
        assert_eq!(full.len(), 100);
    }

    #[test]
    fn edge_count_concentrates() {
        let rng = &mut Pcg64Mcg::seed_from_u64(123);

        let n = 100u64;
        let edges = Gnp::new().nodes(n as NumNodes).prob(0.3).generate(rng);

        // expectation is p * n^2 = 3000; far outside bounds only with
        // negligible probability
        assert!(edges.len() > 2500 && edges.len() < 3500);
        assert!(edges.iter().all(|e| e.0 < n as Node && e.1 < n as Node));
    }

    #[test]
    fn avg_deg_matches_prob() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        let n = 200;
        let edges = Gnp::new().nodes(n).avg_deg(4.0).generate(rng);
        // expectation is 4 * n
        assert!(edges.len() > 500 && edges.len() < 1100);
    }

    #[test]
    fn random_graphs_have_valid_nodes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(999);

        let directed: AdjArray = AdjArray::gnp(rng, 50, 0.1);
        assert_eq!(directed.number_of_nodes(), 50);

        let undirected: AdjArrayUndir = AdjArrayUndir::gnp_no_loops(rng, 50, 0.1);
        assert_eq!(undirected.number_of_nodes(), 50);
        assert!(undirected.edges(true).all(|e| !e.is_loop()));
    }
}
