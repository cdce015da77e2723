/*!
# Multigraph Generators

Random binary multigraphs for testing and benchmarking. [`MultiGnp`] draws every layer as an
independent `G(n,p)` graph: each of the `N²` possible entries of each of the `K` layers is
set independently with probability `p`.

Generators follow a builder pattern:

1. Create a generator instance (`MultiGnp::new()`).
2. Set parameters (`.nodes(n).edge_types(k).prob(p)`).
3. Generate a stacked or stringed multigraph with a random number generator.

```
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use umultigraphs::{gens::MultiGnp, prelude::*};

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let stacked = MultiGnp::new()
    .nodes(10)
    .edge_types(3)
    .prob(0.2)
    .without_loops()
    .generate::<f64, _>(rng);

assert_eq!(stacked.dim(), (3, 100));
assert_eq!(stacked.num_nodes().unwrap(), 10);
```
*/

use ndarray::{Array1, Array2};
use num::{One, Zero};
use rand::Rng;

use crate::{node::*, transcode::StackedMultigraph};

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Generator for multigraphs whose `K` layers are independent `G(n,p)` graphs
#[derive(Debug, Copy, Clone, Default)]
pub struct MultiGnp {
    n: NumNodes,
    k: NumEdgeTypes,
    p: Option<f64>,
    loops: bool,
}

impl MultiGnp {
    /// Creates a new generator; self-loops are allowed unless [`MultiGnp::without_loops`] is set
    pub fn new() -> Self {
        Self {
            loops: true,
            ..Self::default()
        }
    }

    /// Updates the number of nodes `N` per layer
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Updates the number of edge types `K`
    pub fn edge_types(mut self, k: NumEdgeTypes) -> Self {
        self.k = k;
        self
    }

    /// Updates the probability `p` of every entry being set
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = Some(prob);
        self
    }

    /// Never sets diagonal entries `(u, u)`
    pub fn without_loops(mut self) -> Self {
        self.loops = false;
        self
    }

    /// Generates a random multigraph in stacked form `(K, N²)` with entries `0` and `1`
    pub fn generate<A, R>(&self, rng: &mut R) -> Array2<A>
    where
        A: Clone + Zero + One,
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        assert!(self.k > 0, "At least one edge type must be generated!");
        let Some(p) = self.p else {
            panic!("Probability of MultiGnp was not set!");
        };

        let n = self.n;
        Array2::from_shape_fn((self.k, n * n), |(_, entry)| {
            let is_loop = entry / n == entry % n;
            if (self.loops || !is_loop) && rng.random_bool(p) {
                A::one()
            } else {
                A::zero()
            }
        })
    }

    /// Generates a random multigraph in stringed form `K·N²`
    pub fn generate_stringed<A, R>(&self, rng: &mut R) -> Array1<A>
    where
        A: Clone + Zero + One,
        R: Rng,
    {
        self.generate::<A, R>(rng).to_stringed()
    }
}
