use ndarray::Array2;
use rand::Rng;

use crate::node::*;

/// Creates a random binary multigraph with `k` edge types over `n` nodes where every entry is
/// set with probability `p`. Returns the stacked form together with the individual layers,
/// both built independently of the transcoding functions under test.
pub(crate) fn random_multigraph<R: Rng>(
    rng: &mut R,
    k: NumEdgeTypes,
    n: NumNodes,
    p: f64,
) -> (Array2<f64>, Vec<Array2<f64>>) {
    let layers: Vec<Array2<f64>> = (0..k)
        .map(|_| Array2::from_shape_fn((n, n), |_| if rng.random_bool(p) { 1.0 } else { 0.0 }))
        .collect();

    let mut stacked = Array2::<f64>::zeros((k, n * n));
    for (layer, graph) in layers.iter().enumerate() {
        for ((u, v), &x) in graph.indexed_iter() {
            stacked[[layer, u * n + v]] = x;
        }
    }

    (stacked, layers)
}

/// Creates `k` random weights in the range `-2.0..2.0`
pub(crate) fn random_weights<R: Rng>(rng: &mut R, k: NumEdgeTypes) -> Vec<f64> {
    (0..k).map(|_| rng.random_range(-2.0..2.0)).collect()
}
