/*!
`umultigraphs` is a small library for **multigraphs** given as adjacency matrices: `K` edge types
(or *layers*) over the same `N` nodes, where every layer is an `N×N` matrix of binary or real
edge weights.

# Representation

All values are plain [`ndarray`] arrays, no custom graph types are involved:

- A **single graph** is an `N×N` [`Array2`](ndarray::Array2).
- A multigraph in **stacked** form is a `(K, N²)` [`Array2`](ndarray::Array2) where row `k` is
  the row-major flattened adjacency matrix of edge type `k`.
- A multigraph in **stringed** form is a [`Array1`](ndarray::Array1) of length `K·N²`, the rows
  of the stacked form concatenated in edge-type order.

Every operation accepts owned arrays as well as views and returns freshly allocated arrays;
inputs are never modified. There is no global state, so all operations can be called from
multiple threads at once.

# Usage

There are *3* core submodules:
- [`transcode`] converts between the stacked form, the stringed form and lists of `N×N` graphs,
- [`ops`] reduces a stacked multigraph into a single graph (union, intersection, weighted combination),
- [`features`] applies per-graph feature functions to every layer and sums up the results.

In addition, [`gens`] provides random multigraphs and [`error`] the error type returned by all
fallible operations.

In most use-cases, `use umultigraphs::prelude::*;` suffices for your needs.

```
use ndarray::{array, Array1};
use umultigraphs::prelude::*;

let graphs = vec![array![[1, 0], [0, 0]], array![[0, 0], [0, 1]]];
let stacked = compact_from_list(&graphs).unwrap();
assert_eq!(stacked, array![[1, 0, 0, 0], [0, 0, 0, 1]]);

assert_eq!(stacked.union_reduce().unwrap(), array![[1, 0], [0, 1]]);
assert_eq!(stacked.intersection_reduce().unwrap(), array![[0, 0], [0, 0]]);

let stringed: Array1<i32> = stacked.to_stringed();
assert_eq!(stringed_to_graph_list(&stringed, 2).unwrap(), graphs);
assert_eq!(aggregate_feature_sum(&stringed, 2, [count_edges]).unwrap(), 2);
```

# Errors

Shape problems (lengths not divisible by `K`, layers that are not a perfect square, graphs of
differing shapes) are reported as [`MultigraphError::Shape`](error::MultigraphError::Shape);
a weight vector of the wrong length as
[`MultigraphError::DimensionMismatch`](error::MultigraphError::DimensionMismatch).
Rejected inputs are additionally reported as `debug`-level [`tracing`] events.
*/

pub mod error;
pub mod features;
pub mod gens;
pub mod node;
pub mod ops;
#[cfg(test)]
pub(crate) mod testing;
pub mod transcode;

/// `umultigraphs::prelude` includes the error type, all transcoding and reduction operations
/// together with their traits, and the feature-extraction harness.
pub mod prelude {
    pub use super::{error::MultigraphError, features::*, node::*, ops::*, transcode::*};
}
