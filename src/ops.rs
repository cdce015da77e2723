/*!
# Reductions

Operators that collapse a stacked multigraph `(K, N²)` into a single `N×N` graph:

- [`union_reduce`]: entry `(u, v)` is the maximum over all layers (logical OR on binary graphs),
- [`intersection_reduce`]: entry `(u, v)` is the minimum over all layers (logical AND on binary graphs),
- [`weighted_combine`]: entry `(u, v)` is `Σ_k weights[k] · layer_k[u, v]`.

All reductions are also available as methods via [`MultigraphReduce`] and [`MultigraphCombine`].

```
use ndarray::array;
use umultigraphs::prelude::*;

let stacked = array![[1, 0, 0, 0], [0, 0, 0, 1]];
assert_eq!(stacked.union_reduce().unwrap(), array![[1, 0], [0, 1]]);
assert_eq!(stacked.intersection_reduce().unwrap(), array![[0, 0], [0, 0]]);
assert_eq!(stacked.weighted_combine(&[2, 3]).unwrap(), array![[2, 0], [0, 3]]);
```
*/

use ndarray::{Array2, ArrayBase, ArrayView1, Data, Ix1, Ix2, LinalgScalar};

use crate::{error::*, node::*};

/// Returns *true* for values that are not even comparable to themselves (eg. `NaN`)
fn is_incomparable<A: PartialOrd>(x: &A) -> bool {
    x.partial_cmp(x).is_none()
}

/// Folds all layers of `stacked` into one using `replace(candidate, current)` to decide
/// whether an entry of a later layer replaces the accumulated one.
/// Incomparable values always win, independent of the layer they appear in.
fn reduce_layers<A, S, F>(stacked: &ArrayBase<S, Ix2>, replace: F) -> Result<Array2<A>>
where
    A: Clone + PartialOrd,
    S: Data<Elem = A>,
    F: Fn(&A, &A) -> bool,
{
    raise_error_unless!(
        stacked.nrows() > 0,
        shape_error!("cannot reduce a multigraph without edge types")
    );
    let n = num_nodes_from_entries(stacked.ncols())?;

    let mut flat = stacked.row(0).to_vec();
    for layer in stacked.outer_iter().skip(1) {
        for (current, candidate) in flat.iter_mut().zip(layer.iter()) {
            if is_incomparable(current) {
                continue;
            }
            if is_incomparable(candidate) || replace(candidate, current) {
                *current = candidate.clone();
            }
        }
    }

    Ok(Array2::from_shape_vec((n, n), flat)?)
}

/// Merges all edge types into a single graph: entry `(u, v)` is the maximum of entry `(u, v)`
/// over all layers. For binary graphs, this is an edge if *any* layer has the edge.
///
/// Fails with [`MultigraphError::Shape`] if `stacked` has no rows or its number of columns is
/// not a perfect square. If any layer holds an incomparable entry (eg. `NaN`) at `(u, v)`, the
/// result holds it as well.
pub fn union_reduce<A, S>(stacked: &ArrayBase<S, Ix2>) -> Result<Array2<A>>
where
    A: Clone + PartialOrd,
    S: Data<Elem = A>,
{
    reduce_layers(stacked, |candidate, current| candidate > current)
}

/// Keeps only common edges: entry `(u, v)` is the minimum of entry `(u, v)` over all layers.
/// For binary graphs, this is an edge if *all* layers have the edge.
///
/// Same shape contract as [`union_reduce`].
pub fn intersection_reduce<A, S>(stacked: &ArrayBase<S, Ix2>) -> Result<Array2<A>>
where
    A: Clone + PartialOrd,
    S: Data<Elem = A>,
{
    reduce_layers(stacked, |candidate, current| candidate < current)
}

/// Computes the weighted linear combination `weights · stacked` of all layers and returns it
/// as an `N×N` graph.
///
/// Fails with [`MultigraphError::DimensionMismatch`] if there is not exactly one weight per
/// edge type and with [`MultigraphError::Shape`] if the number of columns is not a perfect square.
pub fn weighted_combine<A, S, W>(
    stacked: &ArrayBase<S, Ix2>,
    weights: &ArrayBase<W, Ix1>,
) -> Result<Array2<A>>
where
    A: LinalgScalar,
    S: Data<Elem = A>,
    W: Data<Elem = A>,
{
    raise_error_unless!(
        weights.len() == stacked.nrows(),
        MultigraphError::DimensionMismatch {
            expected: stacked.nrows(),
            found: weights.len(),
        }
    );
    let n = num_nodes_from_entries(stacked.ncols())?;

    Ok(weights.dot(stacked).into_shape_with_order((n, n))?)
}

/// Order-based reductions of a multigraph in stacked form `(K, N²)` into a single `N×N` graph
pub trait MultigraphReduce<A> {
    /// See [`union_reduce`]
    fn union_reduce(&self) -> Result<Array2<A>>;

    /// See [`intersection_reduce`]
    fn intersection_reduce(&self) -> Result<Array2<A>>;
}

/// Linear combination of the layers of a multigraph in stacked form `(K, N²)`.
/// Only requires [`LinalgScalar`], so unordered element types (eg. complex numbers) qualify.
pub trait MultigraphCombine<A> {
    /// See [`weighted_combine`]
    fn weighted_combine(&self, weights: &[A]) -> Result<Array2<A>>;
}

impl<A, S> MultigraphReduce<A> for ArrayBase<S, Ix2>
where
    A: Clone + PartialOrd,
    S: Data<Elem = A>,
{
    fn union_reduce(&self) -> Result<Array2<A>> {
        union_reduce(self)
    }

    fn intersection_reduce(&self) -> Result<Array2<A>> {
        intersection_reduce(self)
    }
}

impl<A, S> MultigraphCombine<A> for ArrayBase<S, Ix2>
where
    A: LinalgScalar,
    S: Data<Elem = A>,
{
    fn weighted_combine(&self, weights: &[A]) -> Result<Array2<A>> {
        weighted_combine(self, &ArrayView1::from(weights))
    }
}
