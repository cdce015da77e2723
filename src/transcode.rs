/*!
# Transcoding

Conversions between the three representations of a multigraph with `K` edge types over `N`
nodes:

- **stacked**: a 2-D array of shape `(K, N²)` where row `k` is the row-major flattened
  adjacency matrix of edge type `k`,
- **stringed**: a 1-D array of length `K·N²` obtained by concatenating the rows of the
  stacked form in edge-type order,
- **graph list**: `K` separate `N×N` adjacency matrices.

All conversions copy into freshly allocated arrays and never alter their input.

```
use ndarray::{array, Array1};
use umultigraphs::prelude::*;

let stacked = array![[1, 0, 0, 1], [0, 1, 1, 0]];
let stringed = stack_to_stringed(&stacked).unwrap();
assert_eq!(stringed, Array1::from(vec![1, 0, 0, 1, 0, 1, 1, 0]));

let graphs = stringed_to_graph_list(&stringed, 2).unwrap();
assert_eq!(graphs[1], array![[0, 1], [1, 0]]);
assert_eq!(compact_from_list(&graphs).unwrap(), stacked);
```
*/

use itertools::Itertools;
use ndarray::{Array1, Array2, ArrayBase, Data, Dimension, Ix1, Ix2};

use crate::{error::*, node::*};

/// Concatenates the rows of a stacked multigraph into its stringed form.
///
/// Accepts arrays of any dimensionality but fails with [`MultigraphError::Shape`] if `stacked`
/// is not 2-dimensional.
pub fn stack_to_stringed<A, S, D>(stacked: &ArrayBase<S, D>) -> Result<Array1<A>>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    raise_error_unless!(
        stacked.ndim() == 2,
        shape_error!(
            "a stacked multigraph must be 2-dimensional but has shape {:?}",
            stacked.shape()
        )
    );

    // `iter` always walks in logical row-major order, regardless of memory layout
    Ok(stacked.iter().cloned().collect())
}

/// Splits a stringed multigraph into `num_edge_types` contiguous rows of equal length.
///
/// Fails with [`MultigraphError::Shape`] if `num_edge_types == 0` or the length of `stringed`
/// is not divisible by `num_edge_types`.
pub fn stringed_to_stacked<A, S>(
    stringed: &ArrayBase<S, Ix1>,
    num_edge_types: NumEdgeTypes,
) -> Result<Array2<A>>
where
    A: Clone,
    S: Data<Elem = A>,
{
    let len = stringed.len();
    raise_error_unless!(
        num_edge_types > 0,
        shape_error!("a multigraph requires at least one edge type")
    );
    raise_error_unless!(
        len % num_edge_types == 0,
        shape_error!("length {len} is not divisible by {num_edge_types} edge types")
    );

    Ok(Array2::from_shape_vec(
        (num_edge_types, len / num_edge_types),
        stringed.iter().cloned().collect_vec(),
    )?)
}

/// Decodes a stringed multigraph into one `N×N` adjacency matrix per edge type (in order).
///
/// Fails with [`MultigraphError::Shape`] if the stringed form cannot be split into
/// `num_edge_types` rows or if the length of each row is not a perfect square.
pub fn stringed_to_graph_list<A, S>(
    stringed: &ArrayBase<S, Ix1>,
    num_edge_types: NumEdgeTypes,
) -> Result<Vec<Array2<A>>>
where
    A: Clone,
    S: Data<Elem = A>,
{
    let stacked = stringed_to_stacked(stringed, num_edge_types)?;
    let n = num_nodes_from_entries(stacked.ncols())?;

    tracing::trace!(num_edge_types, num_nodes = n, "decoding stringed multigraph");

    layers_of(&stacked, n)
}

/// Reshapes every row of `stacked` into an `n×n` graph
fn layers_of<A, S>(stacked: &ArrayBase<S, Ix2>, n: NumNodes) -> Result<Vec<Array2<A>>>
where
    A: Clone,
    S: Data<Elem = A>,
{
    stacked
        .outer_iter()
        .map(|row| Ok(Array2::from_shape_vec((n, n), row.to_vec())?))
        .collect()
}

/// Flattens a list of `N×N` adjacency matrices into the stacked form `(K, N²)`, keeping the
/// order of `graphs`.
///
/// Fails with [`MultigraphError::Shape`] if `graphs` is empty, the first graph is not square,
/// or any graph has a shape different from the first.
pub fn compact_from_list<A, S>(graphs: &[ArrayBase<S, Ix2>]) -> Result<Array2<A>>
where
    A: Clone,
    S: Data<Elem = A>,
{
    raise_error_unless!(
        !graphs.is_empty(),
        shape_error!("cannot compact an empty list of graphs")
    );

    let n = graphs[0].nrows();
    for (k, graph) in graphs.iter().enumerate() {
        raise_error_unless!(
            graph.dim() == (n, n),
            shape_error!(
                "graph {k} has shape {:?} but expected ({n}, {n})",
                graph.dim()
            )
        );
    }

    Ok(Array2::from_shape_vec(
        (graphs.len(), n * n),
        graphs
            .iter()
            .flat_map(|graph| graph.iter().cloned())
            .collect_vec(),
    )?)
}

/// Transcoding and shape queries on a multigraph in stacked form `(K, N²)`
pub trait StackedMultigraph<A> {
    /// Returns the number of edge types `K` (ie. rows)
    fn num_edge_types(&self) -> NumEdgeTypes;

    /// Returns the number of nodes `N` per layer.
    /// Fails if the number of columns is not a perfect square.
    fn num_nodes(&self) -> Result<NumNodes>;

    /// Returns the stringed form of the multigraph.
    /// Infallible as the stacked form is guaranteed to be 2-dimensional.
    fn to_stringed(&self) -> Array1<A>;

    /// Returns one `N×N` adjacency matrix per edge type
    fn to_graph_list(&self) -> Result<Vec<Array2<A>>>;
}

impl<A, S> StackedMultigraph<A> for ArrayBase<S, Ix2>
where
    A: Clone,
    S: Data<Elem = A>,
{
    fn num_edge_types(&self) -> NumEdgeTypes {
        self.nrows()
    }

    fn num_nodes(&self) -> Result<NumNodes> {
        num_nodes_from_entries(self.ncols())
    }

    fn to_stringed(&self) -> Array1<A> {
        self.iter().cloned().collect()
    }

    fn to_graph_list(&self) -> Result<Vec<Array2<A>>> {
        layers_of(self, self.num_nodes()?)
    }
}

/// Decoding of a multigraph in stringed form `K·N²`
pub trait StringedMultigraph<A> {
    /// See [`stringed_to_stacked`]
    fn to_stacked(&self, num_edge_types: NumEdgeTypes) -> Result<Array2<A>>;

    /// See [`stringed_to_graph_list`]
    fn to_graph_list(&self, num_edge_types: NumEdgeTypes) -> Result<Vec<Array2<A>>>;
}

impl<A, S> StringedMultigraph<A> for ArrayBase<S, Ix1>
where
    A: Clone,
    S: Data<Elem = A>,
{
    fn to_stacked(&self, num_edge_types: NumEdgeTypes) -> Result<Array2<A>> {
        stringed_to_stacked(self, num_edge_types)
    }

    fn to_graph_list(&self, num_edge_types: NumEdgeTypes) -> Result<Vec<Array2<A>>> {
        stringed_to_graph_list(self, num_edge_types)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::random_multigraph;
    use ndarray::{Array3, ArrayView2, array};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn stack_to_stringed_concatenates_rows() {
        let stacked = array![[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]];
        assert_eq!(
            stack_to_stringed(&stacked).unwrap().to_vec(),
            (1..=12).collect_vec()
        );
        assert_eq!(stacked.to_stringed(), stack_to_stringed(&stacked).unwrap());
    }

    #[test]
    fn stack_to_stringed_ignores_memory_layout() {
        let stacked = array![[1, 3], [2, 4]];
        let transposed = stacked.t();
        assert_eq!(
            stack_to_stringed(&transposed).unwrap().to_vec(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn stack_to_stringed_rejects_wrong_dimensionality() {
        let flat = Array1::<u8>::zeros(4);
        assert!(stack_to_stringed(&flat).unwrap_err().is_shape_error());

        let cube = Array3::<u8>::zeros((2, 2, 2));
        assert!(stack_to_stringed(&cube).unwrap_err().is_shape_error());

        let dynamic = Array2::<u8>::zeros((2, 4)).into_dyn();
        assert_eq!(stack_to_stringed(&dynamic).unwrap().len(), 8);
    }

    #[test]
    fn stringed_round_trip() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for k in 1..6 {
            for n in [1, 2, 5, 10] {
                let (stacked, _) = random_multigraph(rng, k, n, 0.3);
                let stringed = stack_to_stringed(&stacked).unwrap();

                assert_eq!(stringed.len(), k * n * n);
                assert_eq!(stringed_to_stacked(&stringed, k).unwrap(), stacked);
                assert_eq!(stringed.to_stacked(k).unwrap(), stacked);
            }
        }
    }

    #[test]
    fn stringed_to_stacked_splits_into_chunks() {
        let stringed = Array1::from(vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            stringed_to_stacked(&stringed, 3).unwrap(),
            array![[1, 2], [3, 4], [5, 6]]
        );
        assert_eq!(
            stringed_to_stacked(&stringed, 2).unwrap(),
            array![[1, 2, 3], [4, 5, 6]]
        );
    }

    #[test]
    fn stringed_to_stacked_rejects_invalid_edge_types() {
        let stringed = Array1::from(vec![1, 2, 3, 4, 5, 6]);
        assert!(stringed_to_stacked(&stringed, 4).unwrap_err().is_shape_error());
        assert!(stringed_to_stacked(&stringed, 0).unwrap_err().is_shape_error());
    }

    #[test]
    fn graph_list_matches_reference_layers() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for _ in 0..20 {
            let k = rng.random_range(1..5);
            let n = rng.random_range(1..12);
            let (stacked, layers) = random_multigraph(rng, k, n, 0.5);

            let graphs = stringed_to_graph_list(&stacked.to_stringed(), k).unwrap();
            assert_eq!(graphs, layers);
            assert!(graphs.iter().all(|g| g.dim() == (n, n)));
            assert_eq!(stacked.to_graph_list().unwrap(), layers);

            let concatenated = graphs.iter().flat_map(|g| g.iter().copied()).collect_vec();
            assert_eq!(concatenated, stacked.to_stringed().to_vec());
        }
    }

    #[test]
    fn graph_list_agrees_between_forms() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        let (stacked, layers) = random_multigraph(rng, 3, 6, 0.5);

        let from_stringed = stringed_to_graph_list(&stacked.to_stringed(), 3).unwrap();
        let from_stacked = stacked.to_graph_list().unwrap();
        let from_view = stacked.view().to_graph_list().unwrap();

        assert_eq!(from_stringed, layers);
        assert_eq!(from_stacked, layers);
        assert_eq!(from_view, layers);
    }

    #[test]
    fn graph_list_rejects_non_square_layers() {
        let stringed = Array1::from(vec![0u8; 6]);
        assert!(stringed_to_graph_list(&stringed, 1).unwrap_err().is_shape_error());
        assert!(stringed_to_graph_list(&stringed, 2).unwrap_err().is_shape_error());
        assert_eq!(stringed_to_graph_list(&Array1::from(vec![0u8; 8]), 2).unwrap().len(), 2);
    }

    #[test]
    fn compact_from_list_example() {
        let graphs = vec![array![[1, 0], [0, 1]], array![[0, 1], [1, 0]]];
        assert_eq!(
            compact_from_list(&graphs).unwrap(),
            array![[1, 0, 0, 1], [0, 1, 1, 0]]
        );
    }

    #[test]
    fn compact_from_list_accepts_views() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let (stacked, layers) = random_multigraph(rng, 4, 7, 0.2);

        let views: Vec<ArrayView2<f64>> = layers.iter().map(|g| g.view()).collect();
        assert_eq!(compact_from_list(&views).unwrap(), stacked);
    }

    #[test]
    fn compact_from_list_rejects_mismatching_shapes() {
        let empty: Vec<Array2<u8>> = Vec::new();
        assert!(compact_from_list(&empty).unwrap_err().is_shape_error());

        let non_square = vec![Array2::<u8>::zeros((2, 3))];
        assert!(compact_from_list(&non_square).unwrap_err().is_shape_error());

        let mixed = vec![Array2::<u8>::zeros((2, 2)), Array2::<u8>::zeros((3, 3))];
        assert!(compact_from_list(&mixed).unwrap_err().is_shape_error());
    }

    #[test]
    fn num_nodes_of_stacked() {
        let stacked = Array2::<u8>::zeros((3, 16));
        assert_eq!(stacked.num_edge_types(), 3);
        assert_eq!(stacked.num_nodes(), Ok(4));

        let stacked = Array2::<u8>::zeros((3, 15));
        assert!(stacked.num_nodes().unwrap_err().is_shape_error());
        assert!(stacked.to_graph_list().unwrap_err().is_shape_error());
    }
}
