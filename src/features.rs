/*!
# Feature Extraction

A *feature* is any function that maps a single `N×N` graph to a value, for example its number
of edges. Features are plain Rust callables `Fn(ArrayView2<'_, A>) -> R`: closures, function
items and `&dyn Fn` all work.

This module applies such features to every edge-type layer of a stringed multigraph
([`apply_feature_per_layer`]) and aggregates them into a single value
([`aggregate_feature_sum`]). Feature values only need to support `+`, so scalars as well as
arrays (eg. `Array2<f64>`) can be aggregated. For repeated evaluations with the same
configuration, [`FeatureSum`] bundles the number of edge types with a list of features.

```
use ndarray::{Array1, ArrayView2};
use umultigraphs::prelude::*;

// two layers over two nodes: 2 edges in the first, 1 edge in the second
let stringed = Array1::from(vec![1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);

assert_eq!(apply_feature_per_layer(&stringed, 2, count_edges).unwrap(), vec![2, 1]);
assert_eq!(aggregate_feature_sum(&stringed, 2, [count_edges]).unwrap(), 3);

let total = FeatureSum::new(2)
    .feature(count_edges)
    .feature(|g: ArrayView2<'_, f64>| g.nrows())
    .evaluate(&stringed)
    .unwrap();
assert_eq!(total, 3 + 2 * 2);
```
*/

use std::{fmt, ops::Add};

use ndarray::{ArrayBase, ArrayView2, Data, Ix1};
use num::Zero;

use crate::{error::*, node::*, transcode::*};

/// Decodes `stringed` into its `num_edge_types` layers and applies `feature` to each of them.
/// The results are returned in layer order.
///
/// Fails only if decoding fails (see [`stringed_to_graph_list`]).
pub fn apply_feature_per_layer<A, S, F, R>(
    stringed: &ArrayBase<S, Ix1>,
    num_edge_types: NumEdgeTypes,
    mut feature: F,
) -> Result<Vec<R>>
where
    A: Clone,
    S: Data<Elem = A>,
    F: FnMut(ArrayView2<'_, A>) -> R,
{
    Ok(stringed_to_graph_list(stringed, num_edge_types)?
        .iter()
        .map(|graph| feature(graph.view()))
        .collect())
}

/// For every feature, sums its values over all layers of `stringed` and returns the total over
/// all features.
///
/// The stringed form is decoded only once, regardless of the number of features. Fails with
/// [`MultigraphError::Shape`] if decoding fails or if `features` is empty.
pub fn aggregate_feature_sum<A, S, I, F, R>(
    stringed: &ArrayBase<S, Ix1>,
    num_edge_types: NumEdgeTypes,
    features: I,
) -> Result<R>
where
    A: Clone,
    S: Data<Elem = A>,
    I: IntoIterator<Item = F>,
    F: Fn(ArrayView2<'_, A>) -> R,
    R: Add<Output = R>,
{
    let layers = stringed_to_graph_list(stringed, num_edge_types)?;

    // decoding guarantees at least one layer, so every feature yields a sum
    features
        .into_iter()
        .filter_map(|feature| {
            layers
                .iter()
                .map(|graph| feature(graph.view()))
                .reduce(|sum, value| sum + value)
        })
        .reduce(|total, sum| total + sum)
        .ok_or_else(|| rejected(shape_error!("cannot aggregate an empty list of features")))
}

/// Number of non-zero entries of a graph
pub fn count_edges<A>(graph: ArrayView2<'_, A>) -> usize
where
    A: Zero,
{
    graph.iter().filter(|x| !x.is_zero()).count()
}

/// Sum of all edge weights of a graph
pub fn total_weight<A>(graph: ArrayView2<'_, A>) -> A
where
    A: Clone + Zero,
{
    graph.sum()
}

/// Largest number of non-zero entries in a single row, ie. the maximum out-degree
pub fn max_out_degree<A>(graph: ArrayView2<'_, A>) -> usize
where
    A: Zero,
{
    graph
        .outer_iter()
        .map(|row| row.iter().filter(|x| !x.is_zero()).count())
        .max()
        .unwrap_or(0)
}

type BoxedFeature<'f, A, R> = Box<dyn Fn(ArrayView2<'_, A>) -> R + Send + Sync + 'f>;

/// Sums a configurable set of features over all layers of stringed multigraphs with a fixed
/// number of edge types. See [`aggregate_feature_sum`].
pub struct FeatureSum<'f, A, R> {
    num_edge_types: NumEdgeTypes,
    features: Vec<BoxedFeature<'f, A, R>>,
}

impl<'f, A, R> FeatureSum<'f, A, R> {
    /// Creates a new aggregator without any features
    pub fn new(num_edge_types: NumEdgeTypes) -> Self {
        Self {
            num_edge_types,
            features: Vec::new(),
        }
    }

    /// Adds a feature
    pub fn feature<F>(mut self, feature: F) -> Self
    where
        F: Fn(ArrayView2<'_, A>) -> R + Send + Sync + 'f,
    {
        self.features.push(Box::new(feature));
        self
    }

    /// Returns the number of edge types expected in every stringed multigraph
    pub fn num_edge_types(&self) -> NumEdgeTypes {
        self.num_edge_types
    }

    /// Returns the number of configured features
    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    /// Returns the value of every feature on every layer: entry `[f][k]` is feature `f`
    /// applied to layer `k`
    pub fn per_layer<S>(&self, stringed: &ArrayBase<S, Ix1>) -> Result<Vec<Vec<R>>>
    where
        A: Clone,
        S: Data<Elem = A>,
    {
        let layers = stringed_to_graph_list(stringed, self.num_edge_types)?;

        Ok(self
            .features
            .iter()
            .map(|feature| layers.iter().map(|graph| feature(graph.view())).collect())
            .collect())
    }

    /// Sums all features over all layers of `stringed`.
    /// Fails if no feature was added.
    pub fn evaluate<S>(&self, stringed: &ArrayBase<S, Ix1>) -> Result<R>
    where
        A: Clone,
        S: Data<Elem = A>,
        R: Add<Output = R>,
    {
        aggregate_feature_sum(stringed, self.num_edge_types, self.features.iter())
    }
}

impl<A, R> fmt::Debug for FeatureSum<'_, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureSum")
            .field("num_edge_types", &self.num_edge_types)
            .field("num_features", &self.features.len())
            .finish()
    }
}
