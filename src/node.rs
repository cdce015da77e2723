/*!
# Node & Edge-Type Counts

A multigraph is described by two numbers: the number of nodes `N` shared by all layers and
the number of edge types `K`, i.e. the number of layers. Both are plain `usize`s as they are
used directly as array dimensions.
*/

use crate::error::*;

/// Number of nodes `N` in every layer of a multigraph
pub type NumNodes = usize;

/// Number of edge types `K` (ie. layers) of a multigraph
pub type NumEdgeTypes = usize;

/// Returns `Some(n)` if `n * n == square` and `None` otherwise
///
/// ```
/// use umultigraphs::node::exact_sqrt;
///
/// assert_eq!(exact_sqrt(9), Some(3));
/// assert_eq!(exact_sqrt(6), None);
/// ```
pub fn exact_sqrt(square: usize) -> Option<NumNodes> {
    let n = square.isqrt();
    (n * n == square).then_some(n)
}

/// Recovers the number of nodes from the number of entries of one flattened layer.
/// Fails if `entries` is not a perfect square instead of silently truncating.
pub(crate) fn num_nodes_from_entries(entries: usize) -> Result<NumNodes> {
    exact_sqrt(entries).ok_or_else(|| {
        rejected(shape_error!(
            "{entries} entries per layer is not a perfect square"
        ))
    })
}
