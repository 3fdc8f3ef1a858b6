//! Conversion of a flat edge sequence into `(lower, upper)` bin pairs

use crate::types::BinEdges;
use gof_core::{Error, Result};

/// Pair adjacent edges into bins
///
/// `M` strictly increasing edges become `M - 1` pairs where pair `i` is
/// `(edges[i], edges[i + 1])`.
///
/// # Errors
///
/// [`Error::InvalidEdges`] when fewer than two edges are given, and
/// [`Error::InvalidInput`] when the edges are not strictly increasing.
pub fn pair_edges(edges: &[f64]) -> Result<Vec<BinEdges>> {
    if edges.len() < 2 {
        return Err(Error::InvalidEdges { count: edges.len() });
    }

    edges
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            if w[0] < w[1] {
                Ok((w[0], w[1]))
            } else {
                Err(Error::InvalidInput(format!(
                    "edges must be strictly increasing: edge {} ({}) >= edge {} ({})",
                    i,
                    w[0],
                    i + 1,
                    w[1]
                )))
            }
        })
        .collect()
}
