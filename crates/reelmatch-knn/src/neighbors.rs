//! Brute-force cosine nearest-neighbour search.
//!
//! Every query is compared against every fitted row. For catalogs of a few
//! hundred thousand short genre vectors this is fast enough and exact.

use reelmatch_core::{Error, Result};

/// One search hit: a fitted row and its cosine distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the row in the fitted data.
    pub index: usize,
    /// `1 - cosine_similarity`; 0 is identical direction.
    pub distance: f64,
}

impl Neighbor {
    /// Cosine similarity, `1 - distance`.
    pub fn similarity(&self) -> f64 {
        1.0 - self.distance
    }
}

/// Compute cosine similarity between two vectors.
///
/// Zero-length or mismatched inputs, and zero vectors, have similarity 0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Exact k-nearest-neighbour index under cosine distance.
#[derive(Debug, Clone, Default)]
pub struct CosineNeighbors {
    rows: Vec<Vec<f64>>,
    dim: usize,
}

impl CosineNeighbors {
    /// Stores the rows to search. All rows must have the same width.
    pub fn fit(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
            return Err(Error::validation_field(
                "rows",
                format!("row {i} has width {}, expected {dim}", row.len()),
            ));
        }
        log::debug!("Fitted cosine index: {} rows x {} dims", rows.len(), dim);
        Ok(Self { rows, dim })
    }

    /// Returns up to `k` rows closest to `query`, nearest first.
    ///
    /// Equal distances are ordered by row index. `k` larger than the
    /// number of rows returns every row.
    pub fn kneighbors(&self, query: &[f64], k: usize) -> Result<Vec<Neighbor>> {
        if !self.rows.is_empty() && query.len() != self.dim {
            return Err(Error::validation_field(
                "query",
                format!("query has width {}, expected {}", query.len(), self.dim),
            ));
        }
        if k > self.rows.len() {
            log::debug!(
                "Requested {k} neighbours from {} rows; returning all",
                self.rows.len()
            );
        }

        let mut hits: Vec<Neighbor> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| Neighbor {
                index,
                distance: 1.0 - cosine_similarity(query, row),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.index.cmp(&b.index))
        });
        hits.truncate(k);
        Ok(hits)
    }

    /// Number of fitted rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether nothing was fitted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the fitted rows.
    pub fn dim(&self) -> usize {
        self.dim
    }
}
