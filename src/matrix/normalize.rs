//! Normalization strategies for decision matrices.
//!
//! Crisp matrices use vector normalization (cell / Euclidean column
//! norm), direction-agnostic: cost criteria are handled downstream by
//! swapping ideal/anti-ideal roles, not by inverting here. Fuzzy
//! matrices use linear-scale normalization (benefit: divide by the
//! column's largest upper bound; cost: scale the reciprocal by the
//! column's smallest lower bound).

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::fuzzy::Tfn;
use crate::types::{Criterion, Weights};

/// Vector normalization: each cell divided by the Euclidean norm of its
/// column. A zero-norm column (all zeros) is a domain error.
pub(crate) fn vector_normalize(values: &Array2<f64>) -> Result<Array2<f64>> {
    let mut normalized = values.clone();
    for (j, column) in values.columns().into_iter().enumerate() {
        let norm = column.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Err(Error::domain(format!(
                "column {j} has zero norm and cannot be normalized"
            )));
        }
        for i in 0..values.nrows() {
            normalized[(i, j)] /= norm;
        }
    }
    Ok(normalized)
}

/// Scale each column by its criterion weight.
pub(crate) fn apply_weights(values: &Array2<f64>, weights: &Weights) -> Result<Array2<f64>> {
    if weights.len() != values.ncols() {
        return Err(Error::shape(format!(
            "{} weights for {} criteria", weights.len(), values.ncols()
        )));
    }
    let mut weighted = values.clone();
    for (j, w) in weights.as_slice().iter().enumerate() {
        for i in 0..values.nrows() {
            weighted[(i, j)] *= w;
        }
    }
    Ok(weighted)
}

/// Linear-scale normalization for fuzzy matrices. Benefit columns map
/// each cell to `x / c_max`; cost columns to `a_min · x⁻¹`, which
/// requires every cost cell's support to avoid zero. Both scale
/// factors must be positive, since a non-positive scale would flip
/// the dominance order; an all-negative column is a domain error.
pub(crate) fn linear_scale_normalize(
    values: &Array2<Tfn>,
    criteria: &[Criterion],
) -> Result<Array2<Tfn>> {
    if criteria.len() != values.ncols() {
        return Err(Error::shape(format!(
            "{} criteria for {} matrix columns", criteria.len(), values.ncols()
        )));
    }
    let mut normalized = values.clone();
    for (j, criterion) in criteria.iter().enumerate() {
        let column = values.column(j);
        if criterion.direction.is_cost() {
            let a_min = column.iter().map(Tfn::l).fold(f64::INFINITY, f64::min);
            if a_min <= 0.0 {
                return Err(Error::domain(format!(
                    "cost column {j} requires positive scores to normalize"
                )));
            }
            for i in 0..values.nrows() {
                normalized[(i, j)] = values[(i, j)].recip()? * a_min;
            }
        } else {
            let c_max = column.iter().map(Tfn::u).fold(f64::NEG_INFINITY, f64::max);
            if c_max <= 0.0 {
                return Err(Error::domain(format!(
                    "benefit column {j} requires a positive scale to normalize"
                )));
            }
            for i in 0..values.nrows() {
                normalized[(i, j)] = values[(i, j)] * (1.0 / c_max);
            }
        }
    }
    Ok(normalized)
}

/// Scale each column of a fuzzy matrix by a TFN weight.
pub(crate) fn apply_fuzzy_weights(values: &Array2<Tfn>, weights: &[Tfn]) -> Result<Array2<Tfn>> {
    if weights.len() != values.ncols() {
        return Err(Error::shape(format!(
            "{} weights for {} criteria", weights.len(), values.ncols()
        )));
    }
    let mut weighted = values.clone();
    for (j, w) in weights.iter().enumerate() {
        for i in 0..values.nrows() {
            weighted[(i, j)] = values[(i, j)] * *w;
        }
    }
    Ok(weighted)
}
