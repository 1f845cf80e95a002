//! Pairwise comparison matrices on Saaty's 1–9 reciprocal scale.

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::fuzzy::Tfn;

/// Tolerance for the diagonal and reciprocal checks. Loose enough to
/// accept hand-rounded reciprocals such as 0.333 for 1/3.
const RECIPROCAL_TOL: f64 = 1e-2;

/// A crisp pairwise comparison matrix over named items.
///
/// Entry `(i, j)` is the judged importance of item `i` relative to item
/// `j`. The diagonal must be 1 and `a[j][i] · a[i][j]` must equal 1
/// within tolerance; both are enforced at construction.
#[derive(Debug, Clone)]
pub struct PairwiseMatrix {
    labels: Vec<String>,
    values: Array2<f64>,
}

impl PairwiseMatrix {
    pub fn from_rows(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = square_order(labels.len(), &rows)?;
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let values = Array2::from_shape_vec((n, n), flat)
            .map_err(|e| Error::shape(e.to_string()))?;

        for i in 0..n {
            if (values[(i, i)] - 1.0).abs() > RECIPROCAL_TOL {
                return Err(Error::domain(format!(
                    "comparison matrix diagonal entry ({i}, {i}) must be 1, got {}",
                    values[(i, i)]
                )));
            }
            for j in 0..n {
                let v = values[(i, j)];
                if !v.is_finite() || v <= 0.0 {
                    return Err(Error::domain(format!(
                        "comparison matrix entry ({i}, {j}) must be positive, got {v}"
                    )));
                }
                if j > i && (values[(i, j)] * values[(j, i)] - 1.0).abs() > RECIPROCAL_TOL {
                    return Err(Error::domain(format!(
                        "entries ({i}, {j}) and ({j}, {i}) are not reciprocal"
                    )));
                }
            }
        }

        Ok(Self { labels, values })
    }

    #[inline] pub fn order(&self) -> usize { self.values.nrows() }
    #[inline] pub fn labels(&self) -> &[String] { &self.labels }
    #[inline] pub(crate) fn values(&self) -> &Array2<f64> { &self.values }
}

/// A pairwise comparison matrix of TFN judgments.
///
/// The diagonal must be `(1, 1, 1)`. Reciprocity is checked on the
/// modal component only; TFN reciprocals are approximate by nature.
#[derive(Debug, Clone)]
pub struct FuzzyPairwiseMatrix {
    labels: Vec<String>,
    values: Array2<Tfn>,
}

impl FuzzyPairwiseMatrix {
    pub fn from_rows(labels: Vec<String>, rows: Vec<Vec<Tfn>>) -> Result<Self> {
        let n = square_order(labels.len(), &rows)?;
        let flat: Vec<Tfn> = rows.into_iter().flatten().collect();
        let values = Array2::from_shape_vec((n, n), flat)
            .map_err(|e| Error::shape(e.to_string()))?;

        for i in 0..n {
            let diag = values[(i, i)];
            if (diag.l() - 1.0).abs() > RECIPROCAL_TOL
                || (diag.m() - 1.0).abs() > RECIPROCAL_TOL
                || (diag.u() - 1.0).abs() > RECIPROCAL_TOL
            {
                return Err(Error::domain(format!(
                    "fuzzy comparison matrix diagonal entry ({i}, {i}) must be (1, 1, 1)"
                )));
            }
            for j in 0..n {
                if values[(i, j)].l() <= 0.0 {
                    return Err(Error::domain(format!(
                        "fuzzy comparison matrix entry ({i}, {j}) must have a positive support"
                    )));
                }
                if j > i && (values[(i, j)].m() * values[(j, i)].m() - 1.0).abs() > RECIPROCAL_TOL {
                    return Err(Error::domain(format!(
                        "modal values of entries ({i}, {j}) and ({j}, {i}) are not reciprocal"
                    )));
                }
            }
        }

        Ok(Self { labels, values })
    }

    /// Aggregate several judges' matrices into one by the componentwise
    /// geometric mean of each cell (Buckley's method, step 1). All
    /// matrices must share the same labels.
    pub fn aggregate_judges(judgments: &[FuzzyPairwiseMatrix]) -> Result<FuzzyPairwiseMatrix> {
        let first = judgments
            .first()
            .ok_or_else(|| Error::shape("no judge matrices to aggregate"))?;
        for other in &judgments[1..] {
            if other.labels != first.labels {
                return Err(Error::shape("judge matrices must share the same items"));
            }
        }
        let n = first.order();
        let mut values = first.values.clone();
        for i in 0..n {
            for j in 0..n {
                let cells: Vec<Tfn> = judgments.iter().map(|m| m.values[(i, j)]).collect();
                values[(i, j)] = Tfn::geometric_mean(&cells)?;
            }
        }
        Ok(FuzzyPairwiseMatrix { labels: first.labels.clone(), values })
    }

    /// Collapse every cell to its centroid, preserving labels. Used to
    /// run the crisp consistency check on a fuzzy judgment set.
    pub(crate) fn defuzzify(&self) -> Array2<f64> {
        self.values.map(Tfn::defuzzify)
    }

    #[inline] pub fn order(&self) -> usize { self.values.nrows() }
    #[inline] pub fn labels(&self) -> &[String] { &self.labels }
    #[inline] pub(crate) fn values(&self) -> &Array2<Tfn> { &self.values }
}

/// Check that `rows` forms an `n × n` table matching the label count.
fn square_order<T>(num_labels: usize, rows: &[Vec<T>]) -> Result<usize> {
    if num_labels == 0 {
        return Err(Error::shape("comparison matrix needs at least one item"));
    }
    if rows.len() != num_labels {
        return Err(Error::shape(format!(
            "expected {} comparison rows, got {}", num_labels, rows.len()
        )));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != num_labels {
            return Err(Error::shape(format!(
                "comparison row {} has {} entries, expected {}", i, row.len(), num_labels
            )));
        }
    }
    Ok(num_labels)
}
