use ndarray::Array2;

use crate::error::{Error, Result};
use crate::fuzzy::Tfn;
use crate::types::Criterion;

/// A crisp decision matrix: alternatives × criteria.
///
/// Rectangularity and finiteness are enforced once at construction;
/// the engines assume a valid matrix and never re-validate.
#[derive(Debug, Clone)]
pub struct DecisionMatrix {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    values: Array2<f64>,
}

impl DecisionMatrix {
    /// Build a decision matrix from one row of raw scores per alternative.
    pub fn from_rows(
        alternatives: Vec<String>,
        criteria: Vec<Criterion>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self> {
        let (n, m) = validate_table(alternatives.len(), criteria.len(), &rows)?;
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        if flat.iter().any(|v| !v.is_finite()) {
            return Err(Error::domain("decision matrix cells must be finite"));
        }
        let values = Array2::from_shape_vec((n, m), flat)
            .map_err(|e| Error::shape(e.to_string()))?;
        Ok(Self { alternatives, criteria, values })
    }

    #[inline] pub fn num_alternatives(&self) -> usize { self.values.nrows() }
    #[inline] pub fn num_criteria(&self) -> usize { self.values.ncols() }
    #[inline] pub fn alternatives(&self) -> &[String] { &self.alternatives }
    #[inline] pub fn criteria(&self) -> &[Criterion] { &self.criteria }
    #[inline] pub(crate) fn values(&self) -> &Array2<f64> { &self.values }
}

/// A decision matrix of triangular fuzzy scores.
#[derive(Debug, Clone)]
pub struct FuzzyDecisionMatrix {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    values: Array2<Tfn>,
}

impl FuzzyDecisionMatrix {
    /// Build a fuzzy decision matrix from one row of TFN scores per
    /// alternative.
    pub fn from_rows(
        alternatives: Vec<String>,
        criteria: Vec<Criterion>,
        rows: Vec<Vec<Tfn>>,
    ) -> Result<Self> {
        let (n, m) = validate_table(alternatives.len(), criteria.len(), &rows)?;
        let flat: Vec<Tfn> = rows.into_iter().flatten().collect();
        let values = Array2::from_shape_vec((n, m), flat)
            .map_err(|e| Error::shape(e.to_string()))?;
        Ok(Self { alternatives, criteria, values })
    }

    /// Aggregate several decision makers' matrices into one by
    /// per-component averaging of each cell. All matrices must share the
    /// same alternatives and criteria.
    pub fn aggregate(judgments: &[FuzzyDecisionMatrix]) -> Result<FuzzyDecisionMatrix> {
        let first = judgments
            .first()
            .ok_or_else(|| Error::shape("no decision-maker matrices to aggregate"))?;
        for other in &judgments[1..] {
            if other.alternatives != first.alternatives || other.criteria != first.criteria {
                return Err(Error::shape(
                    "decision-maker matrices must share alternatives and criteria",
                ));
            }
        }
        let values = Array2::from_shape_fn(first.values.raw_dim(), |(i, j)| {
            let cells: Vec<Tfn> = judgments.iter().map(|dm| dm.values[(i, j)]).collect();
            Tfn::component_mean(&cells).unwrap_or(Tfn::crisp(0.0))
        });
        Ok(FuzzyDecisionMatrix {
            alternatives: first.alternatives.clone(),
            criteria: first.criteria.clone(),
            values,
        })
    }

    #[inline] pub fn num_alternatives(&self) -> usize { self.values.nrows() }
    #[inline] pub fn num_criteria(&self) -> usize { self.values.ncols() }
    #[inline] pub fn alternatives(&self) -> &[String] { &self.alternatives }
    #[inline] pub fn criteria(&self) -> &[Criterion] { &self.criteria }
    #[inline] pub(crate) fn values(&self) -> &Array2<Tfn> { &self.values }
}

/// Check that `rows` forms a rectangular table matching the declared
/// alternative and criterion counts. Returns `(rows, cols)`.
fn validate_table<T>(num_alts: usize, num_crits: usize, rows: &[Vec<T>]) -> Result<(usize, usize)> {
    if num_alts == 0 {
        return Err(Error::shape("decision matrix needs at least one alternative"));
    }
    if num_crits == 0 {
        return Err(Error::shape("decision matrix needs at least one criterion"));
    }
    if rows.len() != num_alts {
        return Err(Error::shape(format!(
            "expected {} score rows, got {}", num_alts, rows.len()
        )));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != num_crits {
            return Err(Error::shape(format!(
                "row {} has {} scores, expected {}", i, row.len(), num_crits
            )));
        }
    }
    Ok((num_alts, num_crits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Criterion;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = DecisionMatrix::from_rows(
            names(&["A", "B"]),
            vec![Criterion::benefit("c1"), Criterion::benefit("c2")],
            vec![vec![1.0, 2.0], vec![3.0]],
        );
        assert!(matches!(result, Err(Error::Shape(_))));
    }

    #[test]
    fn rejects_non_finite_cells() {
        let result = DecisionMatrix::from_rows(
            names(&["A"]),
            vec![Criterion::benefit("c1")],
            vec![vec![f64::NAN]],
        );
        assert!(matches!(result, Err(Error::Domain(_))));
    }

    #[test]
    fn fuzzy_aggregation_averages_components() {
        let criteria = vec![Criterion::benefit("c1")];
        let dm1 = FuzzyDecisionMatrix::from_rows(
            names(&["A"]),
            criteria.clone(),
            vec![vec![Tfn::new(1.0, 2.0, 3.0).unwrap()]],
        )
        .unwrap();
        let dm2 = FuzzyDecisionMatrix::from_rows(
            names(&["A"]),
            criteria,
            vec![vec![Tfn::new(3.0, 4.0, 5.0).unwrap()]],
        )
        .unwrap();

        let combined = FuzzyDecisionMatrix::aggregate(&[dm1, dm2]).unwrap();
        let cell = combined.values()[(0, 0)];
        assert_eq!((cell.l(), cell.m(), cell.u()), (2.0, 3.0, 4.0));
    }

    #[test]
    fn fuzzy_aggregation_rejects_mismatched_shapes() {
        let dm1 = FuzzyDecisionMatrix::from_rows(
            names(&["A"]),
            vec![Criterion::benefit("c1")],
            vec![vec![Tfn::crisp(1.0)]],
        )
        .unwrap();
        let dm2 = FuzzyDecisionMatrix::from_rows(
            names(&["B"]),
            vec![Criterion::benefit("c1")],
            vec![vec![Tfn::crisp(1.0)]],
        )
        .unwrap();
        assert!(matches!(
            FuzzyDecisionMatrix::aggregate(&[dm1, dm2]),
            Err(Error::Shape(_))
        ));
    }
}
