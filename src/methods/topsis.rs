//! TOPSIS: ranking by closeness to the ideal solution.
//!
//! Cost criteria are handled by the ideal/anti-ideal role swap: the
//! positive ideal takes the column minimum on cost criteria and the
//! column maximum on benefit criteria (and vice versa for the negative
//! ideal), after direction-agnostic vector normalization.

use crate::error::Result;
use crate::matrix::{apply_weights, vector_normalize, DecisionMatrix};
use crate::types::{Ranking, Weights};

/// Rank alternatives by closeness coefficient `C = D⁻ / (D⁺ + D⁻)`.
///
/// An alternative equal to the ideal on every criterion scores exactly
/// 1; equal to the anti-ideal, exactly 0. The degenerate case
/// `D⁺ = D⁻ = 0` (ideal and anti-ideal coincide) scores 0.5 by
/// convention.
pub fn rank(matrix: &DecisionMatrix, weights: &Weights) -> Result<Ranking> {
    let normalized = vector_normalize(matrix.values())?;
    let weighted = apply_weights(&normalized, weights)?;

    let m = matrix.num_criteria();
    let mut ideal = vec![0.0f64; m];
    let mut anti_ideal = vec![0.0f64; m];
    for (j, criterion) in matrix.criteria().iter().enumerate() {
        let column = weighted.column(j);
        let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = column.iter().copied().fold(f64::INFINITY, f64::min);
        if criterion.direction.is_cost() {
            ideal[j] = min;
            anti_ideal[j] = max;
        } else {
            ideal[j] = max;
            anti_ideal[j] = min;
        }
    }

    let scored = matrix
        .alternatives()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let row = weighted.row(i);
            let d_plus = euclidean(row.iter().copied(), &ideal);
            let d_minus = euclidean(row.iter().copied(), &anti_ideal);
            let closeness = if d_plus + d_minus == 0.0 {
                0.5
            } else {
                d_minus / (d_plus + d_minus)
            };
            (name.clone(), closeness)
        })
        .collect();

    Ok(Ranking::from_scores(scored))
}

fn euclidean(row: impl Iterator<Item = f64>, reference: &[f64]) -> f64 {
    row.zip(reference.iter())
        .map(|(v, r)| (v - r) * (v - r))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Criterion;

    fn matrix(rows: Vec<Vec<f64>>, criteria: Vec<Criterion>) -> DecisionMatrix {
        let alternatives = (1..=rows.len()).map(|i| format!("A{i}")).collect();
        DecisionMatrix::from_rows(alternatives, criteria, rows).unwrap()
    }

    #[test]
    fn pinned_reference_scenario() {
        // 3 alternatives × 2 benefit criteria, equal weights. Closeness
        // hand-computed from vector normalization: column norms
        // sqrt(138) and sqrt(198).
        let m = matrix(
            vec![vec![7.0, 9.0], vec![8.0, 6.0], vec![5.0, 9.0]],
            vec![Criterion::benefit("c1"), Criterion::benefit("c2")],
        );
        let w = Weights::normalized(vec![0.5, 0.5]).unwrap();
        let ranking = rank(&m, &w).unwrap();

        let names: Vec<&str> = ranking.entries.iter().map(|e| e.alternative.as_str()).collect();
        assert_eq!(names, ["A1", "A2", "A3"]);
        assert!((ranking.entries[0].score - 0.7622).abs() < 1e-3);
        assert!((ranking.entries[1].score - 0.5450).abs() < 1e-3);
        assert!((ranking.entries[2].score - 0.4550).abs() < 1e-3);
    }

    #[test]
    fn closeness_bounds_and_extremes() {
        // A1 dominates on every criterion, A3 is dominated on every
        // criterion, so they coincide with the ideal and anti-ideal.
        let m = matrix(
            vec![vec![9.0, 1.0], vec![5.0, 5.0], vec![1.0, 9.0]],
            vec![Criterion::benefit("gain"), Criterion::cost("loss")],
        );
        let w = Weights::normalized(vec![0.6, 0.4]).unwrap();
        let ranking = rank(&m, &w).unwrap();

        for entry in &ranking.entries {
            assert!((0.0..=1.0).contains(&entry.score));
        }
        let by_name = |n: &str| ranking.entries.iter().find(|e| e.alternative == n).unwrap();
        assert!((by_name("A1").score - 1.0).abs() < 1e-12);
        assert!(by_name("A3").score.abs() < 1e-12);
    }

    #[test]
    fn cost_criterion_reverses_preference() {
        let criteria_benefit = vec![Criterion::benefit("c")];
        let criteria_cost = vec![Criterion::cost("c")];
        let rows = vec![vec![2.0], vec![8.0]];
        let w = Weights::uniform(1).unwrap();

        let benefit = rank(&matrix(rows.clone(), criteria_benefit), &w).unwrap();
        assert_eq!(benefit.best(), Some("A2"));

        let cost = rank(&matrix(rows, criteria_cost), &w).unwrap();
        assert_eq!(cost.best(), Some("A1"));
    }

    #[test]
    fn identical_alternatives_score_half() {
        // Ideal and anti-ideal coincide; the 0.5 convention applies.
        let m = matrix(
            vec![vec![4.0, 2.0], vec![4.0, 2.0]],
            vec![Criterion::benefit("c1"), Criterion::benefit("c2")],
        );
        let w = Weights::uniform(2).unwrap();
        let ranking = rank(&m, &w).unwrap();
        for entry in &ranking.entries {
            assert_eq!(entry.score, 0.5);
        }
    }

    #[test]
    fn zero_column_is_rejected() {
        let m = matrix(
            vec![vec![0.0, 1.0], vec![0.0, 2.0]],
            vec![Criterion::benefit("c1"), Criterion::benefit("c2")],
        );
        let w = Weights::uniform(2).unwrap();
        assert!(matches!(rank(&m, &w), Err(Error::Domain(_))));
    }
}
