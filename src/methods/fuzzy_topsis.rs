//! Fuzzy TOPSIS over triangular fuzzy scores.
//!
//! Same shape as crisp TOPSIS, with linear-scale normalization, TFN
//! ideal solutions (componentwise max/min per criterion), and the
//! vertex-distance metric. The closeness coefficient and the final
//! ranking are crisp.

use crate::error::Result;
use crate::fuzzy::Tfn;
use crate::matrix::{apply_fuzzy_weights, linear_scale_normalize, FuzzyDecisionMatrix};
use crate::types::Ranking;

/// Rank alternatives with fuzzy scores and TFN weights.
///
/// Crisp weights are expressed as degenerate TFNs (`Tfn::crisp`).
/// Multiple decision makers are aggregated beforehand with
/// [`FuzzyDecisionMatrix::aggregate`] and [`Tfn::component_mean`]; the
/// engine itself takes exactly one matrix.
pub fn rank(matrix: &FuzzyDecisionMatrix, weights: &[Tfn]) -> Result<Ranking> {
    let normalized = linear_scale_normalize(matrix.values(), matrix.criteria())?;
    let weighted = apply_fuzzy_weights(&normalized, weights)?;

    // Fuzzy positive/negative ideal solutions, per criterion.
    let m = matrix.num_criteria();
    let mut fpis = Vec::with_capacity(m);
    let mut fnis = Vec::with_capacity(m);
    for j in 0..m {
        let column = weighted.column(j);
        fpis.push(Tfn::component_max(column.iter()).unwrap_or(Tfn::crisp(0.0)));
        fnis.push(Tfn::component_min(column.iter()).unwrap_or(Tfn::crisp(0.0)));
    }

    let scored = matrix
        .alternatives()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut d_plus = 0.0;
            let mut d_minus = 0.0;
            for j in 0..m {
                let cell = weighted[(i, j)];
                d_plus += cell.vertex_distance(&fpis[j]);
                d_minus += cell.vertex_distance(&fnis[j]);
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Criterion;

    fn tfn(l: f64, m: f64, u: f64) -> Tfn {
        Tfn::new(l, m, u).unwrap()
    }

    fn matrix(rows: Vec<Vec<Tfn>>, criteria: Vec<Criterion>) -> FuzzyDecisionMatrix {
        let alternatives = (1..=rows.len()).map(|i| format!("A{i}")).collect();
        FuzzyDecisionMatrix::from_rows(alternatives, criteria, rows).unwrap()
    }

    #[test]
    fn dominant_alternative_ranks_first() {
        let m = matrix(
            vec![
                vec![tfn(7.0, 8.0, 9.0), tfn(6.0, 7.0, 8.0)],
                vec![tfn(3.0, 4.0, 5.0), tfn(2.0, 3.0, 4.0)],
                vec![tfn(1.0, 2.0, 3.0), tfn(1.0, 1.5, 2.0)],
            ],
            vec![Criterion::benefit("c1"), Criterion::benefit("c2")],
        );
        let weights = vec![Tfn::crisp(0.6), Tfn::crisp(0.4)];
        let ranking = rank(&m, &weights).unwrap();

        let names: Vec<&str> = ranking.entries.iter().map(|e| e.alternative.as_str()).collect();
        assert_eq!(names, ["A1", "A2", "A3"]);
        for entry in &ranking.entries {
            assert!((0.0..=1.0).contains(&entry.score));
        }
        // A1 coincides with the fuzzy positive ideal on every criterion.
        assert!((ranking.entries[0].score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cost_criterion_prefers_smaller_scores() {
        let m = matrix(
            vec![
                vec![tfn(1.0, 2.0, 3.0)],
                vec![tfn(7.0, 8.0, 9.0)],
            ],
            vec![Criterion::cost("price")],
        );
        let weights = vec![Tfn::crisp(1.0)];
        let ranking = rank(&m, &weights).unwrap();
        assert_eq!(ranking.best(), Some("A1"));
    }

    #[test]
    fn fuzzy_weights_are_accepted() {
        let m = matrix(
            vec![
                vec![tfn(4.0, 5.0, 6.0), tfn(1.0, 2.0, 3.0)],
                vec![tfn(1.0, 2.0, 3.0), tfn(4.0, 5.0, 6.0)],
            ],
            vec![Criterion::benefit("c1"), Criterion::benefit("c2")],
        );
        // Heavier weight on c1 should break the symmetry toward A1.
        let weights = vec![tfn(0.6, 0.7, 0.8), tfn(0.2, 0.3, 0.4)];
        let ranking = rank(&m, &weights).unwrap();
        assert_eq!(ranking.best(), Some("A1"));
    }

    #[test]
    fn identical_alternatives_score_half() {
        let row = vec![tfn(2.0, 3.0, 4.0)];
        let m = matrix(vec![row.clone(), row], vec![Criterion::benefit("c")]);
        let ranking = rank(&m, &[Tfn::crisp(1.0)]).unwrap();
        for entry in &ranking.entries {
            assert_eq!(entry.score, 0.5);
        }
    }

    #[test]
    fn negative_benefit_column_is_rejected() {
        // A negative normalization scale would flip the dominance
        // order and crown the dominated alternative; such columns must
        // fail instead of ranking.
        let m = matrix(
            vec![vec![tfn(-4.0, -3.0, -2.0)], vec![tfn(-9.0, -8.0, -7.0)]],
            vec![Criterion::benefit("c")],
        );
        assert!(matches!(rank(&m, &[Tfn::crisp(1.0)]), Err(Error::Domain(_))));
    }

    #[test]
    fn zero_spanning_cost_cell_is_rejected() {
        let m = matrix(
            vec![vec![tfn(-1.0, 0.0, 1.0)], vec![tfn(1.0, 2.0, 3.0)]],
            vec![Criterion::cost("c")],
        );
        assert!(matches!(rank(&m, &[Tfn::crisp(1.0)]), Err(Error::Domain(_))));
    }
}
