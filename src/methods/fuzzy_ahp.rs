//! Fuzzy AHP via Buckley's geometric-mean method.
//!
//! Judges' TFN comparison matrices are aggregated cell-by-cell with the
//! componentwise geometric mean; row geometric means normalized by TFN
//! division give a fuzzy weight per criterion, which the centroid
//! collapses to a crisp weight. Defuzzification does not preserve the
//! sum-to-1 property, so crisp weights are renormalized at the end.

use crate::error::{Error, Result};
use crate::fuzzy::Tfn;
use crate::matrix::{DecisionMatrix, FuzzyPairwiseMatrix};
use crate::methods::ahp::{consistency_ratio_of, score_alternatives, CONSISTENCY_THRESHOLD};
use crate::types::Ranking;

/// Result of a fuzzy AHP run: ranking, fuzzy and defuzzified criterion
/// weights, and the consistency ratio of the centroid-defuzzified
/// judgment aggregate.
#[derive(Debug, Clone)]
pub struct FuzzyAhpOutcome {
    pub ranking: Ranking,
    pub fuzzy_weights: Vec<(String, Tfn)>,
    pub weights: Vec<(String, f64)>,
    pub consistency_ratio: f64,
}

impl FuzzyAhpOutcome {
    /// Whether the defuzzified judgment set passes Saaty's 0.1 bound.
    #[inline]
    pub fn consistent(&self) -> bool {
        self.consistency_ratio <= CONSISTENCY_THRESHOLD
    }
}

/// Full fuzzy AHP over one or more judges' comparison matrices.
pub fn rank(judgments: &[FuzzyPairwiseMatrix], matrix: &DecisionMatrix) -> Result<FuzzyAhpOutcome> {
    let combined = FuzzyPairwiseMatrix::aggregate_judges(judgments)?;

    let criterion_names: Vec<&str> = matrix.criteria().iter().map(|c| c.name.as_str()).collect();
    let pcm_names: Vec<&str> = combined.labels().iter().map(String::as_str).collect();
    if criterion_names != pcm_names {
        return Err(Error::shape(
            "comparison matrix items must match the decision matrix criteria, in order",
        ));
    }

    let fuzzy = fuzzy_weights(&combined)?;
    let crisp = defuzzified_weights(&fuzzy)?;
    let consistency_ratio = consistency_ratio_of(&combined.defuzzify(), &crisp);
    let scored = score_alternatives(matrix, &crisp)?;

    Ok(FuzzyAhpOutcome {
        ranking: Ranking::from_scores(scored),
        fuzzy_weights: combined.labels().iter().cloned().zip(fuzzy).collect(),
        weights: combined.labels().iter().cloned().zip(crisp).collect(),
        consistency_ratio,
    })
}

/// Buckley steps 2–3: row geometric means, normalized by TFN division
/// with the sum of all row geometric means.
pub fn fuzzy_weights(pcm: &FuzzyPairwiseMatrix) -> Result<Vec<Tfn>> {
    let values = pcm.values();
    let n = pcm.order();

    let row_means: Vec<Tfn> = (0..n)
        .map(|i| Tfn::geometric_mean(values.row(i).iter()))
        .collect::<Result<_>>()?;

    let total = row_means
        .iter()
        .copied()
        .reduce(|a, b| a + b)
        .ok_or_else(|| Error::shape("comparison matrix needs at least one item"))?;

    row_means.iter().map(|gm| gm.try_div(&total)).collect()
}

/// Buckley step 4: centroid defuzzification, then renormalize the crisp
/// weights to sum to 1.
fn defuzzified_weights(fuzzy: &[Tfn]) -> Result<Vec<f64>> {
    let crisp: Vec<f64> = fuzzy.iter().map(Tfn::defuzzify).collect();
    let total: f64 = crisp.iter().sum();
    if total <= 0.0 {
        return Err(Error::domain("defuzzified weights must have a positive sum"));
    }
    Ok(crisp.into_iter().map(|w| w / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Criterion;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn tfn(l: f64, m: f64, u: f64) -> Tfn {
        Tfn::new(l, m, u).unwrap()
    }

    #[test]
    fn all_equal_judgments_give_equal_weights() {
        let one = Tfn::crisp(1.0);
        let pcm = FuzzyPairwiseMatrix::from_rows(
            labels(&["C1", "C2", "C3"]),
            vec![vec![one; 3], vec![one; 3], vec![one; 3]],
        )
        .unwrap();

        let fuzzy = fuzzy_weights(&pcm).unwrap();
        for w in &fuzzy {
            assert!((w.m() - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn crisp_judgments_reduce_to_geometric_mean_weights() {
        // Degenerate TFNs on the classic 1/3/5 matrix: Buckley collapses
        // to the crisp row-geometric-mean estimate.
        let c = Tfn::crisp;
        let pcm = FuzzyPairwiseMatrix::from_rows(
            labels(&["C1", "C2", "C3"]),
            vec![
                vec![c(1.0), c(3.0), c(5.0)],
                vec![c(1.0 / 3.0), c(1.0), c(2.0)],
                vec![c(1.0 / 5.0), c(1.0 / 2.0), c(1.0)],
            ],
        )
        .unwrap();

        let fuzzy = fuzzy_weights(&pcm).unwrap();
        let weights: Vec<f64> = fuzzy.iter().map(Tfn::defuzzify).collect();
        assert!((weights[0] - 0.6483).abs() < 1e-3);
        assert!((weights[1] - 0.2297).abs() < 1e-3);
        assert!((weights[2] - 0.1220).abs() < 1e-3);
    }

    #[test]
    fn fuzzy_weight_supports_bracket_the_modal_weight() {
        let pcm = FuzzyPairwiseMatrix::from_rows(
            labels(&["C1", "C2"]),
            vec![
                vec![Tfn::crisp(1.0), tfn(2.0, 3.0, 4.0)],
                vec![tfn(1.0 / 4.0, 1.0 / 3.0, 1.0 / 2.0), Tfn::crisp(1.0)],
            ],
        )
        .unwrap();

        let fuzzy = fuzzy_weights(&pcm).unwrap();
        for w in &fuzzy {
            assert!(w.l() <= w.m() && w.m() <= w.u());
            assert!(w.l() > 0.0);
        }
        // C1 judged more important than C2.
        assert!(fuzzy[0].m() > fuzzy[1].m());
    }

    #[test]
    fn full_pipeline_with_two_judges() {
        let one = Tfn::crisp(1.0);
        let make = |v: Tfn| {
            FuzzyPairwiseMatrix::from_rows(
                labels(&["price", "quality"]),
                vec![vec![one, v], vec![v.recip().unwrap(), one]],
            )
            .unwrap()
        };
        let judge_a = make(tfn(1.0, 2.0, 3.0));
        let judge_b = make(tfn(2.0, 4.0, 6.0));

        let matrix = DecisionMatrix::from_rows(
            labels(&["A", "B"]),
            vec![Criterion::cost("price"), Criterion::benefit("quality")],
            vec![vec![100.0, 5.0], vec![200.0, 9.0]],
        )
        .unwrap();

        let outcome = rank(&[judge_a, judge_b], &matrix).unwrap();
        assert_eq!(outcome.ranking.len(), 2);
        assert_eq!(outcome.weights.len(), 2);
        assert!(outcome.consistent());

        // Crisp weights renormalize to sum 1 after defuzzification.
        let total: f64 = outcome.weights.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-12);
        // Price outweighs quality, and A is half the price of B.
        assert!(outcome.weights[0].1 > outcome.weights[1].1);
        assert_eq!(outcome.ranking.best(), Some("A"));
    }

    #[test]
    fn no_judges_is_a_shape_error() {
        let matrix = DecisionMatrix::from_rows(
            labels(&["A"]),
            vec![Criterion::benefit("c")],
            vec![vec![1.0]],
        )
        .unwrap();
        assert!(matches!(rank(&[], &matrix), Err(Error::Shape(_))));
    }
}
