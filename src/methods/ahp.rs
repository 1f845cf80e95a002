//! Analytic Hierarchy Process: criterion weights from pairwise
//! comparisons, with a consistency check.

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::matrix::{DecisionMatrix, PairwiseMatrix};
use crate::types::Ranking;

/// Judgment sets with CR above this are conventionally unreliable.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Saaty's random consistency index, by matrix order n = 1..=15.
const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.54, 1.56, 1.57, 1.59,
];

/// Result of an AHP run: ranking, derived criterion weights, and the
/// consistency ratio of the judgment set.
///
/// An inconsistent judgment set (CR > 0.1) is *not* an error — the
/// weights are still returned, flagged via [`AhpOutcome::consistent`],
/// and accepting or re-eliciting them is the caller's decision.
#[derive(Debug, Clone)]
pub struct AhpOutcome {
    pub ranking: Ranking,
    pub weights: Vec<(String, f64)>,
    pub consistency_ratio: f64,
}

impl AhpOutcome {
    /// Whether the judgment set passes Saaty's 0.1 consistency bound.
    #[inline]
    pub fn consistent(&self) -> bool {
        self.consistency_ratio <= CONSISTENCY_THRESHOLD
    }
}

/// Full AHP: derive criterion weights from the comparison matrix, then
/// score and rank the alternatives in the decision matrix. The matrix
/// criteria must match the comparison-matrix items, in order.
pub fn rank(pcm: &PairwiseMatrix, matrix: &DecisionMatrix) -> Result<AhpOutcome> {
    let criterion_names: Vec<&str> = matrix.criteria().iter().map(|c| c.name.as_str()).collect();
    let pcm_names: Vec<&str> = pcm.labels().iter().map(String::as_str).collect();
    if criterion_names != pcm_names {
        return Err(Error::shape(
            "comparison matrix items must match the decision matrix criteria, in order",
        ));
    }

    let weights = priority_vector(pcm);
    let consistency_ratio = consistency_ratio(pcm, &weights);
    let scored = score_alternatives(matrix, &weights)?;

    Ok(AhpOutcome {
        ranking: Ranking::from_scores(scored),
        weights: pcm.labels().iter().cloned().zip(weights).collect(),
        consistency_ratio,
    })
}

/// Priority vector via the normalized-column/row-average approximation:
/// divide each entry by its column sum, then average across each row.
/// Recovers the exact weight vector for a perfectly consistent matrix.
pub fn priority_vector(pcm: &PairwiseMatrix) -> Vec<f64> {
    let values = pcm.values();
    let n = pcm.order();

    let column_sums: Vec<f64> = (0..n).map(|j| values.column(j).sum()).collect();
    (0..n)
        .map(|i| (0..n).map(|j| values[(i, j)] / column_sums[j]).sum::<f64>() / n as f64)
        .collect()
}

/// Consistency ratio CR = CI / RI(n). Zero for n ≤ 2, where a
/// reciprocal matrix is always consistent.
pub fn consistency_ratio(pcm: &PairwiseMatrix, weights: &[f64]) -> f64 {
    consistency_ratio_of(pcm.values(), weights)
}

/// CR against an arbitrary square matrix; shared with fuzzy AHP, which
/// checks consistency on the defuzzified judgment aggregate.
pub(crate) fn consistency_ratio_of(values: &Array2<f64>, weights: &[f64]) -> f64 {
    let n = values.nrows();
    if n <= 2 {
        return 0.0;
    }

    // λmax estimate: mean of (A·w)ᵢ / wᵢ.
    let lambda_max = (0..n)
        .map(|i| {
            let weighted_sum: f64 = (0..n).map(|j| values[(i, j)] * weights[j]).sum();
            weighted_sum / weights[i]
        })
        .sum::<f64>()
        / n as f64;

    let ci = (lambda_max - n as f64) / (n as f64 - 1.0);
    let ri = RANDOM_INDEX[(n - 1).min(RANDOM_INDEX.len() - 1)];
    if ri == 0.0 { 0.0 } else { ci / ri }
}

/// Score alternatives under a crisp weight vector: invert cost scores
/// via reciprocal, sum-normalize each criterion column, then take the
/// weighted sum per alternative.
pub(crate) fn score_alternatives(
    matrix: &DecisionMatrix,
    weights: &[f64],
) -> Result<Vec<(String, f64)>> {
    if weights.len() != matrix.num_criteria() {
        return Err(Error::shape(format!(
            "{} weights for {} criteria", weights.len(), matrix.num_criteria()
        )));
    }

    let values = matrix.values();
    let n = matrix.num_alternatives();
    let mut adjusted = values.clone();
    for (j, criterion) in matrix.criteria().iter().enumerate() {
        if criterion.direction.is_cost() {
            for i in 0..n {
                if values[(i, j)] <= 0.0 {
                    return Err(Error::domain(format!(
                        "cost criterion '{}' requires positive scores to invert",
                        criterion.name
                    )));
                }
                adjusted[(i, j)] = 1.0 / values[(i, j)];
            }
        }
        let column_sum: f64 = adjusted.column(j).sum();
        if column_sum == 0.0 {
            return Err(Error::domain(format!(
                "criterion '{}' has zero total score and cannot be normalized",
                criterion.name
            )));
        }
        for i in 0..n {
            adjusted[(i, j)] /= column_sum;
        }
    }

    Ok(matrix
        .alternatives()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let score: f64 = weights.iter().enumerate().map(|(j, w)| w * adjusted[(i, j)]).sum();
            (name.clone(), score)
        })
        .collect())
}
