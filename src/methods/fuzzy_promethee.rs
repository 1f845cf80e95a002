//! Fuzzy PROMETHEE: outranking flows over fuzzy-valued criteria.
//!
//! Fuzziness is collapsed early: the pairwise deviation is the
//! difference of the two TFNs' centroids, and TFN weights are
//! defuzzified before aggregation. The preference functions themselves
//! operate on this crisp surrogate, so the flow structure is identical
//! to crisp PROMETHEE II.

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::fuzzy::Tfn;
use crate::matrix::FuzzyDecisionMatrix;
use crate::methods::promethee::PreferenceFunction;
use crate::types::{Ranking, Weights};

/// Rank alternatives with fuzzy scores by net outranking flow.
///
/// Crisp weights are expressed as degenerate TFNs (`Tfn::crisp`).
pub fn rank(
    matrix: &FuzzyDecisionMatrix,
    weights: &[Tfn],
    preferences: &[PreferenceFunction],
) -> Result<Ranking> {
    let n = matrix.num_alternatives();
    let m = matrix.num_criteria();
    if n < 2 {
        return Err(Error::shape("PROMETHEE needs at least two alternatives"));
    }
    if preferences.len() != m {
        return Err(Error::shape(format!(
            "{} preference functions for {m} criteria", preferences.len()
        )));
    }
    let weights = Weights::normalized(weights.iter().map(Tfn::defuzzify).collect())?;
    if weights.len() != m {
        return Err(Error::shape(format!("{} weights for {m} criteria", weights.len())));
    }

    // Centroid surrogate per cell; deviations then follow the crisp rules.
    let centroids: Array2<f64> = matrix.values().map(Tfn::defuzzify);

    let mut pi = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let mut aggregated = 0.0;
            for (k, criterion) in matrix.criteria().iter().enumerate() {
                let d = if criterion.direction.is_cost() {
                    centroids[(j, k)] - centroids[(i, k)]
                } else {
                    centroids[(i, k)] - centroids[(j, k)]
                };
                aggregated += weights.as_slice()[k] * preferences[k].degree(d);
            }
            pi[(i, j)] = aggregated;
        }
    }

    let scored = matrix
        .alternatives()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let leaving: f64 = (0..n).map(|j| pi[(i, j)]).sum::<f64>() / (n - 1) as f64;
            let entering: f64 = (0..n).map(|j| pi[(j, i)]).sum::<f64>() / (n - 1) as f64;
            (name.clone(), leaving - entering)
        })
        .collect();

    Ok(Ranking::from_scores(scored))
}
