//! PROMETHEE II: pairwise outranking with net preference flows.

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::matrix::DecisionMatrix;
use crate::types::{Criterion, Ranking, Weights};

/// Per-criterion preference function: maps a direction-adjusted score
/// difference `d` to a preference degree in `[0, 1]`.
///
/// The six families of Brans and Vincke, each parameterized by its
/// thresholds (indifference `q`, strict preference `p`, Gaussian
/// `sigma`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreferenceFunction {
    /// Step at zero: any positive difference is strict preference.
    Usual,
    /// Step at the indifference threshold `q`.
    UShape { q: f64 },
    /// Linear ramp from zero up to the preference threshold `p`.
    VShape { p: f64 },
    /// Two-level step: indifferent below `q`, half-preferred up to `p`.
    Level { q: f64, p: f64 },
    /// Linear ramp between the thresholds `q` and `p`.
    Linear { q: f64, p: f64 },
    /// Exponential ramp with inflection parameter `sigma`.
    Gaussian { sigma: f64 },
}

impl PreferenceFunction {
    pub fn usual() -> Self {
        Self::Usual
    }

    pub fn u_shape(q: f64) -> Result<Self> {
        require(q >= 0.0, "u-shape threshold q must be non-negative")?;
        Ok(Self::UShape { q })
    }

    pub fn v_shape(p: f64) -> Result<Self> {
        require(p > 0.0, "v-shape threshold p must be positive")?;
        Ok(Self::VShape { p })
    }

    pub fn level(q: f64, p: f64) -> Result<Self> {
        require(q >= 0.0 && p > q, "level thresholds must satisfy 0 <= q < p")?;
        Ok(Self::Level { q, p })
    }

    pub fn linear(q: f64, p: f64) -> Result<Self> {
        require(q >= 0.0 && p > q, "linear thresholds must satisfy 0 <= q < p")?;
        Ok(Self::Linear { q, p })
    }

    pub fn gaussian(sigma: f64) -> Result<Self> {
        require(sigma > 0.0, "gaussian parameter sigma must be positive")?;
        Ok(Self::Gaussian { sigma })
    }

    /// Preference degree for a signed difference `d`.
    pub fn degree(&self, d: f64) -> f64 {
        match *self {
            Self::Usual => {
                if d > 0.0 { 1.0 } else { 0.0 }
            }
            Self::UShape { q } => {
                if d > q { 1.0 } else { 0.0 }
            }
            Self::VShape { p } => {
                if d <= 0.0 { 0.0 } else if d >= p { 1.0 } else { d / p }
            }
            Self::Level { q, p } => {
                if d <= q { 0.0 } else if d <= p { 0.5 } else { 1.0 }
            }
            Self::Linear { q, p } => {
                if d <= q { 0.0 } else if d >= p { 1.0 } else { (d - q) / (p - q) }
            }
            Self::Gaussian { sigma } => {
                if d <= 0.0 { 0.0 } else { 1.0 - (-d * d / (2.0 * sigma * sigma)).exp() }
            }
        }
    }
}

fn require(condition: bool, msg: &str) -> Result<()> {
    if condition { Ok(()) } else { Err(Error::domain(msg)) }
}

/// Rank alternatives by net outranking flow φ = φ⁺ − φ⁻.
///
/// O(n² · m) in alternatives and criteria; fine for decision-support
/// sizes. Net flows across all alternatives sum to zero.
pub fn rank(
    matrix: &DecisionMatrix,
    weights: &Weights,
    preferences: &[PreferenceFunction],
) -> Result<Ranking> {
    let pi = preference_matrix(matrix, weights, preferences)?;
    let n = matrix.num_alternatives();

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

/// The aggregated pairwise preference matrix π. Entry `(i, j)` is the
/// weighted mean preference of alternative `i` over `j`; the diagonal
/// is zero.
pub(crate) fn preference_matrix(
    matrix: &DecisionMatrix,
    weights: &Weights,
    preferences: &[PreferenceFunction],
) -> Result<Array2<f64>> {
    let n = matrix.num_alternatives();
    let m = matrix.num_criteria();
    if n < 2 {
        return Err(Error::shape("PROMETHEE needs at least two alternatives"));
    }
    if weights.len() != m {
        return Err(Error::shape(format!("{} weights for {m} criteria", weights.len())));
    }
    if preferences.len() != m {
        return Err(Error::shape(format!(
            "{} preference functions for {m} criteria", preferences.len()
        )));
    }

    let values = matrix.values();
    let mut pi = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let mut aggregated = 0.0;
            for (k, criterion) in matrix.criteria().iter().enumerate() {
                let d = deviation(values[(i, k)], values[(j, k)], criterion);
                aggregated += weights.as_slice()[k] * preferences[k].degree(d);
            }
            // Weights sum to 1 by construction, so the weighted sum is
            // already a mean in [0, 1].
            pi[(i, j)] = aggregated;
        }
    }
    Ok(pi)
}

/// Direction-adjusted deviation: positive when `a` outperforms `b`.
#[inline]
pub(crate) fn deviation(a: f64, b: f64, criterion: &Criterion) -> f64 {
    if criterion.direction.is_cost() { b - a } else { a - b }
}
