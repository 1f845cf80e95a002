//! Serde-backed scenario schema: the boundary between loosely-typed
//! table input (JSON files, UI layers) and the strongly-typed core.
//!
//! Conversion and validation happen exactly once here; the engines
//! never re-validate. Each scenario variant maps onto one method entry
//! point and produces a common report shape.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fuzzy::Tfn;
use crate::matrix::{DecisionMatrix, FuzzyDecisionMatrix, FuzzyPairwiseMatrix, PairwiseMatrix};
use crate::methods;
use crate::methods::PreferenceFunction;
use crate::types::{Criterion, Direction, Ranking, Weights};

/// A criterion as written in a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub name: String,
    pub direction: Direction,
    /// Crisp weight; omitted weights default to an equal split.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// TFN weight `[l, m, u]` for fuzzy methods; falls back to `weight`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_weight: Option<[f64; 3]>,
    /// PROMETHEE preference function; defaults to `usual`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<PreferenceSpec>,
}

/// Preference-function configuration, by family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreferenceSpec {
    Usual,
    UShape { q: f64 },
    VShape { p: f64 },
    Level { q: f64, p: f64 },
    Linear { q: f64, p: f64 },
    Gaussian { sigma: f64 },
}

impl PreferenceSpec {
    fn build(self) -> Result<PreferenceFunction> {
        match self {
            Self::Usual => Ok(PreferenceFunction::usual()),
            Self::UShape { q } => PreferenceFunction::u_shape(q),
            Self::VShape { p } => PreferenceFunction::v_shape(p),
            Self::Level { q, p } => PreferenceFunction::level(q, p),
            Self::Linear { q, p } => PreferenceFunction::linear(q, p),
            Self::Gaussian { sigma } => PreferenceFunction::gaussian(sigma),
        }
    }
}

/// A complete decision scenario, tagged by method.
///
/// Fuzzy scores and comparisons carry one table per decision maker;
/// aggregation into a single matrix happens here, before the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Scenario {
    Topsis {
        alternatives: Vec<String>,
        criteria: Vec<CriterionSpec>,
        scores: Vec<Vec<f64>>,
    },
    FuzzyTopsis {
        alternatives: Vec<String>,
        criteria: Vec<CriterionSpec>,
        scores: Vec<Vec<Vec<[f64; 3]>>>,
    },
    Promethee {
        alternatives: Vec<String>,
        criteria: Vec<CriterionSpec>,
        scores: Vec<Vec<f64>>,
    },
    FuzzyPromethee {
        alternatives: Vec<String>,
        criteria: Vec<CriterionSpec>,
        scores: Vec<Vec<Vec<[f64; 3]>>>,
    },
    Ahp {
        alternatives: Vec<String>,
        criteria: Vec<CriterionSpec>,
        scores: Vec<Vec<f64>>,
        comparisons: Vec<Vec<f64>>,
    },
    FuzzyAhp {
        alternatives: Vec<String>,
        criteria: Vec<CriterionSpec>,
        scores: Vec<Vec<f64>>,
        comparisons: Vec<Vec<Vec<[f64; 3]>>>,
    },
}

/// The common result shape across all six methods.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub method: &'static str,
    pub ranking: Ranking,
    /// Derived criterion weights (AHP variants only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<(String, f64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent: Option<bool>,
}

impl Report {
    fn ranking_only(method: &'static str, ranking: Ranking) -> Self {
        Self { method, ranking, weights: None, consistency_ratio: None, consistent: None }
    }
}

impl Scenario {
    /// Convert, validate, and run the scenario against its engine.
    pub fn run(&self) -> Result<Report> {
        match self {
            Scenario::Topsis { alternatives, criteria, scores } => {
                let matrix = decision_matrix(alternatives, criteria, scores)?;
                let weights = crisp_weights(criteria)?;
                let ranking = methods::topsis::rank(&matrix, &weights)?;
                Ok(Report::ranking_only("topsis", ranking))
            }
            Scenario::FuzzyTopsis { alternatives, criteria, scores } => {
                let matrix = fuzzy_decision_matrix(alternatives, criteria, scores)?;
                let weights = fuzzy_weight_vector(criteria)?;
                let ranking = methods::fuzzy_topsis::rank(&matrix, &weights)?;
                Ok(Report::ranking_only("fuzzy_topsis", ranking))
            }
            Scenario::Promethee { alternatives, criteria, scores } => {
                let matrix = decision_matrix(alternatives, criteria, scores)?;
                let weights = crisp_weights(criteria)?;
                let preferences = preference_functions(criteria)?;
                let ranking = methods::promethee::rank(&matrix, &weights, &preferences)?;
                Ok(Report::ranking_only("promethee", ranking))
            }
            Scenario::FuzzyPromethee { alternatives, criteria, scores } => {
                let matrix = fuzzy_decision_matrix(alternatives, criteria, scores)?;
                let weights = fuzzy_weight_vector(criteria)?;
                let preferences = preference_functions(criteria)?;
                let ranking = methods::fuzzy_promethee::rank(&matrix, &weights, &preferences)?;
                Ok(Report::ranking_only("fuzzy_promethee", ranking))
            }
            Scenario::Ahp { alternatives, criteria, scores, comparisons } => {
                let matrix = decision_matrix(alternatives, criteria, scores)?;
                let pcm = PairwiseMatrix::from_rows(
                    criteria.iter().map(|c| c.name.clone()).collect(),
                    comparisons.clone(),
                )?;
                let outcome = methods::ahp::rank(&pcm, &matrix)?;
                Ok(Report {
                    method: "ahp",
                    consistent: Some(outcome.consistent()),
                    ranking: outcome.ranking,
                    weights: Some(outcome.weights),
                    consistency_ratio: Some(outcome.consistency_ratio),
                })
            }
            Scenario::FuzzyAhp { alternatives, criteria, scores, comparisons } => {
                let matrix = decision_matrix(alternatives, criteria, scores)?;
                let labels: Vec<String> = criteria.iter().map(|c| c.name.clone()).collect();
                let judgments: Vec<FuzzyPairwiseMatrix> = comparisons
                    .iter()
                    .map(|judge| {
                        let rows = judge
                            .iter()
                            .map(|row| row.iter().map(|t| tfn(*t)).collect::<Result<Vec<_>>>())
                            .collect::<Result<Vec<_>>>()?;
                        FuzzyPairwiseMatrix::from_rows(labels.clone(), rows)
                    })
                    .collect::<Result<_>>()?;
                let outcome = methods::fuzzy_ahp::rank(&judgments, &matrix)?;
                Ok(Report {
                    method: "fuzzy_ahp",
                    consistent: Some(outcome.consistent()),
                    ranking: outcome.ranking,
                    weights: Some(outcome.weights),
                    consistency_ratio: Some(outcome.consistency_ratio),
                })
            }
        }
    }
}

fn tfn(t: [f64; 3]) -> Result<Tfn> {
    Tfn::new(t[0], t[1], t[2])
}

fn core_criteria(specs: &[CriterionSpec]) -> Vec<Criterion> {
    specs
        .iter()
        .map(|c| Criterion { name: c.name.clone(), direction: c.direction })
        .collect()
}

fn decision_matrix(
    alternatives: &[String],
    criteria: &[CriterionSpec],
    scores: &[Vec<f64>],
) -> Result<DecisionMatrix> {
    DecisionMatrix::from_rows(alternatives.to_vec(), core_criteria(criteria), scores.to_vec())
}

/// Build one fuzzy matrix per decision maker, then aggregate by
/// per-component averaging.
fn fuzzy_decision_matrix(
    alternatives: &[String],
    criteria: &[CriterionSpec],
    score_sets: &[Vec<Vec<[f64; 3]>>],
) -> Result<FuzzyDecisionMatrix> {
    let matrices: Vec<FuzzyDecisionMatrix> = score_sets
        .iter()
        .map(|rows| {
            let rows = rows
                .iter()
                .map(|row| row.iter().map(|t| tfn(*t)).collect::<Result<Vec<_>>>())
                .collect::<Result<Vec<_>>>()?;
            FuzzyDecisionMatrix::from_rows(alternatives.to_vec(), core_criteria(criteria), rows)
        })
        .collect::<Result<_>>()?;
    FuzzyDecisionMatrix::aggregate(&matrices)
}

/// Crisp weight vector; all-unspecified means an equal split, but a
/// partially specified one is a caller mistake.
fn crisp_weights(criteria: &[CriterionSpec]) -> Result<Weights> {
    let given: Vec<Option<f64>> = criteria.iter().map(|c| c.weight).collect();
    if given.iter().all(Option::is_none) {
        return Weights::uniform(criteria.len());
    }
    if given.iter().any(Option::is_none) {
        return Err(Error::domain("either all criteria carry weights, or none"));
    }
    Weights::normalized(given.into_iter().flatten().collect())
}

/// TFN weight vector for the fuzzy engines; crisp weights become
/// degenerate TFNs. Same all-or-none rule as [`crisp_weights`]: either
/// every criterion carries a weight (fuzzy or crisp), or none do.
fn fuzzy_weight_vector(criteria: &[CriterionSpec]) -> Result<Vec<Tfn>> {
    let unweighted = criteria
        .iter()
        .filter(|c| c.fuzzy_weight.is_none() && c.weight.is_none())
        .count();
    if unweighted == criteria.len() {
        return Ok(vec![Tfn::crisp(1.0 / criteria.len() as f64); criteria.len()]);
    }
    if unweighted > 0 {
        return Err(Error::domain("either all criteria carry weights, or none"));
    }
    criteria
        .iter()
        .map(|c| match (c.fuzzy_weight, c.weight) {
            (Some(t), _) => tfn(t),
            (None, Some(w)) => Ok(Tfn::crisp(w)),
            (None, None) => Err(Error::domain("either all criteria carry weights, or none")),
        })
        .collect()
}

fn preference_functions(criteria: &[CriterionSpec]) -> Result<Vec<PreferenceFunction>> {
    criteria
        .iter()
        .map(|c| c.preference.unwrap_or(PreferenceSpec::Usual).build())
        .collect()
}
