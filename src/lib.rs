#![doc = "Multi-criteria decision analysis: TOPSIS, PROMETHEE II, and AHP, with fuzzy variants"]
mod error;
mod fuzzy;
mod matrix;
mod types;

pub mod cli;
pub mod commands;
pub mod methods;
pub mod scenario;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use fuzzy::Tfn;

#[doc(inline)]
pub use matrix::{DecisionMatrix, FuzzyDecisionMatrix, FuzzyPairwiseMatrix, PairwiseMatrix};

#[doc(inline)]
pub use types::{Criterion, Direction, Ranking, RankingEntry, Weights};

#[doc(inline)]
pub use methods::{AhpOutcome, FuzzyAhpOutcome, PreferenceFunction};
