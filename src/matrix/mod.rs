//! Decision matrices, pairwise comparison matrices, and normalization.

mod decision;
mod normalize;
mod pairwise;

pub use decision::{DecisionMatrix, FuzzyDecisionMatrix};
pub use pairwise::{FuzzyPairwiseMatrix, PairwiseMatrix};

pub(crate) use normalize::{
    apply_fuzzy_weights, apply_weights, linear_scale_normalize, vector_normalize,
};
