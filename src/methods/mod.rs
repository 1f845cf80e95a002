//! The six MCDM engines. Each is a pure function: tables in, ranking
//! out, no state retained between calls.

pub mod ahp;
pub mod fuzzy_ahp;
pub mod fuzzy_promethee;
pub mod fuzzy_topsis;
pub mod promethee;
pub mod topsis;

pub use ahp::AhpOutcome;
pub use fuzzy_ahp::FuzzyAhpOutcome;
pub use promethee::PreferenceFunction;
