use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Optimization direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Higher raw scores are better (maximized).
    Benefit,
    /// Lower raw scores are better (minimized).
    Cost,
}

impl Direction {
    #[inline]
    pub fn is_cost(self) -> bool {
        matches!(self, Direction::Cost)
    }
}

/// A named criterion with its optimization direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub name: String,
    pub direction: Direction,
}

impl Criterion {
    pub fn benefit(name: impl Into<String>) -> Self {
        Self { name: name.into(), direction: Direction::Benefit }
    }

    pub fn cost(name: impl Into<String>) -> Self {
        Self { name: name.into(), direction: Direction::Cost }
    }
}

/// A criterion weight vector, normalized to sum to 1 at construction.
///
/// Normalization is idempotent: normalizing an already-normalized
/// vector returns the same values.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights(Vec<f64>);

impl Weights {
    /// Build a weight vector from raw non-negative values, rescaling so
    /// the entries sum to 1.
    pub fn normalized(raw: Vec<f64>) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::shape("weight vector must not be empty"));
        }
        if raw.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(Error::domain("weights must be finite and non-negative"));
        }
        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return Err(Error::domain("weights must not all be zero"));
        }
        Ok(Self(raw.into_iter().map(|w| w / total).collect()))
    }

    /// Equal weights over `n` criteria.
    pub fn uniform(n: usize) -> Result<Self> {
        Self::normalized(vec![1.0; n])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// One row of a ranking: an alternative, its score, and its rank.
///
/// Tied scores share the average of the rank positions they span, so
/// ranks are fractional in general (two alternatives tied at the top
/// both get rank 1.5).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub alternative: String,
    pub score: f64,
    pub rank: f64,
}

/// An ordered ranking of alternatives, best first.
///
/// Sorting is stable: ties keep their original input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub entries: Vec<RankingEntry>,
}

impl Ranking {
    /// Rank scored alternatives descending by score.
    pub(crate) fn from_scores(scored: Vec<(String, f64)>) -> Self {
        let mut entries: Vec<RankingEntry> = scored
            .into_iter()
            .map(|(alternative, score)| RankingEntry { alternative, score, rank: 0.0 })
            .collect();
        entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        // Average the rank positions spanned by each group of ties.
        let n = entries.len();
        let mut i = 0;
        while i < n {
            let mut j = i;
            while j + 1 < n && (entries[j + 1].score - entries[i].score).abs() < 1e-12 {
                j += 1;
            }
            let rank = (i + 1 + j + 1) as f64 / 2.0;
            for entry in &mut entries[i..=j] {
                entry.rank = rank;
            }
            i = j + 1;
        }

        Self { entries }
    }

    /// Name of the top-ranked alternative, if any.
    pub fn best(&self) -> Option<&str> {
        self.entries.first().map(|e| e.alternative.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
