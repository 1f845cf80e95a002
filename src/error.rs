use thiserror::Error;

/// Errors raised while validating inputs or running a method.
///
/// Computation is deterministic, so none of these are retryable: a
/// `Shape` error means the caller assembled mismatched tables, a
/// `Domain` error means a value violates a mathematical precondition.
/// AHP judgment inconsistency is *not* an error; it is surfaced as a
/// flag on the result instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Ragged or mismatched matrix dimensions, wrong comparison-matrix order.
    #[error("shape mismatch: {0}")]
    Shape(String),

    /// A value outside the mathematical domain of the operation.
    #[error("domain error: {0}")]
    Domain(String),
}

impl Error {
    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        Error::Shape(msg.into())
    }

    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        Error::Domain(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
