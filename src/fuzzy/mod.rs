//! Triangular fuzzy numbers and their arithmetic.

mod triangular;

pub use triangular::Tfn;
