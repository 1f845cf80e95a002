//! Triangular fuzzy number arithmetic.
//!
//! A triangular fuzzy number (TFN) is an ordered triple `(l, m, u)`
//! with `l ≤ m ≤ u`: a pessimistic / most-likely / optimistic estimate.
//! Multiplication and division follow interval-algebra rules (extremes
//! over the endpoint products) so the ordering invariant survives
//! negative operands, where a naive componentwise product would not.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A triangular fuzzy number `(l, m, u)` with `l ≤ m ≤ u`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tfn {
    l: f64,
    m: f64,
    u: f64,
}

impl Tfn {
    /// Construct a TFN, enforcing `l ≤ m ≤ u` and finiteness.
    pub fn new(l: f64, m: f64, u: f64) -> Result<Self> {
        if !(l.is_finite() && m.is_finite() && u.is_finite()) {
            return Err(Error::domain("TFN components must be finite"));
        }
        if !(l <= m && m <= u) {
            return Err(Error::domain(format!(
                "TFN components must satisfy l <= m <= u, got ({l}, {m}, {u})"
            )));
        }
        Ok(Self { l, m, u })
    }

    /// A degenerate TFN representing the crisp value `x`.
    pub fn crisp(x: f64) -> Self {
        Self { l: x, m: x, u: x }
    }

    #[inline] pub fn l(&self) -> f64 { self.l }
    #[inline] pub fn m(&self) -> f64 { self.m }
    #[inline] pub fn u(&self) -> f64 { self.u }

    /// Whether the support interval `[l, u]` contains zero.
    #[inline]
    pub fn spans_zero(&self) -> bool {
        self.l <= 0.0 && self.u >= 0.0
    }

    /// Centroid defuzzification: `(l + m + u) / 3`.
    ///
    /// Linear in its argument: `centroid(a + b) = centroid(a) + centroid(b)`.
    #[inline]
    pub fn defuzzify(&self) -> f64 {
        (self.l + self.m + self.u) / 3.0
    }

    /// Vertex distance between two TFNs: the Euclidean distance over the
    /// three components, scaled by 1/3 inside the square root. Standard
    /// distance metric for fuzzy TOPSIS.
    pub fn vertex_distance(&self, other: &Tfn) -> f64 {
        let dl = self.l - other.l;
        let dm = self.m - other.m;
        let du = self.u - other.u;
        ((dl * dl + dm * dm + du * du) / 3.0).sqrt()
    }

    /// Membership degree of a crisp value `x` under this TFN.
    pub fn membership(&self, x: f64) -> f64 {
        if x < self.l || x > self.u {
            0.0
        } else if x <= self.m {
            if self.m == self.l { 1.0 } else { (x - self.l) / (self.m - self.l) }
        } else if self.u == self.m {
            1.0
        } else {
            (self.u - x) / (self.u - self.m)
        }
    }

    /// Multiplicative inverse under interval rules: `(1/u, 1/m, 1/l)`.
    /// Fails if the support interval spans zero.
    pub fn recip(&self) -> Result<Self> {
        if self.spans_zero() {
            return Err(Error::domain(format!(
                "cannot invert a TFN whose support spans zero: ({}, {}, {})",
                self.l, self.m, self.u
            )));
        }
        Ok(Self { l: 1.0 / self.u, m: 1.0 / self.m, u: 1.0 / self.l })
    }

    /// Divide by another TFN. Fails if the divisor's support spans zero.
    pub fn try_div(&self, rhs: &Tfn) -> Result<Self> {
        Ok(*self * rhs.recip()?)
    }

    /// Componentwise power with a real exponent. The support must be
    /// positive (non-negative for non-negative exponents); a negative
    /// exponent reverses component order, as with `recip`.
    pub fn powf(&self, exp: f64) -> Result<Self> {
        if exp >= 0.0 {
            if self.l < 0.0 {
                return Err(Error::domain("TFN powers require a non-negative support"));
            }
            Ok(Self { l: self.l.powf(exp), m: self.m.powf(exp), u: self.u.powf(exp) })
        } else {
            let e = -exp;
            if self.l <= 0.0 {
                return Err(Error::domain("negative TFN powers require a positive support"));
            }
            Ok(Self { l: 1.0 / self.u.powf(e), m: 1.0 / self.m.powf(e), u: 1.0 / self.l.powf(e) })
        }
    }

    /// Componentwise minimum over a non-empty set of TFNs.
    pub fn component_min<'a>(values: impl IntoIterator<Item = &'a Tfn>) -> Option<Self> {
        values.into_iter().copied().reduce(|a, b| Self {
            l: a.l.min(b.l),
            m: a.m.min(b.m),
            u: a.u.min(b.u),
        })
    }

    /// Componentwise maximum over a non-empty set of TFNs.
    pub fn component_max<'a>(values: impl IntoIterator<Item = &'a Tfn>) -> Option<Self> {
        values.into_iter().copied().reduce(|a, b| Self {
            l: a.l.max(b.l),
            m: a.m.max(b.m),
            u: a.u.max(b.u),
        })
    }

    /// Componentwise arithmetic mean over a non-empty set of TFNs.
    /// Standard aggregation of multiple decision makers' judgments.
    pub fn component_mean<'a>(values: impl IntoIterator<Item = &'a Tfn>) -> Option<Self> {
        let mut sum = Self::crisp(0.0);
        let mut count = 0usize;
        for v in values {
            sum = sum + *v;
            count += 1;
        }
        (count > 0).then(|| sum * (1.0 / count as f64))
    }

    /// Componentwise geometric mean over a non-empty set of TFNs with
    /// positive supports. Used to aggregate fuzzy pairwise judgments
    /// across decision makers in Buckley's method.
    pub fn geometric_mean<'a>(values: impl IntoIterator<Item = &'a Tfn>) -> Result<Self> {
        let values: Vec<Tfn> = values.into_iter().copied().collect();
        if values.is_empty() {
            return Err(Error::shape("geometric mean over an empty set of TFNs"));
        }
        let mut product = Tfn::crisp(1.0);
        for v in &values {
            if v.l <= 0.0 {
                return Err(Error::domain("geometric mean requires positive TFN supports"));
            }
            product = product * *v;
        }
        product.powf(1.0 / values.len() as f64)
    }
}

impl Add for Tfn {
    type Output = Tfn;

    fn add(self, rhs: Tfn) -> Tfn {
        Tfn { l: self.l + rhs.l, m: self.m + rhs.m, u: self.u + rhs.u }
    }
}

impl Sub for Tfn {
    type Output = Tfn;

    /// Interval subtraction: the lower bound subtracts the other's upper.
    fn sub(self, rhs: Tfn) -> Tfn {
        Tfn { l: self.l - rhs.u, m: self.m - rhs.m, u: self.u - rhs.l }
    }
}

impl Neg for Tfn {
    type Output = Tfn;

    fn neg(self) -> Tfn {
        Tfn { l: -self.u, m: -self.m, u: -self.l }
    }
}

impl Mul for Tfn {
    type Output = Tfn;

    /// Interval multiplication: bounds are the extremes over the four
    /// endpoint products. The modal value `m1 * m2` always lies between
    /// them because a bilinear map attains its extremes at the corners
    /// of the rectangle `[l1, u1] × [l2, u2]`.
    fn mul(self, rhs: Tfn) -> Tfn {
        let products = [self.l * rhs.l, self.l * rhs.u, self.u * rhs.l, self.u * rhs.u];
        let l = products.iter().copied().fold(f64::INFINITY, f64::min);
        let u = products.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Tfn { l, m: self.m * rhs.m, u }
    }
}

impl Mul<f64> for Tfn {
    type Output = Tfn;

    /// Scalar multiplication; a negative scalar reverses component order.
    fn mul(self, k: f64) -> Tfn {
        if k >= 0.0 {
            Tfn { l: self.l * k, m: self.m * k, u: self.u * k }
        } else {
            Tfn { l: self.u * k, m: self.m * k, u: self.l * k }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tfn(l: f64, m: f64, u: f64) -> Tfn {
        Tfn::new(l, m, u).unwrap()
    }

    #[test]
    fn construction_enforces_ordering() {
        assert!(Tfn::new(1.0, 2.0, 3.0).is_ok());
        assert!(matches!(Tfn::new(2.0, 1.0, 3.0), Err(Error::Domain(_))));
        assert!(matches!(Tfn::new(1.0, 3.0, 2.0), Err(Error::Domain(_))));
        assert!(matches!(Tfn::new(f64::NAN, 1.0, 2.0), Err(Error::Domain(_))));
    }

    #[test]
    fn addition_and_subtraction() {
        let a = tfn(1.0, 2.0, 3.0);
        let b = tfn(2.0, 3.0, 5.0);
        assert_eq!(a + b, tfn(3.0, 5.0, 8.0));
        // Subtraction crosses bounds: l - u', u - l'.
        assert_eq!(a - b, tfn(-4.0, -1.0, 1.0));
    }

    #[test]
    fn multiplication_preserves_ordering_with_negatives() {
        let a = tfn(-2.0, 0.0, 1.0);
        let b = tfn(-2.0, 0.0, 1.0);
        let p = a * b;
        assert_eq!((p.l(), p.m(), p.u()), (-2.0, 0.0, 4.0));

        let c = tfn(2.0, 3.0, 4.0);
        let d = tfn(1.0, 2.0, 3.0);
        let q = c * d;
        assert_eq!((q.l(), q.m(), q.u()), (2.0, 6.0, 12.0));
    }

    #[test]
    fn scalar_multiplication_handles_sign() {
        let a = tfn(1.0, 2.0, 3.0);
        assert_eq!(a * 2.0, tfn(2.0, 4.0, 6.0));
        assert_eq!(a * -1.0, tfn(-3.0, -2.0, -1.0));
    }

    #[test]
    fn division_by_zero_spanning_tfn_fails() {
        let a = tfn(1.0, 2.0, 3.0);
        let zero_span = tfn(-1.0, 0.5, 2.0);
        assert!(matches!(a.try_div(&zero_span), Err(Error::Domain(_))));

        let b = tfn(2.0, 4.0, 8.0);
        let q = a.try_div(&b).unwrap();
        assert_eq!((q.l(), q.m(), q.u()), (1.0 / 8.0, 0.5, 1.5));
    }

    #[test]
    fn vertex_distance_matches_hand_computation() {
        let a = tfn(1.0, 2.0, 3.0);
        let b = tfn(2.0, 3.0, 4.0);
        // sqrt((1 + 1 + 1) / 3) = 1
        assert!((a.vertex_distance(&b) - 1.0).abs() < 1e-12);
        assert_eq!(a.vertex_distance(&a), 0.0);
    }

    #[test]
    fn centroid_is_linear() {
        let a = tfn(1.0, 2.0, 6.0);
        let b = tfn(0.0, 3.0, 3.0);
        let lhs = (a + b).defuzzify();
        let rhs = a.defuzzify() + b.defuzzify();
        assert!((lhs - rhs).abs() < 1e-12);
        assert!((a.defuzzify() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn membership_is_triangular() {
        let a = tfn(0.0, 1.0, 3.0);
        assert_eq!(a.membership(-1.0), 0.0);
        assert_eq!(a.membership(0.5), 0.5);
        assert_eq!(a.membership(1.0), 1.0);
        assert_eq!(a.membership(2.0), 0.5);
        assert_eq!(a.membership(4.0), 0.0);
    }

    #[test]
    fn combinators() {
        let values = [tfn(1.0, 2.0, 3.0), tfn(2.0, 4.0, 8.0)];
        assert_eq!(Tfn::component_min(&values).unwrap(), tfn(1.0, 2.0, 3.0));
        assert_eq!(Tfn::component_max(&values).unwrap(), tfn(2.0, 4.0, 8.0));
        assert_eq!(Tfn::component_mean(&values).unwrap(), tfn(1.5, 3.0, 5.5));

        let gm = Tfn::geometric_mean(&values).unwrap();
        assert!((gm.l() - 2.0f64.sqrt()).abs() < 1e-12);
        assert!((gm.m() - 8.0f64.sqrt()).abs() < 1e-12);
        assert!((gm.u() - 24.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn fractional_powers() {
        let a = tfn(1.0, 8.0, 27.0);
        let r = a.powf(1.0 / 3.0).unwrap();
        assert!((r.l() - 1.0).abs() < 1e-12);
        assert!((r.m() - 2.0).abs() < 1e-12);
        assert!((r.u() - 3.0).abs() < 1e-12);

        let inv = a.powf(-1.0).unwrap();
        assert!((inv.l() - 1.0 / 27.0).abs() < 1e-12);
        assert!((inv.u() - 1.0).abs() < 1e-12);

        let negative = tfn(-1.0, 0.0, 1.0);
        assert!(negative.powf(0.5).is_err());
    }
}
