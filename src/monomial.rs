//! Monomials over Boolean-valued variables.
//!
//! A [`Monomial`] is a coefficient together with a strictly increasing,
//! duplicate-free sequence of variable indices (`x*x = x` for Boolean
//! variables, so repeated indices collapse at construction time).
//! Ordering and equality are defined purely on the index sequence — the
//! coefficient never participates — which is what lets [`crate::Polynomial`]
//! keep monomials in a sorted container while updating coefficients in
//! place (see the crate-level design notes).

use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;

/// A single term `coef * x_i1 * x_i2 * ... * x_ik`.
#[derive(Debug, Clone)]
pub struct Monomial {
    vars: Vec<usize>,
    size: usize,
    sum: usize,
    pub coef: BigInt,
}

impl Monomial {
    /// The constant monomial `1`.
    pub fn constant() -> Self {
        Monomial {
            vars: Vec::new(),
            size: 0,
            sum: 0,
            coef: BigInt::one(),
        }
    }

    /// A single-variable monomial `x_index` with coefficient 1.
    pub fn single(index: usize) -> Self {
        Monomial {
            vars: vec![index],
            size: 1,
            sum: index,
            coef: BigInt::one(),
        }
    }

    /// A two-variable monomial `x_a * x_b` with coefficient 1. Collapses to
    /// `x_a` if `a == b`.
    pub fn pair(a: usize, b: usize) -> Self {
        Monomial::from_indices(&[a, b])
    }

    /// Builds a monomial from an arbitrary (possibly unsorted, possibly
    /// duplicated) slice of indices, with coefficient 1.
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut vars = indices.to_vec();
        vars.sort_unstable();
        vars.dedup();
        let sum = vars.iter().sum();
        let size = vars.len();
        Monomial {
            vars,
            size,
            sum,
            coef: BigInt::one(),
        }
    }

    /// Internal fast path: `indices` is already sorted and deduplicated, and
    /// `sum` is precomputed. Used by [`Monomial::merge`] and
    /// [`Monomial::multiply`] to avoid re-sorting their streamed output.
    pub(crate) fn from_sorted(indices: Vec<usize>, sum: usize, coef: BigInt) -> Self {
        let size = indices.len();
        Monomial {
            vars: indices,
            size,
            sum,
            coef,
        }
    }

    /// Attach a coefficient to a freshly built monomial (builder-style).
    pub fn with_coef(mut self, coef: impl Into<BigInt>) -> Self {
        self.coef = coef.into();
        self
    }

    /// Variable indices, sorted ascending, no duplicates.
    pub fn vars(&self) -> &[usize] {
        &self.vars
    }

    /// Number of distinct variables.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of variable indices (cached).
    pub fn sum(&self) -> usize {
        self.sum
    }

    /// Whether this is the constant (empty) monomial.
    pub fn is_constant(&self) -> bool {
        self.size == 0
    }

    /// Whether the coefficient is zero.
    pub fn is_zero_coef(&self) -> bool {
        self.coef.is_zero()
    }

    /// Binary search for `v` among this monomial's variables.
    pub fn contains(&self, v: usize) -> bool {
        self.vars.binary_search(&v).is_ok()
    }

    /// The shape (size, sum, index sequence) this monomial compares/hashes
    /// by, exposed for diagnostics and for replay bookkeeping that needs a
    /// coefficient-independent key.
    pub fn shape_key(&self) -> (usize, usize, &[usize]) {
        (self.sum, self.size, &self.vars)
    }

    /// Replace variable `v` by monomial `tail`, i.e. compute
    /// `(self / v) * tail`. `self` must contain `v`. Indices that occur in
    /// `tail` are unioned with `self`'s remaining indices (idempotent, since
    /// `x*x = x`); `v` itself is dropped from both sides.
    pub fn merge(&self, v: usize, tail: &Monomial) -> Monomial {
        debug_assert!(self.contains(v), "merge precondition: v must occur in self");
        let mut out = Vec::with_capacity(self.size + tail.size);
        let mut sum = 0usize;
        let mut i = 0usize;
        let mut j = 0usize;
        let a = &self.vars;
        let b = &tail.vars;
        loop {
            while i < a.len() && a[i] == v {
                i += 1;
            }
            while j < b.len() && b[j] == v {
                j += 1;
            }
            match (a.get(i), b.get(j)) {
                (None, None) => break,
                (Some(&x), None) => {
                    out.push(x);
                    sum += x;
                    i += 1;
                }
                (None, Some(&y)) => {
                    out.push(y);
                    sum += y;
                    j += 1;
                }
                (Some(&x), Some(&y)) => match x.cmp(&y) {
                    Ordering::Less => {
                        out.push(x);
                        sum += x;
                        i += 1;
                    }
                    Ordering::Greater => {
                        out.push(y);
                        sum += y;
                        j += 1;
                    }
                    Ordering::Equal => {
                        out.push(x);
                        sum += x;
                        i += 1;
                        j += 1;
                    }
                },
            }
        }
        Monomial::from_sorted(out, sum, &self.coef * &tail.coef)
    }

    /// Multiply two monomials: union of variables (idempotent), product of
    /// coefficients. Unlike [`Monomial::merge`], no variable is dropped.
    pub fn multiply(a: &Monomial, b: &Monomial) -> Monomial {
        let mut out = Vec::with_capacity(a.size + b.size);
        let mut sum = 0usize;
        let mut i = 0usize;
        let mut j = 0usize;
        loop {
            match (a.vars.get(i), b.vars.get(j)) {
                (None, None) => break,
                (Some(&x), None) => {
                    out.push(x);
                    sum += x;
                    i += 1;
                }
                (None, Some(&y)) => {
                    out.push(y);
                    sum += y;
                    j += 1;
                }
                (Some(&x), Some(&y)) => match x.cmp(&y) {
                    Ordering::Less => {
                        out.push(x);
                        sum += x;
                        i += 1;
                    }
                    Ordering::Greater => {
                        out.push(y);
                        sum += y;
                        j += 1;
                    }
                    Ordering::Equal => {
                        out.push(x);
                        sum += x;
                        i += 1;
                        j += 1;
                    }
                },
            }
        }
        Monomial::from_sorted(out, sum, &a.coef * &b.coef)
    }
}

/// Shape-only equality: coefficients are never compared.
impl PartialEq for Monomial {
    fn eq(&self, other: &Self) -> bool {
        self.sum == other.sum && self.size == other.size && self.vars == other.vars
    }
}
impl Eq for Monomial {}

/// Shape-only ordering: by `sum`, then `size`, then lexicographic indices.
impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sum
            .cmp(&other.sum)
            .then_with(|| self.size.cmp(&other.size))
            .then_with(|| self.vars.cmp(&other.vars))
    }
}

/// Render `coef` with an explicit leading sign (`+3`, `-2`), without
/// relying on `BigInt`'s `Display` impl to honor the `{:+}` format flag.
pub fn signed_coef(coef: &BigInt) -> String {
    if coef.sign() == num_bigint::Sign::Minus {
        coef.to_string()
    } else {
        format!("+{coef}")
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coef)?;
        for v in &self.vars {
            write!(f, "*x{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_indices_sorts_and_dedups() {
        let m = Monomial::from_indices(&[5, 1, 1, 3]);
        assert_eq!(m.vars(), &[1, 3, 5]);
        assert_eq!(m.size(), 3);
        assert_eq!(m.sum(), 9);
    }

    #[test]
    fn ordering_ignores_coefficient() {
        let mut a = Monomial::single(2);
        a.coef = BigInt::from(99);
        let b = Monomial::single(2);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn sum_then_size_then_lex_ordering() {
        let low_sum = Monomial::single(1);
        let high_sum = Monomial::single(5);
        assert!(low_sum < high_sum);

        let size1_sum5 = Monomial::single(5);
        let size2_sum5 = Monomial::pair(2, 3);
        assert!(size1_sum5 < size2_sum5);

        let a = Monomial::from_indices(&[1, 4]);
        let b = Monomial::from_indices(&[2, 3]);
        assert!(a < b);
    }

    #[test]
    fn merge_drops_replaced_variable_and_unions_rest() {
        let m = Monomial::from_indices(&[1, 2, 3]);
        let tail = Monomial::from_indices(&[3, 4]);
        let r = m.merge(2, &tail);
        assert_eq!(r.vars(), &[1, 3, 4]);
    }

    #[test]
    fn merge_with_constant_tail_just_drops_variable() {
        let m = Monomial::from_indices(&[1, 2]);
        let r = m.merge(2, &Monomial::constant());
        assert_eq!(r.vars(), &[1]);
    }

    #[test]
    fn multiply_unions_and_multiplies_coefficients() {
        let a = Monomial::from_indices(&[1, 2]).with_coef(2);
        let b = Monomial::from_indices(&[2, 3]).with_coef(3);
        let r = Monomial::multiply(&a, &b);
        assert_eq!(r.vars(), &[1, 2, 3]);
        assert_eq!(r.coef, BigInt::from(6));
    }

    #[test]
    fn multiply_is_idempotent_on_shared_variables() {
        let a = Monomial::single(1);
        let r = Monomial::multiply(&a, &a);
        assert_eq!(r.vars(), &[1]);
    }
}
