//! Optional modular coefficient reduction.
//!
//! When enabled, every coefficient is kept in the canonical residue range
//! `[0, mod_number)` (Euclidean/floor modulo, not truncating), and any
//! monomial whose coefficient reduces to zero is erased.

use super::{Monomial, Polynomial, QuotientTerm};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

impl Polynomial {
    /// Reduce the single monomial matching `shape`'s coefficient in place.
    /// Does not erase a resulting zero coefficient — callers that need that
    /// (e.g. [`Polynomial::add_monomial`]) check afterwards, since not every
    /// call site wants the erase bundled in (mod-reduction-with-quotient
    /// needs the pre-erase coefficient to compute its quotient).
    pub(crate) fn reduce_mod_shape(&mut self, shape: &Monomial) {
        if let Some(entry) = self.poly_set.get_mut(shape) {
            entry.coef = entry.coef.mod_floor(&self.mod_number);
        }
    }

    /// Reduce every coefficient currently in the polynomial, erasing any
    /// that become zero.
    pub(crate) fn reduce_all_mod(&mut self) {
        let shapes: Vec<Monomial> = self.poly_set.keys().cloned().collect();
        for shape in &shapes {
            self.reduce_mod_shape(shape);
        }
        let zeroed: Vec<Monomial> = self
            .poly_set
            .iter()
            .filter(|(_, t)| t.coef.is_zero())
            .map(|(s, _)| s.clone())
            .collect();
        for shape in &zeroed {
            self.erase_monomial(shape);
        }
    }

    /// Reduce every coefficient modulo `self.mod_number`, returning one
    /// [`QuotientTerm`] per monomial whose coefficient actually changed:
    /// `quotient = (coef_after - coef_before) / mod_number`, the term that,
    /// multiplied by the modulus axiom, accounts for the adjustment in a
    /// PAC proof line (see [`crate::proof`]).
    ///
    /// The source's doc comment describes the opposite sign
    /// (`coef_before - coef_after`), but its code computes
    /// `coef_after - coef_before`; this is the sign that keeps the PAC
    /// equation `R = R_before + mod_number * quotient` balanced, so that is
    /// what this implementation follows.
    pub fn mod_reduction_with_quotient(&mut self) -> Vec<QuotientTerm> {
        if !self.mod_enabled || self.mod_number.is_zero() {
            return Vec::new();
        }
        let shapes: Vec<Monomial> = self.poly_set.keys().cloned().collect();
        let mut quotients = Vec::new();
        for shape in &shapes {
            let before = self.poly_set[shape].coef.clone();
            let after = before.mod_floor(&self.mod_number);
            if after != before {
                let diff: BigInt = &after - &before;
                let q = diff / &self.mod_number;
                quotients.push(QuotientTerm {
                    mono: shape.clone(),
                    coef: q,
                });
            }
            self.poly_set.get_mut(shape).unwrap().coef = after;
        }
        let zeroed: Vec<Monomial> = self
            .poly_set
            .iter()
            .filter(|(_, t)| t.coef.is_zero())
            .map(|(s, _)| s.clone())
            .collect();
        for shape in &zeroed {
            self.erase_monomial(shape);
        }
        quotients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monomial::Monomial;

    #[test]
    fn set_mod_reduction_canonicalizes_existing_coefficients() {
        let mut p = Polynomial::new(3);
        p.add_monomial(Monomial::single(0).with_coef(7));
        p.set_mod_reduction(BigInt::from(5));
        let m = p.find_exact(&Monomial::single(0)).unwrap();
        assert_eq!(m.coef, BigInt::from(2));
    }

    #[test]
    fn mod_reduction_erases_zero_residue() {
        let mut p = Polynomial::new(3);
        p.set_mod_reduction(BigInt::from(2));
        p.add_monomial(Monomial::single(0).with_coef(2));
        assert!(p.find_exact(&Monomial::single(0)).is_none());
    }

    #[test]
    fn negative_coefficient_reduces_into_canonical_range() {
        let mut p = Polynomial::new(2);
        p.add_monomial(Monomial::single(0).with_coef(-1));
        p.set_mod_reduction(BigInt::from(3));
        let m = p.find_exact(&Monomial::single(0)).unwrap();
        assert_eq!(m.coef, BigInt::from(2));
    }
}
