//! Thin single-gate substitution constructors.
//!
//! Each function builds the small substitution tail for one logic gate
//! (given the polarity of its inputs) and calls [`Polynomial::replace_var`].
//! They add no algorithmic weight of their own — the coefficient tables
//! below are the entire contribution — but the worked verification
//! scenarios (a full adder, in particular) are most naturally stated in
//! terms of them.

use super::{Monomial, Polynomial, QuotientTerm};
use crate::error::PolyResult;

fn and_tail(a: usize, b: usize, neg_a: bool, neg_b: bool) -> Vec<Monomial> {
    if a == b {
        return match (neg_a, neg_b) {
            (false, false) => vec![Monomial::single(a)],
            (true, true) => vec![Monomial::single(a).with_coef(-1), Monomial::constant()],
            _ => vec![Monomial::constant().with_coef(0)],
        };
    }
    match (neg_a, neg_b) {
        (false, false) => vec![Monomial::pair(a, b)],
        (true, false) => vec![Monomial::pair(a, b).with_coef(-1), Monomial::single(b)],
        (false, true) => vec![Monomial::pair(a, b).with_coef(-1), Monomial::single(a)],
        (true, true) => vec![
            Monomial::pair(a, b),
            Monomial::single(a).with_coef(-1),
            Monomial::single(b).with_coef(-1),
            Monomial::constant(),
        ],
    }
}

fn or_tail(a: usize, b: usize, neg_a: bool, neg_b: bool) -> Vec<Monomial> {
    if a == b {
        return match (neg_a, neg_b) {
            (false, false) => vec![Monomial::single(a)],
            (true, true) => vec![Monomial::single(a).with_coef(-1), Monomial::constant()],
            _ => vec![Monomial::constant()],
        };
    }
    match (neg_a, neg_b) {
        (false, false) => vec![
            Monomial::single(a),
            Monomial::single(b),
            Monomial::pair(a, b).with_coef(-1),
        ],
        (true, false) => vec![
            Monomial::constant(),
            Monomial::single(a).with_coef(-1),
            Monomial::pair(a, b),
        ],
        (false, true) => vec![
            Monomial::constant(),
            Monomial::single(b).with_coef(-1),
            Monomial::pair(a, b),
        ],
        (true, true) => vec![Monomial::constant(), Monomial::pair(a, b).with_coef(-1)],
    }
}

fn xor_tail(a: usize, b: usize, neg_a: bool, neg_b: bool) -> Vec<Monomial> {
    if a == b {
        return vec![Monomial::constant().with_coef(0)];
    }
    let negated = neg_a != neg_b;
    if !negated {
        vec![
            Monomial::single(a),
            Monomial::single(b),
            Monomial::pair(a, b).with_coef(-2),
        ]
    } else {
        vec![
            Monomial::single(a).with_coef(-1),
            Monomial::single(b).with_coef(-1),
            Monomial::pair(a, b).with_coef(2),
            Monomial::constant(),
        ]
    }
}

impl Polynomial {
    /// `v <- AND(a, b)`, with `a`/`b` possibly negated inputs.
    pub fn replace_and(
        &mut self,
        v: usize,
        a: usize,
        neg_a: bool,
        b: usize,
        neg_b: bool,
    ) -> PolyResult<()> {
        let (lo, hi, nlo, nhi) = order_inputs(a, neg_a, b, neg_b);
        self.replace_var(v, &and_tail(lo, hi, nlo, nhi))
    }

    /// `v <- OR(a, b)`, with `a`/`b` possibly negated inputs.
    pub fn replace_or(
        &mut self,
        v: usize,
        a: usize,
        neg_a: bool,
        b: usize,
        neg_b: bool,
    ) -> PolyResult<()> {
        let (lo, hi, nlo, nhi) = order_inputs(a, neg_a, b, neg_b);
        self.replace_var(v, &or_tail(lo, hi, nlo, nhi))
    }

    /// `v <- XOR(a, b)`, with `a`/`b` possibly negated inputs.
    pub fn replace_xor(
        &mut self,
        v: usize,
        a: usize,
        neg_a: bool,
        b: usize,
        neg_b: bool,
    ) -> PolyResult<()> {
        let (lo, hi, nlo, nhi) = order_inputs(a, neg_a, b, neg_b);
        self.replace_var(v, &xor_tail(lo, hi, nlo, nhi))
    }

    /// `v <- NOT(in)`.
    pub fn replace_not(&mut self, v: usize, input: usize) -> PolyResult<()> {
        self.replace_var(
            v,
            &[Monomial::single(input).with_coef(-1), Monomial::constant()],
        )
    }

    /// `v <- in` (identity passthrough).
    pub fn replace_buffer(&mut self, v: usize, input: usize) -> PolyResult<()> {
        self.replace_var(v, &[Monomial::single(input)])
    }

    /// `v <- 0`.
    pub fn replace_con0(&mut self, v: usize) -> PolyResult<()> {
        self.replace_var(v, &[])
    }

    /// `v <- 1`.
    pub fn replace_con1(&mut self, v: usize) -> PolyResult<()> {
        self.replace_var(v, &[Monomial::constant()])
    }

    /// As [`Polynomial::replace_and`], additionally collecting PAC quotient
    /// terms (see [`Polynomial::replace_var_with_quotients`]).
    pub fn replace_and_with_quotients(
        &mut self,
        v: usize,
        a: usize,
        neg_a: bool,
        b: usize,
        neg_b: bool,
    ) -> PolyResult<Vec<QuotientTerm>> {
        let (lo, hi, nlo, nhi) = order_inputs(a, neg_a, b, neg_b);
        self.replace_var_with_quotients(v, &and_tail(lo, hi, nlo, nhi))
    }
}

fn order_inputs(a: usize, neg_a: bool, b: usize, neg_b: bool) -> (usize, usize, bool, bool) {
    if a <= b {
        (a, b, neg_a, neg_b)
    } else {
        (b, a, neg_b, neg_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_of_equal_inputs_is_identity() {
        let mut p = Polynomial::new(3);
        p.add_monomial(Monomial::single(2));
        p.replace_and(2, 1, false, 1, false).unwrap();
        assert!(p.find_exact(&Monomial::single(1)).is_some());
    }

    #[test]
    fn xor_of_equal_inputs_is_zero() {
        let mut p = Polynomial::new(3);
        p.add_monomial(Monomial::single(2));
        p.replace_xor(2, 1, false, 1, false).unwrap();
        assert!(p.is_zero());
    }

    #[test]
    fn and_with_both_negated_inputs_matches_demorgan() {
        // NOT(a) AND NOT(b) = 1 - a - b + a*b
        let mut p = Polynomial::new(4);
        p.add_monomial(Monomial::single(3));
        p.replace_and(3, 1, true, 2, true).unwrap();
        assert!(p.find_exact(&Monomial::constant()).is_some());
        assert!(p.find_exact(&Monomial::single(1)).is_some());
        assert!(p.find_exact(&Monomial::single(2)).is_some());
        assert!(p.find_exact(&Monomial::pair(1, 2)).is_some());
    }

    #[test]
    fn not_composed_with_not_equals_buffer() {
        // spec = x3; x3 <- NOT(x2); x2 <- NOT(x1)  =>  spec should reduce to x1.
        let mut chained = Polynomial::new(4);
        chained.add_monomial(Monomial::single(3));
        chained.replace_not(3, 2).unwrap();
        chained.replace_not(2, 1).unwrap();

        let mut direct = Polynomial::new(4);
        direct.add_monomial(Monomial::single(3));
        direct.replace_buffer(3, 1).unwrap();

        assert_eq!(chained.monomials().len(), direct.monomials().len());
        assert!(chained.find_exact(&Monomial::single(1)).is_some());
    }
}
