//! Text rendering of polynomials.
//!
//! Two independent axes: whether phase bits are annotated, and which term
//! order is used (the `_opt` variants render in the PAC-oriented compact
//! syntax consumed by [`crate::proof`]; the others are for human reading).

use super::Polynomial;
use crate::monomial::signed_coef;
use std::fmt::Write as _;

impl Polynomial {
    /// Render in ascending canonical (sum, size, lex) order.
    pub fn to_string_asc(&self) -> String {
        self.render(false, false)
    }

    /// Render in descending canonical order (reverse of storage order).
    pub fn to_string_desc(&self) -> String {
        self.render(false, true)
    }

    /// Render annotating each variable with its current phase
    /// (`x5` if not negated, `(1-x5)` if negated).
    pub fn to_string_with_phases(&self) -> String {
        self.render(true, false)
    }

    /// Compact PAC-oriented syntax: `+c*xI*xJ...` with no spaces, suitable
    /// as input to [`crate::proof`]'s string normalization.
    pub fn to_string_opt(&self) -> String {
        let mut out = String::new();
        for m in self.monomials() {
            out.push_str(&signed_coef(&m.coef));
            for v in m.vars() {
                write!(out, "*x{v}").unwrap();
            }
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }

    fn render(&self, with_phases: bool, descending: bool) -> String {
        let mut terms = self.monomials();
        if descending {
            terms.reverse();
        }
        let mut out = String::new();
        for (i, m) in terms.iter().enumerate() {
            if i > 0 {
                out.push_str(" + ");
            }
            write!(out, "{}", m.coef).unwrap();
            for &v in m.vars() {
                if with_phases && !self.phases[v] {
                    write!(out, "*(1-x{v})").unwrap();
                } else {
                    write!(out, "*x{v}").unwrap();
                }
            }
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monomial::Monomial;

    #[test]
    fn to_string_opt_renders_compact_signed_terms() {
        let mut p = Polynomial::new(3);
        p.add_monomial(Monomial::single(1).with_coef(2));
        p.add_monomial(Monomial::single(2).with_coef(-1));
        let s = p.to_string_opt();
        assert!(s.contains("+2*x1"));
        assert!(s.contains("-1*x2"));
    }

    #[test]
    fn empty_polynomial_renders_as_zero() {
        let p = Polynomial::new(2);
        assert_eq!(p.to_string_opt(), "0");
        assert_eq!(p.to_string_asc(), "0");
    }

    #[test]
    fn to_string_with_phases_annotates_negated_variables() {
        let mut p = Polynomial::new(2);
        p.add_monomial(Monomial::single(0));
        p.negate_var(0).unwrap();
        let s = p.to_string_with_phases();
        assert!(s.contains("(1-x0)"));
    }
}
