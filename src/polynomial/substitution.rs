//! Variable substitution: the core rewriting step.

use super::{Monomial, Polynomial};
use crate::error::{PolyError, PolyResult};
use num_bigint::BigInt;

/// One term of a substitution tail, or of a quotient collected while
/// substituting: a monomial (its shape) paired with a coefficient.
#[derive(Debug, Clone)]
pub struct QuotientTerm {
    pub mono: Monomial,
    pub coef: BigInt,
}

impl Polynomial {
    /// Validate that no monomial of `tail` contains `v`. A substitution
    /// tail that reintroduces the variable being replaced can make
    /// `replace_var` loop forever (each replacement reinserts an occurrence
    /// of `v`, which is then replaced again, ad infinitum); this crate
    /// forbids it at the API boundary rather than relying on `merge`'s
    /// skip-`v` semantics to mask non-termination.
    fn check_tail_terminates(v: usize, tail: &[Monomial]) -> PolyResult<()> {
        if tail.iter().any(|t| t.contains(v)) {
            return Err(PolyError::InvariantViolation {
                reason: format!(
                    "substitution tail for variable x{v} reintroduces x{v}; replace_var would not terminate"
                ),
            });
        }
        Ok(())
    }

    /// Replace every monomial containing variable `v` by substituting
    /// `v -> tail` (i.e. `v -> sum of tail`), leaving every other monomial
    /// untouched. `tail` must not itself contain `v` (see
    /// [`Polynomial::check_tail_terminates`]).
    ///
    /// If a [`crate::proof::ProofSession`] is attached, the substitution
    /// axiom is recorded before any mutation and one inference line,
    /// carrying the real PAC quotient, is appended afterward — the same
    /// quotient [`Polynomial::replace_var_with_quotients`] hands back to its
    /// caller.
    pub fn replace_var(&mut self, v: usize, tail: &[Monomial]) -> PolyResult<()> {
        self.replace_var_with_quotients(v, tail).map(|_| ())
    }

    /// As [`Polynomial::replace_var`], additionally returning the PAC
    /// quotient: for every monomial `m` touched, the term `m / v` (i.e.
    /// `m` with `v` removed, same coefficient) contributes one quotient
    /// term, in the order its monomial was processed.
    pub fn replace_var_with_quotients(
        &mut self,
        v: usize,
        tail: &[Monomial],
    ) -> PolyResult<Vec<QuotientTerm>> {
        self.check_index(v)?;
        Self::check_tail_terminates(v, tail)?;

        if let Some(proof) = self.proof.as_mut() {
            proof.record_axiom(v, tail);
        }

        let mut quotients = Vec::new();
        while let Some(m) = self.ref_lists[v].head_key() {
            let coef = self.poly_set[&m].coef.clone();
            let mut m = m;
            m.coef = coef;
            self.erase_monomial(&m);

            let quotient_vars: Vec<usize> = m.vars().iter().copied().filter(|&x| x != v).collect();
            quotients.push(QuotientTerm {
                mono: Monomial::from_indices(&quotient_vars),
                coef: m.coef.clone(),
            });

            for t in tail {
                let r = m.merge(v, t);
                if !r.is_zero_coef() {
                    self.add_monomial(r);
                }
            }
        }

        if self.proof.is_some() {
            self.record_substitution_step(&quotients);
        }
        Ok(quotients)
    }

    fn record_substitution_step(&mut self, quotients: &[QuotientTerm]) {
        let rendered = self.to_string_opt();
        let mod_step = if self.mod_enabled {
            Some(self.mod_reduction_with_quotient())
        } else {
            None
        };
        let rendered_after_mod = mod_step.as_ref().map(|_| self.to_string_opt());
        if let Some(proof) = self.proof.as_mut() {
            proof.record_inference(quotients, &rendered, mod_step.as_deref(), rendered_after_mod.as_deref());
        }
    }
}
