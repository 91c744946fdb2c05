//! The [`Polynomial`] type: a sorted set of monomials dual-indexed by
//! per-variable occurrence lists, enabling variable substitution in time
//! proportional to the monomials actually touched.
//!
//! The submodules split the operations the way the size of each concern
//! warrants:
//! - [`substitution`] — `replace_var` and its proof-collecting variant.
//! - [`phase`] — the variable-negation size-reduction heuristic.
//! - [`gates`] — thin AND/OR/XOR/NOT/BUFFER/CON0/CON1 constructors over
//!   `replace_var`.
//! - [`modular`] — optional coefficient reduction modulo a prime.
//! - [`display`] — text rendering, with and without phase annotations.

mod display;
mod gates;
mod modular;
mod phase;
mod substitution;

pub use substitution::QuotientTerm;

use crate::error::{PolyError, PolyResult};
use crate::monomial::Monomial;
use crate::occurrence::{Handle, OccurrenceList};
use crate::proof::ProofSession;
use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::BTreeMap;

/// Per-monomial bookkeeping kept alongside its canonical storage: the
/// authoritative coefficient (the copy inside the `Monomial` key is never
/// read back out once inserted) and one occurrence-list handle per variable,
/// in the same order as `Monomial::vars`.
pub(crate) struct Term {
    pub coef: BigInt,
    pub handles: Vec<Handle>,
}

/// A multivariate polynomial over Boolean-valued variables `0..var_size`,
/// with optional modular coefficient reduction and an optional attached
/// [`ProofSession`] that observes substitutions.
pub struct Polynomial {
    var_size: usize,
    pub(crate) poly_set: BTreeMap<Monomial, Term>,
    pub(crate) ref_lists: Vec<OccurrenceList<Monomial>>,
    pub(crate) phases: Vec<bool>,
    pub(crate) mod_enabled: bool,
    pub(crate) mod_number: BigInt,
    pub(crate) proof: Option<ProofSession>,
}

impl Polynomial {
    /// An empty (zero) polynomial over variables `0..var_size`.
    pub fn new(var_size: usize) -> Self {
        Polynomial {
            var_size,
            poly_set: BTreeMap::new(),
            ref_lists: (0..var_size).map(|_| OccurrenceList::new()).collect(),
            phases: vec![true; var_size],
            mod_enabled: false,
            mod_number: BigInt::zero(),
            proof: None,
        }
    }

    /// Number of distinct monomials currently stored.
    pub fn size(&self) -> usize {
        self.poly_set.len()
    }

    /// Variable capacity: the smallest valid upper bound on indices this
    /// polynomial may contain.
    pub fn var_size(&self) -> usize {
        self.var_size
    }

    /// Whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.poly_set.is_empty()
    }

    /// Clears all monomials and resizes variable capacity. Phase bits and
    /// modular-reduction configuration are preserved in shape (bits are
    /// reset to "not negated" for any variable, old or new).
    pub fn resize(&mut self, new_var_size: usize) {
        self.var_size = new_var_size;
        self.poly_set.clear();
        self.ref_lists = (0..new_var_size).map(|_| OccurrenceList::new()).collect();
        self.phases = vec![true; new_var_size];
    }

    fn check_index(&self, v: usize) -> PolyResult<()> {
        if v >= self.var_size {
            Err(PolyError::OutOfRange {
                index: v,
                var_size: self.var_size,
            })
        } else {
            Ok(())
        }
    }

    /// `p <- p + m`. Folds into an existing monomial of the same shape if
    /// one is present; erases the result if the coefficient becomes zero
    /// (including via modular reduction, when enabled).
    pub fn add_monomial(&mut self, m: Monomial) {
        let shape = m.clone();
        if let Some(entry) = self.poly_set.get_mut(&shape) {
            entry.coef += &m.coef;
        } else {
            let vars = m.vars().to_vec();
            let mut handles = Vec::with_capacity(vars.len());
            for &v in &vars {
                handles.push(self.ref_lists[v].push_back(m.clone()));
            }
            let coef = m.coef.clone();
            self.poly_set.insert(m, Term { coef, handles });
        }
        if self.mod_enabled {
            self.reduce_mod_shape(&shape);
        }
        if self
            .poly_set
            .get(&shape)
            .map(|t| t.coef.is_zero())
            .unwrap_or(false)
        {
            self.erase_monomial(&shape);
        }
    }

    /// Erase the monomial with the same shape as `m`, if present, unlinking
    /// every occurrence-list handle it held.
    pub fn erase_monomial(&mut self, m: &Monomial) {
        if let Some(term) = self.poly_set.remove(m) {
            for (&v, &h) in m.vars().iter().zip(term.handles.iter()) {
                self.ref_lists[v].unlink(h);
            }
        }
    }

    /// Adds every monomial of `other` into `self`. Fails if `other` needs a
    /// larger variable capacity than `self` provides.
    pub fn add_polynomial(&mut self, other: &Polynomial) -> PolyResult<()> {
        if other.var_size > self.var_size {
            return Err(PolyError::CapacityError {
                have: self.var_size,
                need: other.var_size,
            });
        }
        for (shape, term) in other.poly_set.iter() {
            let mut m = shape.clone();
            m.coef = term.coef.clone();
            self.add_monomial(m);
        }
        Ok(())
    }

    /// All monomials that contain every variable of `mon`.
    pub fn find_containing(&self, mon: &Monomial) -> Vec<Monomial> {
        if mon.vars().is_empty() {
            return self.poly_set.keys().cloned().map(|mut k| {
                k.coef = self.poly_set[&k].coef.clone();
                k
            }).collect();
        }
        let shortest_var = mon
            .vars()
            .iter()
            .copied()
            .min_by_key(|&v| self.ref_lists[v].len())
            .unwrap();
        self.ref_lists[shortest_var]
            .iter_keys()
            .filter(|cand| mon.vars().iter().all(|&v| cand.contains(v)))
            .map(|mut cand| {
                cand.coef = self.poly_set[&cand].coef.clone();
                cand
            })
            .collect()
    }

    /// All monomials exactly equal in shape to `mon` (there can be at most
    /// one, since `poly_set` never holds duplicate shapes).
    pub fn find_exact(&self, mon: &Monomial) -> Option<Monomial> {
        self.poly_set.get(mon).map(|term| {
            let mut m = mon.clone();
            m.coef = term.coef.clone();
            m
        })
    }

    /// Whether variable `v` occurs in any monomial.
    pub fn contains_var(&self, v: usize) -> PolyResult<bool> {
        self.check_index(v)?;
        Ok(!self.ref_lists[v].is_empty())
    }

    /// All monomials, in canonical order, with their live coefficients.
    pub fn monomials(&self) -> Vec<Monomial> {
        self.poly_set
            .iter()
            .map(|(shape, term)| {
                let mut m = shape.clone();
                m.coef = term.coef.clone();
                m
            })
            .collect()
    }

    /// The monomial with smallest `(size, sum)` in the polynomial — in the
    /// circuit-verification use case, the shortest monomial of a non-zero
    /// residual polynomial is the smallest partial assignment witnessing
    /// non-equivalence between spec and circuit.
    pub fn get_shortest_model(&self) -> Option<Monomial> {
        self.poly_set.keys().next().map(|shape| {
            let mut m = shape.clone();
            m.coef = self.poly_set[shape].coef.clone();
            m
        })
    }

    /// Full polynomial product `a * b`, built term by term (not optimized
    /// for dense inputs — see crate-level non-goals).
    pub fn multiply_poly(a: &Polynomial, b: &Polynomial) -> Polynomial {
        let var_size = a.var_size.max(b.var_size);
        let mut out = Polynomial::new(var_size);
        for ma in a.monomials() {
            for mb in b.monomials() {
                out.add_monomial(Monomial::multiply(&ma, &mb));
            }
        }
        out
    }

    /// Enable modular coefficient reduction: every coefficient is kept in
    /// `[0, modulus)`, and zero-coefficient monomials are erased eagerly.
    pub fn set_mod_reduction(&mut self, modulus: BigInt) {
        self.mod_enabled = !modulus.is_zero();
        self.mod_number = modulus;
        if self.mod_enabled {
            self.reduce_all_mod();
        }
    }

    /// Attach a proof session; substitutions performed while attached are
    /// recorded. Phase optimization refuses to run while a session is
    /// attached (see [`phase`]).
    pub fn attach_proof_session(&mut self, session: ProofSession) {
        self.proof = Some(session);
    }

    /// Detach and return the current proof session, if any.
    pub fn detach_proof_session(&mut self) -> Option<ProofSession> {
        self.proof.take()
    }
}

