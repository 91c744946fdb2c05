//! Multivariate polynomial reduction over the integers (optionally modulo
//! a prime), specialized for verifying combinational Boolean circuits by
//! symbolically substituting gate definitions into a specification
//! polynomial.
//!
//! # Layout
//!
//! - [`monomial`] — sorted, duplicate-free index tuples with big-integer
//!   coefficients.
//! - [`occurrence`] — the per-variable doubly linked lists that make
//!   substitution touch only the monomials that need it.
//! - [`polynomial`] — the [`Polynomial`] type: substitution, phase
//!   optimization, gate shortcuts, and modular reduction.
//! - [`proof`] — PAC proof emission and replay.
//! - [`error`] — the crate's error type.

pub mod error;
pub mod monomial;
pub mod occurrence;
pub mod polynomial;
pub mod proof;

// Most commonly used types, re-exported at the crate root.
pub use error::{PolyError, PolyResult};
pub use monomial::Monomial;
pub use polynomial::{Polynomial, QuotientTerm};
pub use proof::{replay_pac_proof, ProofSession};

/// Commonly used imports, re-exported for convenient `use boolpoly::prelude::*;`.
pub mod prelude {
    pub use crate::error::{PolyError, PolyResult};
    pub use crate::monomial::Monomial;
    pub use crate::polynomial::{Polynomial, QuotientTerm};
    pub use crate::proof::{replay_pac_proof, ProofSession};
}
