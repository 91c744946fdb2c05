//! PAC (Practical Algebraic Calculus) proof emission and replay.
//!
//! While a [`ProofSession`] is attached to a [`crate::Polynomial`], every
//! [`crate::Polynomial::replace_var`] call records one axiom line (the
//! substitution polynomial) to the *polys file* and one inference line
//! (quotient + resulting remainder) to the *proof file*. [`replay_pac_proof`]
//! reads a previously written polys file back and re-derives the same
//! final polynomial, closing the generate/replay loop.

use crate::error::{PolyError, PolyResult};
use crate::monomial::{signed_coef, Monomial};
use crate::polynomial::QuotientTerm;
use crate::Polynomial;
use num_bigint::BigInt;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Side-channel state for one proof-generation run: output file paths, the
/// monotonically increasing axiom counter, and whether the first inference
/// line has been written yet (the first line's "previous axiom" reference
/// is special-cased to axiom `2`, the starting polynomial).
pub struct ProofSession {
    polys_path: PathBuf,
    proof_path: PathBuf,
    axiom_num: u64,
    first_line: bool,
}

impl ProofSession {
    /// A session targeting the given polys/proof file paths. Does not touch
    /// the filesystem until [`ProofSession::begin`] is called.
    pub fn new(polys_path: impl Into<PathBuf>, proof_path: impl Into<PathBuf>) -> Self {
        ProofSession {
            polys_path: polys_path.into(),
            proof_path: proof_path.into(),
            axiom_num: 0,
            first_line: true,
        }
    }

    /// Write the three header axioms (max variable index, modular
    /// coefficient, starting polynomial) to the polys file, truncating any
    /// previous contents, and truncate the proof file.
    pub fn begin(&mut self, max_var_index: usize, mod_coef: &BigInt, spec: &Polynomial) -> PolyResult<()> {
        self.axiom_num = 0;
        self.first_line = true;
        let mut polys = open_truncate(&self.polys_path)?;
        writeln!(polys, "{} {};", self.next_axiom(), max_var_index)
            .map_err(|e| io_err(e, &self.polys_path))?;
        writeln!(polys, "{} {};", self.next_axiom(), mod_coef)
            .map_err(|e| io_err(e, &self.polys_path))?;
        writeln!(
            polys,
            "{} {};",
            self.next_axiom(),
            to_pac_format(&spec.to_string_opt())
        )
        .map_err(|e| io_err(e, &self.polys_path))?;
        open_truncate(&self.proof_path)?;
        Ok(())
    }

    fn next_axiom(&mut self) -> u64 {
        let n = self.axiom_num;
        self.axiom_num += 1;
        n
    }

    /// Append one substitution-polynomial axiom (`-x_v + tail`) to the
    /// polys file.
    pub(crate) fn record_axiom(&mut self, v: usize, tail: &[Monomial]) {
        let mut raw = format!("-1*x{v}");
        for t in tail {
            raw.push_str(&signed_coef(&t.coef));
            for idx in t.vars() {
                raw.push_str(&format!("*x{idx}"));
            }
        }
        let line = format!("{} {};", self.next_axiom(), to_pac_format(&raw));
        if let Ok(mut f) = open_append(&self.polys_path) {
            let _ = writeln!(f, "{line}");
        }
    }

    /// Append one inference line (and, unless this is the very first step,
    /// a deletion marker for the axiom it consumed) to the proof file. The
    /// only call site is [`crate::Polynomial::replace_var_with_quotients`]
    /// (including plain [`crate::Polynomial::replace_var`], which now always
    /// collects its quotient); there is no code path that writes an
    /// inference line with an empty, unverifiable `Q`.
    pub(crate) fn record_inference(
        &mut self,
        quotients: &[QuotientTerm],
        rendered_after: &str,
        mod_step: Option<&[QuotientTerm]>,
        rendered_after_mod: Option<&str>,
    ) {
        let used_axiom = self.axiom_num - 1;
        let quotient_str = join_signed_terms(quotients);
        let new_axiom = self.next_axiom();
        let prev_axiom = if self.first_line {
            self.first_line = false;
            "2".to_string()
        } else {
            (new_axiom - 1).to_string()
        };
        let mut line = format!(
            "{new_axiom} % {used_axiom} *({quotient_str}) + {prev_axiom}, {rendered_after};"
        );
        if let (Some(mod_terms), Some(after_mod)) = (mod_step, rendered_after_mod) {
            if !mod_terms.is_empty() {
                let mod_quotient_str = join_signed_terms(mod_terms);
                line = line.trim_end_matches(';').to_string();
                let cut = line.find(", ").unwrap_or(line.len());
                line.truncate(cut);
                line.push_str(&format!(" + 1 *({mod_quotient_str}), {after_mod};"));
            }
        }
        let write_delete = !(used_axiom == 1 && prev_axiom == "2");
        if let Ok(mut f) = open_append(&self.proof_path) {
            let _ = writeln!(f, "{line}");
            if write_delete {
                let _ = writeln!(f, "{used_axiom} d;");
            }
        }
    }
}

fn join_signed_terms(terms: &[QuotientTerm]) -> String {
    let mut out = String::new();
    for (i, t) in terms.iter().enumerate() {
        let mut rendered = signed_coef(&t.coef);
        for v in t.mono.vars() {
            rendered.push_str(&format!("*x{v}"));
        }
        let rendered = to_pac_format(&rendered);
        out.push_str(&rendered);
        if i + 1 != terms.len() && !terms[i + 1].coef.to_string().starts_with('-') {
            out.push('+');
        }
    }
    out
}

/// Normalize a rendered polynomial string into PAC syntax: strip brackets
/// and spaces, collapse `+-`/`*-`/`*+` into `-`/`-`/`+`, expand bare `-x...`
/// into `-1*x...`, and shrink the resulting `"1*"` prefix away (but only on
/// an exact match, mirroring the source's narrow special case).
pub(crate) fn to_pac_format(input: &str) -> String {
    let mut s: String = input.chars().filter(|&c| c != '[' && c != ']' && c != ' ').collect();
    loop {
        if let Some(pos) = s.find("+-") {
            s.replace_range(pos..pos + 2, "-");
        } else {
            break;
        }
    }
    loop {
        if let Some(pos) = s.find("*-") {
            s.replace_range(pos..pos + 2, "-");
        } else {
            break;
        }
    }
    loop {
        if let Some(pos) = s.find("*+") {
            s.replace_range(pos..pos + 2, "+");
        } else {
            break;
        }
    }
    loop {
        if let Some(pos) = s.find("-x") {
            s.replace_range(pos..pos + 2, "-1*x");
        } else {
            break;
        }
    }
    if s == "1*" {
        s.remove(1);
    }
    s
}

fn open_truncate(path: &Path) -> PolyResult<std::fs::File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| io_err(e, path))
}

fn open_append(path: &Path) -> std::io::Result<std::fs::File> {
    OpenOptions::new().append(true).create(true).open(path)
}

fn io_err(e: std::io::Error, path: &Path) -> PolyError {
    PolyError::FileError {
        path: path.display().to_string(),
        source: e.to_string(),
    }
}

/// Parse one PAC-format polynomial payload (after axiom-id and trailing
/// `;` have been stripped) back into monomials, each pushed into `target`.
fn parse_pac_polynomial(line: &str) -> Vec<Monomial> {
    let mut monomials = Vec::new();
    let mut term_start = 0usize;
    let bytes = line.as_bytes();
    for i in 1..=bytes.len() {
        let at_boundary = i == bytes.len() || bytes[i] == b'+' || bytes[i] == b'-';
        if at_boundary && i != term_start {
            monomials.push(parse_pac_term(&line[term_start..i]));
            term_start = i;
        }
    }
    monomials
}

fn parse_pac_term(term: &str) -> Monomial {
    let mut parts = term.split('*');
    let coef_str = parts.next().unwrap_or("1").trim_start_matches('+');
    let coef: BigInt = coef_str.parse().unwrap_or_else(|_| BigInt::from(1));
    let vars: Vec<usize> = parts
        .filter_map(|p| p.strip_prefix('x'))
        .filter_map(|n| n.parse::<usize>().ok())
        .collect();
    Monomial::from_indices(&vars).with_coef(coef)
}

fn strip_id_and_semicolon(line: &str) -> &str {
    let line = line.trim_end_matches(';').trim_end_matches(|c: char| c == ';');
    match line.find(' ') {
        Some(pos) => &line[pos + 1..],
        None => line,
    }
}

/// Replay a previously emitted polys file: read its three header lines to
/// rebuild the starting polynomial, then re-run `replace_var` for every
/// subsequent substitution axiom, exactly mirroring the forward direction.
/// Scoped to this crate's own axiom-line micro-format, not the general
/// user-facing polynomial file format.
pub fn replay_pac_proof(polys_path: impl AsRef<Path>) -> PolyResult<Polynomial> {
    let path = polys_path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| io_err(e, path))?;
    let reader = BufReader::new(file);
    let mut poly: Option<Polynomial> = None;
    let mut mod_coef = BigInt::from(0);

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| io_err(e, path))?;
        let payload = strip_id_and_semicolon(&line);
        match line_num {
            0 => {
                let max_var: usize = payload.parse().map_err(|_| PolyError::InvariantViolation {
                    reason: format!("expected max variable index on line 1, got '{payload}'"),
                })?;
                poly = Some(Polynomial::new(max_var + 1));
            }
            1 => {
                mod_coef = payload.parse().unwrap_or_else(|_| BigInt::from(0));
            }
            2 => {
                let p = poly.as_mut().ok_or_else(|| PolyError::InvariantViolation {
                    reason: "polys file missing header line 1".to_string(),
                })?;
                for m in parse_pac_polynomial(payload) {
                    p.add_monomial(m);
                }
                if mod_coef > BigInt::from(0) {
                    p.set_mod_reduction(mod_coef.clone());
                }
            }
            _ => {
                let terms = parse_pac_polynomial(payload);
                let (leading, tail) = terms.split_first().ok_or_else(|| PolyError::InvariantViolation {
                    reason: format!("empty substitution axiom on line {}", line_num + 1),
                })?;
                let v = *leading.vars().first().ok_or_else(|| PolyError::InvariantViolation {
                    reason: "leading term of substitution axiom has no variable".to_string(),
                })?;
                poly.as_mut().unwrap().replace_var(v, tail)?;
            }
        }
    }
    poly.ok_or_else(|| PolyError::InvariantViolation {
        reason: "polys file was empty".to_string(),
    })
}
