//! S6: generate a PAC proof while reducing a full adder, then replay the
//! emitted polys file and check the replayed polynomial matches.

use boolpoly::{replay_pac_proof, Monomial, Polynomial, ProofSession};
use num_bigint::BigInt;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("boolpoly-it-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn s6_replayed_proof_matches_direct_reduction() {
    let dir = scratch_dir("full-adder");
    let polys_path = dir.join("polys.txt");
    let proof_path = dir.join("proof.txt");

    let mut spec = Polynomial::new(9);
    spec.add_monomial(Monomial::single(8).with_coef(2));
    spec.add_monomial(Monomial::single(7));

    let mut session = ProofSession::new(&polys_path, &proof_path);
    session.begin(8, &BigInt::from(0), &spec).unwrap();
    spec.attach_proof_session(session);

    spec.replace_or(8, 5, false, 6, false).unwrap();
    spec.replace_xor(7, 3, false, 4, false).unwrap();
    spec.replace_and(6, 3, false, 4, false).unwrap();
    spec.replace_and(5, 1, false, 2, false).unwrap();
    spec.replace_xor(4, 1, false, 2, false).unwrap();

    let mut direct_sorted: Vec<_> = spec.monomials().into_iter().map(|m| (m.vars().to_vec(), m.coef)).collect();
    direct_sorted.sort();

    let replayed = replay_pac_proof(&polys_path).unwrap();
    let mut replayed_sorted: Vec<_> = replayed.monomials().into_iter().map(|m| (m.vars().to_vec(), m.coef)).collect();
    replayed_sorted.sort();

    assert_eq!(direct_sorted, replayed_sorted);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn replay_rejects_missing_file() {
    let err = replay_pac_proof("/nonexistent/path/that/should/not/exist.txt");
    assert!(err.is_err());
}
