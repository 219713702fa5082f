//! Dense polynomial helpers over the SNARK scalar field.
//!
//! Polynomials are plain coefficient vectors, lowest degree first.
//! Only the handful of operations the argument needs are provided; products
//! of full polynomials go through the evaluation domain instead.

use ark_ff::Field;
use ark_std::vec::Vec;

/// `acc += scalar * poly`, extending `acc` as needed.
pub(crate) fn add_assign_scaled<F: Field>(acc: &mut Vec<F>, poly: &[F], scalar: &F) {
    if acc.len() < poly.len() {
        acc.resize(poly.len(), F::zero());
    }
    for (a, c) in acc.iter_mut().zip(poly.iter()) {
        *a += *c * scalar;
    }
}

/// Multiply by the linear factor `(x - z)` in O(n).
pub(crate) fn mul_by_linear<F: Field>(poly: &[F], z: &F) -> Vec<F> {
    let mut out = ark_std::vec![F::zero(); poly.len() + 1];
    for (i, c) in poly.iter().enumerate() {
        out[i + 1] += c;
        out[i] -= *z * c;
    }
    out
}

/// Horner evaluation.
pub(crate) fn evaluate<F: Field>(poly: &[F], x: &F) -> F {
    poly.iter().rev().fold(F::zero(), |acc, c| acc * x + c)
}

/// Synthetic division: returns `q` such that `poly - poly(z) = (x - z) q`.
pub(crate) fn divide_by_linear<F: Field>(poly: &[F], z: &F) -> Vec<F> {
    if poly.len() < 2 {
        return Vec::new();
    }
    let mut quotient = ark_std::vec![F::zero(); poly.len() - 1];
    let mut carry = poly[poly.len() - 1];
    for i in (0..poly.len() - 1).rev() {
        quotient[i] = carry;
        carry = carry * z + poly[i];
    }
    quotient
}

/// Exact division by the vanishing polynomial `x^n - 1`.
///
/// Folds the high coefficient blocks downward; the remainder is discarded
/// (it is zero whenever the dividend vanishes on the domain, which the
/// prover guarantees by construction).
pub(crate) fn divide_by_vanishing<F: Field>(poly: &[F], n: usize) -> Vec<F> {
    if poly.len() <= n {
        return Vec::new();
    }
    let mut quotient = ark_std::vec![F::zero(); poly.len() - n];
    for (i, c) in poly.iter().enumerate().skip(n) {
        quotient[i - n] = *c;
    }
    // x^{n+k} = x^k (mod x^n - 1) scaled folding: q_j collects every
    // coefficient sitting j places above a multiple of n.
    let mut block = 2 * n;
    while block < poly.len() {
        for j in 0..quotient.len().min(poly.len() - block) {
            let c = poly[block + j];
            quotient[j] += c;
        }
        block += n;
    }
    while quotient.last().is_some_and(|c| c.is_zero()) {
        quotient.pop();
    }
    quotient
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::UniformRand;

    type F = ark_bls12_381::Fr;

    fn naive_mul(a: &[F], b: &[F]) -> Vec<F> {
        let mut out = ark_std::vec![F::zero(); a.len() + b.len() - 1];
        for (i, x) in a.iter().enumerate() {
            for (j, y) in b.iter().enumerate() {
                out[i + j] += *x * y;
            }
        }
        out
    }

    #[test]
    fn mul_by_linear_matches_naive() {
        let rng = &mut ark_std::test_rng();
        let poly: Vec<F> = (0..17).map(|_| F::rand(rng)).collect();
        let z = F::rand(rng);
        let expected = naive_mul(&poly, &[-z, F::one()]);
        assert_eq!(mul_by_linear(&poly, &z), expected);
    }

    #[test]
    fn divide_by_linear_roundtrip() {
        let rng = &mut ark_std::test_rng();
        let poly: Vec<F> = (0..23).map(|_| F::rand(rng)).collect();
        let z = F::rand(rng);
        let y = evaluate(&poly, &z);
        let q = divide_by_linear(&poly, &z);
        // (x - z) * q + y == poly
        let mut recomposed = mul_by_linear(&q, &z);
        recomposed[0] += y;
        recomposed.resize(poly.len(), F::zero());
        assert_eq!(recomposed, poly);
    }

    #[test]
    fn divide_by_vanishing_exact() {
        let rng = &mut ark_std::test_rng();
        let n = 8;
        // Build p = q * (x^n - 1) and recover q.
        let q: Vec<F> = (0..20).map(|_| F::rand(rng)).collect();
        let mut p = ark_std::vec![F::zero(); q.len() + n];
        for (i, c) in q.iter().enumerate() {
            p[i + n] += c;
            p[i] -= c;
        }
        assert_eq!(divide_by_vanishing(&p, n), q);
    }
}
