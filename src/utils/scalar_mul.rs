//! Fixed window scalar multiplication shortcuts.
//!
//! Verification paths repeatedly evaluate short linear combinations such as
//! `s*G - c*P`. These helpers evaluate them with a single shared doubling
//! chain and per-base tables of small multiples (window of 4 bits), instead
//! of one full scalar multiplication per term.
//!
//! All the scalars handled here are public values (challenges and
//! responses), so the digit-dependent branches are fine.

use ark_ec::AffineRepr;
use ark_ff::{AdditiveGroup, BigInteger, PrimeField, Zero};
use ark_std::vec::Vec;

/// Window size in bits.
const WINDOW: usize = 4;

/// Table of the small multiples `[0*P, 1*P, ..., 15*P]`.
fn small_multiples<P: AffineRepr>(base: &P) -> Vec<P::Group> {
    let mut table = Vec::with_capacity(1 << WINDOW);
    table.push(P::Group::zero());
    let base = base.into_group();
    for i in 1..(1 << WINDOW) {
        table.push(table[i - 1] + base);
    }
    table
}

/// Big-endian base-16 digits of a scalar.
fn nibbles_be<F: PrimeField>(scalar: &F) -> Vec<u8> {
    let bytes = scalar.into_bigint().to_bytes_be();
    let mut digits = Vec::with_capacity(2 * bytes.len());
    for b in bytes {
        digits.push(b >> 4);
        digits.push(b & 0x0f);
    }
    digits
}

/// Windowed (w = 4) double-and-add scalar multiplication.
pub fn mul_windowed<P: AffineRepr>(base: &P, scalar: &P::ScalarField) -> P::Group {
    mul_n(&[(*base, *scalar)])
}

/// Simultaneous 2-scalar multiplication: `a*P + b*Q`.
///
/// Single doubling chain over two precomputed tables.
pub fn mul_2<P: AffineRepr>(p: &P, a: &P::ScalarField, q: &P, b: &P::ScalarField) -> P::Group {
    mul_n(&[(*p, *a), (*q, *b)])
}

/// Simultaneous 4-scalar multiplication (two 2-scalar blocks sharing the
/// doubling chain).
#[allow(clippy::too_many_arguments)]
pub fn mul_4<P: AffineRepr>(
    p0: &P,
    a0: &P::ScalarField,
    p1: &P,
    a1: &P::ScalarField,
    p2: &P,
    a2: &P::ScalarField,
    p3: &P,
    a3: &P::ScalarField,
) -> P::Group {
    mul_n(&[(*p0, *a0), (*p1, *a1), (*p2, *a2), (*p3, *a3)])
}

fn mul_n<P: AffineRepr>(terms: &[(P, P::ScalarField)]) -> P::Group {
    let tables: Vec<_> = terms.iter().map(|(p, _)| small_multiples(p)).collect();
    let digits: Vec<_> = terms.iter().map(|(_, s)| nibbles_be(s)).collect();
    let positions = digits.iter().map(|d| d.len()).max().unwrap_or(0);

    let mut acc = P::Group::zero();
    for i in 0..positions {
        for _ in 0..WINDOW {
            acc.double_in_place();
        }
        for (table, digits) in tables.iter().zip(digits.iter()) {
            // Scalars may differ in limb count across curves; align right.
            let Some(j) = (i + digits.len()).checked_sub(positions) else {
                continue;
            };
            let d = digits[j] as usize;
            if d != 0 {
                acc += table[d];
            }
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suites::testing::TestSuite;
    use crate::testing::random_val;
    use crate::{AffinePoint, ScalarField};
    use ark_ec::CurveGroup;

    type A = AffinePoint<TestSuite>;
    type F = ScalarField<TestSuite>;

    #[test]
    fn windowed_matches_arkworks() {
        let p: A = random_val(None);
        let s: F = random_val(None);
        assert_eq!(mul_windowed(&p, &s).into_affine(), (p * s).into_affine());
    }

    #[test]
    fn mul_2_matches_naive() {
        let (p, q): (A, A) = (random_val(None), random_val(None));
        let (a, b): (F, F) = (random_val(None), random_val(None));
        let expected = (p * a + q * b).into_affine();
        assert_eq!(mul_2(&p, &a, &q, &b).into_affine(), expected);
    }

    #[test]
    fn mul_4_matches_naive() {
        let pts: [A; 4] = core::array::from_fn(|_| random_val(None));
        let ks: [F; 4] = core::array::from_fn(|_| random_val(None));
        let expected = (pts[0] * ks[0] + pts[1] * ks[1] + pts[2] * ks[2] + pts[3] * ks[3])
            .into_affine();
        let got = mul_4(
            &pts[0], &ks[0], &pts[1], &ks[1], &pts[2], &ks[2], &pts[3], &ks[3],
        );
        assert_eq!(got.into_affine(), expected);
    }

    #[test]
    fn zero_and_one_scalars() {
        let p: A = random_val(None);
        assert!(mul_windowed(&p, &F::from(0u64)).is_zero());
        assert_eq!(mul_windowed(&p, &F::from(1u64)).into_affine(), p);
    }
}
