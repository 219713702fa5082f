//! KZG polynomial commitment over a pairing friendly curve.
//!
//! The structured reference string is the usual powers-of-tau: commitments
//! are G1 multi-scalar multiplications, openings are commitments to the
//! synthetic division quotient, verification is a single pairing equation.
//!
//! The MSM used by `commit` is pluggable: either the arkworks
//! variable-base implementation or a portable in-crate Pippenger. Both are
//! bit-identical on the same inputs; the portable one exists to keep the
//! commitment path auditable end to end.

use super::poly;
use crate::Error;
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{AdditiveGroup, Field, One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;

/// Multi-scalar multiplication backend selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MsmBackend {
    /// Arkworks variable-base MSM.
    #[default]
    Arkworks,
    /// In-crate windowed bucket (Pippenger) MSM.
    Portable,
}

/// Window size heuristic for the portable Pippenger.
fn pippenger_window(len: usize) -> usize {
    match len {
        0..=31 => 3,
        32..=255 => 5,
        256..=2047 => 7,
        _ => 9,
    }
}

/// Portable windowed bucket MSM.
pub(crate) fn msm_portable<A: AffineRepr>(bases: &[A], scalars: &[A::ScalarField]) -> A::Group {
    use ark_ff::BigInteger;

    let len = bases.len().min(scalars.len());
    let (bases, scalars) = (&bases[..len], &scalars[..len]);
    let window = pippenger_window(len);
    let num_bits = A::ScalarField::MODULUS_BIT_SIZE as usize;
    let digits: Vec<_> = scalars
        .iter()
        .map(|s| s.into_bigint().to_bits_le())
        .collect();

    let mut result = A::Group::zero();
    let mut window_start = (num_bits.div_ceil(window)) * window;
    while window_start > 0 {
        window_start -= window;
        for _ in 0..window {
            result.double_in_place();
        }
        let mut buckets = ark_std::vec![A::Group::zero(); (1 << window) - 1];
        for (base, bits) in bases.iter().zip(digits.iter()) {
            let mut digit = 0usize;
            for k in (0..window).rev() {
                digit <<= 1;
                if bits.get(window_start + k).copied().unwrap_or(false) {
                    digit |= 1;
                }
            }
            if digit != 0 {
                buckets[digit - 1] += base;
            }
        }
        // Standard bucket aggregation: sum_i i*bucket_i via suffix sums.
        let mut running = A::Group::zero();
        let mut acc = A::Group::zero();
        for b in buckets.iter().rev() {
            running += b;
            acc += running;
        }
        result += acc;
    }
    result
}

/// G1 MSM through the selected backend.
pub(crate) fn msm_g1<P: Pairing>(
    backend: MsmBackend,
    bases: &[P::G1Affine],
    scalars: &[P::ScalarField],
) -> P::G1 {
    match backend {
        MsmBackend::Arkworks => P::G1::msm_unchecked(bases, scalars),
        MsmBackend::Portable => msm_portable(bases, scalars),
    }
}

/// Structured reference string: `{G1, τG1, ..., τ^{n-1}G1}` and `{G2, τG2}`.
///
/// Loaded once from a trusted source (or generated deterministically for
/// tests) and treated as read-only afterwards.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct Srs<P: Pairing> {
    pub powers_in_g1: Vec<P::G1Affine>,
    pub powers_in_g2: Vec<P::G2Affine>,
}

impl<P: Pairing> Srs<P> {
    /// Generate an SRS for polynomials of degree up to `max_degree`.
    ///
    /// The trapdoor τ is sampled from the given rng and dropped. Only
    /// suitable for tests and development; production SRS come from a
    /// trusted setup ceremony file.
    pub fn generate(max_degree: usize, rng: &mut impl ark_std::rand::RngCore) -> Self {
        use ark_std::UniformRand;
        let tau = P::ScalarField::rand(rng);
        let g1 = P::G1Affine::generator();
        let g2 = P::G2Affine::generator();

        let mut powers = Vec::with_capacity(max_degree + 1);
        let mut acc = P::ScalarField::one();
        for _ in 0..=max_degree {
            powers.push(acc);
            acc *= tau;
        }
        let powers_in_g1 =
            P::G1::normalize_batch(&powers.iter().map(|p| g1 * p).collect::<Vec<_>>());
        let powers_in_g2 = ark_std::vec![g2, (g2 * tau).into_affine()];
        Self {
            powers_in_g1,
            powers_in_g2,
        }
    }

    /// Maximum committable polynomial degree.
    pub fn max_degree(&self) -> usize {
        self.powers_in_g1.len().saturating_sub(1)
    }

    /// Drop the powers beyond what is needed for the given G1 length.
    pub fn truncate(&mut self, g1_len: usize) {
        self.powers_in_g1.truncate(g1_len);
        self.powers_in_g2.truncate(2);
    }

    #[inline(always)]
    pub fn g1(&self) -> P::G1Affine {
        self.powers_in_g1[0]
    }

    #[inline(always)]
    pub fn g2(&self) -> P::G2Affine {
        self.powers_in_g2[0]
    }

    #[inline(always)]
    pub fn tau_g2(&self) -> P::G2Affine {
        self.powers_in_g2[1]
    }

    /// Commit to the polynomial with the given coefficients.
    pub fn commit(
        &self,
        backend: MsmBackend,
        coeffs: &[P::ScalarField],
    ) -> Result<P::G1Affine, Error> {
        if coeffs.len() > self.powers_in_g1.len() {
            return Err(Error::DomainMismatch);
        }
        Ok(msm_g1::<P>(backend, &self.powers_in_g1[..coeffs.len()], coeffs).into_affine())
    }

    /// Open the polynomial at `z`: returns the evaluation and the proof
    /// (a commitment to the synthetic division quotient).
    pub fn open(
        &self,
        backend: MsmBackend,
        coeffs: &[P::ScalarField],
        z: &P::ScalarField,
    ) -> Result<(P::ScalarField, P::G1Affine), Error> {
        let y = poly::evaluate(coeffs, z);
        let mut quotient = coeffs.to_vec();
        if let Some(c) = quotient.first_mut() {
            *c -= y;
        }
        let quotient = poly::divide_by_linear(&quotient, z);
        let proof = self.commit(backend, &quotient)?;
        Ok((y, proof))
    }

    /// The small portion of the SRS a verifier needs.
    pub fn raw_vk(&self) -> RawVk<P> {
        RawVk {
            g1: self.g1(),
            g2: self.g2(),
            tau_g2: self.tau_g2(),
        }
    }

    /// Verify an opening: `e(C - y·G1, G2) == e(π, τG2 - z·G2)`.
    pub fn verify(
        &self,
        commitment: &P::G1Affine,
        proof: &P::G1Affine,
        z: &P::ScalarField,
        y: &P::ScalarField,
    ) -> bool {
        self.raw_vk().verify(commitment, proof, z, y)
    }
}

/// KZG verification key: the G1 generator plus the two G2 powers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct RawVk<P: Pairing> {
    pub g1: P::G1Affine,
    pub g2: P::G2Affine,
    pub tau_g2: P::G2Affine,
}

impl<P: Pairing> RawVk<P> {
    /// Verify an opening: `e(C - y·G1, G2) == e(π, τG2 - z·G2)`.
    pub fn verify(
        &self,
        commitment: &P::G1Affine,
        proof: &P::G1Affine,
        z: &P::ScalarField,
        y: &P::ScalarField,
    ) -> bool {
        let lhs_g1 = commitment.into_group() - self.g1 * y;
        let rhs_g2 = self.tau_g2.into_group() - self.g2 * z;
        let check = P::multi_pairing(
            [lhs_g1.into_affine(), (-proof.into_group()).into_affine()],
            [self.g2, rhs_g2.into_affine()],
        );
        check.0.is_one()
    }
}
