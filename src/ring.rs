//! # Ring VRF
//!
//! Anonymous VRF scheme based on [BCHSV23](https://eprint.iacr.org/2023/002):
//! a [Pedersen VRF](crate::pedersen) proof plus a succinct argument, built
//! by the [`crate::ring_proof`] backend, that the key commitment opens to a
//! member of a ring of public keys.
//!
//! ## Usage example
//!
//! ```rust,ignore
//! use ec_vrfs::suites::bandersnatch::*;
//!
//! const RING_SIZE: usize = 100;
//! let prover_key_index = 3;
//!
//! // Ring of public keys, with the prover key somewhere inside.
//! let mut ring: Vec<_> = (0..RING_SIZE)
//!     .map(|i| Secret::from_seed(&i.to_le_bytes()).public().0)
//!     .collect();
//! ring[prover_key_index] = public.0;
//!
//! let params = RingProofParams::from_seed(RING_SIZE, [0; 32]);
//!
//! // Proving
//! use ec_vrfs::ring::Prover;
//! let prover_key = params.prover_key(&ring)?;
//! let prover = params.prover(prover_key, prover_key_index)?;
//! let proof = secret.prove(input, output, aux_data, &prover)?;
//!
//! // Verification; the verifier key can also be rebuilt from the compact
//! // ring root commitment.
//! use ec_vrfs::ring::Verifier;
//! let verifier_key = params.verifier_key(&ring)?;
//! let verifier = params.verifier(verifier_key);
//! let result = Public::verify(input, output, aux_data, &proof, &verifier);
//! ```

use crate::*;
use ark_ec::twisted_edwards::TECurveConfig;
use crate::pedersen::{PedersenSuite, Proof as PedersenProof};
use crate::ring_proof::{MsmBackend, Srs};
use crate::utils::te_sw_map::TEMapping;

/// Magic spell for [`RingSuite::ACCUMULATOR_BASE`] generation in built-in
/// implementations.
///
/// (en) *"The foundation of the accumulator which in the silence of time guards the hidden secret"*
pub const ACCUMULATOR_BASE_SEED: &[u8] =
    b"substratum accumulatoris quod in silentio temporis arcanum absconditum custodit";

/// Magic spell for [`RingSuite::PADDING`] generation in built-in
/// implementations.
///
/// (en) *"A shadow that fills the void left by lost souls echoing among the darkness"*
pub const PADDING_SEED: &[u8] =
    b"umbra quae vacuum implet ab animabus perditis relictum inter tenebras resonans";

/// Ring suite.
pub trait RingSuite:
    PedersenSuite<
    Affine: AffineRepr<BaseField: ark_ff::PrimeField, Config: TECurveConfig + Clone>
                + TEMapping<<Self::Affine as AffineRepr>::Config>,
>
{
    /// Pairing backing the KZG commitments.
    ///
    /// Its scalar field must coincide with the VRF curve base field.
    type Pairing: ark_ec::pairing::Pairing<ScalarField = BaseField<Self>>;

    /// Accumulator base.
    ///
    /// Required to be in the prime order subgroup.
    const ACCUMULATOR_BASE: AffinePoint<Self>;

    /// Padding point with unknown discrete log, filling unused key slots.
    const PADDING: AffinePoint<Self>;
}

/// Structured reference string (powers of tau).
pub type PcsParams<S> = Srs<<S as RingSuite>::Pairing>;

/// Polynomial IOP parameters.
pub type PiopParams<S> = ring_proof::PiopParams<CurveConfig<S>>;

/// Ring keys commitment ("ring root").
pub type RingCommitment<S> = ring_proof::FixedColumnsCommitted<<S as RingSuite>::Pairing>;

/// Ring prover key.
pub type RingProverKey<S> = ring_proof::ProverKey<<S as RingSuite>::Pairing, CurveConfig<S>>;

/// Ring verifier key.
pub type RingVerifierKey<S> = ring_proof::VerifierKey<<S as RingSuite>::Pairing>;

/// Ring prover.
pub type RingProver<S> = ring_proof::RingProver<<S as RingSuite>::Pairing, CurveConfig<S>>;

/// Ring verifier.
pub type RingVerifier<S> = ring_proof::RingVerifier<<S as RingSuite>::Pairing, CurveConfig<S>>;

/// Raw ring membership proof.
pub type RingBareProof<S> = ring_proof::RingProof<<S as RingSuite>::Pairing>;

/// Ring VRF proof.
///
/// Two-part proof with signer anonymity:
/// - `pedersen_proof`: key commitment and VRF correctness proof;
/// - `ring_proof`: membership proof binding the commitment to the ring.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<S: RingSuite> {
    pub pedersen_proof: PedersenProof<S>,
    pub ring_proof: RingBareProof<S>,
}

/// Trait for types able to generate ring VRF proofs.
pub trait Prover<S: RingSuite> {
    /// Generate a proof for the given input/output and additional data,
    /// sampling the Pedersen blinding from the given randomness source.
    ///
    /// Fails with [`Error::KeyNotInRing`] when the ring position bound to
    /// `ring_prover` does not hold this secret's public key.
    fn prove_with_rng(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        ring_prover: &RingProver<S>,
        rng: &mut impl ark_std::rand::RngCore,
    ) -> Result<Proof<S>, Error>;

    /// As [`Self::prove_with_rng`], with operating system randomness.
    #[cfg(feature = "std")]
    fn prove(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        ring_prover: &RingProver<S>,
    ) -> Result<Proof<S>, Error> {
        self.prove_with_rng(input, output, ad, ring_prover, &mut ark_std::rand::rngs::OsRng)
    }
}

/// Trait for entities able to verify ring VRF proofs.
pub trait Verifier<S: RingSuite> {
    /// Verify a proof for the given input/output and additional data.
    fn verify(
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        sig: &Proof<S>,
        verifier: &RingVerifier<S>,
    ) -> Result<(), Error>;
}

impl<S: RingSuite> Prover<S> for Secret<S> {
    fn prove_with_rng(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        ring_prover: &RingProver<S>,
        rng: &mut impl ark_std::rand::RngCore,
    ) -> Result<Proof<S>, Error> {
        use crate::pedersen::Prover as PedersenProver;
        if ring_prover.key() != self.public.0.into_te() {
            return Err(Error::KeyNotInRing);
        }
        let (pedersen_proof, secret_blinding) =
            <Self as PedersenProver<S>>::prove_with_rng(self, input, output, ad, rng);
        let ring_proof = ring_prover.prove(secret_blinding)?;
        Ok(Proof {
            pedersen_proof,
            ring_proof,
        })
    }
}

impl<S: RingSuite> Verifier<S> for Public<S> {
    fn verify(
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        proof: &Proof<S>,
        verifier: &RingVerifier<S>,
    ) -> Result<(), Error> {
        use crate::pedersen::Verifier as PedersenVerifier;
        <Self as PedersenVerifier<S>>::verify(input, output, ad, &proof.pedersen_proof)?;
        let key_commitment = proof.pedersen_proof.key_commitment().into_te();
        verifier.verify(&proof.ring_proof, key_commitment)
    }
}

pub(crate) fn piop_params<S: RingSuite>(domain_size: usize) -> Result<PiopParams<S>, Error> {
    PiopParams::<S>::setup(
        domain_size,
        S::ACCUMULATOR_BASE.into_te(),
        S::BLINDING_BASE.into_te(),
        S::PADDING.into_te(),
    )
}

/// Ring proof parameters.
///
/// Bundles the SRS with the per-domain IOP precomputation. Loaded (or
/// generated) once and treated as read-only afterwards.
#[derive(Clone)]
pub struct RingProofParams<S: RingSuite> {
    /// SRS (powers of tau).
    pub pcs: PcsParams<S>,
    /// IOP parameters.
    pub piop: PiopParams<S>,
    /// Commitment MSM backend.
    pub backend: MsmBackend,
}

impl<S: RingSuite> RingProofParams<S> {
    /// Construct deterministic parameters for the given ring size.
    ///
    /// Uses a `ChaCha20Rng` seeded with `seed` for the SRS trapdoor; for
    /// testing purposes only.
    pub fn from_seed(ring_size: usize, seed: [u8; 32]) -> Result<Self, Error> {
        use ark_std::rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha20Rng::from_seed(seed);
        Self::from_rand(ring_size, &mut rng)
    }

    /// Construct parameters with a freshly generated SRS; for testing
    /// purposes only.
    pub fn from_rand(ring_size: usize, rng: &mut impl ark_std::rand::RngCore) -> Result<Self, Error> {
        let max_degree = pcs_domain_size::<S>(ring_size) - 1;
        let pcs = Srs::generate(max_degree, rng);
        Self::from_srs(ring_size, pcs)
    }

    /// Construct parameters from an existing (trusted setup) SRS.
    ///
    /// The SRS is truncated to the required degree; an SRS too small for
    /// the requested ring size yields `DomainMismatch`.
    pub fn from_srs(ring_size: usize, mut pcs: PcsParams<S>) -> Result<Self, Error> {
        let pcs_domain_size = pcs_domain_size::<S>(ring_size);
        if pcs.powers_in_g1.len() < pcs_domain_size || pcs.powers_in_g2.len() < 2 {
            return Err(Error::DomainMismatch);
        }
        pcs.truncate(pcs_domain_size);
        let piop = piop_params::<S>(piop_domain_size::<S>(ring_size))?;
        Ok(Self {
            pcs,
            piop,
            backend: MsmBackend::default(),
        })
    }

    /// The max ring size these parameters are able to handle.
    #[inline(always)]
    pub fn max_ring_size(&self) -> usize {
        self.piop.keyset_size()
    }

    /// Find the index of a public key in a ring.
    pub fn key_index(pks: &[AffinePoint<S>], pk: &AffinePoint<S>) -> Result<usize, Error> {
        pks.iter().position(|p| p == pk).ok_or(Error::KeyNotInRing)
    }

    /// Create a prover key for the given ring of public keys.
    pub fn prover_key(&self, pks: &[AffinePoint<S>]) -> Result<RingProverKey<S>, Error> {
        let pks = TEMapping::to_te_slice(pks);
        let fixed = ring_proof::FixedColumns::build(&self.piop, &pks)?;
        let committed = fixed.commit(&self.pcs, self.backend)?;
        Ok(RingProverKey::<S> { fixed, committed })
    }

    /// Create a prover instance for a specific position in the ring.
    pub fn prover(
        &self,
        prover_key: RingProverKey<S>,
        key_index: usize,
    ) -> Result<RingProver<S>, Error> {
        RingProver::<S>::init(
            self.pcs.clone(),
            self.piop.clone(),
            prover_key,
            key_index,
            self.backend,
            S::SUITE_ID,
        )
    }

    /// Create a verifier key for the given ring of public keys.
    pub fn verifier_key(&self, pks: &[AffinePoint<S>]) -> Result<RingVerifierKey<S>, Error> {
        let pks = TEMapping::to_te_slice(pks);
        let fixed = ring_proof::FixedColumns::build(&self.piop, &pks)?;
        let committed = fixed.commit(&self.pcs, self.backend)?;
        Ok(RingVerifierKey::<S>::from_commitment_and_vk(
            committed,
            self.pcs.raw_vk(),
        ))
    }

    /// Create a verifier key from a precomputed ring root, without the
    /// full ring.
    pub fn verifier_key_from_commitment(&self, commitment: RingCommitment<S>) -> RingVerifierKey<S> {
        RingVerifierKey::<S>::from_commitment_and_vk(commitment, self.pcs.raw_vk())
    }

    /// Create a verifier instance from a verifier key.
    pub fn verifier(&self, verifier_key: RingVerifierKey<S>) -> RingVerifier<S> {
        RingVerifier::<S>::init(verifier_key, self.piop.clone(), S::SUITE_ID)
    }

    /// Get the padding point.
    ///
    /// A point of unknown dlog which fills the unused ring slots.
    #[inline(always)]
    pub const fn padding_point() -> AffinePoint<S> {
        S::PADDING
    }
}

impl<S: RingSuite> CanonicalSerialize for RingProofParams<S> {
    fn serialize_with_mode<W: ark_serialize::Write>(
        &self,
        mut writer: W,
        compress: ark_serialize::Compress,
    ) -> Result<(), ark_serialize::SerializationError> {
        self.pcs.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: ark_serialize::Compress) -> usize {
        self.pcs.serialized_size(compress)
    }
}

impl<S: RingSuite> CanonicalDeserialize for RingProofParams<S> {
    fn deserialize_with_mode<R: ark_serialize::Read>(
        mut reader: R,
        compress: ark_serialize::Compress,
        validate: ark_serialize::Validate,
    ) -> Result<Self, ark_serialize::SerializationError> {
        let pcs = <PcsParams<S> as CanonicalDeserialize>::deserialize_with_mode(
            &mut reader,
            compress,
            validate,
        )?;
        let piop_domain_size = piop_domain_size_from_pcs_domain_size(pcs.powers_in_g1.len());
        let piop = piop_params::<S>(piop_domain_size)
            .map_err(|_| ark_serialize::SerializationError::InvalidData)?;
        Ok(Self {
            pcs,
            piop,
            backend: MsmBackend::default(),
        })
    }
}

impl<S: RingSuite> ark_serialize::Valid for RingProofParams<S> {
    fn check(&self) -> Result<(), ark_serialize::SerializationError> {
        self.pcs.check()
    }
}

/// Type aliases for the given ring suite.
#[macro_export]
macro_rules! ring_suite_types {
    ($suite:ident) => {
        #[allow(dead_code)]
        pub type PcsParams = $crate::ring::PcsParams<$suite>;
        #[allow(dead_code)]
        pub type PiopParams = $crate::ring::PiopParams<$suite>;
        #[allow(dead_code)]
        pub type RingProofParams = $crate::ring::RingProofParams<$suite>;
        #[allow(dead_code)]
        pub type RingProverKey = $crate::ring::RingProverKey<$suite>;
        #[allow(dead_code)]
        pub type RingVerifierKey = $crate::ring::RingVerifierKey<$suite>;
        #[allow(dead_code)]
        pub type RingCommitment = $crate::ring::RingCommitment<$suite>;
        #[allow(dead_code)]
        pub type RingProver = $crate::ring::RingProver<$suite>;
        #[allow(dead_code)]
        pub type RingVerifier = $crate::ring::RingVerifier<$suite>;
        #[allow(dead_code)]
        pub type RingProof = $crate::ring::Proof<$suite>;
    };
}

/// Domain size conversion utilities.
///
/// The ring proof system handles three related size parameters:
///
/// 1. `ring_size`: number of keys the ring should accommodate;
/// 2. `piop_domain_size`: size of the IOP evaluation domain;
/// 3. `pcs_domain_size`: number of G1 powers required in the SRS.
///
/// Relationships:
///   `piop_domain_size = (ring_size + piop_overhead).next_power_of_two()`
///   `pcs_domain_size  = 3 * piop_domain_size + 1`
///
/// where `piop_overhead = 4 + MODULUS_BIT_SIZE` accounts for the reserved
/// tail rows and the blinding scalar bit trace sharing the domain with the
/// keyset.
pub mod dom_utils {
    use super::*;

    /// Domain rows not available to ring keys.
    pub const fn piop_overhead<S: Suite>() -> usize {
        4 + ScalarField::<S>::MODULUS_BIT_SIZE as usize
    }

    /// IOP domain size required to support the given ring size.
    pub const fn piop_domain_size<S: Suite>(ring_size: usize) -> usize {
        (ring_size + piop_overhead::<S>()).next_power_of_two()
    }

    /// Max ring size supported by a given IOP domain size.
    pub const fn max_ring_size_from_piop_domain_size<S: Suite>(piop_domain_size: usize) -> usize {
        piop_domain_size - piop_overhead::<S>()
    }

    /// Number of SRS G1 powers required to support the given ring size.
    pub const fn pcs_domain_size<S: Suite>(ring_size: usize) -> usize {
        pcs_domain_size_from_piop_domain_size(piop_domain_size::<S>(ring_size))
    }

    /// `3 * piop_domain_size + 1`.
    pub const fn pcs_domain_size_from_piop_domain_size(piop_domain_size: usize) -> usize {
        3 * piop_domain_size + 1
    }

    /// Largest valid IOP domain size backed by the given number of SRS G1
    /// powers.
    pub const fn piop_domain_size_from_pcs_domain_size(pcs_domain_size: usize) -> usize {
        1 << ((pcs_domain_size - 1) / 3).ilog2()
    }
}
pub use dom_utils::*;

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::testing::{self as common, TEST_SEED};

    pub const TEST_RING_SIZE: usize = 8;

    pub fn prove_verify<S: RingSuite>() {
        let rng = &mut ark_std::test_rng();
        let params = RingProofParams::<S>::from_rand(TEST_RING_SIZE, rng).unwrap();

        let secret = Secret::<S>::from_seed(TEST_SEED);
        let public = secret.public();

        let mut pks = common::random_vec::<AffinePoint<S>>(TEST_RING_SIZE, Some(rng));
        let prover_idx = 3;
        pks[prover_idx] = public.0;

        let prover_key = params.prover_key(&pks).unwrap();
        let prover = params.prover(prover_key, prover_idx).unwrap();

        let input = Input::from(common::random_val(Some(rng)));
        let output = secret.output(input);
        let proof = secret
            .prove_with_rng(input, output, b"foo", &prover, rng)
            .unwrap();

        let verifier_key = params.verifier_key(&pks).unwrap();
        let verifier = params.verifier(verifier_key);
        assert!(Public::verify(input, output, b"foo", &proof, &verifier).is_ok());

        // Additional data mismatch rejects.
        assert!(Public::verify(input, output, b"bar", &proof, &verifier).is_err());

        // A ring differing in one key rejects.
        let mut pks2 = pks.clone();
        pks2[0] = common::random_val(Some(rng));
        let verifier2 = params.verifier(params.verifier_key(&pks2).unwrap());
        assert!(Public::verify(input, output, b"foo", &proof, &verifier2).is_err());
    }

    pub fn prover_key_not_in_ring<S: RingSuite>() {
        let rng = &mut ark_std::test_rng();
        let params = RingProofParams::<S>::from_rand(TEST_RING_SIZE, rng).unwrap();

        let secret = Secret::<S>::from_seed(TEST_SEED);
        // Ring without the prover's key.
        let pks = common::random_vec::<AffinePoint<S>>(TEST_RING_SIZE, Some(rng));
        assert_eq!(
            RingProofParams::<S>::key_index(&pks, &secret.public().0),
            Err(Error::KeyNotInRing)
        );

        let prover_key = params.prover_key(&pks).unwrap();
        let prover = params.prover(prover_key, 0).unwrap();
        let input = Input::<S>::from(common::random_val(Some(rng)));
        let output = secret.output(input);
        assert_eq!(
            secret
                .prove_with_rng(input, output, b"foo", &prover, rng)
                .unwrap_err(),
            Error::KeyNotInRing
        );
    }

    pub fn padding_check<S: RingSuite>() {
        // The point is on curve, in the prime order subgroup, and has been
        // computed from the magic seed.
        let p = S::PADDING;
        assert!(S::data_to_point(PADDING_SEED).is_some_and(|q| q == p));
    }

    pub fn accumulator_base_check<S: RingSuite>() {
        let p = S::ACCUMULATOR_BASE;
        assert!(S::data_to_point(ACCUMULATOR_BASE_SEED).is_some_and(|q| q == p));
    }

    pub fn ring_root_is_stable<S: RingSuite>() {
        // Same ring, same SRS: same root; the root also survives the
        // serialization roundtrip.
        let params = RingProofParams::<S>::from_seed(TEST_RING_SIZE, [1; 32]).unwrap();
        let rng = &mut ark_std::test_rng();
        let pks = common::random_vec::<AffinePoint<S>>(TEST_RING_SIZE, Some(rng));

        let vk1 = params.verifier_key(&pks).unwrap();
        let vk2 = params.verifier_key(&pks).unwrap();
        assert_eq!(vk1.commitment(), vk2.commitment());

        let mut buf = Vec::new();
        vk1.commitment().serialize_compressed(&mut buf).unwrap();
        let com = RingCommitment::<S>::deserialize_compressed(&mut &buf[..]).unwrap();
        let vk3 = params.verifier_key_from_commitment(com);

        let secret = Secret::<S>::from_seed(TEST_SEED);
        let mut pks2 = pks;
        pks2[2] = secret.public().0;
        // Verifier key from commitment is usable... but for the original
        // ring only.
        let vk4 = params.verifier_key(&pks2).unwrap();
        assert_ne!(vk3.commitment(), vk4.commitment());
    }

    pub fn domain_mismatch_errors<S: RingSuite>() {
        let rng = &mut ark_std::test_rng();
        let params = RingProofParams::<S>::from_rand(TEST_RING_SIZE, rng).unwrap();

        // Over-capacity ring.
        let pks = common::random_vec::<AffinePoint<S>>(params.max_ring_size() + 1, Some(rng));
        assert!(matches!(
            params.prover_key(&pks),
            Err(Error::DomainMismatch)
        ));

        // Undersized SRS.
        let small_srs = Srs::generate(8, rng);
        assert_eq!(
            RingProofParams::<S>::from_srs(TEST_RING_SIZE, small_srs).unwrap_err(),
            Error::DomainMismatch
        );
    }

    #[macro_export]
    macro_rules! ring_suite_tests {
        ($suite:ty) => {
            mod ring {
                use super::*;

                #[test]
                fn prove_verify() {
                    $crate::ring::testing::prove_verify::<$suite>()
                }

                #[test]
                fn prover_key_not_in_ring() {
                    $crate::ring::testing::prover_key_not_in_ring::<$suite>()
                }

                #[test]
                fn padding_check() {
                    $crate::ring::testing::padding_check::<$suite>()
                }

                #[test]
                fn accumulator_base_check() {
                    $crate::ring::testing::accumulator_base_check::<$suite>()
                }

                #[test]
                fn ring_root_is_stable() {
                    $crate::ring::testing::ring_root_is_stable::<$suite>()
                }

                #[test]
                fn domain_mismatch_errors() {
                    $crate::ring::testing::domain_mismatch_errors::<$suite>()
                }
            }
        };
    }
}
