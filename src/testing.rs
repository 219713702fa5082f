//! Shared test helpers.

use crate::*;
use ark_std::rand::RngCore;
use ark_std::UniformRand;

pub(crate) const TEST_SEED: &[u8] = b"seed";

/// A random value, from the given rng or from the deterministic test rng.
pub(crate) fn random_val<T: UniformRand>(rng: Option<&mut dyn RngCore>) -> T {
    match rng {
        Some(rng) => T::rand(rng),
        None => T::rand(&mut ark_std::test_rng()),
    }
}

/// A vector of random values.
pub(crate) fn random_vec<T: UniformRand>(n: usize, rng: Option<&mut dyn RngCore>) -> Vec<T> {
    match rng {
        Some(rng) => (0..n).map(|_| T::rand(rng)).collect(),
        None => {
            let rng = &mut ark_std::test_rng();
            (0..n).map(|_| T::rand(rng)).collect()
        }
    }
}

/// Extra bits of information attached to the suites under test.
pub(crate) trait SuiteExt: Suite {
    fn suite_name() -> std::string::String {
        std::string::String::from_utf8_lossy(Self::SUITE_ID).into_owned()
    }
}

/// A suite sharing the curve with [`suites::testing::TestSuite`] but with a
/// different identifier: proofs must not transfer between the two.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ForeignSuite;

impl Suite for ForeignSuite {
    const SUITE_ID: &'static [u8] = b"Foreign_SHA-256_TAI";
    const CHALLENGE_LEN: usize = 16;

    type Affine = ark_ed25519::EdwardsAffine;
    type Hasher = sha2::Sha256;
    type Codec = codec::ArkworksCodec;

    fn nonce(sk: &ScalarField<Self>, pt: Input<Self>) -> ScalarField<Self> {
        let mut buf = Vec::new();
        <Self::Codec as codec::Codec<Self>>::scalar_encode_into(sk, &mut buf);
        <Self::Codec as codec::Codec<Self>>::point_encode_into(&pt.0, &mut buf);
        let h = utils::hash::<Self::Hasher>(&buf);
        <Self::Codec as codec::Codec<Self>>::scalar_decode(&h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ietf::{Prover, Verifier};
    use crate::suites::testing::TestSuite;

    #[test]
    fn suite_name_is_derived_from_id() {
        assert_eq!(
            <TestSuite as SuiteExt>::suite_name(),
            "Testing_SHA-256_TAI"
        );
    }

    #[test]
    fn cross_suite_proofs_are_rejected() {
        // Same curve, same hasher, different suite id: the challenge
        // derivation diverges and proofs must not transfer.
        let secret = Secret::<TestSuite>::from_seed(TEST_SEED);
        let input = Input::<TestSuite>::new(b"domain separation").unwrap();
        let output = secret.output(input);
        let proof = secret.prove(input, output, b"ad");
        assert!(secret
            .public()
            .verify(input, output, b"ad", &proof)
            .is_ok());

        // Transplant everything into the foreign suite.
        let f_secret = Secret::<ForeignSuite>::from_scalar(secret.scalar);
        let f_input = Input::<ForeignSuite>::from(input.0);
        let f_output = Output::<ForeignSuite>::from(output.0);
        let f_proof = crate::ietf::Proof::<ForeignSuite> {
            c: proof.c,
            s: proof.s,
        };
        assert_eq!(
            f_secret.public().verify(f_input, f_output, b"ad", &f_proof),
            Err(Error::InvalidProof)
        );
    }
}
