//! Pedersen VRF as described in [BCHSV23](https://eprint.iacr.org/2023/002).
//!
//! The scheme extends the IETF VRF by never exposing the signer's public
//! key: the proof binds to the Pedersen commitment `pk_com = sk*G + b*B`,
//! where `B` is a second fixed generator with unknown discrete log relation
//! to `G` and `b` is a blinding factor sampled fresh for every proof.
//!
//! The blinding factor is returned alongside the proof so that higher level
//! schemes (e.g. [`crate::ring`]) can bind the same commitment to further
//! arguments.

use super::*;

/// Magic spell for blinding base generation in the built-in suites which
/// do not inherit a base from an external specification.
///
/// (en) *"The hiding foundation which covers the key's secret while the truth remains"*
pub const PEDERSEN_BASE_SEED: &[u8] =
    b"fundamentum occultationis quod secretum clavis tegit dum veritas manet";

/// Pedersen suite.
pub trait PedersenSuite: Suite {
    /// Blinding base `B`.
    ///
    /// A fixed point with unknown discrete logarithm relative to the suite
    /// generator, typically derived via hash-to-curve from a public seed.
    const BLINDING_BASE: AffinePoint<Self>;
}

/// Pedersen VRF proof.
///
/// The output point (`gamma`) travels separately, as for the IETF scheme.
#[derive(Debug, Clone, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<S: PedersenSuite> {
    /// Key commitment: `sk*G + b*B`.
    pub pk_com: AffinePoint<S>,
    /// Nonce commitment: `k*G + kb*B`.
    pub r: AffinePoint<S>,
    /// Nonce commitment on the input: `k*H`.
    pub ok: AffinePoint<S>,
    /// Response for the secret key.
    pub s: ScalarField<S>,
    /// Response for the blinding factor.
    pub sb: ScalarField<S>,
}

impl<S: PedersenSuite> Proof<S> {
    /// Key commitment the proof is bound to.
    pub fn key_commitment(&self) -> AffinePoint<S> {
        self.pk_com
    }
}

pub trait Prover<S: PedersenSuite> {
    /// Generate a proof for the given input/output and additional data,
    /// sampling the blinding factor from the given randomness source.
    ///
    /// Returns the proof together with the blinding factor.
    fn prove_with_rng(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        rng: &mut impl ark_std::rand::RngCore,
    ) -> (Proof<S>, ScalarField<S>);

    /// Generate a proof using operating system randomness for the blinding.
    #[cfg(feature = "std")]
    fn prove(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
    ) -> (Proof<S>, ScalarField<S>) {
        self.prove_with_rng(input, output, ad, &mut ark_std::rand::rngs::OsRng)
    }
}

pub trait Verifier<S: PedersenSuite> {
    /// Verify a proof for the given input/output and additional data.
    fn verify(
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        sig: &Proof<S>,
    ) -> Result<(), Error>;
}

impl<S: PedersenSuite> Prover<S> for Secret<S> {
    fn prove_with_rng(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        rng: &mut impl ark_std::rand::RngCore,
    ) -> (Proof<S>, ScalarField<S>) {
        use ark_std::UniformRand;

        // Fresh blinding factor; proofs for identical inputs must not be
        // linkable through the key commitment.
        let blinding = ScalarField::<S>::rand(rng);

        let k = S::nonce(&self.scalar, input);
        let kb = S::nonce(&blinding, input);

        let pk_com = (smul!(S::generator(), self.scalar) + smul!(S::BLINDING_BASE, blinding))
            .into_affine();
        let r = (smul!(S::generator(), k) + smul!(S::BLINDING_BASE, kb)).into_affine();
        let ok = smul!(input.0, k).into_affine();

        let c = S::challenge(&[&pk_com, &input.0, &output.0, &r, &ok], ad.as_ref());

        let s = k + c * self.scalar;
        let sb = kb + c * blinding;

        let proof = Proof {
            pk_com,
            r,
            ok,
            s,
            sb,
        };
        (proof, blinding)
    }
}

impl<S: PedersenSuite> Verifier<S> for Public<S> {
    fn verify(
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        proof: &Proof<S>,
    ) -> Result<(), Error> {
        let Proof {
            pk_com,
            r,
            ok,
            s,
            sb,
        } = proof;

        let c = S::challenge(&[pk_com, &input.0, &output.0, r, ok], ad.as_ref());

        // s*H == Ok + c*gamma
        if (utils::mul_2(&input.0, s, &output.0, &-c) - *ok) != Zero::zero() {
            return Err(Error::InvalidProof);
        }

        // s*G + sb*B == R + c*pk_com
        let neg_one = -ScalarField::<S>::one();
        let lhs = utils::mul_4(
            &S::generator(),
            s,
            &S::BLINDING_BASE,
            sb,
            pk_com,
            &-c,
            r,
            &neg_one,
        );
        if !lhs.is_zero() {
            return Err(Error::InvalidProof);
        }

        Ok(())
    }
}
