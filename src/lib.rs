//! # Elliptic Curve VRFs with Additional Data
//!
//! Implementations of Verifiable Random Functions with Additional Data
//! (VRF-AD): VRF schemes which bind some auxiliary information to the
//! proof in addition to the VRF input itself.
//!
//! Built on the [Arkworks](https://github.com/arkworks-rs) framework.
//!
//! ## Schemes
//!
//! - **IETF VRF**: ECVRF as described by [RFC9381](https://datatracker.ietf.org/doc/rfc9381),
//!   extended to incorporate additional data into the challenge.
//!
//! - **Pedersen VRF**: Described in [BCHSV23](https://eprint.iacr.org/2023/002).
//!   The proof binds to a Pedersen commitment of the signer's key rather
//!   than to the key itself.
//!
//! - **Ring VRF**: Pedersen VRF augmented with a KZG-based argument that the
//!   committed key belongs to a ring of public keys, without revealing which
//!   one. The polynomial argument is implemented by the [`ring_proof`]
//!   module over BLS12-381 (or any other pairing with a matching scalar
//!   field).
//!
//! ## Built-in suites
//!
//! - **Bandersnatch** (Edwards curve on BLS12-381): IETF, Pedersen and Ring VRF.
//!   Both Twisted Edwards and Short Weierstrass flavors.
//! - **JubJub** (Edwards curve on BLS12-381): IETF, Pedersen and Ring VRF.
//! - **Baby-JubJub** (Edwards curve on BN254): IETF, Pedersen and Ring VRF.
//! - **Ed25519**, **secp256r1**, **secp256k1**: IETF and Pedersen VRF.
//!
//! ## Basic usage
//!
//! ```rust,ignore
//! use ec_vrfs::suites::bandersnatch::*;
//!
//! let secret = Secret::from_seed(b"example seed");
//! let public = secret.public();
//! let input = Input::new(b"example input").unwrap();
//! let output = secret.output(input);
//! // Canonical VRF randomness
//! let beta = output.hash();
//! ```
//!
//! ## Features
//!
//! - `full`: all the suites below plus `ring`.
//! - `ring`: ring VRF support for the curves which carry it.
//! - `bandersnatch`, `jubjub`, `baby-jubjub`, `ed25519`, `secp256r1`, `secp256k1`.
//! - `parallel`: parallel column evaluation and MSM via `rayon`.
//! - `secret-split`: scalar multiplication with secret splitting for some
//!   side channel hardening (2x cost on secret scalar multiplications).

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;

use digest::Digest;
use zeroize::Zeroize;

pub mod codec;
pub mod h2c;
pub mod ietf;
pub mod pedersen;
pub mod suites;
pub mod utils;

#[cfg(feature = "ring")]
pub mod ring;
#[cfg(feature = "ring")]
pub mod ring_proof;

#[cfg(test)]
mod testing;

/// Re-export stuff that may be useful downstream.
pub mod reexports {
    pub use ark_ec;
    pub use ark_ff;
    pub use ark_serialize;
    pub use ark_std;
}

use crate::codec::Codec;

pub type AffinePoint<S> = <S as Suite>::Affine;
pub type BaseField<S> = <AffinePoint<S> as AffineRepr>::BaseField;
pub type ScalarField<S> = <AffinePoint<S> as AffineRepr>::ScalarField;
pub type CurveConfig<S> = <AffinePoint<S> as AffineRepr>::Config;

pub type HashOutput<S> = digest::Output<<S as Suite>::Hasher>;

/// Overarching errors.
///
/// Every public prove/verify operation surfaces one of these kinds.
/// Error payloads never carry secret dependent data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Malformed encoding: bad length, point off curve or outside the
    /// prime order subgroup, non canonical scalar.
    InvalidEncoding,
    /// Proof rejected: challenge mismatch, equation mismatch or pairing
    /// check failure.
    InvalidProof,
    /// Prover public key not found in the ring.
    KeyNotInRing,
    /// Ring larger than the supported domain, or SRS degree insufficient.
    DomainMismatch,
    /// Unexpected internal condition: zero denominator, map-to-curve
    /// counter exhaustion. Indicates a bug or adversarial input.
    InternalInvariant,
}

impl From<ark_serialize::SerializationError> for Error {
    fn from(_err: ark_serialize::SerializationError) -> Self {
        Error::InvalidEncoding
    }
}

/// Defines a cipher suite.
///
/// Follows the structure suggested by RFC-9381 section 5.5. The default
/// method implementations can be overridden to construct more exotic
/// suites.
pub trait Suite: Copy {
    /// Suite identifier (aka `suite_string` in RFC-9381).
    const SUITE_ID: &'static [u8];

    /// Challenge encoded length.
    ///
    /// Must be at most equal to the hash output length.
    const CHALLENGE_LEN: usize;

    /// Curve point in affine representation.
    ///
    /// The point is guaranteed to be in the correct prime order subgroup
    /// by the `AffineRepr` bound.
    type Affine: AffineRepr;

    /// Overarching hasher.
    ///
    /// Used wherever a hash is required: nonce, challenge, output hash.
    type Hasher: Digest;

    /// Overarching codec.
    ///
    /// Used wherever we need to encode/decode points and scalars.
    type Codec: codec::Codec<Self>;

    /// Nonce generation as described by RFC-9381 section 5.4.2.
    ///
    /// The default implementation provides the variant described by
    /// section 5.4.2.2, derived from steps 2 and 3 in section 5.1.6 of
    /// [RFC8032](https://tools.ietf.org/html/rfc8032).
    ///
    /// # Panics
    ///
    /// The default implementation panics if `Hasher` output is less than
    /// 64 bytes.
    #[inline(always)]
    fn nonce(sk: &ScalarField<Self>, pt: Input<Self>) -> ScalarField<Self> {
        utils::nonce_rfc_8032::<Self>(sk, &pt.0)
    }

    /// Challenge generation as described by RFC-9381 section 5.4.3.
    ///
    /// Extends the RFC procedure with user additional data (`ad`).
    #[inline(always)]
    fn challenge(pts: &[&AffinePoint<Self>], ad: &[u8]) -> ScalarField<Self> {
        utils::challenge_rfc_9381::<Self>(pts, ad)
    }

    /// Hash data to a curve point.
    ///
    /// By default uses the "try and increment" method described by RFC-9381.
    ///
    /// The input `data` is expected to be `[salt ||] alpha` according to
    /// RFC-9381. In other words, no salt is applied by this function.
    #[inline(always)]
    fn data_to_point(data: &[u8]) -> Option<AffinePoint<Self>> {
        utils::hash_to_curve_tai_rfc_9381::<Self>(data)
    }

    /// Map a point to a hash value using `Self::Hasher`.
    ///
    /// By default uses the algorithm described by RFC-9381 section 5.2,
    /// without cofactor clearing.
    #[inline(always)]
    fn point_to_hash(pt: &AffinePoint<Self>) -> HashOutput<Self> {
        utils::point_to_hash_rfc_9381::<Self>(pt, false)
    }

    /// Generator used through all the suite.
    #[inline(always)]
    fn generator() -> AffinePoint<Self> {
        Self::Affine::generator()
    }
}

/// Secret key.
///
/// Holds the secret scalar together with the cached public key.
/// The scalar is zeroized on drop and redacted from debug output.
#[derive(Clone, PartialEq)]
pub struct Secret<S: Suite> {
    // Secret scalar.
    pub scalar: ScalarField<S>,
    // Cached public point.
    pub public: Public<S>,
}

impl<S: Suite> core::fmt::Debug for Secret<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Secret")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl<S: Suite> Drop for Secret<S> {
    fn drop(&mut self) {
        self.scalar.zeroize()
    }
}

impl<S: Suite> CanonicalSerialize for Secret<S> {
    fn serialize_with_mode<W: ark_std::io::Write>(
        &self,
        writer: W,
        compress: ark_serialize::Compress,
    ) -> Result<(), ark_serialize::SerializationError> {
        self.scalar.serialize_with_mode(writer, compress)
    }

    fn serialized_size(&self, compress: ark_serialize::Compress) -> usize {
        self.scalar.serialized_size(compress)
    }
}

impl<S: Suite> CanonicalDeserialize for Secret<S> {
    fn deserialize_with_mode<R: ark_std::io::Read>(
        reader: R,
        compress: ark_serialize::Compress,
        validate: ark_serialize::Validate,
    ) -> Result<Self, ark_serialize::SerializationError> {
        let scalar = <ScalarField<S> as CanonicalDeserialize>::deserialize_with_mode(
            reader, compress, validate,
        )?;
        Ok(Self::from_scalar(scalar))
    }
}

impl<S: Suite> ark_serialize::Valid for Secret<S> {
    fn check(&self) -> Result<(), ark_serialize::SerializationError> {
        self.scalar.check()
    }
}

impl<S: Suite> Secret<S> {
    /// Construct a `Secret` from the given scalar.
    pub fn from_scalar(scalar: ScalarField<S>) -> Self {
        let public = Public((S::generator() * scalar).into_affine());
        Self { scalar, public }
    }

    /// Construct a `Secret` from the given seed.
    ///
    /// The seed is hashed using `Suite::Hasher` to construct the secret
    /// scalar. A zero scalar is mapped to one.
    pub fn from_seed(seed: &[u8]) -> Self {
        let bytes = utils::hash::<S::Hasher>(seed);
        let mut scalar = ScalarField::<S>::from_le_bytes_mod_order(&bytes[..]);
        if scalar.is_zero() {
            scalar.set_one();
        }
        Self::from_scalar(scalar)
    }

    /// Construct an ephemeral `Secret` using the provided randomness source.
    pub fn from_rand(rng: &mut impl ark_std::rand::RngCore) -> Self {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        Self::from_seed(&seed)
    }

    /// Get the associated public key.
    pub fn public(&self) -> Public<S> {
        self.public
    }

    /// Get the VRF output point relative to the input.
    pub fn output(&self, input: Input<S>) -> Output<S> {
        Output(smul!(input.0, self.scalar).into_affine())
    }
}

/// Public key.
///
/// A point on the suite curve, safe to share.
#[derive(Copy, Clone, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Public<S: Suite>(pub AffinePoint<S>);

impl<S: Suite> core::fmt::Debug for Public<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Public").field(&self.0).finish()
    }
}

impl<S: Suite> Public<S> {
    /// Construct from inner affine point.
    pub fn from(value: AffinePoint<S>) -> Self {
        Self(value)
    }
}

/// VRF input point.
///
/// Typically created by hashing arbitrary data to a curve point via the
/// suite's `data_to_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Input<S: Suite>(pub AffinePoint<S>);

impl<S: Suite> Input<S> {
    /// Construct from [`Suite::data_to_point`].
    ///
    /// Fails with [`Error::InternalInvariant`] if the data cannot be mapped
    /// to a valid curve point (e.g. try-and-increment counter exhaustion).
    pub fn new(data: &[u8]) -> Result<Self, Error> {
        S::data_to_point(data)
            .map(Input)
            .ok_or(Error::InternalInvariant)
    }

    /// Construct from inner affine point.
    pub fn from(value: AffinePoint<S>) -> Self {
        Self(value)
    }
}

/// VRF output point (aka gamma).
///
/// Can be hashed to produce the actual pseudorandom bytes.
#[derive(Clone, Copy, CanonicalSerialize, CanonicalDeserialize)]
pub struct Output<S: Suite>(pub AffinePoint<S>);

impl<S: Suite> core::fmt::Debug for Output<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Output").field(&self.0).finish()
    }
}

impl<S: Suite> PartialEq for Output<S> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<S: Suite> Eq for Output<S> {}

impl<S: Suite> Output<S> {
    /// Construct from inner affine point.
    pub fn from(value: AffinePoint<S>) -> Self {
        Self(value)
    }

    /// Hash the output point to the canonical VRF randomness.
    pub fn hash(&self) -> HashOutput<S> {
        S::point_to_hash(&self.0)
    }
}

/// Type aliases for the given suite.
#[macro_export]
macro_rules! suite_types {
    ($suite:ident) => {
        #[allow(dead_code)]
        pub type Secret = $crate::Secret<$suite>;
        #[allow(dead_code)]
        pub type Public = $crate::Public<$suite>;
        #[allow(dead_code)]
        pub type Input = $crate::Input<$suite>;
        #[allow(dead_code)]
        pub type Output = $crate::Output<$suite>;
        #[allow(dead_code)]
        pub type AffinePoint = $crate::AffinePoint<$suite>;
        #[allow(dead_code)]
        pub type ScalarField = $crate::ScalarField<$suite>;
        #[allow(dead_code)]
        pub type BaseField = $crate::BaseField<$suite>;
        #[allow(dead_code)]
        pub type IetfProof = $crate::ietf::Proof<$suite>;
        #[allow(dead_code)]
        pub type PedersenProof = $crate::pedersen::Proof<$suite>;
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suites::testing::{Input, Secret};
    use crate::testing::{random_val, TEST_SEED};

    #[test]
    fn vrf_output_is_deterministic() {
        use ark_std::rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha20Rng::from_seed([42; 32]);
        let secret = Secret::from_seed(TEST_SEED);
        let input = Input::from(random_val(Some(&mut rng)));
        let output1 = secret.output(input);
        let output2 = secret.output(input);
        assert_eq!(output1, output2);
        assert_eq!(output1.hash(), output2.hash());
    }

    #[test]
    fn secret_from_seed_is_nonzero() {
        let secret = Secret::from_seed(&[]);
        assert!(!secret.scalar.is_zero());
        assert!(!secret.public().0.is_zero());
    }
}
