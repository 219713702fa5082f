//! EC-VRF as specified by [RFC-9381](https://datatracker.ietf.org/doc/rfc9381).
//!
//! The implementation extends RFC-9381 by hashing user additional data
//! together with the VRF input when computing the challenge.

use super::*;

pub trait IetfSuite: Suite {}

impl<T> IetfSuite for T where T: Suite {}

/// VRF proof generic over the cipher suite.
///
/// Carries the challenge and the response scalars; the output point
/// (`gamma`) travels separately so the caller can hash it independently.
#[derive(Clone, PartialEq)]
pub struct Proof<S: IetfSuite> {
    pub c: ScalarField<S>,
    pub s: ScalarField<S>,
}

impl<S: IetfSuite> core::fmt::Debug for Proof<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Proof")
            .field("c", &self.c)
            .field("s", &self.s)
            .finish()
    }
}

impl<S: IetfSuite> CanonicalSerialize for Proof<S> {
    fn serialize_with_mode<W: ark_serialize::Write>(
        &self,
        mut writer: W,
        _compress_always: ark_serialize::Compress,
    ) -> Result<(), ark_serialize::SerializationError> {
        let buf = codec::scalar_encode::<S>(&self.c);
        if buf.len() < S::CHALLENGE_LEN {
            // Encoded scalar length must be at least S::CHALLENGE_LEN
            return Err(ark_serialize::SerializationError::NotEnoughSpace);
        }
        if S::Codec::ENDIANNESS.is_big() {
            writer.write_all(&buf[buf.len() - S::CHALLENGE_LEN..])?;
        } else {
            writer.write_all(&buf[..S::CHALLENGE_LEN])?;
        }
        self.s.serialize_compressed(&mut writer)?;
        Ok(())
    }

    fn serialized_size(&self, _compress_always: ark_serialize::Compress) -> usize {
        S::CHALLENGE_LEN + self.s.compressed_size()
    }
}

impl<S: IetfSuite> CanonicalDeserialize for Proof<S> {
    fn deserialize_with_mode<R: ark_serialize::Read>(
        mut reader: R,
        _compress_always: ark_serialize::Compress,
        validate: ark_serialize::Validate,
    ) -> Result<Self, ark_serialize::SerializationError> {
        let mut c_buf = ark_std::vec![0; S::CHALLENGE_LEN];
        reader.read_exact(&mut c_buf[..])?;
        let c = S::Codec::scalar_decode(&c_buf);
        let s = <ScalarField<S> as CanonicalDeserialize>::deserialize_with_mode(
            &mut reader,
            ark_serialize::Compress::No,
            validate,
        )?;
        Ok(Proof { c, s })
    }
}

impl<S: IetfSuite> ark_serialize::Valid for Proof<S> {
    fn check(&self) -> Result<(), ark_serialize::SerializationError> {
        self.c.check()?;
        self.s.check()?;
        Ok(())
    }
}

pub trait Prover<S: IetfSuite> {
    /// Generate a proof for the given input/output and user additional data.
    fn prove(&self, input: Input<S>, output: Output<S>, ad: impl AsRef<[u8]>) -> Proof<S>;
}

pub trait Verifier<S: IetfSuite> {
    /// Verify a proof for the given input/output and user additional data.
    fn verify(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        sig: &Proof<S>,
    ) -> Result<(), Error>;
}

impl<S: IetfSuite> Prover<S> for Secret<S> {
    fn prove(&self, input: Input<S>, output: Output<S>, ad: impl AsRef<[u8]>) -> Proof<S> {
        let k = S::nonce(&self.scalar, input);
        let k_b = smul!(S::Affine::generator(), k).into_affine();
        let k_h = smul!(input.0, k).into_affine();

        let c = S::challenge(
            &[&self.public.0, &input.0, &output.0, &k_b, &k_h],
            ad.as_ref(),
        );
        let s = k + c * self.scalar;
        Proof { c, s }
    }
}

impl<S: IetfSuite> Verifier<S> for Public<S> {
    fn verify(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        proof: &Proof<S>,
    ) -> Result<(), Error> {
        let Proof { c, s } = proof;

        // U = s*G - c*pk, V = s*H - c*gamma, each via a single
        // simultaneous double-scalar multiplication.
        let u = utils::mul_2(&S::Affine::generator(), s, &self.0, &-*c).into_affine();
        let v = utils::mul_2(&input.0, s, &output.0, &-*c).into_affine();

        let c_exp = S::challenge(&[&self.0, &input.0, &output.0, &u, &v], ad.as_ref());
        (&c_exp == c).then_some(()).ok_or(Error::InvalidProof)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::testing as common;

    pub fn prove_verify<S: IetfSuite>() {
        use crate::testing::TEST_SEED;

        let secret = Secret::<S>::from_seed(TEST_SEED);
        let public = secret.public();
        let input = Input::<S>::from(common::random_val(None));
        let output = secret.output(input);

        let proof = secret.prove(input, output, b"foo");
        assert!(public.verify(input, output, b"foo", &proof).is_ok());

        // Tampered additional data.
        assert_eq!(
            public.verify(input, output, b"bar", &proof),
            Err(Error::InvalidProof)
        );
        // Tampered output.
        let bad_output = Output::<S>::from(common::random_val(None));
        assert_eq!(
            public.verify(input, bad_output, b"foo", &proof),
            Err(Error::InvalidProof)
        );
    }

    pub fn deterministic_gamma_and_proof<S: IetfSuite>() {
        use crate::testing::TEST_SEED;

        let secret = Secret::<S>::from_seed(TEST_SEED);
        let input = Input::<S>::from(common::random_val(None));
        let o1 = secret.output(input);
        let o2 = secret.output(input);
        assert_eq!(o1, o2);
        let p1 = secret.prove(input, o1, b"ad");
        let p2 = secret.prove(input, o2, b"ad");
        assert_eq!(p1, p2);
    }

    pub fn proof_encoding<S: IetfSuite>() {
        use crate::testing::TEST_SEED;

        let secret = Secret::<S>::from_seed(TEST_SEED);
        let public = secret.public();
        let input = Input::<S>::from(common::random_val(None));
        let output = secret.output(input);
        let proof = secret.prove(input, output, b"foo");

        let mut buf = Vec::new();
        proof.serialize_compressed(&mut buf).unwrap();
        assert_eq!(buf.len(), S::CHALLENGE_LEN + S::Codec::SCALAR_ENCODED_LEN);

        let proof2 = Proof::<S>::deserialize_compressed(&mut &buf[..]).unwrap();
        assert!(public.verify(input, output, b"foo", &proof2).is_ok());
    }

    #[macro_export]
    macro_rules! ietf_suite_tests {
        ($suite:ty) => {
            mod ietf {
                use super::*;

                #[test]
                fn prove_verify() {
                    $crate::ietf::testing::prove_verify::<$suite>();
                }

                #[test]
                fn deterministic_gamma_and_proof() {
                    $crate::ietf::testing::deterministic_gamma_and_proof::<$suite>();
                }

                #[test]
                fn proof_encoding() {
                    $crate::ietf::testing::proof_encoding::<$suite>();
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suites::testing::{AffinePoint, Input, ScalarField, Secret, TestSuite};
    use crate::testing::random_val;

    #[test]
    fn prove_verify_works() {
        let secret = Secret::from_seed(crate::testing::TEST_SEED);
        let public = secret.public();
        let input = Input::from(random_val::<AffinePoint>(None));
        let output = secret.output(input);

        let proof = secret.prove(input, output, b"foo");

        let result = public.verify(input, output, b"foo", &proof);
        assert!(result.is_ok());
    }

    #[test]
    fn proof_encode_decode() {
        let c = hex::decode("d091c00b0f5c3619d10ecea44363b5a5").unwrap();
        let c = ScalarField::from_be_bytes_mod_order(&c[..]);
        let s = hex::decode("99cadc5b2957e223fec62e81f7b4825fc799a771a3d7334b9186bdbee87316b1")
            .unwrap();
        let s = ScalarField::from_be_bytes_mod_order(&s[..]);

        let proof = Proof::<TestSuite> { c, s };

        let mut buf = Vec::new();
        proof.serialize_compressed(&mut buf).unwrap();
        assert_eq!(buf.len(), TestSuite::CHALLENGE_LEN + 32);
    }
}
