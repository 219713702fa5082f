//! Suite for testing.

use crate::{pedersen::PedersenSuite, *};
use ark_ff::MontFp;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestSuite;

impl Suite for TestSuite {
    const SUITE_ID: &'static [u8] = b"Testing_SHA-256_TAI";
    const CHALLENGE_LEN: usize = 16;

    type Affine = ark_ed25519::EdwardsAffine;
    type Hasher = sha2::Sha256;
    type Codec = codec::ArkworksCodec;

    // SHA-256 output is shorter than the 64 bytes required by the RFC-8032
    // procedure, hash the encoded secret and input directly instead.
    fn nonce(sk: &ScalarField, pt: Input) -> ScalarField {
        let mut buf = Vec::new();
        <Self::Codec as codec::Codec<Self>>::scalar_encode_into(sk, &mut buf);
        <Self::Codec as codec::Codec<Self>>::point_encode_into(&pt.0, &mut buf);
        let h = utils::hash::<Self::Hasher>(&buf);
        <Self::Codec as codec::Codec<Self>>::scalar_decode(&h)
    }
}

impl PedersenSuite for TestSuite {
    const BLINDING_BASE: AffinePoint = {
        const X: BaseField = MontFp!(
            "22908039810913044136917741489726647027277366293258891749889809241450460853949"
        );
        const Y: BaseField = MontFp!(
            "49264587079666684025030007335154795146762108024019949463673115011651474636151"
        );
        AffinePoint::new_unchecked(X, Y)
    };
}

suite_types!(TestSuite);

#[cfg(test)]
mod tests {
    use super::*;

    impl crate::testing::SuiteExt for TestSuite {}

    codec_suite_tests!(TestSuite);
    ietf_suite_tests!(TestSuite);
    pedersen_suite_tests!(TestSuite);
}
