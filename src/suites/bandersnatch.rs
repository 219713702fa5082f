//! `ECVRF Bandersnatch SHA-512 Elligator2` suite.
//!
//! Configuration:
//!
//! * `suite_string` = b"Bandersnatch_SHA-512_ELL2" for Twisted Edwards form.
//! * `suite_string` = b"Bandersnatch_SW_SHA-512_TAI" for Short Weierstrass form.
//!
//! - The EC group <G> is the prime subgroup of the Bandersnatch elliptic curve,
//!   in Twisted Edwards form, with finite field and curve parameters as specified in
//!   [MSZ21](https://eprint.iacr.org/2021/1152).
//!   For this group, `fLen` = `qLen` = $32$ and `cofactor` = $4$.
//!
//! - The prime subgroup generator G in <G> is defined as follows:
//!   - G.x = 0x29c132cc2c0b34c5743711777bbe42f32b79c022ad998465e1e71866a252ae18
//!   - G.y = 0x2a6c669eda123e0f157d8b50badcd586358cad81eee464605e3167b6cc974166
//!
//! * `cLen` = 32.
//!
//! * The key pair generation primitive is `PK = sk * G`, with sk the secret
//!   key scalar and `G` the group generator.
//!
//! * The ECVRF_nonce_generation function is as specified in Section 5.4.2.2
//!   of RFC-9381.
//!
//! * The int_to_string function encodes into the 32 bytes little endian
//!   representation.
//!
//! * The point_to_string function converts a point in <G> to an octet
//!   string using compressed form. The y coordinate is encoded using
//!   int_to_string function and the most significant bit of the last
//!   octet is used to keep track of the x's sign. This implies that
//!   the point is encoded on 32 bytes.
//!
//! * The hash function Hash is SHA-512 as specified in
//!   [RFC6234](https://www.rfc-editor.org/rfc/rfc6234), with hLen = 64.
//!
//! * The `ECVRF_encode_to_curve` function uses the *Elligator2* method
//!   described in section 6.8.2 of [RFC-9380](https://datatracker.ietf.org/doc/rfc9380)
//!   and in section 5.4.1.2 of [RFC-9381](https://datatracker.ietf.org/doc/rfc9381),
//!   with `h2c_suite_ID_string` = `"Bandersnatch_XMD:SHA-512_ELL2_RO_"`
//!   and domain separation tag `DST = "ECVRF_" || h2c_suite_ID_string || suite_string`.

use crate::{pedersen::PedersenSuite, utils::te_sw_map::*, *};
use ark_ff::MontFp;

impl h2c::Elligator2Params for ark_ed_on_bls12_381_bandersnatch::BandersnatchConfig {
    const Z: ark_ed_on_bls12_381_bandersnatch::Fq = MontFp!("5");
}

// sage: q = 52435875175126190479447740508185965837690552500527637822603658699938581184513
// sage: Fq = GF(q)
// sage: MONT_A = 29978822694968839326280996386011761570173833766074948509196803838190355340952
// sage: MONT_B = 25465760566081946422412445027709227188579564747101592991722834452325077642517
// sage: MONT_A/Fq(3) = 9992940898322946442093665462003920523391277922024982836398934612730118446984
// sage: Fq(1)/MONT_B = 41180284393978236561320365279764246793818536543197771097409483252169927600582
impl MapConfig for ark_ed_on_bls12_381_bandersnatch::BandersnatchConfig {
    const MONT_A_OVER_THREE: ark_ed_on_bls12_381_bandersnatch::Fq =
        MontFp!("9992940898322946442093665462003920523391277922024982836398934612730118446984");
    const MONT_B_INV: ark_ed_on_bls12_381_bandersnatch::Fq =
        MontFp!("41180284393978236561320365279764246793818536543197771097409483252169927600582");
}

pub mod edwards {
    use super::*;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct BandersnatchSha512Ell2;

    type ThisSuite = BandersnatchSha512Ell2;

    suite_types!(ThisSuite);

    impl Suite for ThisSuite {
        const SUITE_ID: &'static [u8] = b"Bandersnatch_SHA-512_ELL2";
        const CHALLENGE_LEN: usize = 32;

        type Affine = ark_ed_on_bls12_381_bandersnatch::EdwardsAffine;
        type Hasher = sha2::Sha512;
        type Codec = codec::ArkworksCodec;

        /// Hash data to a curve point using the Elligator2 method described
        /// by RFC 9380.
        fn data_to_point(data: &[u8]) -> Option<AffinePoint> {
            // "XMD" for expand_message_xmd (Section 5.3.1).
            // "RO" for random oracle (Section 3 - hash_to_curve method)
            let h2c_suite_id = b"Bandersnatch_XMD:SHA-512_ELL2_RO_";
            h2c::hash_to_curve_ell2_rfc_9380::<Self>(data, h2c_suite_id)
        }
    }

    impl PedersenSuite for ThisSuite {
        const BLINDING_BASE: AffinePoint = {
            const X: BaseField = MontFp!(
                "6150229251051246713677296363717454238956877613358614224171740096471278798312"
            );
            const Y: BaseField = MontFp!(
                "28442734166467795856797249030329035618871580593056783094884474814923353898473"
            );
            AffinePoint::new_unchecked(X, Y)
        };
    }

    #[cfg(feature = "ring")]
    impl crate::ring::RingSuite for ThisSuite {
        type Pairing = ark_bls12_381::Bls12_381;

        const ACCUMULATOR_BASE: AffinePoint = {
            const X: BaseField = MontFp!(
                "33494381507495559214296680104422771886582035980018360585468318946458881917163"
            );
            const Y: BaseField = MontFp!(
                "16433761349846600745464881934160425183684556935274915178818975909111667035913"
            );
            AffinePoint::new_unchecked(X, Y)
        };

        const PADDING: AffinePoint = {
            const X: BaseField = MontFp!(
                "22867348901401521717597416660434667656513639623062723260897684993183227539953"
            );
            const Y: BaseField = MontFp!(
                "36848577369764872114317927399698422142064666481654448997862228364467808509468"
            );
            AffinePoint::new_unchecked(X, Y)
        };
    }

    #[cfg(feature = "ring")]
    ring_suite_types!(ThisSuite);

}

pub mod weierstrass {
    use super::*;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct BandersnatchSha512Tai;

    type ThisSuite = BandersnatchSha512Tai;

    suite_types!(ThisSuite);

    impl Suite for ThisSuite {
        const SUITE_ID: &'static [u8] = b"Bandersnatch_SW_SHA-512_TAI";
        const CHALLENGE_LEN: usize = 32;

        type Affine = ark_ed_on_bls12_381_bandersnatch::SWAffine;
        type Hasher = sha2::Sha512;
        type Codec = codec::ArkworksCodec;
    }

    impl PedersenSuite for ThisSuite {
        /// Short Weierstrass image of the Twisted Edwards blinding base.
        const BLINDING_BASE: AffinePoint = {
            const X: BaseField = MontFp!(
                "16652762643951971674169608512031722521344556689946364583835216939895139177233"
            );
            const Y: BaseField = MontFp!(
                "27831044383377775957437368154996855445627997362488820708317561006735563413514"
            );
            AffinePoint::new_unchecked(X, Y)
        };
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        impl crate::testing::SuiteExt for ThisSuite {}

        codec_suite_tests!(ThisSuite);
        ietf_suite_tests!(ThisSuite);
        pedersen_suite_tests!(ThisSuite);

        #[test]
        fn blinding_base_maps_to_edwards_form() {
            let sw = ThisSuite::BLINDING_BASE;
            assert!(sw.is_on_curve());
            let te = sw.into_te();
            assert_eq!(te, super::edwards::BandersnatchSha512Ell2::BLINDING_BASE);
            assert_eq!(AffinePoint::from_te(te), sw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use ark_ed_on_bls12_381_bandersnatch::{BandersnatchConfig, SWAffine};

    #[test]
    fn sw_to_te_roundtrip() {
        let org_point = testing::random_val::<SWAffine>(None);

        let te_point = sw_to_te::<BandersnatchConfig>(&org_point).unwrap();
        assert!(te_point.is_on_curve());

        let sw_point = te_to_sw::<BandersnatchConfig>(&te_point).unwrap();
        assert!(sw_point.is_on_curve());

        assert_eq!(org_point, sw_point);
    }

    #[test]
    fn generator_te_sw_roundtrip() {
        let sw1 = weierstrass::AffinePoint::generator();
        let ed1 = sw_to_te::<BandersnatchConfig>(&sw1).unwrap();
        let ed2 = edwards::AffinePoint::generator();
        assert_eq!(ed1, ed2);
        let sw2 = te_to_sw::<BandersnatchConfig>(&ed1).unwrap();
        assert_eq!(sw1, sw2);
    }
}
