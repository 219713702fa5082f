//! Mappings between Twisted Edwards and Short Weierstrass curve forms.
//!
//! Some curves (e.g. Bandersnatch) are exposed in both forms; the ring
//! proof backend always works in Twisted Edwards coordinates, while SEC1
//! codecs work in Short Weierstrass ones. These helpers move points
//! between the two representations through the intermediate Montgomery
//! form.

use ark_ec::{
    short_weierstrass::{Affine as WeierstrassAffine, SWCurveConfig},
    twisted_edwards::{Affine as EdwardsAffine, MontCurveConfig, TECurveConfig},
    CurveConfig,
};
use ark_ff::{Field, One};
use ark_std::borrow::Cow;
use ark_std::vec::Vec;

/// Constants used in mapping TE form to SW form and vice versa.
pub trait MapConfig: TECurveConfig + SWCurveConfig + MontCurveConfig {
    const MONT_A_OVER_THREE: <Self as CurveConfig>::BaseField;
    const MONT_B_INV: <Self as CurveConfig>::BaseField;
}

/// Short Weierstrass to Twisted Edwards mapping.
pub fn sw_to_te<C: MapConfig>(point: &WeierstrassAffine<C>) -> Option<EdwardsAffine<C>> {
    // First map the point from SW to Montgomery
    // (Bx - A/3, By)
    let mx = <C as MontCurveConfig>::COEFF_B * point.x - C::MONT_A_OVER_THREE;
    let my = <C as MontCurveConfig>::COEFF_B * point.y;

    // Then map the Montgomery point to TE
    // (x, y) -> (x/y, (x−1)/(x+1))
    let v_denom = my.inverse()?;
    let x_p_1 = mx + <<C as CurveConfig>::BaseField as One>::one();
    let w_denom = x_p_1.inverse()?;
    let v = mx * v_denom;
    let w = (mx - <<C as CurveConfig>::BaseField as One>::one()) * w_denom;

    Some(EdwardsAffine::new_unchecked(v, w))
}

/// Twisted Edwards to Short Weierstrass mapping.
pub fn te_to_sw<C: MapConfig>(point: &EdwardsAffine<C>) -> Option<WeierstrassAffine<C>> {
    // Map from TE to Montgomery: ((1+y)/(1-y), (1+y)/(x(1-y)))
    let v_denom = <<C as CurveConfig>::BaseField as One>::one() - point.y;
    let w_denom = point.x - point.x * point.y;
    let v_denom_inv = v_denom.inverse()?;
    let w_denom_inv = w_denom.inverse()?;
    let v_w_num = <<C as CurveConfig>::BaseField as One>::one() + point.y;
    let v = v_w_num * v_denom_inv;
    let w = v_w_num * w_denom_inv;

    // Map Montgomery to SW: ((x + A/3)/B, y/B)
    let x = C::MONT_B_INV * (v + C::MONT_A_OVER_THREE);
    let y = C::MONT_B_INV * w;

    Some(WeierstrassAffine::new_unchecked(x, y))
}

/// Map the point to Short Weierstrass form, if required.
pub trait SWMapping<C: SWCurveConfig> {
    fn from_sw(sw: WeierstrassAffine<C>) -> Self;
    fn into_sw(&self) -> Cow<WeierstrassAffine<C>>;
}

impl<C: SWCurveConfig> SWMapping<C> for WeierstrassAffine<C> {
    #[inline(always)]
    fn from_sw(sw: WeierstrassAffine<C>) -> Self {
        sw
    }

    #[inline(always)]
    fn into_sw(&self) -> Cow<WeierstrassAffine<C>> {
        Cow::Borrowed(self)
    }
}

impl<C: MapConfig> SWMapping<C> for EdwardsAffine<C> {
    #[inline(always)]
    fn from_sw(sw: WeierstrassAffine<C>) -> Self {
        const ERR_MSG: &str =
            "SW to TE is expected to be implemented only for curves supporting the mapping";
        sw_to_te(&sw).expect(ERR_MSG)
    }

    #[inline(always)]
    fn into_sw(&self) -> Cow<WeierstrassAffine<C>> {
        const ERR_MSG: &str =
            "TE to SW is expected to be implemented only for curves supporting the mapping";
        Cow::Owned(te_to_sw(self).expect(ERR_MSG))
    }
}

/// Map the point to Twisted Edwards form, if required.
pub trait TEMapping<C: TECurveConfig>: Sized {
    fn from_te(te: EdwardsAffine<C>) -> Self;
    fn into_te(&self) -> EdwardsAffine<C>;

    fn to_te_slice(slice: &[Self]) -> Vec<EdwardsAffine<C>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            slice.par_iter().map(|p| p.into_te()).collect()
        }
        #[cfg(not(feature = "parallel"))]
        slice.iter().map(|p| p.into_te()).collect()
    }
}

impl<C: TECurveConfig> TEMapping<C> for EdwardsAffine<C> {
    #[inline(always)]
    fn from_te(te: EdwardsAffine<C>) -> Self {
        te
    }

    #[inline(always)]
    fn into_te(&self) -> EdwardsAffine<C> {
        *self
    }
}

impl<C: MapConfig> TEMapping<C> for WeierstrassAffine<C> {
    #[inline(always)]
    fn from_te(te: EdwardsAffine<C>) -> Self {
        const ERR_MSG: &str =
            "TE to SW is expected to be implemented only for curves supporting the mapping";
        te_to_sw(&te).expect(ERR_MSG)
    }

    #[inline(always)]
    fn into_te(&self) -> EdwardsAffine<C> {
        const ERR_MSG: &str =
            "SW to TE is expected to be implemented only for curves supporting the mapping";
        sw_to_te(self).expect(ERR_MSG)
    }
}
