//! Hash-to-curve constructions from [RFC-9380](https://datatracker.ietf.org/doc/rfc9380).
//!
//! Provides the `expand_message` primitives, `hash_to_field` and the two
//! curve mappings used by the built-in suites:
//!
//! - **Elligator 2** (section 6.7.1) for Twisted Edwards curves, through
//!   their birationally equivalent Montgomery form;
//! - **Simplified SWU** (section 6.6.2) for Short Weierstrass curves, with
//!   an optional isogeny hook (section 6.6.3) for curves with `A·B = 0`.
//!
//! Each mapping comes in the RO (`hash_to_curve`, two field elements) and
//! NU (`encode_to_curve`, one field element) flavors. Inputs to these
//! functions are public values, so the code is free to branch.

use crate::utils::te_sw_map::{SWMapping, TEMapping};
use crate::*;
use ark_ec::short_weierstrass::{Affine as SWAffine, SWCurveConfig};
use ark_ec::twisted_edwards::{Affine as TEAffine, TECurveConfig};
use ark_ec::AdditiveGroup;
use ark_ff::Field;
use digest::core_api::BlockSizeUser;

/// Security parameter `k` in bits, fixed at 128 for all the suites.
const SECURITY_BITS: usize = 128;

/// `L` parameter: byte length sampled per field element.
const fn field_elem_len<F: PrimeField>() -> usize {
    (F::MODULUS_BIT_SIZE as usize + SECURITY_BITS + 7) / 8
}

/// `expand_message_xmd` as per RFC-9380 section 5.3.1.
///
/// Returns `None` on parameter abort conditions (output too long, DST too
/// long).
pub fn expand_message_xmd<H: Digest + BlockSizeUser>(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> Option<Vec<u8>> {
    let b_in_bytes = <H as Digest>::output_size();
    let ell = len_in_bytes.div_ceil(b_in_bytes);
    if ell > 255 || len_in_bytes > 65535 || dst.len() > 255 {
        return None;
    }

    let mut dst_prime = dst.to_vec();
    dst_prime.push(dst.len() as u8);

    let z_pad = ark_std::vec![0u8; H::block_size()];
    let b_0 = H::new()
        .chain_update(&z_pad)
        .chain_update(msg)
        .chain_update((len_in_bytes as u16).to_be_bytes())
        .chain_update([0u8])
        .chain_update(&dst_prime)
        .finalize();

    let mut b_i = H::new()
        .chain_update(&b_0)
        .chain_update([1u8])
        .chain_update(&dst_prime)
        .finalize();

    let mut uniform = Vec::with_capacity(ell * b_in_bytes);
    uniform.extend_from_slice(&b_i);
    for i in 2..=ell {
        let xored: Vec<u8> = b_0.iter().zip(b_i.iter()).map(|(a, b)| a ^ b).collect();
        b_i = H::new()
            .chain_update(&xored)
            .chain_update([i as u8])
            .chain_update(&dst_prime)
            .finalize();
        uniform.extend_from_slice(&b_i);
    }
    uniform.truncate(len_in_bytes);
    Some(uniform)
}

/// `expand_message_xof` over SHAKE-256 as per RFC-9380 section 5.3.2.
pub fn expand_message_xof(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Option<Vec<u8>> {
    use sha3::digest::{ExtendableOutput, Update, XofReader};
    if len_in_bytes > 65535 || dst.len() > 255 {
        return None;
    }
    let mut hasher = sha3::Shake256::default();
    hasher.update(msg);
    hasher.update(&(len_in_bytes as u16).to_be_bytes());
    hasher.update(dst);
    hasher.update(&[dst.len() as u8]);
    let mut uniform = ark_std::vec![0u8; len_in_bytes];
    hasher.finalize_xof().read(&mut uniform);
    Some(uniform)
}

/// `hash_to_field` as per RFC-9380 section 5.2.
///
/// Produces `count` elements of the prime field `F`, each sampled from
/// `L = ceil((ceil(log2 p) + 128) / 8)` uniform bytes reduced big-endian.
pub fn hash_to_field<F: PrimeField, H: Digest + BlockSizeUser>(
    msg: &[u8],
    dst: &[u8],
    count: usize,
) -> Option<Vec<F>> {
    let len = field_elem_len::<F>();
    let uniform = expand_message_xmd::<H>(msg, dst, count * len)?;
    Some(
        uniform
            .chunks(len)
            .map(F::from_be_bytes_mod_order)
            .collect(),
    )
}

#[inline(always)]
fn sgn0<F: PrimeField>(x: &F) -> bool {
    use ark_ff::BigInteger;
    x.into_bigint().is_odd()
}

#[inline(always)]
fn is_square<F: Field>(x: &F) -> bool {
    x.is_zero() || x.legendre().is_qr()
}

// ---------------------------------------------------------------------------
// Elligator 2
// ---------------------------------------------------------------------------

/// Per-curve parameters for the Elligator 2 mapping.
///
/// The mapping works on the Montgomery form `K·t² = s³ + J·s² + s` derived
/// from the Twisted Edwards constants: `J = 2(a+d)/(a−d)`, `K = 4/(a−d)`.
pub trait Elligator2Params: TECurveConfig {
    /// RFC-9380 `Z`: a non-square of the base field.
    const Z: Self::BaseField;
}

/// Elligator 2 map to curve (RFC-9380 section 6.7.1) followed by the
/// Montgomery to Twisted Edwards rational map `(s,t) → (s/t, (s−1)/(s+1))`.
///
/// Exceptional cases of the rational map return the neutral point, as
/// mandated by the RFC appendix D.
pub fn map_to_curve_ell2<C: Elligator2Params>(u: C::BaseField) -> Option<TEAffine<C>>
where
    C::BaseField: PrimeField,
{
    let one = C::BaseField::one();

    // Montgomery constants.
    let a_sub_d_inv = (C::COEFF_A - C::COEFF_D).inverse()?;
    let j = (C::COEFF_A + C::COEFF_D).double() * a_sub_d_inv;
    let k = a_sub_d_inv.double().double();
    let k_inv = k.inverse()?;
    let j_over_k = j * k_inv;
    let b = k_inv.square();

    // Map to the working curve y² = x³ + (J/K)·x² + x/K².
    let mut tv1 = C::Z * u.square();
    if tv1 == -one {
        tv1 = C::BaseField::zero();
    }
    let x1 = -j_over_k * (one + tv1).inverse().unwrap_or(C::BaseField::zero());
    let gx1 = ((x1 + j_over_k) * x1 + b) * x1;
    let x2 = -x1 - j_over_k;
    let gx2 = ((x2 + j_over_k) * x2 + b) * x2;

    let (x, y) = if is_square(&gx1) {
        // sgn0(y) == 1
        let y = gx1.sqrt()?;
        (x1, if sgn0(&y) { y } else { -y })
    } else {
        // sgn0(y) == 0
        let y = gx2.sqrt()?;
        (x2, if sgn0(&y) { -y } else { y })
    };

    // Back to the Montgomery curve of the RFC (s, t) and then rational map
    // to Twisted Edwards.
    let s = x * k;
    let t = y * k;
    if t.is_zero() || s == -one {
        return Some(TEAffine::new_unchecked(
            C::BaseField::zero(),
            C::BaseField::one(),
        ));
    }
    let v = s * t.inverse()?;
    let w = (s - one) * (s + one).inverse()?;
    Some(TEAffine::new_unchecked(v, w))
}

/// Elligator 2 `hash_to_curve` (RO variant) per RFC-9380 and RFC-9381
/// section 5.4.1.2.
///
/// `DST = "ECVRF_" || h2c_suite_id || suite_id`.
pub fn hash_to_curve_ell2_rfc_9380<S: Suite>(
    data: &[u8],
    h2c_suite_id: &[u8],
) -> Option<AffinePoint<S>>
where
    BaseField<S>: PrimeField,
    S::Hasher: BlockSizeUser,
    CurveConfig<S>: Elligator2Params,
    AffinePoint<S>: TEMapping<CurveConfig<S>>,
{
    let dst = [&b"ECVRF_"[..], h2c_suite_id, S::SUITE_ID].concat();
    let u = hash_to_field::<BaseField<S>, S::Hasher>(data, &dst, 2)?;
    let q0 = map_to_curve_ell2::<CurveConfig<S>>(u[0])?;
    let q1 = map_to_curve_ell2::<CurveConfig<S>>(u[1])?;
    let p = (q0 + q1).into_affine().clear_cofactor();
    Some(AffinePoint::<S>::from_te(p))
}

/// Elligator 2 `encode_to_curve` (NU variant).
pub fn encode_to_curve_ell2_rfc_9380<S: Suite>(
    data: &[u8],
    h2c_suite_id: &[u8],
) -> Option<AffinePoint<S>>
where
    BaseField<S>: PrimeField,
    S::Hasher: BlockSizeUser,
    CurveConfig<S>: Elligator2Params,
    AffinePoint<S>: TEMapping<CurveConfig<S>>,
{
    let dst = [&b"ECVRF_"[..], h2c_suite_id, S::SUITE_ID].concat();
    let u = hash_to_field::<BaseField<S>, S::Hasher>(data, &dst, 1)?;
    let q = map_to_curve_ell2::<CurveConfig<S>>(u[0])?;
    Some(AffinePoint::<S>::from_te(q.clear_cofactor()))
}

// ---------------------------------------------------------------------------
// Simplified SWU
// ---------------------------------------------------------------------------

/// Rational isogeny map between a Short Weierstrass curve and an
/// isogenous one (RFC-9380 section 6.6.3), coefficients in ascending
/// degree order.
pub struct IsogenyMap<F: 'static> {
    pub x_num: &'static [F],
    pub x_den: &'static [F],
    pub y_num: &'static [F],
    pub y_den: &'static [F],
}

impl<F: Field> IsogenyMap<F> {
    fn eval(coeffs: &[F], x: &F) -> F {
        let mut acc = F::zero();
        for c in coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    /// Apply the map. Fails only if the point maps to infinity.
    pub fn apply(&self, x: F, y: F) -> Option<(F, F)> {
        let xn = Self::eval(self.x_num, &x);
        let xd = Self::eval(self.x_den, &x);
        let yn = Self::eval(self.y_num, &x);
        let yd = Self::eval(self.y_den, &x);
        Some((xn * xd.inverse()?, y * yn * yd.inverse()?))
    }
}

/// Per-curve parameters for the simplified SWU mapping.
///
/// For curves with `A·B ≠ 0` the map operates on the curve itself and
/// `ISOGENY` is `None`; otherwise `SSWU_A`/`SSWU_B` describe the isogenous
/// curve and `ISOGENY` carries the final rational map.
pub trait SswuParams: SWCurveConfig {
    /// RFC-9380 `Z`: a non-square of the base field.
    const Z: Self::BaseField;
    /// `A` coefficient of the curve the core map targets.
    const SSWU_A: Self::BaseField;
    /// `B` coefficient of the curve the core map targets.
    const SSWU_B: Self::BaseField;
    /// Isogeny into the actual curve, for curves with `A·B = 0`.
    const ISOGENY: Option<IsogenyMap<Self::BaseField>> = None;
}

/// Simplified SWU map to curve (RFC-9380 section 6.6.2), with the isogeny
/// follow-up of section 6.6.3 when the curve requires it.
pub fn map_to_curve_sswu<C: SswuParams>(u: C::BaseField) -> Option<SWAffine<C>>
where
    C::BaseField: PrimeField,
{
    let a = C::SSWU_A;
    let b = C::SSWU_B;

    // x1 = (-B/A) * (1 + 1/(Z²u⁴ + Zu²)), or B/(Z*A) when the denominator
    // vanishes.
    let tv1 = C::Z * u.square();
    let tv2 = tv1.square() + tv1;
    let x1 = if tv2.is_zero() {
        b * (C::Z * a).inverse()?
    } else {
        -b * a.inverse()? * (C::BaseField::one() + tv2.inverse()?)
    };
    let gx1 = (x1.square() + a) * x1 + b;

    let (x, y) = if is_square(&gx1) {
        (x1, gx1.sqrt()?)
    } else {
        let x2 = tv1 * x1;
        let gx2 = (x2.square() + a) * x2 + b;
        (x2, gx2.sqrt()?)
    };
    // Fix sign: sgn0(y) == sgn0(u).
    let y = if sgn0(&y) == sgn0(&u) { y } else { -y };

    let (x, y) = match C::ISOGENY {
        Some(iso) => iso.apply(x, y)?,
        None => (x, y),
    };
    Some(SWAffine::new_unchecked(x, y))
}

/// SSWU `hash_to_curve` (RO variant).
///
/// `DST = "ECVRF_" || h2c_suite_id || suite_id`.
pub fn hash_to_curve_sswu_rfc_9380<S: Suite>(
    data: &[u8],
    h2c_suite_id: &[u8],
) -> Option<AffinePoint<S>>
where
    BaseField<S>: PrimeField,
    S::Hasher: BlockSizeUser,
    CurveConfig<S>: SswuParams,
    AffinePoint<S>: SWMapping<CurveConfig<S>>,
{
    let dst = [&b"ECVRF_"[..], h2c_suite_id, S::SUITE_ID].concat();
    hash_to_curve_sswu_with_dst::<S>(data, &dst)
}

/// SSWU RO variant with an explicit domain separation tag.
pub fn hash_to_curve_sswu_with_dst<S: Suite>(data: &[u8], dst: &[u8]) -> Option<AffinePoint<S>>
where
    BaseField<S>: PrimeField,
    S::Hasher: BlockSizeUser,
    CurveConfig<S>: SswuParams,
    AffinePoint<S>: SWMapping<CurveConfig<S>>,
{
    let u = hash_to_field::<BaseField<S>, S::Hasher>(data, dst, 2)?;
    let q0 = map_to_curve_sswu::<CurveConfig<S>>(u[0])?;
    let q1 = map_to_curve_sswu::<CurveConfig<S>>(u[1])?;
    let p = (q0 + q1).into_affine().clear_cofactor();
    Some(AffinePoint::<S>::from_sw(p))
}

/// SSWU `encode_to_curve` (NU variant).
pub fn encode_to_curve_sswu_rfc_9380<S: Suite>(
    data: &[u8],
    h2c_suite_id: &[u8],
) -> Option<AffinePoint<S>>
where
    BaseField<S>: PrimeField,
    S::Hasher: BlockSizeUser,
    CurveConfig<S>: SswuParams,
    AffinePoint<S>: SWMapping<CurveConfig<S>>,
{
    let dst = [&b"ECVRF_"[..], h2c_suite_id, S::SUITE_ID].concat();
    let u = hash_to_field::<BaseField<S>, S::Hasher>(data, &dst, 1)?;
    let q = map_to_curve_sswu::<CurveConfig<S>>(u[0])?;
    Some(AffinePoint::<S>::from_sw(q.clear_cofactor()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_message_xmd_is_len_and_dst_sensitive() {
        let a = expand_message_xmd::<sha2::Sha256>(b"msg", b"DST-A", 32).unwrap();
        let b = expand_message_xmd::<sha2::Sha256>(b"msg", b"DST-B", 32).unwrap();
        let c = expand_message_xmd::<sha2::Sha256>(b"msg", b"DST-A", 64).unwrap();
        assert_eq!(a.len(), 32);
        assert_eq!(c.len(), 64);
        assert_ne!(a, b);
        // Prefix property does NOT hold across lengths (l_i_b_str is hashed).
        assert_ne!(&a[..], &c[..32]);
    }

    #[test]
    fn expand_message_xmd_rejects_oversize() {
        assert!(expand_message_xmd::<sha2::Sha256>(b"msg", b"DST", 65536).is_none());
        let long_dst = [0u8; 256];
        assert!(expand_message_xmd::<sha2::Sha256>(b"msg", &long_dst, 32).is_none());
    }

    #[test]
    fn expand_message_xof_works() {
        let a = expand_message_xof(b"msg", b"DST", 48).unwrap();
        let b = expand_message_xof(b"msg", b"DST", 48).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 48);
    }
}
