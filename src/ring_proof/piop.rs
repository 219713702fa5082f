//! Application specific parameters of the polynomial IOP.

use super::domain::Domain;
use super::RESERVED_ROWS;
use crate::Error;
use ark_ec::twisted_edwards::{Affine as TEAffine, TECurveConfig};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{AdditiveGroup, PrimeField};
use ark_std::vec::Vec;

/// Per-domain parameters shared by the ring prover and verifier.
///
/// The evaluation domain of size `N` is split in three regions:
///
/// - rows `0..keyset_size`: one ring key per row;
/// - rows `keyset_size..N-4`: the powers `2^i * B` of the blinding base,
///   one per bit of a blinding scalar;
/// - the last [`RESERVED_ROWS`] rows: one row closing the accumulator plus
///   three rows excluded from the constraint domain.
#[derive(Clone, Debug)]
pub struct PiopParams<C: TECurveConfig>
where
    C::BaseField: PrimeField,
{
    pub(crate) domain: Domain<C::BaseField>,
    /// Number of ring key slots.
    pub(crate) keyset_size: usize,
    /// Bit capacity of a blinding scalar.
    pub(crate) scalar_bits: usize,
    /// Accumulator start point.
    pub(crate) seed: TEAffine<C>,
    /// Blinding base `B`.
    pub(crate) blinding_base: TEAffine<C>,
    /// Filler for unused key slots; a point of unknown discrete log.
    pub(crate) padding: TEAffine<C>,
    /// `2^i * B` for `i` in `0..scalar_bits`.
    pub(crate) blinding_powers: Vec<TEAffine<C>>,
}

impl<C: TECurveConfig> PiopParams<C>
where
    C::BaseField: PrimeField,
{
    pub fn setup(
        domain_size: usize,
        seed: TEAffine<C>,
        blinding_base: TEAffine<C>,
        padding: TEAffine<C>,
    ) -> Result<Self, Error> {
        let domain = Domain::new(domain_size)?;
        let scalar_bits = C::ScalarField::MODULUS_BIT_SIZE as usize;
        let keyset_size = domain_size
            .checked_sub(RESERVED_ROWS + scalar_bits)
            .filter(|n| *n > 0)
            .ok_or(Error::DomainMismatch)?;

        let mut powers = Vec::with_capacity(scalar_bits);
        let mut acc = blinding_base.into_group();
        for _ in 0..scalar_bits {
            powers.push(acc);
            acc.double_in_place();
        }
        let blinding_powers = CurveGroup::normalize_batch(&powers);

        Ok(Self {
            domain,
            keyset_size,
            scalar_bits,
            seed,
            blinding_base,
            padding,
            blinding_powers,
        })
    }

    #[inline(always)]
    pub fn domain_size(&self) -> usize {
        self.domain.size()
    }

    /// Max number of keys the ring can accommodate.
    #[inline(always)]
    pub fn keyset_size(&self) -> usize {
        self.keyset_size
    }

    /// Index of the row carrying the accumulator end value.
    #[inline(always)]
    pub(crate) fn last_constrained_row(&self) -> usize {
        self.domain.size() - RESERVED_ROWS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ed_on_bls12_381_bandersnatch::{BandersnatchConfig, EdwardsAffine};

    fn params(size: usize) -> Result<PiopParams<BandersnatchConfig>, Error> {
        let g = EdwardsAffine::generator();
        PiopParams::setup(size, g, (g + g).into_affine(), g)
    }

    #[test]
    fn keyset_sizes() {
        // Bandersnatch scalar field is 253 bits: 512 - 4 - 253 = 255.
        assert_eq!(params(512).unwrap().keyset_size(), 255);
        assert_eq!(params(2048).unwrap().keyset_size(), 1791);
    }

    #[test]
    fn undersized_domain_is_rejected() {
        assert_eq!(params(256).unwrap_err(), Error::DomainMismatch);
    }

    #[test]
    fn blinding_powers_are_doublings() {
        let p = params(512).unwrap();
        assert_eq!(p.blinding_powers.len(), 253);
        assert_eq!(p.blinding_powers[0], p.blinding_base);
        let twice = (p.blinding_base + p.blinding_base).into_affine();
        assert_eq!(p.blinding_powers[1], twice);
    }
}
