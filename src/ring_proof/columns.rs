//! Fixed and witness column construction.

use super::domain::Domain;
use super::kzg::{MsmBackend, RawVk, Srs};
use super::piop::PiopParams;
use super::RESERVED_ROWS;
use crate::Error;
use ark_ec::pairing::Pairing;
use ark_ec::twisted_edwards::{Affine as TEAffine, TECurveConfig};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;

/// A column polynomial, kept both in evaluation and coefficient form.
#[derive(Clone, Debug)]
pub(crate) struct Column<F: PrimeField> {
    pub evals: Vec<F>,
    pub coeffs: Vec<F>,
}

impl<F: PrimeField> Column<F> {
    pub fn from_evals(domain: &Domain<F>, mut evals: Vec<F>) -> Self {
        evals.resize(domain.size(), F::zero());
        let coeffs = domain.interpolate(&evals);
        Self { evals, coeffs }
    }

    /// Evaluations over the extended domain.
    pub fn evals_ext(&self, domain: &Domain<F>) -> Vec<F> {
        domain.evaluate_ext(&self.coeffs)
    }
}

/// Fixed (ring dependent, witness independent) columns.
///
/// `px`/`py` interpolate the coordinates of the padded ring keys followed
/// by the blinding base powers; `selector` is one over the keyset rows.
#[derive(Clone, Debug)]
pub struct FixedColumns<C: TECurveConfig>
where
    C::BaseField: PrimeField,
{
    /// Points backing the `px`/`py` columns (rows `0..N-4`).
    pub(crate) points: Vec<TEAffine<C>>,
    pub(crate) px: Column<C::BaseField>,
    pub(crate) py: Column<C::BaseField>,
    pub(crate) selector: Column<C::BaseField>,
}

/// KZG commitments to the fixed columns: the compact "ring root" which
/// univocally identifies a ring.
///
/// Serializes to `3 * 48 = 144` bytes on BLS12-381.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct FixedColumnsCommitted<P: Pairing> {
    pub px: P::G1Affine,
    pub py: P::G1Affine,
    pub selector: P::G1Affine,
}

impl<C: TECurveConfig> FixedColumns<C>
where
    C::BaseField: PrimeField,
{
    /// Lay the ring out over the domain and interpolate the columns.
    ///
    /// Fails with `DomainMismatch` when the ring exceeds the keyset
    /// capacity of the domain.
    pub(crate) fn build(params: &PiopParams<C>, pks: &[TEAffine<C>]) -> Result<Self, Error> {
        if pks.len() > params.keyset_size {
            return Err(Error::DomainMismatch);
        }
        let mut points = Vec::with_capacity(params.domain_size() - RESERVED_ROWS);
        points.extend_from_slice(pks);
        points.resize(params.keyset_size, params.padding);
        points.extend_from_slice(&params.blinding_powers);
        debug_assert_eq!(points.len(), params.domain_size() - RESERVED_ROWS);

        // Reserved rows are zero in the column vectors; they are never
        // touched by an active constraint.
        let px_evals = points.iter().map(|p| p.x).collect();
        let py_evals = points.iter().map(|p| p.y).collect();
        let selector_evals = (0..params.keyset_size)
            .map(|_| C::BaseField::one())
            .collect();

        let px = Column::from_evals(&params.domain, px_evals);
        let py = Column::from_evals(&params.domain, py_evals);
        let selector = Column::from_evals(&params.domain, selector_evals);

        Ok(Self {
            points,
            px,
            py,
            selector,
        })
    }

    pub(crate) fn commit<P: Pairing<ScalarField = C::BaseField>>(
        &self,
        srs: &Srs<P>,
        backend: MsmBackend,
    ) -> Result<FixedColumnsCommitted<P>, Error> {
        Ok(FixedColumnsCommitted {
            px: srs.commit(backend, &self.px.coeffs)?,
            py: srs.commit(backend, &self.py.coeffs)?,
            selector: srs.commit(backend, &self.selector.coeffs)?,
        })
    }
}

/// Ring prover key: fixed columns with their commitments.
#[derive(Clone, Debug)]
pub struct ProverKey<P: Pairing, C: TECurveConfig<BaseField = P::ScalarField>>
where
    C::BaseField: PrimeField,
{
    pub(crate) fixed: FixedColumns<C>,
    pub(crate) committed: FixedColumnsCommitted<P>,
}

/// Ring verifier key: the ring root plus the KZG verification key.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifierKey<P: Pairing> {
    pub(crate) commitments: FixedColumnsCommitted<P>,
    pub(crate) raw_vk: RawVk<P>,
}

impl<P: Pairing> VerifierKey<P> {
    /// The ring root this key verifies against.
    pub fn commitment(&self) -> FixedColumnsCommitted<P> {
        self.commitments
    }

    /// Rebuild a verifier key from a ring root and a KZG verification key.
    pub fn from_commitment_and_vk(commitments: FixedColumnsCommitted<P>, raw_vk: RawVk<P>) -> Self {
        Self {
            commitments,
            raw_vk,
        }
    }
}

/// Witness columns for a specific prover.
#[derive(Clone, Debug)]
pub(crate) struct WitnessColumns<F: PrimeField> {
    pub bits: Column<F>,
    pub acc_ip: Column<F>,
    pub acc_x: Column<F>,
    pub acc_y: Column<F>,
}

impl<F: PrimeField> WitnessColumns<F> {
    /// Build the witness for the key at `key_index` and the given Pedersen
    /// blinding factor.
    ///
    /// Returns the columns together with the accumulator end point
    /// `seed + pk + b*B`.
    pub fn build<C>(
        params: &PiopParams<C>,
        points: &[TEAffine<C>],
        key_index: usize,
        blinding: &C::ScalarField,
    ) -> (Self, TEAffine<C>)
    where
        C: TECurveConfig<BaseField = F>,
    {
        let n = params.domain_size();
        let rows = n - RESERVED_ROWS;
        debug_assert_eq!(points.len(), rows);
        debug_assert!(key_index < params.keyset_size);

        // Selection bit for the key slot, then the blinding bits over the
        // power-of-two rows.
        let mut bits = ark_std::vec![false; rows + 1];
        bits[key_index] = true;
        let blinding_bits = blinding.into_bigint().to_bits_le();
        for (i, bit) in blinding_bits.iter().take(params.scalar_bits).enumerate() {
            bits[params.keyset_size + i] = *bit;
        }

        // Conditional addition accumulator: row i+1 extends row i with the
        // point at row i when its bit is set.
        let mut acc = Vec::with_capacity(rows + 1);
        acc.push(params.seed.into_group());
        for i in 0..rows {
            let prev = acc[i];
            acc.push(if bits[i] { prev + points[i] } else { prev });
        }
        let acc = CurveGroup::normalize_batch(&acc);
        let result_plus_seed = acc[rows];

        // Running inner product of bits and keyset selector; lands on one
        // exactly when a single keyset bit is set.
        let mut acc_ip = Vec::with_capacity(rows + 1);
        acc_ip.push(F::zero());
        for i in 0..rows {
            let inc = if bits[i] && i < params.keyset_size {
                F::one()
            } else {
                F::zero()
            };
            acc_ip.push(acc_ip[i] + inc);
        }

        let bits_evals = bits
            .iter()
            .map(|b| if *b { F::one() } else { F::zero() })
            .collect();
        let acc_x_evals = acc.iter().map(|p| p.x).collect();
        let acc_y_evals = acc.iter().map(|p| p.y).collect();

        let witness = Self {
            bits: Column::from_evals(&params.domain, bits_evals),
            acc_ip: Column::from_evals(&params.domain, acc_ip),
            acc_x: Column::from_evals(&params.domain, acc_x_evals),
            acc_y: Column::from_evals(&params.domain, acc_y_evals),
        };
        (witness, result_plus_seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Bls12_381;
    use ark_ed_on_bls12_381_bandersnatch::{BandersnatchConfig, EdwardsAffine, Fr as CurveScalar};
    use ark_std::UniformRand;

    type F = ark_bls12_381::Fr;

    fn test_params() -> PiopParams<BandersnatchConfig> {
        let rng = &mut ark_std::test_rng();
        let seed = EdwardsAffine::rand(rng);
        let blinding_base = EdwardsAffine::rand(rng);
        let padding = EdwardsAffine::rand(rng);
        PiopParams::setup(512, seed, blinding_base, padding).unwrap()
    }

    #[test]
    fn fixed_columns_layout() {
        let rng = &mut ark_std::test_rng();
        let params = test_params();
        let pks: Vec<_> = (0..8).map(|_| EdwardsAffine::rand(rng)).collect();
        let fixed = FixedColumns::build(&params, &pks).unwrap();

        assert_eq!(fixed.points.len(), 508);
        assert_eq!(fixed.px.evals.len(), 512);
        // Ring keys, then padding, then blinding powers.
        assert_eq!(fixed.points[0], pks[0]);
        assert_eq!(fixed.points[8], params.padding);
        assert_eq!(fixed.points[255], params.blinding_powers[0]);
        // Selector is 1 on the keyset, 0 after.
        assert_eq!(fixed.selector.evals[254], F::one());
        assert_eq!(fixed.selector.evals[255], F::zero());
    }

    #[test]
    fn oversized_ring_is_rejected() {
        let rng = &mut ark_std::test_rng();
        let params = test_params();
        let pks: Vec<_> = (0..256).map(|_| EdwardsAffine::rand(rng)).collect();
        assert_eq!(
            FixedColumns::build(&params, &pks).unwrap_err(),
            Error::DomainMismatch
        );
    }

    #[test]
    fn witness_accumulator_ends_on_committed_key() {
        let rng = &mut ark_std::test_rng();
        let params = test_params();
        let pks: Vec<_> = (0..8).map(|_| EdwardsAffine::rand(rng)).collect();
        let fixed = FixedColumns::build(&params, &pks).unwrap();

        let blinding = CurveScalar::rand(rng);
        let key_index = 3;
        let (witness, result_plus_seed) =
            WitnessColumns::<F>::build(&params, &fixed.points, key_index, &blinding);

        let expected =
            (params.seed + pks[key_index] + params.blinding_base * blinding).into_affine();
        assert_eq!(result_plus_seed, expected);

        // Inner product accumulator ends on one.
        assert_eq!(witness.acc_ip.evals[508], F::one());
        assert_eq!(witness.acc_ip.evals[0], F::zero());
    }

    #[test]
    fn ring_root_is_144_bytes_and_deterministic() {
        let rng = &mut ark_std::test_rng();
        let params = test_params();
        let srs = Srs::<Bls12_381>::generate(512, rng);
        let pks: Vec<_> = (0..8).map(|_| EdwardsAffine::rand(rng)).collect();

        let fixed = FixedColumns::build(&params, &pks).unwrap();
        let c1 = fixed.commit(&srs, MsmBackend::Arkworks).unwrap();
        let c2 = fixed.commit(&srs, MsmBackend::Portable).unwrap();
        assert_eq!(c1, c2);

        let mut buf = Vec::new();
        c1.serialize_compressed(&mut buf).unwrap();
        assert_eq!(buf.len(), 144);

        let c3 = FixedColumnsCommitted::<Bls12_381>::deserialize_compressed(&mut &buf[..]).unwrap();
        assert_eq!(c1, c3);
    }
}
