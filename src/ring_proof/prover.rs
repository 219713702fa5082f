//! Ring argument prover.

use super::columns::{FixedColumnsCommitted, ProverKey, WitnessColumns};
use super::constraints::{self, ColumnEvals};
use super::kzg::{MsmBackend, RawVk, Srs};
use super::piop::PiopParams;
use super::poly;
use super::transcript::Transcript;
use super::{CONSTRAINT_COUNT, EXCLUDED_POINTS, OPENED_COLUMNS};
use crate::Error;
use ark_ec::pairing::Pairing;
use ark_ec::twisted_edwards::{Affine as TEAffine, TECurveConfig};
use ark_ec::AffineRepr;
use ark_ec::CurveGroup;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;

/// Ring membership proof.
///
/// Wire layout (BLS12-381): four witness commitments, seven column
/// evaluations at `ζ`, the quotient commitment, the linearization
/// evaluation at `ζω` and the two KZG opening proofs; 592 bytes total.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct RingProof<P: Pairing> {
    pub bits_commitment: P::G1Affine,
    pub acc_ip_commitment: P::G1Affine,
    pub acc_x_commitment: P::G1Affine,
    pub acc_y_commitment: P::G1Affine,
    pub px_at_zeta: P::ScalarField,
    pub py_at_zeta: P::ScalarField,
    pub selector_at_zeta: P::ScalarField,
    pub bits_at_zeta: P::ScalarField,
    pub acc_ip_at_zeta: P::ScalarField,
    pub acc_x_at_zeta: P::ScalarField,
    pub acc_y_at_zeta: P::ScalarField,
    pub quotient_commitment: P::G1Affine,
    pub lin_at_zeta_omega: P::ScalarField,
    pub opening_at_zeta: P::G1Affine,
    pub opening_at_zeta_omega: P::G1Affine,
}

impl<P: Pairing> RingProof<P> {
    pub(crate) fn column_evals(&self) -> ColumnEvals<P::ScalarField> {
        ColumnEvals {
            px: self.px_at_zeta,
            py: self.py_at_zeta,
            selector: self.selector_at_zeta,
            bits: self.bits_at_zeta,
            acc_ip: self.acc_ip_at_zeta,
            acc_x: self.acc_x_at_zeta,
            acc_y: self.acc_y_at_zeta,
        }
    }

    pub(crate) fn witness_commitments(&self) -> [P::G1Affine; 4] {
        [
            self.bits_commitment,
            self.acc_ip_commitment,
            self.acc_x_commitment,
            self.acc_y_commitment,
        ]
    }
}

/// Transcript phases, shared verbatim by prover and verifier.
pub(crate) mod phases {
    use super::*;

    /// Seed the transcript and absorb the statement: verification key,
    /// instance (the key commitment) and the witness column commitments.
    /// Returns the constraint aggregation coefficients.
    pub fn constraint_coeffs<P: Pairing, C>(
        transcript: &mut Transcript,
        raw_vk: &RawVk<P>,
        fixed: &FixedColumnsCommitted<P>,
        instance: &TEAffine<C>,
        witness_commitments: &[P::G1Affine; 4],
    ) -> Vec<P::ScalarField>
    where
        C: TECurveConfig<BaseField = P::ScalarField>,
    {
        let mut buf = Vec::new();
        raw_vk
            .serialize_compressed(&mut buf)
            .expect("serialization into a vector is infallible");
        fixed
            .serialize_compressed(&mut buf)
            .expect("serialization into a vector is infallible");
        transcript.append_bytes(b"vk", &buf);
        transcript.append(b"instance", instance);
        let mut buf = Vec::new();
        for c in witness_commitments {
            c.serialize_compressed(&mut buf)
                .expect("serialization into a vector is infallible");
        }
        transcript.append_bytes(b"committed_cols", &buf);
        transcript.challenges(b"constraints_aggregation", CONSTRAINT_COUNT)
    }

    /// Absorb the quotient commitment, return the evaluation point `ζ`.
    pub fn evaluation_point<P: Pairing>(
        transcript: &mut Transcript,
        quotient_commitment: &P::G1Affine,
    ) -> P::ScalarField {
        transcript.append(b"quotient", quotient_commitment);
        transcript.challenge(b"evaluation_point")
    }

    /// Absorb the column evaluations and the linearization evaluation,
    /// return the KZG aggregation coefficients.
    pub fn aggregation_coeffs<F: ark_ff::PrimeField>(
        transcript: &mut Transcript,
        evals: &ColumnEvals<F>,
        lin_at_zeta_omega: &F,
    ) -> Vec<F> {
        let mut buf = Vec::new();
        for e in evals.as_array() {
            e.serialize_compressed(&mut buf)
                .expect("serialization into a vector is infallible");
        }
        transcript.append_bytes(b"register_evaluations", &buf);
        transcript.append(b"shifted_linearization_evaluation", lin_at_zeta_omega);
        transcript.challenges(b"kzg_aggregation", OPENED_COLUMNS)
    }
}

/// Prover instance, bound to a ring position.
pub struct RingProver<P: Pairing, C: TECurveConfig<BaseField = P::ScalarField>> {
    srs: Srs<P>,
    piop: PiopParams<C>,
    prover_key: ProverKey<P, C>,
    key_index: usize,
    backend: MsmBackend,
    label: Vec<u8>,
}

impl<P, C> RingProver<P, C>
where
    P: Pairing,
    C: TECurveConfig<BaseField = P::ScalarField>,
{
    pub fn init(
        srs: Srs<P>,
        piop: PiopParams<C>,
        prover_key: ProverKey<P, C>,
        key_index: usize,
        backend: MsmBackend,
        label: &[u8],
    ) -> Result<Self, Error> {
        if key_index >= piop.keyset_size() {
            return Err(Error::KeyNotInRing);
        }
        Ok(Self {
            srs,
            piop,
            prover_key,
            key_index,
            backend,
            label: label.to_vec(),
        })
    }

    /// The ring key at the bound position.
    pub fn key(&self) -> TEAffine<C> {
        self.prover_key.fixed.points[self.key_index]
    }

    /// Prove that `key() + blinding * B` opens to a ring member.
    pub fn prove(&self, blinding: C::ScalarField) -> Result<RingProof<P>, Error> {
        let params = &self.piop;
        let fixed = &self.prover_key.fixed;

        // Witness columns and their commitments.
        let (witness, result_plus_seed) =
            WitnessColumns::build(params, &fixed.points, self.key_index, &blinding);
        let bits_commitment = self.srs.commit(self.backend, &witness.bits.coeffs)?;
        let acc_ip_commitment = self.srs.commit(self.backend, &witness.acc_ip.coeffs)?;
        let acc_x_commitment = self.srs.commit(self.backend, &witness.acc_x.coeffs)?;
        let acc_y_commitment = self.srs.commit(self.backend, &witness.acc_y.coeffs)?;
        let witness_commitments = [
            bits_commitment,
            acc_ip_commitment,
            acc_x_commitment,
            acc_y_commitment,
        ];

        // The instance is the key commitment, i.e. the accumulator end
        // value stripped of the seed.
        let instance = (result_plus_seed.into_group() - params.seed).into_affine();

        let mut transcript = Transcript::new(&self.label);
        let alphas = phases::constraint_coeffs(
            &mut transcript,
            &self.srs.raw_vk(),
            &self.prover_key.committed,
            &instance,
            &witness_commitments,
        );

        // Aggregate the constraints and fold them into the quotient.
        let agg_ext = constraints::aggregate_constraints_ext(
            params,
            fixed,
            &witness,
            &result_plus_seed,
            &alphas,
        );
        let mut agg = params.domain.interpolate_ext(&agg_ext);
        let n = params.domain_size();
        for k in 1..=EXCLUDED_POINTS {
            agg = poly::mul_by_linear(&agg, &params.domain.element(n - k));
        }
        let quotient = poly::divide_by_vanishing(&agg, n);
        let quotient_commitment = self.srs.commit(self.backend, &quotient)?;

        let zeta = phases::evaluation_point::<P>(&mut transcript, &quotient_commitment);
        let zeta_omega = zeta * params.domain.omega();

        let evals = ColumnEvals {
            px: poly::evaluate(&fixed.px.coeffs, &zeta),
            py: poly::evaluate(&fixed.py.coeffs, &zeta),
            selector: poly::evaluate(&fixed.selector.coeffs, &zeta),
            bits: poly::evaluate(&witness.bits.coeffs, &zeta),
            acc_ip: poly::evaluate(&witness.acc_ip.coeffs, &zeta),
            acc_x: poly::evaluate(&witness.acc_x.coeffs, &zeta),
            acc_y: poly::evaluate(&witness.acc_y.coeffs, &zeta),
        };

        // Linearization polynomial collecting the shifted register terms.
        let (f_ip, f_x, f_y) = constraints::linearization_factors(params, &evals, &zeta);
        let mut lin = Vec::new();
        poly::add_assign_scaled(&mut lin, &witness.acc_ip.coeffs, &(alphas[0] * f_ip));
        poly::add_assign_scaled(&mut lin, &witness.acc_x.coeffs, &(alphas[1] * f_x));
        poly::add_assign_scaled(&mut lin, &witness.acc_y.coeffs, &(alphas[2] * f_y));
        let lin_at_zeta_omega = poly::evaluate(&lin, &zeta_omega);

        let nus = phases::aggregation_coeffs(&mut transcript, &evals, &lin_at_zeta_omega);

        // Aggregated opening at ζ over the eight committed polynomials.
        let mut aggregated = Vec::new();
        let columns: [&[P::ScalarField]; OPENED_COLUMNS] = [
            &fixed.px.coeffs,
            &fixed.py.coeffs,
            &fixed.selector.coeffs,
            &witness.bits.coeffs,
            &witness.acc_ip.coeffs,
            &witness.acc_x.coeffs,
            &witness.acc_y.coeffs,
            &quotient,
        ];
        for (coeffs, nu) in columns.iter().zip(nus.iter()) {
            poly::add_assign_scaled(&mut aggregated, coeffs, nu);
        }
        let (_, opening_at_zeta) = self.srs.open(self.backend, &aggregated, &zeta)?;
        let (_, opening_at_zeta_omega) = self.srs.open(self.backend, &lin, &zeta_omega)?;

        Ok(RingProof {
            bits_commitment,
            acc_ip_commitment,
            acc_x_commitment,
            acc_y_commitment,
            px_at_zeta: evals.px,
            py_at_zeta: evals.py,
            selector_at_zeta: evals.selector,
            bits_at_zeta: evals.bits,
            acc_ip_at_zeta: evals.acc_ip,
            acc_x_at_zeta: evals.acc_x,
            acc_y_at_zeta: evals.acc_y,
            quotient_commitment,
            lin_at_zeta_omega,
            opening_at_zeta,
            opening_at_zeta_omega,
        })
    }
}
