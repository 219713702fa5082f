//! Ring argument verifier.

use super::columns::VerifierKey;
use super::constraints;
use super::piop::PiopParams;
use super::prover::{phases, RingProof};
use super::transcript::Transcript;
use super::OPENED_COLUMNS;
use crate::Error;
use ark_ec::pairing::Pairing;
use ark_ec::twisted_edwards::{Affine as TEAffine, TECurveConfig};
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::{Field, Zero};
use ark_std::vec::Vec;

/// Verifier instance, bound to a ring root.
pub struct RingVerifier<P: Pairing, C: TECurveConfig<BaseField = P::ScalarField>> {
    verifier_key: VerifierKey<P>,
    piop: PiopParams<C>,
    label: Vec<u8>,
}

impl<P, C> RingVerifier<P, C>
where
    P: Pairing,
    C: TECurveConfig<BaseField = P::ScalarField>,
{
    pub fn init(verifier_key: VerifierKey<P>, piop: PiopParams<C>, label: &[u8]) -> Self {
        Self {
            verifier_key,
            piop,
            label: label.to_vec(),
        }
    }

    /// Verify that the key commitment opens to a member of the committed
    /// ring.
    pub fn verify(&self, proof: &RingProof<P>, key_commitment: TEAffine<C>) -> Result<(), Error> {
        let params = &self.piop;
        let domain = &params.domain;
        let result_plus_seed = (params.seed + key_commitment).into_affine();

        // Challenges over the same transcript as the prover.
        let mut transcript = Transcript::new(&self.label);
        let alphas = phases::constraint_coeffs(
            &mut transcript,
            &self.verifier_key.raw_vk,
            &self.verifier_key.commitments,
            &key_commitment,
            &proof.witness_commitments(),
        );
        let zeta = phases::evaluation_point::<P>(&mut transcript, &proof.quotient_commitment);
        let evals = proof.column_evals();
        let nus = phases::aggregation_coeffs(&mut transcript, &evals, &proof.lin_at_zeta_omega);

        // Quotient evaluation recovered from the constraint identity.
        let cs = constraints::constraints_at_zeta(params, &evals, &result_plus_seed, &zeta)?;
        let mut acc = proof.lin_at_zeta_omega;
        for (c, alpha) in cs.iter().zip(alphas.iter()) {
            acc += *c * alpha;
        }
        let excluded = constraints::excluded_points_factor(params, &zeta);
        let vanishing_inv = domain
            .vanishing_eval(&zeta)
            .inverse()
            .ok_or(Error::InternalInvariant)?;
        let quotient_at_zeta = acc * excluded * vanishing_inv;

        // Batched opening at ζ.
        let commitments: [P::G1Affine; OPENED_COLUMNS] = [
            self.verifier_key.commitments.px,
            self.verifier_key.commitments.py,
            self.verifier_key.commitments.selector,
            proof.bits_commitment,
            proof.acc_ip_commitment,
            proof.acc_x_commitment,
            proof.acc_y_commitment,
            proof.quotient_commitment,
        ];
        let aggregated_commitment = P::G1::msm_unchecked(&commitments, &nus).into_affine();
        let mut aggregated_eval = P::ScalarField::zero();
        let mut open_evals = evals.as_array().to_vec();
        open_evals.push(quotient_at_zeta);
        for (e, nu) in open_evals.iter().zip(nus.iter()) {
            aggregated_eval += *e * nu;
        }
        if !self.verifier_key.raw_vk.verify(
            &aggregated_commitment,
            &proof.opening_at_zeta,
            &zeta,
            &aggregated_eval,
        ) {
            return Err(Error::InvalidProof);
        }

        // Linearization opening at ζω; the commitment is reconstructed
        // from the shifted register commitments.
        let (f_ip, f_x, f_y) = constraints::linearization_factors(params, &evals, &zeta);
        let lin_commitment = P::G1::msm_unchecked(
            &[
                proof.acc_ip_commitment,
                proof.acc_x_commitment,
                proof.acc_y_commitment,
            ],
            &[alphas[0] * f_ip, alphas[1] * f_x, alphas[2] * f_y],
        )
        .into_affine();
        let zeta_omega = zeta * domain.omega();
        if !self.verifier_key.raw_vk.verify(
            &lin_commitment,
            &proof.opening_at_zeta_omega,
            &zeta_omega,
            &proof.lin_at_zeta_omega,
        ) {
            return Err(Error::InvalidProof);
        }

        Ok(())
    }
}
