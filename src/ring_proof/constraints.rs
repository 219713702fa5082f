//! The ring argument constraint system.
//!
//! Seven constraints over the column polynomials, aggregated with
//! Fiat-Shamir powers. Transitions use the denominator-free twisted
//! Edwards addition law
//!
//! `x3 (y1 y2 + a x1 x2) = x1 y1 + x2 y2`,
//! `y3 (x1 y2 - x2 y1) = x1 y1 - x2 y2`,
//!
//! gated by the selection bit, and are deactivated on the last constrained
//! row by the `(x - ω^{N-4})` factor. Boundary constraints pin the
//! accumulator to `seed` on the first row and to `seed + pk_com` on row
//! `N-4`, and the bit inner product to exactly one keyset hit.

use super::columns::{FixedColumns, WitnessColumns};
use super::piop::PiopParams;
use super::{CONSTRAINT_COUNT, EXCLUDED_POINTS};
use crate::Error;
use ark_ec::twisted_edwards::{Affine as TEAffine, TECurveConfig};
use ark_ff::{One, PrimeField};
use ark_std::vec::Vec;

/// Evaluations of the seven committed columns at the opening point, in
/// wire order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ColumnEvals<F: PrimeField> {
    pub px: F,
    pub py: F,
    pub selector: F,
    pub bits: F,
    pub acc_ip: F,
    pub acc_x: F,
    pub acc_y: F,
}

impl<F: PrimeField> ColumnEvals<F> {
    pub fn as_array(&self) -> [F; 7] {
        [
            self.px,
            self.py,
            self.selector,
            self.bits,
            self.acc_ip,
            self.acc_x,
            self.acc_y,
        ]
    }
}

/// Rotate an extended evaluation vector to account for `x → ωx`.
fn shift_ext<F: Clone>(evals: &[F], shift: usize) -> Vec<F> {
    let mut out = Vec::with_capacity(evals.len());
    out.extend_from_slice(&evals[shift..]);
    out.extend_from_slice(&evals[..shift]);
    out
}

/// Aggregated constraint evaluations `Σ αᵢ cᵢ` over the extended domain.
pub(crate) fn aggregate_constraints_ext<C>(
    params: &PiopParams<C>,
    fixed: &FixedColumns<C>,
    witness: &WitnessColumns<C::BaseField>,
    result_plus_seed: &TEAffine<C>,
    alphas: &[C::BaseField],
) -> Vec<C::BaseField>
where
    C: TECurveConfig,
    C::BaseField: PrimeField,
{
    debug_assert_eq!(alphas.len(), CONSTRAINT_COUNT);

    let domain = &params.domain;
    let shift = super::domain::Domain::<C::BaseField>::EXT_FACTOR;
    let last_row = params.last_constrained_row();

    let px = fixed.px.evals_ext(domain);
    let py = fixed.py.evals_ext(domain);
    let sel = fixed.selector.evals_ext(domain);
    let bits = witness.bits.evals_ext(domain);
    let acc_ip = witness.acc_ip.evals_ext(domain);
    let acc_x = witness.acc_x.evals_ext(domain);
    let acc_y = witness.acc_y.evals_ext(domain);

    let acc_ip_w = shift_ext(&acc_ip, shift);
    let acc_x_w = shift_ext(&acc_x, shift);
    let acc_y_w = shift_ext(&acc_y, shift);

    let omega_last = domain.element(last_row);
    let ext_elements = domain.ext_elements();

    let l0 = domain.evaluate_ext(&domain.lagrange_coeffs(0));
    let ln = domain.evaluate_ext(&domain.lagrange_coeffs(last_row));

    let a = C::COEFF_A;
    let (sx, sy) = (params.seed.x, params.seed.y);
    let (rx, ry) = (result_plus_seed.x, result_plus_seed.y);
    let one = C::BaseField::one();

    let mut agg = Vec::with_capacity(domain.ext_size());
    for i in 0..domain.ext_size() {
        let not_last = ext_elements[i] - omega_last;
        let (x1, y1) = (acc_x[i], acc_y[i]);
        let (x2, y2) = (px[i], py[i]);
        let (x3, y3) = (acc_x_w[i], acc_y_w[i]);
        let b = bits[i];

        let c1 = (acc_ip_w[i] - acc_ip[i] - b * sel[i]) * not_last;
        let c2 = (b * (x3 * (y1 * y2 + a * x1 * x2) - (x1 * y1 + x2 * y2))
            + (one - b) * (x3 - x1))
            * not_last;
        let c3 = (b * (y3 * (x1 * y2 - x2 * y1) - (x1 * y1 - x2 * y2)) + (one - b) * (y3 - y1))
            * not_last;
        let c4 = b * (one - b);
        let c5 = (x1 - sx) * l0[i] + (x1 - rx) * ln[i];
        let c6 = (y1 - sy) * l0[i] + (y1 - ry) * ln[i];
        let c7 = acc_ip[i] * l0[i] + (acc_ip[i] - one) * ln[i];

        let cs = [c1, c2, c3, c4, c5, c6, c7];
        agg.push(
            cs.iter()
                .zip(alphas.iter())
                .map(|(c, alpha)| *c * alpha)
                .sum(),
        );
    }
    agg
}

/// Constraint contributions evaluated at `ζ`, with the shifted registers
/// zeroed out; their contribution is recovered through the linearization
/// polynomial opened at `ζω`.
pub(crate) fn constraints_at_zeta<C>(
    params: &PiopParams<C>,
    evals: &ColumnEvals<C::BaseField>,
    result_plus_seed: &TEAffine<C>,
    zeta: &C::BaseField,
) -> Result<[C::BaseField; CONSTRAINT_COUNT], Error>
where
    C: TECurveConfig,
    C::BaseField: PrimeField,
{
    let last_row = params.last_constrained_row();
    let kappa = *zeta - params.domain.element(last_row);
    let l0 = params.domain.lagrange_eval(0, zeta)?;
    let ln = params.domain.lagrange_eval(last_row, zeta)?;

    let one = C::BaseField::one();
    let (sx, sy) = (params.seed.x, params.seed.y);
    let (rx, ry) = (result_plus_seed.x, result_plus_seed.y);
    let (x1, y1) = (evals.acc_x, evals.acc_y);
    let (x2, y2) = (evals.px, evals.py);
    let b = evals.bits;

    let c1 = -(evals.acc_ip + b * evals.selector) * kappa;
    let c2 = (-b * (x1 * y1 + x2 * y2) - (one - b) * x1) * kappa;
    let c3 = (-b * (x1 * y1 - x2 * y2) - (one - b) * y1) * kappa;
    let c4 = b * (one - b);
    let c5 = (x1 - sx) * l0 + (x1 - rx) * ln;
    let c6 = (y1 - sy) * l0 + (y1 - ry) * ln;
    let c7 = evals.acc_ip * l0 + (evals.acc_ip - one) * ln;

    Ok([c1, c2, c3, c4, c5, c6, c7])
}

/// Scalar factors multiplying the `acc_ip`, `acc_x` and `acc_y`
/// polynomials inside the linearization polynomial.
pub(crate) fn linearization_factors<C>(
    params: &PiopParams<C>,
    evals: &ColumnEvals<C::BaseField>,
    zeta: &C::BaseField,
) -> (C::BaseField, C::BaseField, C::BaseField)
where
    C: TECurveConfig,
    C::BaseField: PrimeField,
{
    let kappa = *zeta - params.domain.element(params.last_constrained_row());
    let a = C::COEFF_A;
    let one = C::BaseField::one();
    let (x1, y1) = (evals.acc_x, evals.acc_y);
    let (x2, y2) = (evals.px, evals.py);
    let b = evals.bits;

    let f_ip = kappa;
    let f_x = (b * (y1 * y2 + a * x1 * x2) + (one - b)) * kappa;
    let f_y = (b * (x1 * y2 - x2 * y1) + (one - b)) * kappa;
    (f_ip, f_x, f_y)
}

/// `Π_{k=1..3} (ζ - ω^{N-k})`: the tail points excluded from the
/// constraint domain.
pub(crate) fn excluded_points_factor<C>(params: &PiopParams<C>, zeta: &C::BaseField) -> C::BaseField
where
    C: TECurveConfig,
    C::BaseField: PrimeField,
{
    let n = params.domain_size();
    (1..=EXCLUDED_POINTS)
        .map(|k| *zeta - params.domain.element(n - k))
        .product()
}
