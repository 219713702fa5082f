//! Power-of-two evaluation domains with precomputed NTT tables.

use crate::Error;
use ark_ff::{FftField, Field};
use ark_std::vec::Vec;

/// Radix-2 NTT machinery for a single power-of-two size.
///
/// All values stay in the field's internal Montgomery representation;
/// conversions happen only at (de)serialization boundaries.
#[derive(Clone, Debug)]
pub(crate) struct Radix2Fft<F: FftField> {
    size: usize,
    omega: F,
    size_inv: F,
    /// Bit-reversal permutation table.
    bitrev: Vec<u32>,
    /// `ω^i` for `i < size/2`; stage `m` butterflies use stride `size/m`.
    twiddles: Vec<F>,
    /// `ω^-i` for `i < size/2`.
    inv_twiddles: Vec<F>,
}

impl<F: FftField> Radix2Fft<F> {
    pub fn new(size: usize) -> Result<Self, Error> {
        if !size.is_power_of_two() || size < 2 {
            return Err(Error::DomainMismatch);
        }
        let log_size = size.trailing_zeros();
        if log_size > F::TWO_ADICITY {
            return Err(Error::DomainMismatch);
        }
        let omega = F::get_root_of_unity(size as u64).ok_or(Error::DomainMismatch)?;
        let omega_inv = omega.inverse().ok_or(Error::InternalInvariant)?;
        let size_inv = F::from(size as u64)
            .inverse()
            .ok_or(Error::InternalInvariant)?;

        let mut bitrev = Vec::with_capacity(size);
        for i in 0..size as u32 {
            bitrev.push(i.reverse_bits() >> (32 - log_size));
        }

        let mut twiddles = Vec::with_capacity(size / 2);
        let mut inv_twiddles = Vec::with_capacity(size / 2);
        let mut w = F::one();
        let mut w_inv = F::one();
        for _ in 0..size / 2 {
            twiddles.push(w);
            inv_twiddles.push(w_inv);
            w *= omega;
            w_inv *= omega_inv;
        }

        Ok(Self {
            size,
            omega,
            size_inv,
            bitrev,
            twiddles,
            inv_twiddles,
        })
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn omega(&self) -> F {
        self.omega
    }

    /// Iterative in-place Cooley-Tukey butterfly pass.
    fn transform(&self, values: &mut [F], twiddles: &[F]) {
        let n = self.size;
        debug_assert_eq!(values.len(), n);
        for i in 0..n {
            let j = self.bitrev[i] as usize;
            if i < j {
                values.swap(i, j);
            }
        }
        let mut m = 2;
        while m <= n {
            let stride = n / m;
            let half = m / 2;
            for block in (0..n).step_by(m) {
                for j in 0..half {
                    let w = twiddles[j * stride];
                    let t = w * values[block + j + half];
                    let u = values[block + j];
                    values[block + j] = u + t;
                    values[block + j + half] = u - t;
                }
            }
            m *= 2;
        }
    }

    /// Coefficients to evaluations. Input longer than the domain is
    /// reduced modulo `x^n - 1` by coefficient folding.
    pub fn fft(&self, coeffs: &[F]) -> Vec<F> {
        let mut values = ark_std::vec![F::zero(); self.size];
        for (i, c) in coeffs.iter().enumerate() {
            values[i % self.size] += c;
        }
        self.transform(&mut values, &self.twiddles);
        values
    }

    /// Evaluations to coefficients.
    pub fn ifft(&self, evals: &[F]) -> Vec<F> {
        let mut coeffs = evals.to_vec();
        coeffs.resize(self.size, F::zero());
        self.transform(&mut coeffs, &self.inv_twiddles);
        coeffs.iter_mut().for_each(|c| *c *= self.size_inv);
        coeffs
    }
}

/// Evaluation domain of size `N` together with its 4N extension.
///
/// The extension hosts the constraint evaluations, whose degree can reach
/// `4N - 3`; the shift factor between the two is the rotation applied to
/// extended evaluation vectors to account for a `x → ωx` substitution.
#[derive(Clone, Debug)]
pub struct Domain<F: FftField> {
    base: Radix2Fft<F>,
    ext: Radix2Fft<F>,
    /// `ω^i` for the base domain.
    elements: Vec<F>,
}

impl<F: FftField> Domain<F> {
    /// Extension blow-up factor.
    pub const EXT_FACTOR: usize = 4;

    pub fn new(size: usize) -> Result<Self, Error> {
        let base = Radix2Fft::new(size)?;
        let ext = Radix2Fft::new(size * Self::EXT_FACTOR)?;
        let mut elements = Vec::with_capacity(size);
        let mut w = F::one();
        for _ in 0..size {
            elements.push(w);
            w *= base.omega();
        }
        Ok(Self {
            base,
            ext,
            elements,
        })
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.base.size()
    }

    #[inline(always)]
    pub fn ext_size(&self) -> usize {
        self.ext.size()
    }

    #[inline(always)]
    pub fn omega(&self) -> F {
        self.base.omega()
    }

    /// `ω^i`, with wrap-around indexing.
    #[inline(always)]
    pub fn element(&self, i: usize) -> F {
        self.elements[i % self.size()]
    }

    pub fn evaluate(&self, coeffs: &[F]) -> Vec<F> {
        self.base.fft(coeffs)
    }

    pub fn interpolate(&self, evals: &[F]) -> Vec<F> {
        self.base.ifft(evals)
    }

    pub fn evaluate_ext(&self, coeffs: &[F]) -> Vec<F> {
        self.ext.fft(coeffs)
    }

    pub fn interpolate_ext(&self, evals: &[F]) -> Vec<F> {
        self.ext.ifft(evals)
    }

    /// Elements of the extended domain.
    pub fn ext_elements(&self) -> Vec<F> {
        let mut out = Vec::with_capacity(self.ext_size());
        let mut w = F::one();
        for _ in 0..self.ext_size() {
            out.push(w);
            w *= self.ext.omega();
        }
        out
    }

    /// Coefficients of the `i`-th Lagrange basis polynomial.
    ///
    /// `L_i(x) = ω^i (x^N - 1) / (N (x - ω^i))`, whose `t`-th coefficient
    /// collapses to `ω^{-it} / N`.
    pub fn lagrange_coeffs(&self, i: usize) -> Vec<F> {
        let n = self.size();
        let w_neg_i = self.element(n - i % n);
        let mut coeffs = Vec::with_capacity(n);
        let mut c = self.base.size_inv;
        for _ in 0..n {
            coeffs.push(c);
            c *= w_neg_i;
        }
        coeffs
    }

    /// `L_i(ζ)` in closed form. Fails when `ζ ∈ H`.
    pub fn lagrange_eval(&self, i: usize, zeta: &F) -> Result<F, Error> {
        let wi = self.element(i);
        let denom = (*zeta - wi) * F::from(self.size() as u64);
        let denom_inv = denom.inverse().ok_or(Error::InternalInvariant)?;
        Ok(wi * self.vanishing_eval(zeta) * denom_inv)
    }

    /// `ζ^N - 1`.
    pub fn vanishing_eval(&self, zeta: &F) -> F {
        zeta.pow([self.size() as u64]) - F::one()
    }
}
