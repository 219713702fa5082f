//! Common utilities.

pub mod common;
pub mod scalar_mul;
pub mod te_sw_map;

/// Standard procedures.
pub use self::common::*;
/// Fixed window and simultaneous scalar multiplication shortcuts.
pub use self::scalar_mul::*;
/// Twisted Edwards to Short Weierstrass mapping and vice versa.
pub use self::te_sw_map::*;

/// Point scalar multiplication with optional secret splitting.
///
/// When the `secret-split` feature is enabled the secret scalar is split
/// into the sum of two randomly sampled scalars which retain the same sum.
/// This doubles the number of scalar multiplications but offers some side
/// channel resistance.
///
/// Without the feature enabled this is a plain scalar multiplication.
mod secret_split {
    #[cfg(feature = "secret-split")]
    #[doc(hidden)]
    #[macro_export]
    macro_rules! smul {
        ($p:expr, $s:expr) => {{
            #[inline(always)]
            fn get_rand<T: ark_std::UniformRand>(_: &T) -> T {
                T::rand(&mut ark_std::rand::rngs::OsRng)
            }
            let x1 = get_rand(&$s);
            let x2 = $s - x1;
            $p * x1 + $p * x2
        }};
    }

    #[cfg(not(feature = "secret-split"))]
    #[doc(hidden)]
    #[macro_export]
    macro_rules! smul {
        ($p:expr, $s:expr) => {
            $p * $s
        };
    }
}
