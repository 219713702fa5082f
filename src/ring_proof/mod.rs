//! Ring membership SNARK backend.
//!
//! Proves that a Pedersen key commitment `pk_com = pk + b*B` opens to a
//! public key belonging to a committed ring, without revealing which one.
//!
//! The argument is a polynomial IOP compiled with KZG over a pairing whose
//! scalar field equals the base field of the VRF curve (BLS12-381 for
//! Bandersnatch and JubJub, BN254 for Baby-JubJub):
//!
//! - the ring keys are interpolated into two *fixed* column polynomials
//!   (`px`, `py`) over a power-of-two evaluation domain, together with a
//!   keyset selector column (`s`); their KZG commitments form the compact
//!   "ring root" a verifier needs;
//! - the prover commits *witness* columns encoding a selection bitvector
//!   and a conditional-addition accumulator walking from a fixed seed point
//!   to `seed + pk_com`;
//! - seven constraints (accumulator transitions via the twisted Edwards
//!   addition law, bit booleanity, boundary conditions) are aggregated with
//!   Fiat-Shamir powers, divided by the domain vanishing polynomial and the
//!   resulting quotient is committed;
//! - everything is opened at a random point `ζ` (and the shifted registers
//!   at `ζω` through a linearization polynomial), with two batched KZG
//!   opening checks.
//!
//! The argument structure (columns, constraints, transcript phases and
//! the proof wire layout) follows the Bandersnatch ring proof
//! construction; all byte sizes are pinned by tests.

mod columns;
mod constraints;
mod domain;
mod kzg;
mod piop;
mod poly;
mod prover;
mod transcript;
mod verifier;

pub use columns::{FixedColumns, FixedColumnsCommitted, ProverKey, VerifierKey};
pub use domain::Domain;
pub use kzg::{MsmBackend, RawVk, Srs};
pub use piop::PiopParams;
pub use prover::{RingProof, RingProver};
pub use transcript::Transcript;
pub use verifier::RingVerifier;

/// Rows reserved at the tail of the domain: one row to close the last
/// accumulator transition plus three rows excluded from the constraint
/// domain.
pub(crate) const RESERVED_ROWS: usize = 4;

/// Number of tail domain points excluded from the constraint system.
pub(crate) const EXCLUDED_POINTS: usize = 3;

/// Number of aggregated constraints.
pub(crate) const CONSTRAINT_COUNT: usize = 7;

/// Number of committed polynomials opened at `ζ` (three fixed columns,
/// four witness columns and the quotient).
pub(crate) const OPENED_COLUMNS: usize = 8;
