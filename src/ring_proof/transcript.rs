//! SHAKE-128 Fiat-Shamir transcript.
//!
//! Follows the `ark-transcript` discipline: every item is framed by a
//! big-endian u32 length footer, labels act as domain separators, and
//! challenges are read from a clone of the running XOF so that reading
//! does not disturb the accumulated state.

use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use ark_std::vec::Vec;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake128;

#[derive(Clone)]
pub struct Transcript {
    shake: Shake128,
    /// Length of the currently open write segment, if any.
    length: Option<u32>,
}

impl Transcript {
    /// Create a transcript domain-separated by the given protocol label.
    pub fn new(protocol_label: &[u8]) -> Self {
        let mut t = Self {
            shake: Shake128::default(),
            length: None,
        };
        t.label(protocol_label);
        t
    }

    /// Close the current write segment with its length footer.
    fn separate(&mut self) {
        if let Some(len) = self.length.take() {
            self.shake.update(&len.to_be_bytes());
        }
    }

    fn write(&mut self, data: &[u8]) {
        let len = self.length.get_or_insert(0);
        *len += data.len() as u32;
        self.shake.update(data);
    }

    /// Domain separation label.
    pub fn label(&mut self, label: &[u8]) {
        self.separate();
        self.write(label);
        self.separate();
    }

    /// Append raw bytes under the given label.
    pub fn append_bytes(&mut self, label: &[u8], data: &[u8]) {
        self.label(label);
        self.separate();
        self.write(data);
        self.separate();
    }

    /// Append a serializable object (compressed form) under the given label.
    pub fn append<T: CanonicalSerialize>(&mut self, label: &[u8], obj: &T) {
        let mut buf = Vec::new();
        obj.serialize_compressed(&mut buf)
            .expect("serialization into a vector is infallible");
        self.append_bytes(label, &buf);
    }

    /// Squeeze a field element challenge under the given label.
    ///
    /// Reads `ceil((|p| + 128) / 8)` bytes from a clone of the state and
    /// reduces them big-endian modulo the field order.
    pub fn challenge<F: PrimeField>(&mut self, label: &[u8]) -> F {
        self.label(label);
        self.write(b"challenge");
        let n = (F::MODULUS_BIT_SIZE as usize + 128).div_ceil(8);
        let mut buf = ark_std::vec![0u8; n];
        self.shake.clone().finalize_xof().read(&mut buf);
        self.separate();
        F::from_be_bytes_mod_order(&buf)
    }

    /// Squeeze `n` challenges under the same label.
    pub fn challenges<F: PrimeField>(&mut self, label: &[u8], n: usize) -> Vec<F> {
        (0..n).map(|_| self.challenge(label)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F = ark_bls12_381::Fr;

    #[test]
    fn deterministic_and_order_sensitive() {
        let mut t1 = Transcript::new(b"proto");
        let mut t2 = Transcript::new(b"proto");
        t1.append_bytes(b"a", b"xx");
        t2.append_bytes(b"a", b"xx");
        assert_eq!(t1.challenge::<F>(b"c"), t2.challenge::<F>(b"c"));

        let mut t3 = Transcript::new(b"proto");
        t3.append_bytes(b"a", b"xy");
        assert_ne!(t1.challenge::<F>(b"c"), t3.challenge::<F>(b"c"));
    }

    #[test]
    fn reading_does_not_disturb_state() {
        let mut t1 = Transcript::new(b"proto");
        let mut t2 = Transcript::new(b"proto");
        t1.append_bytes(b"a", b"data");
        t2.append_bytes(b"a", b"data");
        // Pull an extra challenge from t1 only; subsequent appends on the
        // two transcripts must still agree since challenges label the
        // stream identically.
        let c1: F = t1.challenge(b"c");
        let c2: F = t2.challenge(b"c");
        assert_eq!(c1, c2);
        t1.append_bytes(b"b", b"more");
        t2.append_bytes(b"b", b"more");
        assert_eq!(t1.challenge::<F>(b"d"), t2.challenge::<F>(b"d"));
    }

    #[test]
    fn framing_is_not_ambiguous() {
        // ("ab", "c") vs ("a", "bc") must diverge thanks to length footers.
        let mut t1 = Transcript::new(b"proto");
        t1.append_bytes(b"l", b"ab");
        t1.append_bytes(b"l", b"c");
        let mut t2 = Transcript::new(b"proto");
        t2.append_bytes(b"l", b"a");
        t2.append_bytes(b"l", b"bc");
        assert_ne!(t1.challenge::<F>(b"c"), t2.challenge::<F>(b"c"));
    }

    #[test]
    fn successive_challenges_differ() {
        let mut t = Transcript::new(b"proto");
        let a: F = t.challenge(b"x");
        let b: F = t.challenge(b"x");
        assert_ne!(a, b);
    }
}
