use serde::{Deserialize, Serialize};
use unknown_order::BigNumber;
use zeroize::Zeroize;

/// A Paillier public key.
///
/// Holds the arithmetic parameters needed for encryption and the
/// homomorphic operators. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Zeroize)]
pub struct PublicKey {
    /// Target size of `n` in bits
    pub(crate) bit_length: usize,
    pub(crate) n: BigNumber, // N = p * q, where p,q are primes
    pub(crate) g: BigNumber, // generator, fixed to N + 1
    pub(crate) nn: BigNumber, // N^2
}

impl PublicKey {
    /// The key's bit length, i.e. the target size of the modulus
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// The Paillier modulus
    pub fn n(&self) -> &BigNumber {
        &self.n
    }

    /// The generator, chosen as `n + 1`
    pub fn g(&self) -> &BigNumber {
        &self.g
    }

    /// The Paillier modulus squared
    pub fn nn(&self) -> &BigNumber {
        &self.nn
    }
}
