use crate::PublicKey;
use serde::{Deserialize, Serialize};
use unknown_order::BigNumber;
use zeroize::Zeroize;

/// A Paillier private key.
///
/// Carries its own complete copy of the public parameters so that it
/// remains serializable and usable on its own, without the original
/// [`PublicKey`] instance alive. Both keys are immutable after
/// construction; the secret fields are zeroized on drop.
#[derive(Clone, Debug, Deserialize, Serialize, Zeroize)]
#[zeroize(drop)]
pub struct PrivateKey {
    pub(crate) pk: PublicKey,
    /// (P - 1)(Q - 1)
    pub(crate) lambda: BigNumber,
    /// lambda^-1 mod N
    pub(crate) mu: BigNumber,
}

impl From<&PrivateKey> for PublicKey {
    fn from(sk: &PrivateKey) -> PublicKey {
        sk.pk.clone()
    }
}

impl PrivateKey {
    /// The key's bit length, i.e. the target size of the modulus
    pub fn bit_length(&self) -> usize {
        self.pk.bit_length
    }

    /// The embedded public parameters
    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    /// The Paillier `lambda`
    pub fn lambda(&self) -> &BigNumber {
        &self.lambda
    }

    /// The Paillier `mu`
    pub fn mu(&self) -> &BigNumber {
        &self.mu
    }
}
