//! An implementation of Paillier's cryptosystem (1999),
//! Public-Key Cryptosystems based on composite degree residuosity classes.
//! See <http://citeseerx.ist.psu.edu/download?doi=10.1.1.4035&rep=rep1&type=pdf>
//!
//! Plaintexts live in the ring Z/nZ and ciphertexts in Z/n²Z; both cross the
//! API boundary as minimal big-endian byte sequences (an empty sequence is
//! zero). Keys are immutable after generation, so all operations may be
//! called concurrently on shared key values. The randomness source is
//! injected by the caller; it is the only I/O in the crate.
#![deny(
    warnings,
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    trivial_casts,
    trivial_numeric_casts
)]

mod codec;
mod error;
mod keygen;
mod ops;
mod privatekey;
mod publickey;

pub use unknown_order;

use unknown_order::BigNumber;

/// Is `a` a member of the ring Z/nZ, i.e. 0 <= a < n.
pub(crate) fn in_ring(a: &BigNumber, n: &BigNumber) -> bool {
    a < n
}

pub use codec::*;
pub use error::*;
pub use keygen::*;
pub use ops::*;
pub use privatekey::*;
pub use publickey::*;
