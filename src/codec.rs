//! Binary encoding for key persistence and transport.
//!
//! Both key types encode as an ordered tuple of their integer fields, each
//! big integer as a length-prefixed minimal big-endian byte sequence. The
//! field order is fixed — (bit_length, n, g, nn) for a public key, extended
//! with (lambda, mu) for a private key — and there is no version tag or
//! checksum, so encoder and decoder must agree on this layout exactly.

use crate::{PaillierResult, PrivateKey, PublicKey};
use serde::{Deserialize, Serialize};
use unknown_order::BigNumber;

#[derive(Serialize, Deserialize)]
struct PublicKeyBytes {
    bit_length: usize,
    n: Vec<u8>,
    g: Vec<u8>,
    nn: Vec<u8>,
}

#[derive(Serialize, Deserialize)]
struct PrivateKeyBytes {
    bit_length: usize,
    n: Vec<u8>,
    g: Vec<u8>,
    nn: Vec<u8>,
    lambda: Vec<u8>,
    mu: Vec<u8>,
}

/// Get a public key's byte representation.
pub fn encode_public_key(pk: &PublicKey) -> Vec<u8> {
    let bytes = PublicKeyBytes {
        bit_length: pk.bit_length,
        n: pk.n.to_bytes(),
        g: pk.g.to_bytes(),
        nn: pk.nn.to_bytes(),
    };
    postcard::to_stdvec(&bytes).unwrap()
}

/// Convert a byte representation back to a public key.
///
/// All fields are taken verbatim from the encoding; `nn` is not recomputed
/// from `n`.
pub fn decode_public_key<B: AsRef<[u8]>>(data: B) -> PaillierResult<PublicKey> {
    let bytes = postcard::from_bytes::<PublicKeyBytes>(data.as_ref())?;
    Ok(PublicKey {
        bit_length: bytes.bit_length,
        n: BigNumber::from_slice(bytes.n.as_slice()),
        g: BigNumber::from_slice(bytes.g.as_slice()),
        nn: BigNumber::from_slice(bytes.nn.as_slice()),
    })
}

/// Get a private key's byte representation, embedded public parameters
/// included.
pub fn encode_private_key(sk: &PrivateKey) -> Vec<u8> {
    let bytes = PrivateKeyBytes {
        bit_length: sk.pk.bit_length,
        n: sk.pk.n.to_bytes(),
        g: sk.pk.g.to_bytes(),
        nn: sk.pk.nn.to_bytes(),
        lambda: sk.lambda.to_bytes(),
        mu: sk.mu.to_bytes(),
    };
    postcard::to_stdvec(&bytes).unwrap()
}

/// Convert a byte representation back to a private key.
pub fn decode_private_key<B: AsRef<[u8]>>(data: B) -> PaillierResult<PrivateKey> {
    let bytes = postcard::from_bytes::<PrivateKeyBytes>(data.as_ref())?;
    Ok(PrivateKey {
        pk: PublicKey {
            bit_length: bytes.bit_length,
            n: BigNumber::from_slice(bytes.n.as_slice()),
            g: BigNumber::from_slice(bytes.g.as_slice()),
            nn: BigNumber::from_slice(bytes.nn.as_slice()),
        },
        lambda: BigNumber::from_slice(bytes.lambda.as_slice()),
        mu: BigNumber::from_slice(bytes.mu.as_slice()),
    })
}
