use crate::{in_ring, keygen::sample_prime, PaillierError, PaillierResult, PrivateKey, PublicKey};
use rand::{CryptoRng, RngCore};
use unknown_order::BigNumber;

/// Encrypt a message under a public key.
///
/// `message` is decoded as a minimal big-endian unsigned integer `m`,
/// which must be less than `n`; `m = n - 1` is the largest accepted value
/// and an empty slice encrypts zero. A fresh prime blinding value `r` of
/// the key's bit length is drawn from `rng` on every call, so encrypting
/// the same message twice yields different ciphertexts:
///
/// c = g^m * r^n mod n^2
#[allow(clippy::many_single_char_names)]
pub fn encrypt<M>(
    pk: &PublicKey,
    message: M,
    mut rng: impl RngCore + CryptoRng,
) -> PaillierResult<Vec<u8>>
where
    M: AsRef<[u8]>,
{
    let m = BigNumber::from_slice(message);
    if !in_ring(&m, &pk.n) {
        return Err(PaillierError::PlaintextOutOfRange);
    }

    // never reused or cached across calls
    let r = sample_prime(&mut rng, pk.bit_length)?;

    // g^m mod N^2
    let g_m = pk.g.modpow(&m, &pk.nn);
    // r^N mod N^2
    let r_n = r.modpow(&pk.n, &pk.nn);
    // c = g^m r^n mod N^2
    Ok(g_m.modmul(&r_n, &pk.nn).to_bytes())
}

/// Reverse a ciphertext to its plaintext.
///
/// `ciphertext` is decoded as a minimal big-endian unsigned integer `c`,
/// which must be less than `n^2`:
///
/// m = L(c^lambda mod n^2) * mu mod n, where L(x) = (x - 1) / n
///
/// Decryption is not self-verifying. A ciphertext produced under a
/// different key decrypts to garbage bytes, not to an error.
pub fn decrypt<C>(sk: &PrivateKey, ciphertext: C) -> PaillierResult<Vec<u8>>
where
    C: AsRef<[u8]>,
{
    let c = BigNumber::from_slice(ciphertext);
    if !in_ring(&c, &sk.pk.nn) {
        return Err(PaillierError::CiphertextOutOfRange);
    }

    // a = c^\lambda mod n^2
    let a = c.modpow(&sk.lambda, &sk.pk.nn);
    // ell = L(a) = (a - 1) / n, exact for any ciphertext under this key
    let ell = (&a - &BigNumber::one()) / &sk.pk.n;
    // m = L(a) * mu mod n
    let m = ell.modmul(&sk.mu, &sk.pk.n);
    Ok(m.to_bytes())
}

/// Combine two Paillier ciphertexts, commonly denoted in text as
/// c1 \bigoplus c2. The result decrypts to the sum of the two plaintexts
/// mod n.
///
/// No bounds are checked; out-of-range operands produce well-defined but
/// semantically meaningless output rather than an error.
pub fn add<A, B>(pk: &PublicKey, c1: A, c2: B) -> Vec<u8>
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let c1 = BigNumber::from_slice(c1);
    let c2 = BigNumber::from_slice(c2);
    // c1 * c2 mod N^2
    c1.modmul(&c2, &pk.nn).to_bytes()
}

/// Shift a ciphertext by a plaintext constant. The result decrypts to the
/// plaintext plus `constant` mod n.
///
/// Like [`add`], operands are not range-checked.
pub fn add_constant<C, K>(pk: &PublicKey, ciphertext: C, constant: K) -> Vec<u8>
where
    C: AsRef<[u8]>,
    K: AsRef<[u8]>,
{
    let c = BigNumber::from_slice(ciphertext);
    let k = BigNumber::from_slice(constant);
    // c * g^k mod N^2
    let g_k = pk.g.modpow(&k, &pk.nn);
    c.modmul(&g_k, &pk.nn).to_bytes()
}

/// Multiply the plaintext under a ciphertext by a constant. The result
/// decrypts to the plaintext times `constant` mod n.
///
/// Like [`add`], operands are not range-checked.
pub fn mul_constant<C, K>(pk: &PublicKey, ciphertext: C, constant: K) -> Vec<u8>
where
    C: AsRef<[u8]>,
    K: AsRef<[u8]>,
{
    let c = BigNumber::from_slice(ciphertext);
    let k = BigNumber::from_slice(constant);
    // c^k mod N^2
    c.modpow(&k, &pk.nn).to_bytes()
}
