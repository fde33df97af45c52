use crate::{PaillierError, PaillierResult, PrivateKey, PublicKey};
use rand::{CryptoRng, RngCore};
use unknown_order::BigNumber;
use zeroize::Zeroize;

/// Generate a fresh Paillier key pair.
///
/// `bit_length` is the target size of the modulus `n`, not of each prime;
/// two independent primes of `bit_length / 2` bits are drawn from `rng`.
/// It must be a positive even integer, conventionally at least 512.
///
/// Failures of the randomness source propagate as
/// [`PaillierError::RandomSource`]; there is no internal retry. The primes
/// are not checked for equality or for producing an `n` of exactly
/// `bit_length` bits; callers trust the prime distribution.
pub fn generate_keypair(
    mut rng: impl RngCore + CryptoRng,
    bit_length: usize,
) -> PaillierResult<(PublicKey, PrivateKey)> {
    debug_assert!(bit_length >= 4 && bit_length % 2 == 0);
    let mut p = sample_prime(&mut rng, bit_length / 2)?;
    let mut q = sample_prime(&mut rng, bit_length / 2)?;
    let res = keypair_from_primes(bit_length, &p, &q);
    // Make sure the primes are zero'd
    p.zeroize();
    q.zeroize();
    res
}

/// Build a key pair from caller-supplied primes.
///
/// `p` and `q` are not checked for primality; supplying composites yields
/// keys that fail to decrypt correctly. Intended for test fixtures and for
/// primes generated out of band.
#[allow(clippy::many_single_char_names)]
pub fn keypair_from_primes(
    bit_length: usize,
    p: &BigNumber,
    q: &BigNumber,
) -> PaillierResult<(PublicKey, PrivateKey)> {
    let pm1: BigNumber = p - 1;
    let qm1: BigNumber = q - 1;
    let n = p * q;
    let nn = &n * &n;
    let g: BigNumber = &n + 1;
    let lambda = &pm1 * &qm1;
    let mu = lambda
        .invert(&n)
        .ok_or(PaillierError::NonInvertibleLambda)?;
    let pk = PublicKey {
        bit_length,
        n,
        g,
        nn,
    };
    let sk = PrivateKey {
        pk: pk.clone(),
        lambda,
        mu,
    };
    Ok((pk, sk))
}

/// Rejection-sample a prime of exactly `bits` bits from `rng`.
///
/// Candidates are drawn through the fallible entropy path so a broken
/// source surfaces as an error rather than a panic, then tested with the
/// backend primality check. Runs until a prime is found.
pub(crate) fn sample_prime(
    rng: &mut (impl RngCore + CryptoRng),
    bits: usize,
) -> PaillierResult<BigNumber> {
    debug_assert!(bits >= 2);
    let len = (bits + 7) / 8;
    let excess = len * 8 - bits;
    let mut buf = vec![0u8; len];
    loop {
        rng.try_fill_bytes(&mut buf)?;
        // Exactly `bits` wide: clear spare high bits, set the top bit,
        // and make the candidate odd
        buf[0] &= 0xff >> excess;
        buf[0] |= 1 << (7 - excess);
        buf[len - 1] |= 1;
        let candidate = BigNumber::from_slice(&buf);
        if candidate.is_prime() {
            return Ok(candidate);
        }
    }
}
