use thiserror::Error;

/// Errors produced by the Paillier scheme
#[derive(Debug, Error)]
pub enum PaillierError {
    /// The plaintext is not strictly less than the modulus `n`
    #[error("message is too large: plaintext must be less than n")]
    PlaintextOutOfRange,
    /// The ciphertext is not strictly less than the modulus squared `n^2`
    #[error("message is too large: ciphertext must be less than n^2")]
    CiphertextOutOfRange,
    /// The caller supplied randomness source failed to yield bytes
    #[error("random source failure: {0}")]
    RandomSource(#[from] rand::Error),
    /// `lambda` has no inverse modulo `n`; cannot happen for honestly
    /// drawn large primes
    #[error("lambda is not invertible modulo n")]
    NonInvertibleLambda,
    /// Postcard deserialization error
    #[error("invalid serialized bytes: {0}")]
    PostcardError(#[from] postcard::Error),
}

/// Paillier results
pub type PaillierResult<T> = Result<T, PaillierError>;
