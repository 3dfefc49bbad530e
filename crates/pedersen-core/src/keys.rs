//! Spend and view key derivation
//!
//! The secret spend key is a reduced random seed; the secret view key is
//! `sc_reduce32(Keccak256(spend))`. Public keys are the matching multiples of
//! the basepoint.

use crate::codec::ENCODED_LEN;
use crate::hash::hash_to_scalar_reduced;
use crate::{sc_reduce32, AlgebraResult, Point, Scalar};
use rand_core::{CryptoRng, RngCore};
use std::fmt;
use tracing::debug;

/// Spend and view key pairs
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    secret_spend: Scalar,
    secret_view: Scalar,
    public_spend: Point,
    public_view: Point,
}

impl KeyPair {
    /// Fresh keys from a secure random seed
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut seed = [0u8; ENCODED_LEN];
        rng.fill_bytes(&mut seed);
        Self::from_spend_key(sc_reduce32(seed))
    }

    /// Derive the view key and public keys from a secret spend key
    pub fn from_spend_key(secret_spend: Scalar) -> Self {
        let secret_view = hash_to_scalar_reduced(secret_spend.as_bytes());
        let keys = Self {
            secret_spend,
            secret_view,
            public_spend: Point::mul_base(&secret_spend),
            public_view: Point::mul_base(&secret_view),
        };

        debug!(
            public_spend = %keys.public_spend,
            public_view = %keys.public_view,
            "derived key pair"
        );
        keys
    }

    /// Restore from a hex-encoded secret spend key
    pub fn from_spend_key_hex(s: &str) -> AlgebraResult<Self> {
        Ok(Self::from_spend_key(Scalar::from_hex(s)?))
    }

    /// Secret spend key
    pub fn secret_spend(&self) -> &Scalar {
        &self.secret_spend
    }

    /// Secret view key, derived from the spend key
    pub fn secret_view(&self) -> &Scalar {
        &self.secret_view
    }

    /// `secret_spend · G`
    pub fn public_spend(&self) -> &Point {
        &self.public_spend
    }

    /// `secret_view · G`
    pub fn public_view(&self) -> &Point {
        &self.public_view
    }
}

// Secrets stay out of debug output
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("secret_spend", &"<redacted>")
            .field("secret_view", &"<redacted>")
            .field("public_spend", &self.public_spend.to_hex())
            .field("public_view", &self.public_view.to_hex())
            .finish()
    }
}
