//! Hash to field and hash to curve
//!
//! Both derivations walk the same chain `h₀ = H(len(domain) ‖ domain ‖ data)`,
//! `hᵢ₊₁ = H(hᵢ)` and accept the first digest that passes their membership
//! test. The chain length is capped by [`HashToCurveConfig::max_attempts`].

use crate::codec::ENCODED_LEN;
use crate::{sc_reduce32, AlgebraError, AlgebraResult, Point, Scalar};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use tracing::{debug, warn};

/// Default domain separation tag
pub const DEFAULT_DOMAIN: &[u8] = b"pedersen-core";

/// Default chain cap.
///
/// A scalar digest is accepted with probability about `1/16`, so a valid
/// input exhausts the chain with probability `(15/16)^1024 < 2^-95`.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1024;

/// Configuration for the rejection-sampling hash chain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashToCurveConfig {
    /// Domain separation tag prepended to the input
    pub domain: Vec<u8>,
    /// Upper bound on the number of digests tried
    pub max_attempts: usize,
}

impl Default for HashToCurveConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_vec(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl HashToCurveConfig {
    /// Default configuration under a different domain tag
    pub fn with_domain(domain: &[u8]) -> Self {
        Self {
            domain: domain.to_vec(),
            ..Self::default()
        }
    }
}

/// Hash `data` to a scalar with Keccak-256 and the default configuration
pub fn hash_to_scalar(data: &[u8]) -> AlgebraResult<Scalar> {
    hash_to_scalar_with::<Keccak256>(data, &HashToCurveConfig::default())
}

/// Hash `data` to a scalar, accepting the first digest below `l`
pub fn hash_to_scalar_with<D: Digest>(
    data: &[u8],
    config: &HashToCurveConfig,
) -> AlgebraResult<Scalar> {
    first_accepted::<D, _>(data, config, Scalar::from_canonical_bytes)
}

/// `sc_reduce32(Keccak256(data))`: a single hash reduced mod `l`
pub fn hash_to_scalar_reduced(data: &[u8]) -> Scalar {
    let mut bytes = [0u8; ENCODED_LEN];
    bytes.copy_from_slice(&Keccak256::digest(data));
    sc_reduce32(bytes)
}

/// Hash `data` to a prime-order point with Keccak-256 and the default configuration
pub fn hash_to_point(data: &[u8]) -> AlgebraResult<Point> {
    hash_to_point_with::<Keccak256>(data, &HashToCurveConfig::default())
}

/// Hash `data` to a point in the prime-order subgroup.
///
/// Digests that fail to decompress, decode to the identity, or vanish after
/// cofactor clearing are rejected.
pub fn hash_to_point_with<D: Digest>(
    data: &[u8],
    config: &HashToCurveConfig,
) -> AlgebraResult<Point> {
    first_accepted::<D, _>(data, config, |digest| {
        let point = Point::from_compressed_bytes(digest).ok()?;
        if point.is_identity() {
            return None;
        }
        let cleared = point.mul_by_cofactor();
        (!cleared.is_identity()).then_some(cleared)
    })
}

fn first_accepted<D, T>(
    data: &[u8],
    config: &HashToCurveConfig,
    mut accept: impl FnMut([u8; ENCODED_LEN]) -> Option<T>,
) -> AlgebraResult<T>
where
    D: Digest,
{
    if <D as Digest>::output_size() < ENCODED_LEN {
        return Err(AlgebraError::InvalidParameters(format!(
            "digest output of {} bytes is shorter than {}",
            <D as Digest>::output_size(),
            ENCODED_LEN
        )));
    }

    let mut hasher = D::new();
    // Length prefix keeps (domain, data) splits of the same bytes apart
    hasher.update((config.domain.len() as u64).to_le_bytes());
    hasher.update(&config.domain);
    hasher.update(data);
    let mut digest = truncate(&hasher.finalize());

    for attempt in 1..=config.max_attempts {
        if let Some(value) = accept(digest) {
            debug!(attempt, "hash chain accepted");
            return Ok(value);
        }
        digest = truncate(&D::digest(digest));
    }

    warn!(attempts = config.max_attempts, "hash chain exhausted");
    Err(AlgebraError::HashToCurveExhausted {
        attempts: config.max_attempts,
    })
}

fn truncate(output: &[u8]) -> [u8; ENCODED_LEN] {
    let mut bytes = [0u8; ENCODED_LEN];
    bytes.copy_from_slice(&output[..ENCODED_LEN]);
    bytes
}
