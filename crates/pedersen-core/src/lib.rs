//! # Pedersen Core
//!
//! Scalar and point-vector algebra over Ed25519 for building Pedersen
//! commitment and Bulletproofs style protocols. It includes:
//!
//! - Scalars canonically reduced modulo the group order `l`
//! - Scalar and point vectors with Hadamard algebra
//! - A windowed bucket (Pippenger) multiscalar multiplication engine
//! - Hash to field and hash to curve by rejection sampling
//! - Commitment bases and spend/view keys
//!
//! ## Mathematical Background
//!
//! Every scalar lives in `[0, l-1]` with
//! ```text
//! l = 2^252 + 27742317777372353535851937790883648493
//! ```
//! and the engine computes
//! ```text
//! <s, P> = s_0·P_0 + s_1·P_1 + ... + s_{n-1}·P_{n-1}
//! ```
//! for equal-length vectors `s` and `P`.
//!
//! ## Example
//!
//! ```
//! use pedersen_core::{Point, PointVector, Scalar, ScalarVector};
//!
//! let g = Point::basepoint();
//! let points = PointVector::new(vec![
//!     g,
//!     g.multiply(&Scalar::from(2u64)),
//!     g.multiply(&Scalar::from(3u64)),
//! ]);
//! let scalars = ScalarVector::from_u64s(&[1, 2, 3]);
//!
//! assert_eq!(points.pow(&scalars)?, g.multiply(&Scalar::from(14u64)));
//! # Ok::<(), pedersen_core::AlgebraError>(())
//! ```

pub mod codec;
pub mod errors;
pub mod generators;
pub mod hash;
pub mod keys;
pub mod multiexp;
pub mod point;
pub mod point_vector;
pub mod scalar;
pub mod scalar_vector;


pub use codec::{bytes_to_int, int_to_bytes};
pub use errors::*;
pub use generators::PedersenGens;
pub use hash::{hash_to_point, hash_to_scalar, HashToCurveConfig};
pub use keys::KeyPair;
pub use multiexp::{multiscalar_mul, MultiexpConfig};
pub use point::Point;
pub use point_vector::PointVector;
pub use scalar::{group_order, sc_reduce32, Scalar, GROUP_ORDER_BYTES};
pub use scalar_vector::{PowOperand, PowOutput, ScalarVector, VectorOperand};
