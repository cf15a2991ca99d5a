// Copyright 2023-2025 Irreducible Inc.

use auto_impl::auto_impl;

/// Length in bytes of every digest produced by a [`HashOracle`].
pub const DIGEST_LEN: usize = 32;

/// Output of a [`HashOracle`].
pub type OracleDigest = [u8; DIGEST_LEN];

/// A hash function mapping arbitrary byte strings to 32-byte digests.
///
/// Implementations must be pure from the caller's point of view: the same input always yields
/// the same digest, regardless of any reusable state the oracle keeps between calls. The method
/// takes `&mut self` so that such state (e.g. a hasher that is reset after each digest) needs no
/// interior mutability; a caller sharing an oracle across threads must give each thread its own
/// instance.
#[auto_impl(&mut, Box)]
pub trait HashOracle {
	/// Computes the digest of `input`.
	fn digest(&mut self, input: &[u8]) -> Result<OracleDigest, OracleError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
	#[error("hash backend failed: {0}")]
	Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl OracleError {
	/// Wraps a backend-specific failure.
	pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		Self::Backend(err.into())
	}
}
