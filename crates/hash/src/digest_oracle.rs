// Copyright 2024-2025 Irreducible Inc.

use digest::{consts::U32, Digest, FixedOutputReset, OutputSizeUser};

use crate::{HashOracle, OracleDigest, OracleError};

/// A [`HashOracle`] backed by a RustCrypto hasher with a 256-bit output.
///
/// One hasher instance is kept and reset after every digest, so repeated calls do not
/// reinitialize the hash state from scratch.
#[derive(Debug, Clone, Default)]
pub struct DigestOracle<D> {
	hasher: D,
}

impl<D> DigestOracle<D>
where
	D: Digest + FixedOutputReset + OutputSizeUser<OutputSize = U32>,
{
	pub fn new() -> Self {
		Self {
			hasher: <D as Digest>::new(),
		}
	}
}

impl<D> HashOracle for DigestOracle<D>
where
	D: Digest + FixedOutputReset + OutputSizeUser<OutputSize = U32>,
{
	fn digest(&mut self, input: &[u8]) -> Result<OracleDigest, OracleError> {
		Digest::update(&mut self.hasher, input);
		Ok(Digest::finalize_reset(&mut self.hasher).into())
	}
}

/// The SHA-256 oracle, which is the standard choice for beacon-chain style shuffling.
pub type Sha256Oracle = DigestOracle<sha2::Sha256>;

/// A Grøstl-256 oracle.
pub type Groestl256Oracle = DigestOracle<groestl_crypto::Groestl256>;

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, RngCore, SeedableRng};

	use super::*;

	#[test]
	fn test_sha256_matches_one_shot_digest() {
		let mut rng = StdRng::seed_from_u64(0);
		let mut oracle = Sha256Oracle::new();
		for len in [0, 1, 33, 37, 64, 100] {
			let mut data = vec![0u8; len];
			rng.fill_bytes(&mut data);
			let expected: [u8; 32] = sha2::Sha256::digest(&data).into();
			assert_eq!(oracle.digest(&data).unwrap(), expected);
		}
	}

	#[test]
	fn test_reused_hasher_is_reset() {
		let mut oracle = Groestl256Oracle::new();
		let first = oracle.digest(b"seed and round").unwrap();
		let _ = oracle.digest(b"something else entirely").unwrap();
		assert_eq!(oracle.digest(b"seed and round").unwrap(), first);
	}

	#[test]
	fn test_hash_families_differ() {
		let input = [0u8; 33];
		let sha = Sha256Oracle::new().digest(&input).unwrap();
		let groestl = Groestl256Oracle::new().digest(&input).unwrap();
		assert_ne!(sha, groestl);
	}
}
