// Copyright 2025 Irreducible Inc.

use crate::{HashOracle, OracleDigest, OracleError};

/// A [`HashOracle`] that delegates to a closure.
///
/// This is the simplest way to inject a hash function that is not a RustCrypto hasher, or one
/// that can fail (e.g. a hardware or remote backend).
#[derive(Debug, Clone)]
pub struct FnOracle<F> {
	hash_fn: F,
}

impl<F> FnOracle<F>
where
	F: FnMut(&[u8]) -> Result<OracleDigest, OracleError>,
{
	pub fn new(hash_fn: F) -> Self {
		Self { hash_fn }
	}

	pub fn into_inner(self) -> F {
		self.hash_fn
	}
}

impl<F> HashOracle for FnOracle<F>
where
	F: FnMut(&[u8]) -> Result<OracleDigest, OracleError>,
{
	fn digest(&mut self, input: &[u8]) -> Result<OracleDigest, OracleError> {
		(self.hash_fn)(input)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::DIGEST_LEN;

	#[test]
	fn test_closure_is_called_with_input() {
		let mut seen = Vec::new();
		let mut oracle = FnOracle::new(|input: &[u8]| {
			seen.push(input.to_vec());
			Ok([input.len() as u8; DIGEST_LEN])
		});
		assert_eq!(oracle.digest(b"xy").unwrap(), [2; DIGEST_LEN]);
		drop(oracle);
		assert_eq!(seen, vec![b"xy".to_vec()]);
	}

	#[test]
	fn test_closure_error_is_returned_unchanged() {
		let mut oracle = FnOracle::new(|_: &[u8]| Err(OracleError::backend("offline")));
		let err = oracle.digest(b"").unwrap_err();
		assert!(matches!(err, OracleError::Backend(ref inner) if inner.to_string() == "offline"));
	}
}
