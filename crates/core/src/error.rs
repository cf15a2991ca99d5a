// Copyright 2025 Irreducible Inc.

use shuffling_hash::OracleError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("list size must be at least one")]
	InvalidListSize,
	#[error("index {index} is out of range for a list of size {list_size}")]
	IndexOutOfRange { index: u64, list_size: u64 },
	#[error("list size {list_size} exceeds the maximum supported size {max}")]
	ListSizeTooLarge { list_size: u64, max: u64 },
	#[error("round count {rounds} exceeds the maximum of {max}")]
	TooManyRounds { rounds: u64, max: u64 },
	#[error("hash oracle error: {0}")]
	Oracle(#[from] OracleError),
}
