// Copyright 2025 Irreducible Inc.

//! Per-round hashing shared by the single-index and whole-list operations.

use shuffling_hash::{HashOracle, OracleDigest, OracleError};
use shuffling_utils::ensure;

use crate::Error;

/// Public entropy parameterizing a permutation.
pub type Seed = [u8; 32];

/// Largest supported round count. The round number is hashed as a single byte.
pub const MAX_ROUNDS: u64 = 256;

/// Largest supported list size. Positions are hashed as `position >> 8` in four bytes.
pub const MAX_LIST_SIZE: u64 = 1 << 40;

const SEED_LEN: usize = 32;
const PIVOT_INPUT_LEN: usize = SEED_LEN + 1;
const SOURCE_INPUT_LEN: usize = PIVOT_INPUT_LEN + 4;

/// Scratch buffer laid out as `seed ‖ round ‖ LE32(position >> 8)`.
///
/// The seed is written once; the round byte and position suffix are overwritten in place as the
/// computation moves on.
pub(crate) struct HashInput {
	buf: [u8; SOURCE_INPUT_LEN],
}

impl HashInput {
	pub fn new(seed: &Seed) -> Self {
		let mut buf = [0u8; SOURCE_INPUT_LEN];
		buf[..SEED_LEN].copy_from_slice(seed);
		Self { buf }
	}

	pub fn set_round(&mut self, round: u8) {
		self.buf[SEED_LEN] = round;
	}

	/// Hashes `seed ‖ round` and reduces the first eight digest bytes modulo `list_size`.
	///
	/// `list_size` must be non-zero.
	pub fn pivot<O: HashOracle + ?Sized>(
		&self,
		oracle: &mut O,
		list_size: u64,
	) -> Result<u64, OracleError> {
		let digest = oracle.digest(&self.buf[..PIVOT_INPUT_LEN])?;
		let mut head = [0u8; 8];
		head.copy_from_slice(&digest[..8]);
		Ok(u64::from_le_bytes(head) % list_size)
	}

	/// Hashes `seed ‖ round ‖ LE32(position >> 8)`, the bit source for the 256 positions sharing
	/// `position`'s high bits.
	pub fn source<O: HashOracle + ?Sized>(
		&mut self,
		oracle: &mut O,
		position: u64,
	) -> Result<OracleDigest, OracleError> {
		self.buf[PIVOT_INPUT_LEN..].copy_from_slice(&((position >> 8) as u32).to_le_bytes());
		oracle.digest(&self.buf)
	}
}

/// The byte of `source` holding the swap bit for `position`.
#[inline]
pub(crate) fn source_byte(source: &OracleDigest, position: u64) -> u8 {
	source[((position & 0xff) >> 3) as usize]
}

/// The swap bit for `position` within its source byte.
#[inline]
pub(crate) fn byte_bit(byte: u8, position: u64) -> bool {
	(byte >> (position & 0x7)) & 1 == 1
}

/// Order in which rounds are applied. Running the rounds backwards inverts the permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
	Forward,
	Backward,
}

impl Direction {
	/// Round number applied at `step` out of `rounds`. Requires `step < rounds <= MAX_ROUNDS`.
	#[inline]
	pub fn round_at(self, step: u64, rounds: u64) -> u8 {
		match self {
			Self::Forward => step as u8,
			Self::Backward => (rounds - 1 - step) as u8,
		}
	}
}

pub(crate) fn check_rounds(rounds: u64) -> Result<(), Error> {
	ensure!(
		rounds <= MAX_ROUNDS,
		Error::TooManyRounds {
			rounds,
			max: MAX_ROUNDS
		}
	);
	Ok(())
}

pub(crate) fn check_list_size(list_size: u64) -> Result<(), Error> {
	ensure!(
		list_size <= MAX_LIST_SIZE,
		Error::ListSizeTooLarge {
			list_size,
			max: MAX_LIST_SIZE
		}
	);
	Ok(())
}
