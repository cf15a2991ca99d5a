// Copyright 2025 Irreducible Inc.

use shuffling_hash::HashOracle;
use shuffling_utils::ensure;
use tracing::instrument;

use crate::{
	round::{byte_bit, check_list_size, check_rounds, source_byte, Direction, HashInput},
	Error, Seed,
};

/// Returns `p(index)`, where `p` is the swap-or-not permutation of `0..list_size` defined by
/// `seed` and `rounds`.
///
/// Each round hashes twice, so this is the right tool for locating a handful of indices in a
/// large list. To permute every index, [`shuffle_list`](crate::shuffle_list) is much cheaper.
///
/// ## Errors
///
/// * [`Error::InvalidListSize`] if `list_size` is zero
/// * [`Error::ListSizeTooLarge`] if `list_size` exceeds [`MAX_LIST_SIZE`](crate::MAX_LIST_SIZE)
/// * [`Error::IndexOutOfRange`] if `index >= list_size`
/// * [`Error::TooManyRounds`] if `rounds` exceeds [`MAX_ROUNDS`](crate::MAX_ROUNDS)
/// * [`Error::Oracle`] if the hash oracle fails
///
/// All arguments are validated before the oracle is first called.
#[instrument(skip_all, level = "trace", fields(rounds = rounds, list_size = list_size))]
pub fn permute_index<O: HashOracle + ?Sized>(
	oracle: &mut O,
	rounds: u64,
	index: u64,
	list_size: u64,
	seed: &Seed,
) -> Result<u64, Error> {
	compute_index(oracle, rounds, index, list_size, seed, Direction::Forward)
}

/// Returns `p⁻¹(index)`, the inverse of [`permute_index`] under the same parameters.
#[instrument(skip_all, level = "trace", fields(rounds = rounds, list_size = list_size))]
pub fn unpermute_index<O: HashOracle + ?Sized>(
	oracle: &mut O,
	rounds: u64,
	index: u64,
	list_size: u64,
	seed: &Seed,
) -> Result<u64, Error> {
	compute_index(oracle, rounds, index, list_size, seed, Direction::Backward)
}

fn compute_index<O: HashOracle + ?Sized>(
	oracle: &mut O,
	rounds: u64,
	mut index: u64,
	list_size: u64,
	seed: &Seed,
	direction: Direction,
) -> Result<u64, Error> {
	ensure!(list_size != 0, Error::InvalidListSize);
	check_list_size(list_size)?;
	ensure!(index < list_size, Error::IndexOutOfRange { index, list_size });
	check_rounds(rounds)?;

	let mut input = HashInput::new(seed);
	for step in 0..rounds {
		input.set_round(direction.round_at(step, rounds));
		let pivot = input.pivot(oracle, list_size)?;
		// (pivot - index) mod list_size, kept non-negative
		let flip = (pivot + list_size - index) % list_size;
		// Both members of the pair read the bit keyed on the larger one.
		let position = index.max(flip);
		let source = input.source(oracle, position)?;
		if byte_bit(source_byte(&source, position), position) {
			index = flip;
		}
	}
	Ok(index)
}
