// Copyright 2025 Irreducible Inc.

use shuffling_hash::{HashOracle, OracleError};
use tracing::instrument;

use crate::{
	round::{byte_bit, check_list_size, check_rounds, source_byte, Direction, HashInput},
	Error, Seed, Swappable,
};

/// Shuffles `list` in place.
///
/// The result equals applying [`permute_index`](crate::permute_index) to every position: the
/// element at position `i` moves to `permute_index(i)`. The whole list is processed in
/// `O(rounds * len)` time with one hash per 256 positions per round.
///
/// An empty list or zero rounds is a no-op. See [`shuffle_collection`] for the error cases.
#[instrument(skip_all, level = "debug", fields(rounds = rounds, list_size = list.len()))]
pub fn shuffle_list<O: HashOracle + ?Sized>(
	oracle: &mut O,
	list: &mut [u64],
	rounds: u64,
	seed: &Seed,
) -> Result<(), Error> {
	shuffle_in_place(oracle, list, rounds, seed, Direction::Forward)
}

/// Reverses [`shuffle_list`] under the same parameters.
#[instrument(skip_all, level = "debug", fields(rounds = rounds, list_size = list.len()))]
pub fn unshuffle_list<O: HashOracle + ?Sized>(
	oracle: &mut O,
	list: &mut [u64],
	rounds: u64,
	seed: &Seed,
) -> Result<(), Error> {
	shuffle_in_place(oracle, list, rounds, seed, Direction::Backward)
}

/// Shuffles any [`Swappable`] collection in place.
///
/// ## Errors
///
/// * [`Error::ListSizeTooLarge`] if the collection is longer than
///   [`MAX_LIST_SIZE`](crate::MAX_LIST_SIZE)
/// * [`Error::Oracle`] if the hash oracle fails
///
/// On error the collection is left as it was before the call.
#[instrument(skip_all, level = "debug", fields(rounds = rounds, list_size = collection.len()))]
pub fn shuffle_collection<C, O>(
	oracle: &mut O,
	collection: &mut C,
	rounds: u8,
	seed: &Seed,
) -> Result<(), Error>
where
	C: Swappable + ?Sized,
	O: HashOracle + ?Sized,
{
	shuffle_in_place(oracle, collection, rounds.into(), seed, Direction::Forward)
}

/// Reverses [`shuffle_collection`] under the same parameters.
#[instrument(skip_all, level = "debug", fields(rounds = rounds, list_size = collection.len()))]
pub fn unshuffle_collection<C, O>(
	oracle: &mut O,
	collection: &mut C,
	rounds: u8,
	seed: &Seed,
) -> Result<(), Error>
where
	C: Swappable + ?Sized,
	O: HashOracle + ?Sized,
{
	shuffle_in_place(oracle, collection, rounds.into(), seed, Direction::Backward)
}

/// An oracle failure in the middle of a round, after `visited` pairs had been processed.
struct Interrupted {
	visited: usize,
	error: OracleError,
}

fn shuffle_in_place<C, O>(
	oracle: &mut O,
	data: &mut C,
	rounds: u64,
	seed: &Seed,
	direction: Direction,
) -> Result<(), Error>
where
	C: Swappable + ?Sized,
	O: HashOracle + ?Sized,
{
	let list_size = data.len();
	if rounds == 0 || list_size == 0 {
		return Ok(());
	}
	check_rounds(rounds)?;
	check_list_size(list_size as u64)?;

	let mut input = HashInput::new(seed);
	for step in 0..rounds {
		let round = direction.round_at(step, rounds);
		if let Err(Interrupted { visited, error }) =
			swap_round(oracle, &mut input, data, round, usize::MAX)
		{
			restore(oracle, &mut input, data, rounds, step, visited, direction);
			return Err(error.into());
		}
	}
	Ok(())
}

/// Undoes the work of a shuffle that failed at `step` after `visited` pairs of that round.
///
/// Replaying the first `visited` pairs of the failed round swaps them back, since the pairs of a
/// round are disjoint. The completed rounds are then unwound in reverse order. Every hash this
/// needs was already computed successfully once.
fn restore<C, O>(
	oracle: &mut O,
	input: &mut HashInput,
	data: &mut C,
	rounds: u64,
	step: u64,
	visited: usize,
	direction: Direction,
) where
	C: Swappable + ?Sized,
	O: HashOracle + ?Sized,
{
	let mut undo = swap_round(oracle, input, data, direction.round_at(step, rounds), visited);
	for done in (0..step).rev() {
		if undo.is_err() {
			break;
		}
		undo = swap_round(oracle, input, data, direction.round_at(done, rounds), usize::MAX);
	}
	if let Err(Interrupted { error, .. }) = undo {
		tracing::warn!(
			%error,
			"hash oracle failed while restoring a collection after an earlier failure; \
			the collection is left in an unspecified order"
		);
	}
}

/// Applies one round to `data`, stopping after `budget` pairs.
///
/// The pairs of a round are `(i, pivot - i)` in `[0, pivot]` and `(i, pivot + len - i)` in
/// `(pivot, len)`. Each half is walked from its outer ends towards its mirror point, so every
/// pair is visited exactly once, always with `j` as the larger index.
fn swap_round<C, O>(
	oracle: &mut O,
	input: &mut HashInput,
	data: &mut C,
	round: u8,
	budget: usize,
) -> Result<(), Interrupted>
where
	C: Swappable + ?Sized,
	O: HashOracle + ?Sized,
{
	if budget == 0 {
		return Ok(());
	}
	let list_size = data.len();
	input.set_round(round);
	let pivot = input
		.pivot(oracle, list_size as u64)
		.map_err(|error| Interrupted { visited: 0, error })? as usize;

	let mut visited = 0;
	walk_segment(oracle, input, data, 0, (pivot + 1) >> 1, pivot, &mut visited, budget)?;
	walk_segment(
		oracle,
		input,
		data,
		pivot + 1,
		(pivot + list_size + 1) >> 1,
		list_size - 1,
		&mut visited,
		budget,
	)
}

/// Visits the pairs `(start + k, top - k)` while `start + k < mirror`, swapping those whose bit
/// is set.
///
/// The bit source only changes when `j` crosses a multiple of 256 and the source byte only when
/// it crosses a multiple of 8, so both are cached and refreshed on those boundaries.
#[allow(clippy::too_many_arguments)]
fn walk_segment<C, O>(
	oracle: &mut O,
	input: &mut HashInput,
	data: &mut C,
	start: usize,
	mirror: usize,
	top: usize,
	visited: &mut usize,
	budget: usize,
) -> Result<(), Interrupted>
where
	C: Swappable + ?Sized,
	O: HashOracle + ?Sized,
{
	if start >= mirror || *visited == budget {
		return Ok(());
	}

	let interrupted = |visited: usize| move |error: OracleError| Interrupted { visited, error };
	let mut source = input
		.source(oracle, top as u64)
		.map_err(interrupted(*visited))?;
	let mut byte = source_byte(&source, top as u64);

	for (i, j) in (start..mirror).zip((0..=top).rev()) {
		if *visited == budget {
			return Ok(());
		}
		let position = j as u64;
		if j != top {
			if position & 0xff == 0xff {
				source = input
					.source(oracle, position)
					.map_err(interrupted(*visited))?;
			}
			if position & 0x7 == 0x7 {
				byte = source_byte(&source, position);
			}
		}
		if byte_bit(byte, position) {
			data.swap(i, j);
		}
		*visited += 1;
	}
	Ok(())
}
