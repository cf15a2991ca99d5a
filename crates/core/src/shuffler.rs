// Copyright 2025 Irreducible Inc.

use shuffling_hash::{HashOracle, Sha256Oracle};
use shuffling_utils::ensure;

use crate::{
	permute_index, shuffle_collection, shuffle_list, unpermute_index, unshuffle_collection,
	Error, Seed, Swappable, MAX_LIST_SIZE,
};

/// A permutation fixed by its oracle, round count and seed.
///
/// Bundles the parameters that a protocol fixes once per epoch so that callers can map indices
/// and shuffle collections without threading them through every call. The oracle is owned, so
/// a `Shuffler` is never shared between concurrent computations by accident.
#[derive(Debug, Clone)]
pub struct Shuffler<O> {
	oracle: O,
	rounds: u8,
	seed: Seed,
}

impl Shuffler<Sha256Oracle> {
	/// A shuffler using SHA-256 as its oracle.
	pub fn sha256(rounds: u8, seed: Seed) -> Self {
		Self::new(Sha256Oracle::new(), rounds, seed)
	}
}

impl<O: HashOracle> Shuffler<O> {
	pub fn new(oracle: O, rounds: u8, seed: Seed) -> Self {
		Self {
			oracle,
			rounds,
			seed,
		}
	}

	pub fn rounds(&self) -> u8 {
		self.rounds
	}

	pub fn seed(&self) -> &Seed {
		&self.seed
	}

	pub fn into_oracle(self) -> O {
		self.oracle
	}

	/// See [`permute_index`].
	pub fn permute_index(&mut self, index: u64, list_size: u64) -> Result<u64, Error> {
		permute_index(&mut self.oracle, self.rounds.into(), index, list_size, &self.seed)
	}

	/// See [`unpermute_index`].
	pub fn unpermute_index(&mut self, index: u64, list_size: u64) -> Result<u64, Error> {
		unpermute_index(&mut self.oracle, self.rounds.into(), index, list_size, &self.seed)
	}

	/// See [`shuffle_collection`].
	pub fn shuffle<C: Swappable + ?Sized>(&mut self, collection: &mut C) -> Result<(), Error> {
		shuffle_collection(&mut self.oracle, collection, self.rounds, &self.seed)
	}

	/// See [`unshuffle_collection`].
	pub fn unshuffle<C: Swappable + ?Sized>(&mut self, collection: &mut C) -> Result<(), Error> {
		unshuffle_collection(&mut self.oracle, collection, self.rounds, &self.seed)
	}

	/// Returns the shuffled identity list `[0, list_size)`.
	///
	/// Entry `k` of the result is the original index that lands at position `k`, which is how
	/// committees are read off a shuffle: slicing the result into consecutive chunks gives each
	/// committee's members.
	pub fn shuffled_indices(&mut self, list_size: u64) -> Result<Vec<u64>, Error> {
		ensure!(
			list_size <= MAX_LIST_SIZE && usize::try_from(list_size).is_ok(),
			Error::ListSizeTooLarge {
				list_size,
				max: MAX_LIST_SIZE
			}
		);

		let mut indices = (0..list_size).collect::<Vec<_>>();
		shuffle_list(&mut self.oracle, &mut indices, self.rounds.into(), &self.seed)?;
		Ok(indices)
	}
}

#[cfg(test)]
mod tests {
	use shuffling_hash::Groestl256Oracle;

	use super::*;

	#[test]
	fn test_shuffled_indices_golden() {
		let mut shuffler = Shuffler::sha256(90, [0u8; 32]);
		assert_eq!(shuffler.shuffled_indices(4).unwrap(), vec![2, 0, 1, 3]);
		assert!(shuffler.shuffled_indices(0).unwrap().is_empty());
	}

	#[test]
	fn test_index_and_list_views_agree() {
		let mut shuffler = Shuffler::new(Groestl256Oracle::new(), 30, [0x11u8; 32]);
		let n = 333;
		let shuffled = shuffler.shuffled_indices(n).unwrap();
		for i in 0..n {
			let position = shuffler.permute_index(i, n).unwrap();
			assert_eq!(shuffled[position as usize], i);
			assert_eq!(shuffler.unpermute_index(position, n).unwrap(), i);
		}
	}

	#[test]
	fn test_shuffle_round_trip() {
		let mut shuffler = Shuffler::sha256(90, [0xeeu8; 32]);
		let original = (0..100u32).map(|i| i.wrapping_mul(2654435761)).collect::<Vec<_>>();
		let mut data = original.clone();
		shuffler.shuffle(&mut data).unwrap();
		assert_ne!(data, original);
		shuffler.unshuffle(&mut data).unwrap();
		assert_eq!(data, original);
	}

	#[test]
	fn test_accessors() {
		let shuffler = Shuffler::sha256(10, [4u8; 32]);
		assert_eq!(shuffler.rounds(), 10);
		assert_eq!(shuffler.seed(), &[4u8; 32]);
		let _oracle: Sha256Oracle = shuffler.into_oracle();
	}

	#[test]
	fn test_oversized_list_is_rejected_before_allocating() {
		let mut shuffler = Shuffler::sha256(90, [0u8; 32]);
		assert!(matches!(
			shuffler.shuffled_indices(MAX_LIST_SIZE + 1),
			Err(Error::ListSizeTooLarge { .. })
		));
	}
}
