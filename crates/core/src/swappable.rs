// Copyright 2025 Irreducible Inc.

use std::collections::VecDeque;

use auto_impl::auto_impl;

/// An ordered collection that can exchange the elements at two positions.
///
/// This is everything the whole-list shuffle needs: it never reads, copies or compares element
/// values, so any element type can be permuted in place.
#[auto_impl(&mut, Box)]
pub trait Swappable {
	/// Number of elements in the collection.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Exchanges the elements at positions `i` and `j`, both less than `len()`.
	fn swap(&mut self, i: usize, j: usize);
}

impl<T> Swappable for [T] {
	fn len(&self) -> usize {
		<[T]>::len(self)
	}

	fn swap(&mut self, i: usize, j: usize) {
		<[T]>::swap(self, i, j)
	}
}

impl<T, const N: usize> Swappable for [T; N] {
	fn len(&self) -> usize {
		N
	}

	fn swap(&mut self, i: usize, j: usize) {
		self.as_mut_slice().swap(i, j)
	}
}

impl<T> Swappable for Vec<T> {
	fn len(&self) -> usize {
		Vec::len(self)
	}

	fn swap(&mut self, i: usize, j: usize) {
		self.as_mut_slice().swap(i, j)
	}
}

impl<T> Swappable for VecDeque<T> {
	fn len(&self) -> usize {
		VecDeque::len(self)
	}

	fn swap(&mut self, i: usize, j: usize) {
		VecDeque::swap(self, i, j)
	}
}
