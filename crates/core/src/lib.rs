// Copyright 2025 Irreducible Inc.

//! Swap-or-not shuffling of index sets, driven by a seed and an injected hash oracle.
//!
//! The permutation is the "generalized domain" swap-or-not construction of Hoang, Morris and
//! Rogaway, in the form used by beacon-chain committee assignment. Two families of operations
//! are provided:
//!
//! * [`permute_index`] / [`unpermute_index`] map a single index through the permutation (or its
//!   inverse) in `O(rounds)` hashes, without touching the rest of the list.
//! * [`shuffle_list`] / [`unshuffle_list`] and their generic forms [`shuffle_collection`] /
//!   [`unshuffle_collection`] permute a whole collection in place, visiting each swap pair once
//!   per round and hashing only once per 256 positions.
//!
//! Both families agree: after shuffling the identity list, the element at
//! `permute_index(i)` is `i`.

mod error;
mod permute;
mod round;
mod shuffle;
mod shuffler;
mod swappable;

pub use error::*;
pub use permute::*;
pub use round::{Seed, MAX_LIST_SIZE, MAX_ROUNDS};
pub use shuffle::*;
pub use shuffler::*;
pub use swappable::*;
