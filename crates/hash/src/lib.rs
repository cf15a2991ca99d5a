// Copyright 2023-2025 Irreducible Inc.

//! Hash oracles supplying the entropy for swap-or-not shuffling.
//!
//! The shuffle only ever asks for one thing: a 32-byte digest of a short byte string. This crate
//! defines that capability as [`HashOracle`] and provides adapters for RustCrypto hashers
//! ([`DigestOracle`]) and for plain closures ([`FnOracle`]).

mod digest_oracle;
mod fn_oracle;
mod oracle;

pub use digest_oracle::*;
pub use fn_oracle::*;
pub use oracle::*;
