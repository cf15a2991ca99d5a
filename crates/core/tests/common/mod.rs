// Copyright 2025 Irreducible Inc.

//! Reader for the swap-or-not conformance fixtures.
//!
//! Each CSV row is `seed_hex,list_size,input,output` where `input` and `output` are
//! colon-separated index lists. `output` is `input` shuffled with SHA-256 and
//! [`FIXTURE_ROUNDS`] rounds.

use shuffling_core::Seed;

pub const FIXTURE_ROUNDS: u8 = 90;

const FIXTURES: &str = include_str!("../fixtures/shuffle_sha256_90.csv");

#[derive(Debug, Clone)]
pub struct Fixture {
	pub line: usize,
	pub seed: Seed,
	pub list_size: u64,
	pub input: Vec<u64>,
	pub output: Vec<u64>,
}

pub fn fixtures() -> Vec<Fixture> {
	FIXTURES
		.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(index, line)| parse_line(index + 1, line.trim()))
		.collect()
}

fn parse_line(line_no: usize, line: &str) -> Fixture {
	let fields = line.split(',').collect::<Vec<_>>();
	assert_eq!(fields.len(), 4, "line {line_no}: expected 4 fields");

	let seed = parse_seed(fields[0])
		.unwrap_or_else(|| panic!("line {line_no}: seed cannot be parsed"));
	let list_size = fields[1]
		.parse::<u64>()
		.unwrap_or_else(|_| panic!("line {line_no}: list size cannot be parsed"));
	let input = parse_list(fields[2], list_size, line_no);
	let output = parse_list(fields[3], list_size, line_no);

	Fixture {
		line: line_no,
		seed,
		list_size,
		input,
		output,
	}
}

fn parse_seed(hex: &str) -> Option<Seed> {
	if hex.len() != 64 || !hex.is_ascii() {
		return None;
	}
	let mut seed = [0u8; 32];
	for (byte, pair) in seed.iter_mut().zip(hex.as_bytes().chunks(2)) {
		let pair = std::str::from_utf8(pair).ok()?;
		*byte = u8::from_str_radix(pair, 16).ok()?;
	}
	Some(seed)
}

fn parse_list(encoded: &str, list_size: u64, line_no: usize) -> Vec<u64> {
	let items = if encoded.is_empty() {
		Vec::new()
	} else {
		encoded
			.split(':')
			.enumerate()
			.map(|(i, item)| {
				item.parse::<u64>()
					.unwrap_or_else(|_| panic!("line {line_no}: item {i} cannot be parsed"))
			})
			.collect::<Vec<_>>()
	};
	assert_eq!(
		items.len() as u64,
		list_size,
		"line {line_no}: list length does not match list size"
	);
	items
}
