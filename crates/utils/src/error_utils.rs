// Copyright 2024-2025 Irreducible Inc.

/// Returns early with the given error converted into the function's error type.
///
/// With the `bail_panic` feature enabled this panics instead, which gives a backtrace at the
/// exact point a validation failed.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

/// Returns early with the given error converted into the function's error type.
#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

/// Bails with `$err` unless `$cond` holds.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	struct Rejected(u32);

	fn check_below(value: u32, limit: u32) -> Result<u32, Rejected> {
		ensure!(value < limit, Rejected(value));
		Ok(value)
	}

	#[test]
	fn test_ensure_passes_through() {
		assert_eq!(check_below(3, 4), Ok(3));
	}

	#[test]
	fn test_ensure_bails_with_error() {
		assert_eq!(check_below(4, 4), Err(Rejected(4)));
	}
}
