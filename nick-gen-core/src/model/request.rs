use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::catalog::{Catalog, CategoryId};
use crate::error::{Error, Result};

/// Shortest nickname, in glyphs.
pub const MIN_NICKNAME_LENGTH: usize = 2;

/// Longest nickname, in glyphs.
pub const MAX_NICKNAME_LENGTH: usize = 8;

/// A display length within `MIN_NICKNAME_LENGTH..=MAX_NICKNAME_LENGTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NicknameLength(usize);

impl NicknameLength {
	/// # Errors
	/// Returns [`Error::LengthOutOfRange`] outside the nickname bounds.
	pub fn new(value: usize) -> Result<Self> {
		if !(MIN_NICKNAME_LENGTH..=MAX_NICKNAME_LENGTH).contains(&value) {
			return Err(Error::LengthOutOfRange {
				value,
				min: MIN_NICKNAME_LENGTH,
				max: MAX_NICKNAME_LENGTH,
			});
		}
		Ok(Self(value))
	}

	/// Uniform draw within the nickname bounds.
	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Self(rng.random_range(MIN_NICKNAME_LENGTH..=MAX_NICKNAME_LENGTH))
	}

	pub fn get(self) -> usize {
		self.0
	}
}

impl fmt::Display for NicknameLength {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Requested category: a concrete one, or any category drawn uniformly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryChoice {
	#[default]
	Random,
	Named(CategoryId),
}

impl CategoryChoice {
	/// Parses a UI selection against a catalog.
	///
	/// `"random"` and `"all"` select any category; anything else must be a
	/// category name known to `catalog`.
	pub fn parse(value: &str, catalog: &Catalog) -> Result<Self> {
		match value.trim() {
			v if v.eq_ignore_ascii_case("random") || v.eq_ignore_ascii_case("all") => Ok(Self::Random),
			v => catalog.lookup(v).map(Self::Named),
		}
	}
}

/// Requested length: a concrete one, or a uniform draw within bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LengthChoice {
	#[default]
	Random,
	Exact(NicknameLength),
}

impl FromStr for LengthChoice {
	type Err = Error;

	/// Accepts `"random"` or a decimal length within bounds.
	fn from_str(value: &str) -> Result<Self> {
		let value = value.trim();
		if value.eq_ignore_ascii_case("random") {
			return Ok(Self::Random);
		}
		let length = value.parse::<usize>().map_err(|_| Error::InvalidLength(value.to_owned()))?;
		NicknameLength::new(length).map(Self::Exact)
	}
}

/// One generation request, as selected by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationRequest {
	pub category: CategoryChoice,
	pub length: LengthChoice,
}

impl GenerationRequest {
	pub fn new(category: CategoryChoice, length: LengthChoice) -> Self {
		Self { category, length }
	}
}
