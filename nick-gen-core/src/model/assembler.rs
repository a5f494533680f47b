use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::catalog::UnitSet;
use super::hangul::{LEAD_COUNT, Syllable, VOWEL_COUNT};

/// An attempt that could not produce a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exhausted;

impl fmt::Display for Exhausted {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("no exact-fit candidate")
	}
}

impl std::error::Error for Exhausted {}

/// Transient state of one composition attempt.
#[derive(Debug, Default)]
struct Candidate {
	text: String,
	len: usize,
}

impl Candidate {
	fn push(&mut self, unit: &str, len: usize) {
		self.text.push_str(unit);
		self.len += len;
	}
}

/// Greedily fills `target` glyphs with random units from `units`.
///
/// Each step draws any unit; it is appended if it fits. Otherwise, when
/// exactly one glyph remains, a single-glyph unit is appended instead.
/// Anything else aborts the attempt: there is no backtracking, so a fill
/// that exists may still be missed and the caller retries with fresh draws.
pub fn compose_units<R: Rng + ?Sized>(units: &UnitSet, target: usize, rng: &mut R) -> Result<String, Exhausted> {
	let mut candidate = Candidate::default();

	while candidate.len < target {
		let remaining = target - candidate.len;
		let unit = units.choose(rng);

		if unit.len() <= remaining {
			candidate.push(unit.as_str(), unit.len());
		} else if remaining == 1 {
			let single = units.choose_single(rng).ok_or(Exhausted)?;
			candidate.push(single.as_str(), single.len());
		} else {
			return Err(Exhausted);
		}
	}

	Ok(candidate.text)
}

/// Settings for glyph assembly.
#[derive(Clone, Debug)]
pub struct GlyphAssembler {
	trailing_probability: f64,
	trailing_finals: Vec<usize>,
}

impl GlyphAssembler {
	/// `trailing_probability` is clamped into `[0, 1]`, NaN meaning 0;
	/// `trailing_finals` falls back to "empty only" when it holds no usable index.
	pub fn new(trailing_probability: f64, trailing_finals: &[usize]) -> Self {
		let mut finals: Vec<usize> = trailing_finals
			.iter()
			.copied()
			.filter(|&i| Syllable::new(0, 0, i).is_some())
			.collect();
		if finals.is_empty() {
			finals.push(0);
		}
		let trailing_probability = if trailing_probability.is_nan() { 0.0 } else { trailing_probability.clamp(0.0, 1.0) };
		Self {
			trailing_probability,
			trailing_finals: finals,
		}
	}

	/// Draws one syllable: uniform lead, uniform vowel, and a trailing
	/// consonant from the configured set with `trailing_probability`.
	pub fn syllable<R: Rng + ?Sized>(&self, rng: &mut R) -> Syllable {
		let lead = rng.random_range(0..LEAD_COUNT);
		let vowel = rng.random_range(0..VOWEL_COUNT);
		let final_ = if rng.random_bool(self.trailing_probability) {
			self.trailing_finals.choose(rng).copied().unwrap_or(0)
		} else {
			0
		};
		Syllable::new(lead, vowel, final_).unwrap_or_default()
	}

	/// Builds exactly `length` glyphs. Always an exact fit.
	pub fn assemble<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
		(0..length).map(|_| self.syllable(rng).to_char()).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::catalog::CategoryTable;
	use crate::model::hangul::DEFAULT_TRAILING_FINALS;
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn unit_set(units: &[&str]) -> UnitSet {
		CategoryTable::new("t", units, &["p"], &["s"]).unwrap().units().unwrap().clone()
	}

	#[test]
	fn composition_hits_exact_target() {
		let units = unit_set(&["가", "나다"]);
		let mut rng = StdRng::seed_from_u64(11);
		for target in 2..=8 {
			let name = compose_units(&units, target, &mut rng).unwrap();
			assert_eq!(name.chars().count(), target);
		}
	}

	#[test]
	fn composition_aborts_without_a_fitting_unit() {
		// Remaining 2 with only 3-glyph units: nothing fits.
		let units = unit_set(&["라마바"]);
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(compose_units(&units, 2, &mut rng), Err(Exhausted));
	}

	#[test]
	fn greedy_fill_can_miss_an_existing_composition() {
		// "가" + "가" fills 2, but a draw of "라마바" aborts immediately.
		let units = unit_set(&["가", "라마바"]);
		let mut rng = StdRng::seed_from_u64(5);
		let outcomes: Vec<_> = (0..64).map(|_| compose_units(&units, 2, &mut rng)).collect();
		assert!(outcomes.iter().any(Result::is_err));
		assert!(outcomes.iter().any(|o| o.as_deref() == Ok("가가")));
	}

	#[test]
	fn single_glyph_completes_the_last_slot() {
		// Only the single-glyph rescue can finish "나다" + 1.
		let units = unit_set(&["가", "나다"]);
		let mut rng = StdRng::seed_from_u64(9);
		let names: Vec<String> = (0..64).map(|_| compose_units(&units, 3, &mut rng).unwrap()).collect();
		assert!(names.iter().all(|n| n.chars().count() == 3));
		assert!(names.iter().any(|n| n.starts_with("나다")));
	}

	#[test]
	fn no_trailing_probability_means_open_syllables() {
		let assembler = GlyphAssembler::new(0.0, &DEFAULT_TRAILING_FINALS);
		let mut rng = StdRng::seed_from_u64(2);
		let name = assembler.assemble(8, &mut rng);
		assert!(name.chars().all(|c| Syllable::decompose(c).unwrap().final_() == 0));
	}

	#[test]
	fn nan_probability_means_open_syllables() {
		let assembler = GlyphAssembler::new(f64::NAN, &DEFAULT_TRAILING_FINALS);
		let mut rng = StdRng::seed_from_u64(3);
		let name = assembler.assemble(2, &mut rng);
		assert_eq!(name.chars().count(), 2);
		assert!(name.chars().all(|c| Syllable::decompose(c).unwrap().final_() == 0));
	}

	#[test]
	fn invalid_finals_are_dropped() {
		let assembler = GlyphAssembler::new(1.0, &[99]);
		let mut rng = StdRng::seed_from_u64(2);
		let name = assembler.assemble(4, &mut rng);
		assert!(name.chars().all(|c| Syllable::decompose(c).unwrap().final_() == 0));
	}

	proptest! {
		#[test]
		fn assembled_glyphs_follow_the_formula(length in 2usize..=8, seed in any::<u64>()) {
			let assembler = GlyphAssembler::new(0.3, &DEFAULT_TRAILING_FINALS);
			let mut rng = StdRng::seed_from_u64(seed);
			let name = assembler.assemble(length, &mut rng);

			prop_assert_eq!(name.chars().count(), length);
			for glyph in name.chars() {
				let syllable = Syllable::decompose(glyph).unwrap();
				prop_assert!(DEFAULT_TRAILING_FINALS.contains(&syllable.final_()));
				prop_assert_eq!(glyph as u32, syllable.code_point());
			}
		}
	}
}
