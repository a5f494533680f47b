use std::fmt;

use super::request::{MAX_NICKNAME_LENGTH, MIN_NICKNAME_LENGTH};

/// Consecutive repetitions of one character that reject a candidate.
pub const MAX_REPEAT: usize = 3;

/// Why a candidate was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
	/// Display length outside the nickname bounds.
	Length(usize),
	/// Contains a blacklisted sequence.
	Blacklisted(String),
	/// One character repeated `MAX_REPEAT` or more times in a row.
	Repetition(char),
}

impl fmt::Display for Rejection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Rejection::Length(len) => write!(
				f,
				"length {len} outside {MIN_NICKNAME_LENGTH}..={MAX_NICKNAME_LENGTH}"
			),
			Rejection::Blacklisted(sequence) => write!(f, "contains blacklisted {sequence:?}"),
			Rejection::Repetition(c) => write!(f, "{c:?} repeats {MAX_REPEAT}+ times"),
		}
	}
}

/// Pronounceability rules applied to every assembled candidate.
///
/// Rules run in order and the first failure wins:
/// 1. length bounds
/// 2. blacklisted substrings
/// 3. runs of `MAX_REPEAT` identical characters
#[derive(Clone, Debug, Default)]
pub struct Validator {
	blacklist: Vec<String>,
}

impl Validator {
	pub fn new(blacklist: Vec<String>) -> Self {
		Self { blacklist }
	}

	pub fn validate(&self, candidate: &str) -> Result<(), Rejection> {
		let len = candidate.chars().count();
		if !(MIN_NICKNAME_LENGTH..=MAX_NICKNAME_LENGTH).contains(&len) {
			return Err(Rejection::Length(len));
		}

		if let Some(sequence) = self.blacklist.iter().find(|s| candidate.contains(s.as_str())) {
			return Err(Rejection::Blacklisted(sequence.clone()));
		}

		if let Some(c) = longest_run_over(candidate, MAX_REPEAT) {
			return Err(Rejection::Repetition(c));
		}

		Ok(())
	}

	pub fn is_valid(&self, candidate: &str) -> bool {
		self.validate(candidate).is_ok()
	}
}

/// Returns the first character that appears `limit` or more times in a row.
fn longest_run_over(s: &str, limit: usize) -> Option<char> {
	let mut previous = None;
	let mut run = 0;
	for c in s.chars() {
		if Some(c) == previous {
			run += 1;
		} else {
			previous = Some(c);
			run = 1;
		}
		if run >= limit {
			return previous;
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn validator() -> Validator {
		Validator::new(vec!["까까".to_owned(), "쓰쓰".to_owned()])
	}

	#[test]
	fn enforces_length_bounds() {
		let v = validator();
		assert_eq!(v.validate("가"), Err(Rejection::Length(1)));
		assert_eq!(v.validate("가나다라마바사아자"), Err(Rejection::Length(9)));
		assert!(v.is_valid("가나"));
		assert!(v.is_valid("가나다라마바사아"));
	}

	#[test]
	fn rejects_blacklisted_sequences() {
		assert_eq!(validator().validate("하까까나"), Err(Rejection::Blacklisted("까까".to_owned())));
	}

	#[test]
	fn rejects_triple_repetition_only() {
		let v = validator();
		assert_eq!(v.validate("하하하"), Err(Rejection::Repetition('하')));
		assert!(v.is_valid("하하호"));
		assert!(v.is_valid("하호하호하"));
	}

	#[test]
	fn length_is_checked_before_other_rules() {
		assert_eq!(validator().validate("까까까까까까까까까"), Err(Rejection::Length(9)));
	}

	fn has_triple(s: &str) -> bool {
		let chars: Vec<char> = s.chars().collect();
		chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
	}

	proptest! {
		#[test]
		fn repetition_rule_matches_reference(s in "[가나다ab]{2,8}") {
			let v = Validator::default();
			prop_assert_eq!(v.is_valid(&s), !has_triple(&s));
		}

		#[test]
		fn any_forced_triple_is_rejected(
			prefix in "[가-힣]{0,2}",
			c in "[가-힣]",
			suffix in "[가-힣]{0,3}"
		) {
			let candidate = format!("{prefix}{c}{c}{c}{suffix}");
			prop_assert!(!Validator::default().is_valid(&candidate));
		}
	}
}
