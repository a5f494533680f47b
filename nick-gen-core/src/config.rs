use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::hangul::{DEFAULT_TRAILING_FINALS, FINAL_COUNT};
use crate::model::tables::DEFAULT_BLACKLIST;

/// How the constrained attempts build a candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
	/// Greedy concatenation of the category's pre-built syllables.
	UnitComposition,
	/// One Hangul syllable per position, assembled from jamo indices.
	#[default]
	GlyphAssembly,
}

/// Generator and history settings.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
	pub mode: GenerationMode,

	/// Attempt budget in glyph-assembly mode.
	pub glyph_attempts: usize,

	/// Attempt budget in unit-composition mode.
	pub unit_attempts: usize,

	/// Probability that a glyph draws from `trailing_finals` instead of
	/// having no trailing consonant.
	pub trailing_probability: f64,

	/// Indices into the trailing consonant table. Must include 0 (empty).
	pub trailing_finals: Vec<usize>,

	/// Separator for the `prefix + separator + suffix` fallback format.
	pub separator: String,

	/// Substrings that reject a candidate outright.
	pub blacklist: Vec<String>,

	/// Maximum number of history entries kept.
	pub history_capacity: usize,

	/// Key under which the history is persisted.
	pub history_key: String,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			mode: GenerationMode::default(),
			glyph_attempts: 50,
			unit_attempts: 1,
			trailing_probability: 0.3,
			trailing_finals: DEFAULT_TRAILING_FINALS.to_vec(),
			separator: "_".to_owned(),
			blacklist: DEFAULT_BLACKLIST.iter().map(|s| (*s).to_owned()).collect(),
			history_capacity: 20,
			history_key: "nicknameHistory".to_owned(),
		}
	}
}

impl GeneratorConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(text: &str) -> Result<Self> {
		let config: Self = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a TOML file.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let text = std::fs::read_to_string(path)?;
		Self::from_toml_str(&text)
	}

	/// Attempt budget for the configured mode.
	pub fn attempt_budget(&self) -> usize {
		match self.mode {
			GenerationMode::UnitComposition => self.unit_attempts,
			GenerationMode::GlyphAssembly => self.glyph_attempts,
		}
	}

	/// Checks cross-field constraints serde cannot express.
	///
	/// # Errors
	/// Returns [`Error::InvalidConfig`] describing the first violation.
	pub fn validate(&self) -> Result<()> {
		if !(0.0..=1.0).contains(&self.trailing_probability) {
			return Err(Error::InvalidConfig(format!(
				"trailing_probability must be between 0.0 and 1.0, got {}",
				self.trailing_probability
			)));
		}
		if !self.trailing_finals.contains(&0) {
			return Err(Error::InvalidConfig("trailing_finals must include 0 (no trailing consonant)".to_owned()));
		}
		if let Some(index) = self.trailing_finals.iter().find(|&&i| i >= FINAL_COUNT) {
			return Err(Error::InvalidConfig(format!(
				"trailing_finals index {index} is outside 0..{FINAL_COUNT}"
			)));
		}
		if self.separator.chars().any(char::is_control) {
			return Err(Error::InvalidConfig("separator contains a control character".to_owned()));
		}
		if self.blacklist.iter().any(String::is_empty) {
			return Err(Error::InvalidConfig("blacklist entries must not be empty".to_owned()));
		}
		if self.history_capacity == 0 {
			return Err(Error::InvalidConfig("history_capacity must be at least 1".to_owned()));
		}
		if self.history_key.is_empty() {
			return Err(Error::InvalidConfig("history_key must not be empty".to_owned()));
		}
		Ok(())
	}
}
