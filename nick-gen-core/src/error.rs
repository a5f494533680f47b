use std::io;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building a catalog, parsing a request, loading a
/// configuration or talking to a persistence backend.
///
/// Generation itself never returns one of these.
#[derive(Error, Debug)]
pub enum Error {
	#[error("category `{0}` has no prefixes")]
	EmptyPrefixes(String),

	#[error("category `{0}` has no suffixes")]
	EmptySuffixes(String),

	#[error("category `{category}` contains an empty entry")]
	EmptyEntry { category: String },

	#[error("category `{category}` entry {entry:?} contains a control character")]
	ControlCharacter { category: String, entry: String },

	#[error("category `{0}` is defined twice")]
	DuplicateCategory(String),

	#[error("catalog defines no categories")]
	EmptyCatalog,

	#[error("unknown category: {0}")]
	UnknownCategory(String),

	#[error("length {value} is outside {min}..={max}")]
	LengthOutOfRange { value: usize, min: usize, max: usize },

	#[error("invalid length: {0}")]
	InvalidLength(String),

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("invalid storage key: {0:?}")]
	InvalidKey(String),

	#[error("failed to parse TOML: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("failed to (de)serialize history: {0}")]
	Json(#[from] serde_json::Error),

	#[error("IO error: {0}")]
	Io(#[from] io::Error),
}
