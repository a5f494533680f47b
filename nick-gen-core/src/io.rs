use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// String key-value persistence backend.
///
/// The history store keeps its whole sequence under a single key.
pub trait KeyValueStore {
	/// Returns the value stored under `key`, or `None` if nothing is stored.
	fn get(&self, key: &str) -> Result<Option<String>>;

	/// Stores `value` under `key`, replacing any previous value.
	fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
	values: HashMap<String, String>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>> {
		Ok(self.values.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: &str) -> Result<()> {
		self.values.insert(key.to_owned(), value.to_owned());
		Ok(())
	}
}

/// Directory-backed store: each key lives in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
	dir: PathBuf,
}

impl FileStore {
	/// Opens (and creates if needed) a store rooted at `dir`.
	///
	/// - `"."` or `"./"` resolves to the current working directory
	pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
		let dir = normalize_folder(dir.as_ref());
		fs::create_dir_all(&dir)?;
		Ok(Self { dir })
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Builds the file path for `key`.
	///
	/// Example: key `nicknameHistory` → `<dir>/nicknameHistory.json`
	///
	/// # Errors
	/// Returns [`Error::InvalidKey`] for keys that are empty or would escape
	/// the store directory.
	fn path_for(&self, key: &str) -> Result<PathBuf> {
		let valid = !key.is_empty()
			&& key != "."
			&& key != ".."
			&& !key.chars().any(|c| c == '/' || c == '\\' || c.is_control());
		if !valid {
			return Err(Error::InvalidKey(key.to_owned()));
		}

		Ok(self.dir.join(format!("{key}.json")))
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>> {
		match fs::read_to_string(self.path_for(key)?) {
			Ok(contents) => Ok(Some(contents)),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
			Err(e) => Err(e.into()),
		}
	}

	fn set(&mut self, key: &str, value: &str) -> Result<()> {
		let path = self.path_for(key)?;
		// Atomic replace
		let tmp = self.dir.join(format!("{key}.json.tmp"));
		fs::write(&tmp, value)?;
		if let Err(e) = fs::rename(&tmp, &path) {
			let _ = fs::remove_file(&tmp);
			return Err(e.into());
		}
		Ok(())
	}
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}
