use log::warn;

use crate::error::Result;
use crate::io::KeyValueStore;

/// Default number of entries kept.
pub const MAX_HISTORY_SIZE: usize = 20;

/// Bounded, deduplicated list of generated names, most recent first.
///
/// # Invariants
/// - `entries.len() <= capacity`
/// - no name appears twice
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryStore {
	entries: Vec<String>,
	capacity: usize,
}

impl HistoryStore {
	/// Creates an empty history. A zero capacity is raised to 1.
	pub fn new(capacity: usize) -> Self {
		Self { entries: Vec::new(), capacity: capacity.max(1) }
	}

	/// Builds a history from an ordered sequence, dropping repeats and
	/// anything past `capacity`.
	pub fn from_entries<I, S>(entries: I, capacity: usize) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut history = Self::new(capacity);
		for entry in entries {
			if history.entries.len() == history.capacity {
				break;
			}
			let entry = entry.into();
			if !history.contains(&entry) {
				history.entries.push(entry);
			}
		}
		history
	}

	/// Prepends `name` unless it is already present.
	///
	/// A name already in the history stays where it is. Returns whether the
	/// history changed.
	pub fn record(&mut self, name: &str) -> bool {
		if self.contains(name) {
			return false;
		}
		self.entries.insert(0, name.to_owned());
		self.entries.truncate(self.capacity);
		true
	}

	/// Current entries, most recent first.
	pub fn list(&self) -> &[String] {
		&self.entries
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.entries.get(index).map(String::as_str)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.iter().any(|entry| entry == name)
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Serializes the entries as a JSON array of strings.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(&self.entries)?)
	}

	/// Parses a JSON array of strings.
	///
	/// # Errors
	/// Returns an error if `text` is not a JSON array of strings.
	pub fn from_json(text: &str, capacity: usize) -> Result<Self> {
		let entries: Vec<String> = serde_json::from_str(text)?;
		Ok(Self::from_entries(entries, capacity))
	}

	/// Loads the history stored under `key`.
	///
	/// Missing data gives an empty history. Unreadable or malformed data is
	/// logged and also gives an empty history.
	pub fn load(store: &dyn KeyValueStore, key: &str, capacity: usize) -> Self {
		let text = match store.get(key) {
			Ok(Some(text)) => text,
			Ok(None) => return Self::new(capacity),
			Err(e) => {
				warn!("failed to read history `{key}`: {e}");
				return Self::new(capacity);
			}
		};

		match Self::from_json(&text, capacity) {
			Ok(history) => history,
			Err(e) => {
				warn!("discarding malformed history `{key}`: {e}");
				Self::new(capacity)
			}
		}
	}

	/// Writes the history under `key`.
	///
	/// # Errors
	/// Returns the backend error; the in-memory history is left untouched.
	pub fn save(&self, store: &mut dyn KeyValueStore, key: &str) -> Result<()> {
		store.set(key, &self.to_json()?)
	}
}

impl Default for HistoryStore {
	fn default() -> Self {
		Self::new(MAX_HISTORY_SIZE)
	}
}
