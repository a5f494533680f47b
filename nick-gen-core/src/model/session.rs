use log::{info, warn};
use rand::Rng;

use super::generator::{GeneratedName, Generator};
use super::history::HistoryStore;
use super::request::{CategoryChoice, GenerationRequest, LengthChoice};
use crate::io::KeyValueStore;

/// State of one user session.
///
/// Owns the generator, the current selections, the name on display and the
/// history, along with the store the history is persisted to. Created at
/// session start, mutated only through its methods, dropped at session end.
pub struct Session<S: KeyValueStore> {
	generator: Generator,
	store: S,
	history: HistoryStore,
	request: GenerationRequest,
	current: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
	/// Starts a session, loading any history already in `store`.
	pub fn new(generator: Generator, store: S) -> Self {
		let config = generator.config();
		let history = HistoryStore::load(&store, &config.history_key, config.history_capacity);
		info!("session started with {} history entries", history.len());
		Self {
			generator,
			store,
			history,
			request: GenerationRequest::default(),
			current: None,
		}
	}

	pub fn generator(&self) -> &Generator {
		&self.generator
	}

	pub fn select_category(&mut self, category: CategoryChoice) {
		self.request.category = category;
	}

	pub fn select_length(&mut self, length: LengthChoice) {
		self.request.length = length;
	}

	/// Current selections.
	pub fn request(&self) -> GenerationRequest {
		self.request
	}

	/// Generates a name for the current selections using the thread RNG.
	pub fn generate(&mut self) -> GeneratedName {
		self.generate_with(&mut rand::rng())
	}

	/// Generates a name, shows it, records it and persists the history.
	///
	/// Names already in the history are avoided while attempts remain.
	/// A failed save is logged; the in-memory history stays authoritative.
	pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GeneratedName {
		let history = &self.history;
		let name = self
			.generator
			.generate_excluding(&self.request, rng, &|candidate: &str| history.contains(candidate));

		self.current = Some(name.as_str().to_owned());
		if self.history.record(name.as_str()) {
			self.persist();
		}
		name
	}

	/// Puts the history entry at `index` back on display.
	pub fn recall(&mut self, index: usize) -> Option<&str> {
		let name = self.history.get(index)?.to_owned();
		self.current = Some(name);
		self.current()
	}

	/// Name currently on display.
	pub fn current(&self) -> Option<&str> {
		self.current.as_deref()
	}

	pub fn history(&self) -> &HistoryStore {
		&self.history
	}

	/// Gives the store back, ending the session.
	pub fn into_store(self) -> S {
		self.store
	}

	fn persist(&mut self) {
		let key = &self.generator.config().history_key;
		if let Err(e) = self.history.save(&mut self.store, key) {
			warn!("failed to save history `{key}`: {e}");
		}
	}
}
