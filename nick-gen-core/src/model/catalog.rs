use std::collections::HashSet;
use std::path::Path;

use log::error;
use rand::Rng;
use serde::Deserialize;

use super::tables::BUILTIN_THEMES;
use crate::error::{Error, Result};

/// Handle to a category inside one [`Catalog`].
///
/// Obtained through [`Catalog::lookup`] or [`Catalog::ids`]; only meaningful
/// for the catalog that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(usize);

/// A composition atom: one or more glyphs with a known display length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneticUnit {
	text: String,
	len: usize,
}

impl PhoneticUnit {
	fn new(text: &str) -> Self {
		Self { text: text.to_owned(), len: text.chars().count() }
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// Display length in glyphs.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

/// Non-empty set of phonetic units belonging to one category.
///
/// Single-glyph units are indexed up front since the assembler reaches for
/// them whenever exactly one glyph remains to fill.
#[derive(Clone, Debug)]
pub struct UnitSet {
	units: Vec<PhoneticUnit>,
	singles: Vec<usize>,
}

impl UnitSet {
	fn new(units: Vec<PhoneticUnit>) -> Self {
		let singles = units
			.iter()
			.enumerate()
			.filter(|(_, unit)| unit.len() == 1)
			.map(|(index, _)| index)
			.collect();
		Self { units, singles }
	}

	pub fn units(&self) -> &[PhoneticUnit] {
		&self.units
	}

	/// Picks any unit uniformly.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &PhoneticUnit {
		// Invariant: `units` is never empty
		&self.units[rng.random_range(0..self.units.len())]
	}

	/// Picks a single-glyph unit uniformly, if the set has any.
	pub fn choose_single<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&PhoneticUnit> {
		if self.singles.is_empty() {
			return None;
		}
		let index = self.singles[rng.random_range(0..self.singles.len())];
		self.units.get(index)
	}
}

/// One theme: an optional unit set and the prefix/suffix word lists used
/// by the word-combination fallback.
///
/// # Invariants
/// - `prefixes` and `suffixes` are non-empty
/// - no entry is empty or contains a control character
#[derive(Clone, Debug)]
pub struct CategoryTable {
	name: String,
	units: Option<UnitSet>,
	prefixes: Vec<String>,
	suffixes: Vec<String>,
}

impl CategoryTable {
	/// Builds a category, validating every entry.
	///
	/// An empty `units` list yields a category without a unit set; requests
	/// for it go straight to word combination.
	///
	/// # Errors
	/// Returns an error if a word list is empty, or if any entry is empty
	/// or contains a control character.
	pub fn new<S: AsRef<str>>(name: &str, units: &[S], prefixes: &[S], suffixes: &[S]) -> Result<Self> {
		if prefixes.is_empty() {
			return Err(Error::EmptyPrefixes(name.to_owned()));
		}
		if suffixes.is_empty() {
			return Err(Error::EmptySuffixes(name.to_owned()));
		}

		for entry in units.iter().chain(prefixes).chain(suffixes) {
			check_entry(name, entry.as_ref())?;
		}

		let units: Vec<PhoneticUnit> = units.iter().map(|u| PhoneticUnit::new(u.as_ref())).collect();
		Ok(Self {
			name: name.to_owned(),
			units: if units.is_empty() { None } else { Some(UnitSet::new(units)) },
			prefixes: prefixes.iter().map(|p| p.as_ref().to_owned()).collect(),
			suffixes: suffixes.iter().map(|s| s.as_ref().to_owned()).collect(),
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn units(&self) -> Option<&UnitSet> {
		self.units.as_ref()
	}

	pub fn prefixes(&self) -> &[String] {
		&self.prefixes
	}

	pub fn suffixes(&self) -> &[String] {
		&self.suffixes
	}

	pub fn choose_prefix<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
		&self.prefixes[rng.random_range(0..self.prefixes.len())]
	}

	pub fn choose_suffix<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
		&self.suffixes[rng.random_range(0..self.suffixes.len())]
	}
}

fn check_entry(category: &str, entry: &str) -> Result<()> {
	if entry.is_empty() {
		return Err(Error::EmptyEntry { category: category.to_owned() });
	}
	if entry.chars().any(char::is_control) {
		return Err(Error::ControlCharacter { category: category.to_owned(), entry: entry.to_owned() });
	}
	Ok(())
}

/// On-disk shape of a catalog file:
///
/// ```toml
/// [[category]]
/// name = "space"
/// units = ["별", "달", "우주"]
/// prefixes = ["머나먼"]
/// suffixes = ["행성"]
/// ```
#[derive(Deserialize)]
struct CatalogFile {
	#[serde(rename = "category", default)]
	categories: Vec<CategoryFile>,
}

#[derive(Deserialize)]
struct CategoryFile {
	name: String,
	#[serde(default)]
	units: Vec<String>,
	prefixes: Vec<String>,
	suffixes: Vec<String>,
}

/// Immutable set of categories, built once at startup.
///
/// # Invariants
/// - at least one category
/// - category names are unique
#[derive(Clone, Debug)]
pub struct Catalog {
	categories: Vec<CategoryTable>,
}

impl Catalog {
	/// Builds a catalog from already validated categories.
	///
	/// # Errors
	/// Returns an error if `categories` is empty or a name is repeated.
	pub fn new(categories: Vec<CategoryTable>) -> Result<Self> {
		if categories.is_empty() {
			return Err(Error::EmptyCatalog);
		}
		let mut seen = HashSet::new();
		for category in &categories {
			if !seen.insert(category.name()) {
				return Err(Error::DuplicateCategory(category.name().to_owned()));
			}
		}
		Ok(Self { categories })
	}

	/// The four built-in themes: cute, cool, funny and fantasy.
	pub fn builtin() -> Self {
		let categories = BUILTIN_THEMES
			.iter()
			.filter_map(|theme| match CategoryTable::new(theme.name, theme.units, theme.prefixes, theme.suffixes) {
				Ok(table) => Some(table),
				Err(e) => {
					error!("built-in theme `{}` skipped: {e}", theme.name);
					None
				}
			})
			.collect();
		Self { categories }
	}

	/// Parses a catalog from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self> {
		let file: CatalogFile = toml::from_str(text)?;
		let categories = file
			.categories
			.iter()
			.map(|c| CategoryTable::new(&c.name, c.units.as_slice(), c.prefixes.as_slice(), c.suffixes.as_slice()))
			.collect::<Result<Vec<_>>>()?;
		Self::new(categories)
	}

	/// Reads and parses a catalog file.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let text = std::fs::read_to_string(path)?;
		Self::from_toml_str(&text)
	}

	/// Finds a category by name.
	///
	/// # Errors
	/// Returns [`Error::UnknownCategory`] if no category carries that name.
	pub fn lookup(&self, name: &str) -> Result<CategoryId> {
		self.categories
			.iter()
			.position(|c| c.name() == name)
			.map(CategoryId)
			.ok_or_else(|| Error::UnknownCategory(name.to_owned()))
	}

	/// First category in declaration order.
	pub fn first(&self) -> &CategoryTable {
		// Invariant: never empty
		&self.categories[0]
	}

	pub fn contains(&self, id: CategoryId) -> bool {
		id.0 < self.categories.len()
	}

	/// Returns the table behind `id`, or `None` for a handle from another catalog.
	pub fn get(&self, id: CategoryId) -> Option<&CategoryTable> {
		self.categories.get(id.0)
	}

	/// Picks a category uniformly.
	pub fn random_id<R: Rng + ?Sized>(&self, rng: &mut R) -> CategoryId {
		CategoryId(rng.random_range(0..self.categories.len()))
	}

	pub fn ids(&self) -> impl Iterator<Item = CategoryId> + '_ {
		(0..self.categories.len()).map(CategoryId)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.categories.iter().map(CategoryTable::name)
	}

	pub fn len(&self) -> usize {
		self.categories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
	}
}

impl Default for Catalog {
	fn default() -> Self {
		Self::builtin()
	}
}
