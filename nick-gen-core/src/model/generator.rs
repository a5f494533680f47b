use std::fmt;

use log::{debug, warn};
use rand::Rng;

use super::assembler::{Exhausted, GlyphAssembler, compose_units};
use super::catalog::{Catalog, CategoryId, CategoryTable};
use super::request::{CategoryChoice, GenerationRequest, LengthChoice, MAX_NICKNAME_LENGTH, NicknameLength};
use super::validator::Validator;
use crate::config::{GenerationMode, GeneratorConfig};
use crate::error::Result;

/// Which path produced a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
	/// Assembled and validated at the requested length.
	Assembled,
	/// Prefix/suffix word combination. Length is not the requested one but
	/// stays within the nickname bounds.
	Fallback,
}

/// A finished nickname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedName {
	text: String,
	category: String,
	origin: Origin,
}

impl GeneratedName {
	pub fn as_str(&self) -> &str {
		&self.text
	}

	pub fn into_string(self) -> String {
		self.text
	}

	/// Name of the category the request resolved to.
	pub fn category(&self) -> &str {
		&self.category
	}

	pub fn origin(&self) -> Origin {
		self.origin
	}

	/// Display length in glyphs.
	pub fn len(&self) -> usize {
		self.text.chars().count()
	}

	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}
}

impl fmt::Display for GeneratedName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

/// A request with every `Random` choice drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedRequest {
	pub category: CategoryId,
	pub length: NicknameLength,
}

/// Word-combination layouts used by the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
	PrefixSuffix,
	SuffixPrefix,
	Separated,
}

const FORMATS: [Format; 3] = [Format::PrefixSuffix, Format::SuffixPrefix, Format::Separated];

/// Word combinations drawn before settling on the shortest one.
const FALLBACK_DRAWS: usize = 16;

/// Nickname generator.
///
/// # Responsibilities
/// - Resolve `Random` category/length choices into concrete values
/// - Run the configured assembler under a bounded attempt budget
/// - Validate every candidate
/// - Degrade to word combination when the budget runs out
///
/// Never fails: every request ends in a `GeneratedName`.
#[derive(Debug, Clone)]
pub struct Generator {
	catalog: Catalog,
	config: GeneratorConfig,
	validator: Validator,
	glyphs: GlyphAssembler,
}

impl Generator {
	/// Creates a generator over `catalog`.
	///
	/// # Errors
	/// Returns an error if `config` does not validate.
	pub fn new(catalog: Catalog, config: GeneratorConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self {
			validator: Validator::new(config.blacklist.clone()),
			glyphs: GlyphAssembler::new(config.trailing_probability, &config.trailing_finals),
			catalog,
			config,
		})
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	pub fn validator(&self) -> &Validator {
		&self.validator
	}

	/// Generates one name using the thread-local RNG.
	pub fn generate(&self, request: &GenerationRequest) -> GeneratedName {
		self.generate_with(request, &mut rand::rng())
	}

	/// Generates one name with an explicit randomness source.
	pub fn generate_with<R: Rng + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> GeneratedName {
		self.generate_excluding(request, rng, &|_: &str| false)
	}

	/// Generates one name, counting candidates for which `exclude` holds
	/// as rejected attempts. The fallback is never excluded.
	pub fn generate_excluding<R: Rng + ?Sized>(
		&self,
		request: &GenerationRequest,
		rng: &mut R,
		exclude: &dyn Fn(&str) -> bool,
	) -> GeneratedName {
		let resolved = self.resolve(request, rng);
		let table = self.table(resolved.category);

		match self.attempt(&resolved, rng, exclude) {
			Ok(text) => GeneratedName {
				text,
				category: table.name().to_owned(),
				origin: Origin::Assembled,
			},
			Err(Exhausted) => {
				debug!("attempt budget exhausted for `{}`, combining words", table.name());
				self.fallback(resolved.category, rng)
			}
		}
	}

	/// Draws every `Random` choice of `request`.
	///
	/// A category handle from another catalog is treated as `Random`.
	pub fn resolve<R: Rng + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> ResolvedRequest {
		let category = match request.category {
			CategoryChoice::Named(id) if self.catalog.contains(id) => id,
			CategoryChoice::Named(id) => {
				warn!("category {id:?} is not part of this catalog, picking one at random");
				self.catalog.random_id(rng)
			}
			CategoryChoice::Random => self.catalog.random_id(rng),
		};
		let length = match request.length {
			LengthChoice::Exact(length) => length,
			LengthChoice::Random => NicknameLength::random(rng),
		};
		ResolvedRequest { category, length }
	}

	/// Runs the assembler and validator until a candidate passes or the
	/// attempt budget is spent.
	///
	/// # Errors
	/// Returns [`Exhausted`] when no candidate passed, including right away
	/// for a unit-composition request on a category without units.
	pub fn attempt<R: Rng + ?Sized>(
		&self,
		resolved: &ResolvedRequest,
		rng: &mut R,
		exclude: &dyn Fn(&str) -> bool,
	) -> Result<String, Exhausted> {
		let table = self.table(resolved.category);
		let target = resolved.length.get();

		for attempt in 1..=self.config.attempt_budget() {
			let candidate = match self.config.mode {
				GenerationMode::UnitComposition => {
					let Some(units) = table.units() else {
						debug!("`{}` has no units", table.name());
						return Err(Exhausted);
					};
					compose_units(units, target, rng)
				}
				GenerationMode::GlyphAssembly => Ok(self.glyphs.assemble(target, rng)),
			};

			let text = match candidate {
				Ok(text) => text,
				Err(Exhausted) => {
					debug!("attempt {attempt}: no exact fit for {target} glyphs");
					continue;
				}
			};

			match self.validator.validate(&text) {
				Ok(()) if exclude(&text) => debug!("attempt {attempt}: {text} already used"),
				Ok(()) => return Ok(text),
				Err(rejection) => debug!("attempt {attempt}: {text} rejected, {rejection}"),
			}
		}

		Err(Exhausted)
	}

	/// Combines a random prefix and suffix of `category`.
	///
	/// Draws up to [`FALLBACK_DRAWS`] combinations and keeps the first one of
	/// at most [`MAX_NICKNAME_LENGTH`] glyphs. If none fits, joins the
	/// shortest prefix and suffix, cut to the maximum length.
	/// Always succeeds since word lists are never empty.
	pub fn fallback<R: Rng + ?Sized>(&self, category: CategoryId, rng: &mut R) -> GeneratedName {
		let table = self.table(category);

		let drawn = (0..FALLBACK_DRAWS).find_map(|_| {
			let prefix = table.choose_prefix(rng);
			let suffix = table.choose_suffix(rng);
			let format = FORMATS[rng.random_range(0..FORMATS.len())];
			let text = self.combine(format, prefix, suffix);
			(text.chars().count() <= MAX_NICKNAME_LENGTH).then_some(text)
		});

		let text = drawn.unwrap_or_else(|| {
			let shortest = |words: &[String]| words.iter().min_by_key(|w| w.chars().count()).cloned().unwrap_or_default();
			let text = self.combine(Format::PrefixSuffix, &shortest(table.prefixes()), &shortest(table.suffixes()));
			debug!("no fallback for `{}` fits, shortening {text}", table.name());
			text.chars().take(MAX_NICKNAME_LENGTH).collect()
		});

		GeneratedName {
			text,
			category: table.name().to_owned(),
			origin: Origin::Fallback,
		}
	}

	fn combine(&self, format: Format, prefix: &str, suffix: &str) -> String {
		match format {
			Format::PrefixSuffix => format!("{prefix}{suffix}"),
			Format::SuffixPrefix => format!("{suffix}{prefix}"),
			Format::Separated => format!("{prefix}{}{suffix}", self.config.separator),
		}
	}

	fn table(&self, id: CategoryId) -> &CategoryTable {
		// Ids reaching here went through `resolve`
		self.catalog.get(id).unwrap_or_else(|| self.catalog.first())
	}
}

impl Default for Generator {
	fn default() -> Self {
		let config = GeneratorConfig::default();
		Self {
			validator: Validator::new(config.blacklist.clone()),
			glyphs: GlyphAssembler::new(config.trailing_probability, &config.trailing_finals),
			catalog: Catalog::builtin(),
			config,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::hangul::{DEFAULT_TRAILING_FINALS, Syllable};
	use crate::model::request::{MAX_NICKNAME_LENGTH, MIN_NICKNAME_LENGTH};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn unit_config() -> GeneratorConfig {
		GeneratorConfig { mode: GenerationMode::UnitComposition, unit_attempts: 20, ..Default::default() }
	}

	fn exact(length: usize) -> LengthChoice {
		LengthChoice::Exact(NicknameLength::new(length).unwrap())
	}

	#[test]
	fn glyph_mode_returns_requested_length() {
		let generator = Generator::default();
		let mut rng = StdRng::seed_from_u64(42);
		for length in MIN_NICKNAME_LENGTH..=MAX_NICKNAME_LENGTH {
			for id in generator.catalog().ids() {
				let request = GenerationRequest::new(CategoryChoice::Named(id), exact(length));
				let name = generator.generate_with(&request, &mut rng);
				assert_eq!(name.origin(), Origin::Assembled);
				assert_eq!(name.len(), length);
			}
		}
	}

	#[test]
	fn random_category_with_length_four_builds_four_valid_glyphs() {
		let generator = Generator::default();
		let mut rng = StdRng::seed_from_u64(4);
		let request = GenerationRequest::new(CategoryChoice::Random, exact(4));

		let name = generator.generate_with(&request, &mut rng);
		assert_eq!(name.len(), 4);
		for glyph in name.as_str().chars() {
			let syllable = Syllable::decompose(glyph).expect("precomposed syllable");
			assert!(DEFAULT_TRAILING_FINALS.contains(&syllable.final_()));
			assert_eq!(Syllable::new(syllable.lead(), syllable.vowel(), syllable.final_()), Some(syllable));
		}
	}

	#[test]
	fn unit_mode_stays_within_bounds() {
		let generator = Generator::new(Catalog::builtin(), unit_config()).unwrap();
		let mut rng = StdRng::seed_from_u64(8);
		for _ in 0..200 {
			let name = generator.generate_with(&GenerationRequest::default(), &mut rng);
			if name.origin() == Origin::Assembled {
				assert!((MIN_NICKNAME_LENGTH..=MAX_NICKNAME_LENGTH).contains(&name.len()));
				assert!(generator.validator().is_valid(name.as_str()));
			}
		}
	}

	#[test]
	fn unit_mode_uses_the_requested_category() {
		let catalog = Catalog::builtin();
		let cute = catalog.lookup("cute").unwrap();
		let generator = Generator::new(catalog, unit_config()).unwrap();
		let mut rng = StdRng::seed_from_u64(21);

		let name = generator.generate_with(&GenerationRequest::new(CategoryChoice::Named(cute), exact(2)), &mut rng);
		assert_eq!(name.category(), "cute");
	}

	#[test]
	fn category_without_units_falls_back_to_its_words() {
		let no_units: [&str; 0] = [];
		let plain = CategoryTable::new("plain", &no_units, &["그냥"], &["이름"]).unwrap();
		let catalog = Catalog::new(vec![plain]).unwrap();
		let id = catalog.lookup("plain").unwrap();
		let generator = Generator::new(catalog, unit_config()).unwrap();
		let mut rng = StdRng::seed_from_u64(1);

		for _ in 0..16 {
			let name = generator.generate_with(&GenerationRequest::new(CategoryChoice::Named(id), exact(3)), &mut rng);
			assert_eq!(name.origin(), Origin::Fallback);
			assert_eq!(name.category(), "plain");
			assert!(["그냥이름", "이름그냥", "그냥_이름"].contains(&name.as_str()));
		}
	}

	#[test]
	fn impossible_fit_falls_back() {
		// Only 3-glyph units can never fill 2 glyphs.
		let odd = CategoryTable::new("odd", &["라마바"], &["큰"], &["곰"]).unwrap();
		let catalog = Catalog::new(vec![odd]).unwrap();
		let generator = Generator::new(catalog, unit_config()).unwrap();
		let mut rng = StdRng::seed_from_u64(3);

		let name = generator.generate_with(&GenerationRequest::new(CategoryChoice::Random, exact(2)), &mut rng);
		assert_eq!(name.origin(), Origin::Fallback);
	}

	#[test]
	fn rejected_candidates_are_retried_then_fall_back() {
		// Every candidate repeats one glyph three times.
		let echo = CategoryTable::new("echo", &["하"], &["웃는"], &["하마"]).unwrap();
		let catalog = Catalog::new(vec![echo]).unwrap();
		let generator = Generator::new(catalog, unit_config()).unwrap();
		let mut rng = StdRng::seed_from_u64(3);

		let name = generator.generate_with(&GenerationRequest::new(CategoryChoice::Random, exact(3)), &mut rng);
		assert_eq!(name.origin(), Origin::Fallback);

		let name = generator.generate_with(&GenerationRequest::new(CategoryChoice::Random, exact(2)), &mut rng);
		assert_eq!(name.origin(), Origin::Assembled);
		assert_eq!(name.as_str(), "하하");
	}

	#[test]
	fn excluded_candidates_count_as_rejections() {
		let echo = CategoryTable::new("echo", &["하"], &["웃는"], &["하마"]).unwrap();
		let catalog = Catalog::new(vec![echo]).unwrap();
		let generator = Generator::new(catalog, unit_config()).unwrap();
		let mut rng = StdRng::seed_from_u64(3);

		let request = GenerationRequest::new(CategoryChoice::Random, exact(2));
		let name = generator.generate_excluding(&request, &mut rng, &|name: &str| name == "하하");
		assert_eq!(name.origin(), Origin::Fallback);
	}

	#[test]
	fn fallback_uses_one_of_three_formats() {
		let generator = Generator::default();
		let cool = generator.catalog().lookup("cool").unwrap();
		let table = generator.catalog().get(cool).unwrap();
		let mut rng = StdRng::seed_from_u64(13);

		for _ in 0..64 {
			let name = generator.fallback(cool, &mut rng);
			let text = name.as_str();
			let matched = table.prefixes().iter().any(|p| {
				table.suffixes().iter().any(|s| {
					text == format!("{p}{s}") || text == format!("{s}{p}") || text == format!("{p}_{s}")
				})
			});
			assert!(matched, "{text} is not a prefix/suffix combination");
			assert!(!text.chars().any(char::is_control));
		}
	}

	#[test]
	fn fallback_names_stay_within_bounds_for_every_theme() {
		let generator = Generator::default();
		let mut rng = StdRng::seed_from_u64(17);

		for id in generator.catalog().ids() {
			for _ in 0..500 {
				let name = generator.fallback(id, &mut rng);
				assert!(
					(MIN_NICKNAME_LENGTH..=MAX_NICKNAME_LENGTH).contains(&name.len()),
					"{name} has {} glyphs",
					name.len()
				);
			}
		}
	}

	#[test]
	fn long_words_are_cut_to_the_maximum_length() {
		let long = CategoryTable::new("long", &["가"], &["아주아주긴"], &["이름입니다"]).unwrap();
		let catalog = Catalog::new(vec![long]).unwrap();
		let id = catalog.lookup("long").unwrap();
		let generator = Generator::new(catalog, GeneratorConfig::default()).unwrap();
		let mut rng = StdRng::seed_from_u64(2);

		let name = generator.fallback(id, &mut rng);
		assert_eq!(name.as_str(), "아주아주긴이름입");
		assert_eq!(name.len(), MAX_NICKNAME_LENGTH);
	}

	#[test]
	fn resolve_keeps_concrete_choices() {
		let generator = Generator::default();
		let fantasy = generator.catalog().lookup("fantasy").unwrap();
		let mut rng = StdRng::seed_from_u64(0);

		let resolved = generator.resolve(&GenerationRequest::new(CategoryChoice::Named(fantasy), exact(6)), &mut rng);
		assert_eq!(resolved.category, fantasy);
		assert_eq!(resolved.length.get(), 6);
	}

	#[test]
	fn rejects_invalid_config() {
		let config = GeneratorConfig { trailing_probability: -0.1, ..Default::default() };
		assert!(Generator::new(Catalog::builtin(), config).is_err());
	}
}
