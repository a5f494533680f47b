use std::fmt;

/// First code point of the precomposed Hangul syllable block (`가`).
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Number of leading consonants.
pub const LEAD_COUNT: usize = 19;

/// Number of medial vowels.
pub const VOWEL_COUNT: usize = 21;

/// Number of trailing consonants, including the empty one at index 0.
pub const FINAL_COUNT: usize = 28;

/// Leading consonants, in code point order.
pub const LEADS: [char; LEAD_COUNT] = [
	'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
	'ㅍ', 'ㅎ',
];

/// Medial vowels, in code point order.
pub const VOWELS: [char; VOWEL_COUNT] = [
	'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
	'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Trailing consonants, in code point order. Index 0 is "no trailing consonant".
pub const FINALS: [Option<char>; FINAL_COUNT] = [
	None,
	Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
	Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
	Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
	Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// Small set of trailing consonants that keep syllables easy to read:
/// empty, ㄱ, ㄴ, ㄹ, ㅁ, ㅂ, ㅇ.
pub const DEFAULT_TRAILING_FINALS: [usize; 7] = [0, 1, 4, 8, 16, 17, 21];

/// A leading consonant / vowel / trailing consonant triple.
///
/// # Invariants
/// - `lead < LEAD_COUNT`, `vowel < VOWEL_COUNT`, `final_ < FINAL_COUNT`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Syllable {
	lead: usize,
	vowel: usize,
	final_: usize,
}

impl Syllable {
	/// Builds a triple from table indices.
	///
	/// Returns `None` if any index is outside its table.
	pub fn new(lead: usize, vowel: usize, final_: usize) -> Option<Self> {
		if lead >= LEAD_COUNT || vowel >= VOWEL_COUNT || final_ >= FINAL_COUNT {
			return None;
		}
		Some(Self { lead, vowel, final_ })
	}

	pub fn lead(&self) -> usize {
		self.lead
	}

	pub fn vowel(&self) -> usize {
		self.vowel
	}

	pub fn final_(&self) -> usize {
		self.final_
	}

	/// Composition formula:
	/// `BASE + lead * VOWEL_COUNT * FINAL_COUNT + vowel * FINAL_COUNT + final`.
	pub fn code_point(&self) -> u32 {
		SYLLABLE_BASE
			+ (self.lead * VOWEL_COUNT * FINAL_COUNT) as u32
			+ (self.vowel * FINAL_COUNT) as u32
			+ self.final_ as u32
	}

	/// Returns the composed glyph.
	pub fn to_char(&self) -> char {
		// U+AC00..=U+D7A3 contains no surrogates
		char::from_u32(self.code_point()).unwrap_or(char::REPLACEMENT_CHARACTER)
	}

	/// Splits a precomposed syllable back into its triple.
	///
	/// Returns `None` for anything outside the syllable block.
	pub fn decompose(glyph: char) -> Option<Self> {
		let offset = (glyph as u32).checked_sub(SYLLABLE_BASE)? as usize;
		if offset >= LEAD_COUNT * VOWEL_COUNT * FINAL_COUNT {
			return None;
		}
		Some(Self {
			lead: offset / (VOWEL_COUNT * FINAL_COUNT),
			vowel: (offset % (VOWEL_COUNT * FINAL_COUNT)) / FINAL_COUNT,
			final_: offset % FINAL_COUNT,
		})
	}
}

impl fmt::Display for Syllable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_char())
	}
}
