//! Top-level module for the nickname generation system.
//!
//! This module provides:
//! - Themed unit tables and their catalog (`Catalog`)
//! - Greedy syllable composition and Hangul glyph assembly
//! - Pronounceability rules (`Validator`)
//! - The retrying generator with its word-combination fallback (`Generator`)
//! - The bounded history (`HistoryStore`) and per-session state (`Session`)

/// Catalog of themed categories: phonetic units and prefix/suffix words.
pub mod catalog;

/// Built-in theme data. Not exposed publicly.
pub(crate) mod tables;

/// Hangul syllable composition from jamo indices.
pub mod hangul;

/// Candidate builders: greedy unit composition and glyph assembly.
pub mod assembler;

/// Candidate validation rules.
pub mod validator;

/// Request types: category/length choices and the validated length.
pub mod request;

/// High-level generator: resolution, bounded attempts and fallback.
pub mod generator;

/// Bounded, deduplicated history and its persistence.
pub mod history;

/// Per-session state tying the generator, selections and history together.
pub mod session;
