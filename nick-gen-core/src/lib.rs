//! Pronounceable nickname generation library.
//!
//! This crate provides a small, self-contained nickname system including:
//! - Themed unit tables (syllables and prefix/suffix word lists)
//! - Greedy syllable composition and Hangul glyph assembly
//! - Pronounceability validation with bounded retry and a word-combination fallback
//! - A bounded, deduplicated history persisted through a key-value store
//!
//! Generation never fails: when constrained assembly runs out of attempts,
//! the generator degrades to combining a prefix and a suffix.

/// Core generation logic: catalog, assembler, validator, generator, history
/// and session state.
pub mod model;

/// Key-value persistence used by the history store.
pub mod io;

/// Generator configuration (defaults and TOML loading).
pub mod config;

/// Error type shared by the construction and persistence paths.
pub mod error;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
