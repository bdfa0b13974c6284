//! Top-level module for the passphrase generation system.
//!
//! This module provides a word-pool passphrase generator, including:
//! - Construction-time configuration (`GeneratorOptions`)
//! - Asynchronous multi-source loading (`WordSource`, internal core)
//! - The mutable word pool and its algorithms (internal `WordList`)
//! - A high-level generation interface (`PhraseGenerator`)

/// High-level interface for loading word sources and generating passphrases.
///
/// Exposes readiness subscription, random sampling, and pool mutation
/// (add / delete) once loading has finished.
pub mod phrase_generator;

/// Construction-time configuration with documented defaults.
pub mod options;

/// Word sources and the asynchronous loading core.
///
/// Aggregates any number of line-based sources into the word pool and
/// fires a one-shot ready signal when the last source drains.
pub mod loader;

/// Internal representation of the word pool.
///
/// Owns index sampling and the cost-adaptive delete strategies.
/// This module is not exposed publicly.
mod word_list;

pub use word_list::DeleteOutcome;
