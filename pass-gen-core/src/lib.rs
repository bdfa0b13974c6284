//! A word-pool passphrase generation library.
//!
//! This crate provides a multi-word passphrase generator including:
//! - Aggregation of word sources (literal lists, plain or gzip-compressed
//!   files, arbitrary line-based readers) behind a one-shot ready signal
//! - Uniform random sampling of unique or repeatable word bundles
//! - Incremental mutation of the pool (add / delete) after loading
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core word-pool loading, sampling and mutation logic.
///
/// This module exposes the high-level generator interface while keeping
/// the internal pool representation private.
pub mod generator;

/// Typed errors surfaced by the generator API.
pub mod error;

/// I/O utilities (word-file loading).
///
/// Not exposed
pub(crate) mod io;
