use std::path::PathBuf;
use std::sync::Arc;

use super::loader::{LineReader, WordSource};

/// Predicate gating whether a candidate word enters the pool.
///
/// Applied uniformly to every source; the constructor-literal seed list is
/// the one exception and bypasses it.
pub type WordFilter = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Construction-time configuration for a `PhraseGenerator`.
///
/// `GeneratorOptions` contains both **generation parameters** (sample size,
/// length bounds, case folding) and **source registration** (literal seed
/// list, word files, compressed word files, open readers).
///
/// # Defaults
/// - `num_words = 4`
/// - `min_length = 5`, `max_length = 8`
/// - `case_sensitive = false` (incoming words are lowercased)
/// - `auto_init = true` (loading starts at construction)
/// - no custom filter (length-within-bounds check)
/// - no sources (the bundled word list is loaded)
///
/// # Invariants
/// - `min_length <= max_length`, checked at generator construction
pub struct GeneratorOptions {
	/// Amount of words sampled per generated bundle.
	pub num_words: usize,

	/// Minimum word length accepted by the default filter.
	pub min_length: usize,

	/// Maximum word length accepted by the default filter.
	pub max_length: usize,

	/// Whether incoming words keep their case. When false, every word
	/// read from a source or added later is lowercased first.
	pub case_sensitive: bool,

	/// Whether construction immediately starts loading the sources.
	pub auto_init: bool,

	/// Literal seed words. Bypasses the filter and the asynchronous
	/// loading path entirely.
	word_list: Option<Vec<String>>,

	/// Plain newline-delimited word files.
	word_files: Vec<PathBuf>,

	/// Gzip-compressed word files.
	gz_word_files: Vec<PathBuf>,

	/// Already-open line-based input streams.
	readers: Vec<LineReader>,

	/// Optional custom acceptance predicate.
	filter: Option<WordFilter>,
}

impl GeneratorOptions {
	/// Creates an option set holding every documented default.
	pub fn new() -> Self {
		Self {
			num_words: 4,
			min_length: 5,
			max_length: 8,
			case_sensitive: false,
			auto_init: true,
			word_list: None,
			word_files: Vec::new(),
			gz_word_files: Vec::new(),
			readers: Vec::new(),
			filter: None,
		}
	}

	/// Seeds the pool with literal words, appended to any seed words
	/// already registered.
	pub fn word_list<I, S>(mut self, words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.word_list
			.get_or_insert_with(Vec::new)
			.extend(words.into_iter().map(Into::into));
		self
	}

	/// Registers a plain word file, one candidate word per line.
	///
	/// May be called repeatedly; every registered file becomes its own
	/// asynchronous source.
	pub fn word_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
		self.word_files.push(path.into());
		self
	}

	/// Registers a gzip-compressed word file.
	pub fn gz_word_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
		self.gz_word_files.push(path.into());
		self
	}

	/// Registers an already-open line-based input stream.
	pub fn reader(mut self, reader: LineReader) -> Self {
		self.readers.push(reader);
		self
	}

	/// Replaces the default length filter with a custom predicate.
	pub fn filter(mut self, filter: WordFilter) -> Self {
		self.filter = Some(filter);
		self
	}

	/// Resolves the acceptance predicate: the custom filter when given,
	/// otherwise a character-count check against the length bounds.
	pub(crate) fn build_filter(&self) -> WordFilter {
		match &self.filter {
			Some(filter) => Arc::clone(filter),
			None => {
				let (min, max) = (self.min_length, self.max_length);
				Arc::new(move |word: &str| {
					// Character count, not byte length
					let length = word.chars().count();
					length >= min && length <= max
				})
			}
		}
	}

	/// Takes the literal seed list out of the options.
	pub(crate) fn take_word_list(&mut self) -> Option<Vec<String>> {
		self.word_list.take()
	}

	/// Drains every registered asynchronous source, in registration order:
	/// compressed files, then plain files, then readers.
	pub(crate) fn take_sources(&mut self) -> Vec<WordSource> {
		let mut sources = Vec::new();
		for path in self.gz_word_files.drain(..) {
			sources.push(WordSource::GzFile(path));
		}
		for path in self.word_files.drain(..) {
			sources.push(WordSource::File(path));
		}
		for reader in self.readers.drain(..) {
			sources.push(WordSource::Reader(reader));
		}
		sources
	}
}

impl Default for GeneratorOptions {
	fn default() -> Self {
		Self::new()
	}
}
