use std::sync::Arc;

use parking_lot::Mutex;

use super::loader::{GeneratorCore, WordSource};
use super::options::GeneratorOptions;
use super::word_list::DeleteOutcome;
use crate::error::GeneratorError;

/// High-level passphrase generator over a randomly sampled word pool.
///
/// # Responsibilities
/// - Aggregate the configured word sources into the pool
/// - Expose the one-shot ready signal to any number of subscribers
/// - Sample random word bundles and mutate the pool after loading
///
/// # Notes
/// - A generator must be created inside a tokio runtime: source draining
///   and deferred `add` units run as spawned tasks.
/// - The pool is owned exclusively by the generator; callers only ever
///   receive sampled copies and counts.
pub struct PhraseGenerator {
	core: Arc<GeneratorCore>,
	num_words: usize,
	deferred: Mutex<Option<Vec<WordSource>>>,
}

impl std::fmt::Debug for PhraseGenerator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PhraseGenerator")
			.field("num_words", &self.num_words)
			.finish_non_exhaustive()
	}
}

impl PhraseGenerator {
	/// Creates a generator from the given options.
	///
	/// # Behavior
	/// - A literal seed list makes the generator ready synchronously,
	///   bypassing the filter and the asynchronous loading path entirely.
	/// - Otherwise every registered source is loaded concurrently; with
	///   none registered, the bundled default word list is used.
	/// - With `auto_init` (the default) loading starts here, otherwise it
	///   waits for [`init`](Self::init).
	///
	/// # Errors
	/// Fails when `min_length` exceeds `max_length`.
	pub fn new(mut options: GeneratorOptions) -> Result<Self, GeneratorError> {
		if options.min_length > options.max_length {
			return Err(GeneratorError::InvalidBounds {
				min: options.min_length,
				max: options.max_length,
			});
		}

		let filter = options.build_filter();
		let seed = options.take_word_list();
		let seeded = seed.is_some();
		let core = Arc::new(GeneratorCore::new(seed, filter, options.case_sensitive));

		let deferred = if seeded {
			// Born ready, nothing to load
			None
		} else {
			let mut sources = options.take_sources();
			if sources.is_empty() {
				sources.push(WordSource::builtin());
			}
			Some(sources)
		};

		let generator = Self {
			core,
			num_words: options.num_words,
			deferred: Mutex::new(deferred),
		};
		if options.auto_init {
			generator.init();
		}
		Ok(generator)
	}

	/// Creates a generator seeded with literal words, concatenated in front
	/// of any seed list already registered in the options.
	pub fn with_words<I, S>(words: I, options: GeneratorOptions) -> Result<Self, GeneratorError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut options = options;
		let mut seed: Vec<String> = words.into_iter().map(Into::into).collect();
		if let Some(existing) = options.take_word_list() {
			seed.extend(existing);
		}
		Self::new(options.word_list(seed))
	}

	/// Starts loading the registered sources.
	///
	/// Idempotent: a no-op for a generator that is already loading, already
	/// loaded, or literal-seeded.
	pub fn init(&self) {
		if let Some(sources) = self.deferred.lock().take() {
			Arc::clone(&self.core).spawn_load(sources);
		}
	}

	/// Whether the ready signal has fired.
	pub fn is_ready(&self) -> bool {
		self.core.is_ready()
	}

	/// Resolves with the ready generator once every registered source has
	/// drained. Any number of callers may wait, before or after the
	/// transition; all observe the same instance.
	pub async fn ready(&self) -> &Self {
		self.core.wait_ready().await;
		self
	}

	/// Current number of words in the pool.
	///
	/// A point-in-time snapshot: deferred `add` units may land at any time.
	pub fn word_count(&self) -> usize {
		self.core.words.lock().len()
	}

	/// Generates the configured default amount of unique words.
	///
	/// Queues behind the ready signal; the pool is never sampled while a
	/// source is still draining.
	///
	/// # Errors
	/// [`GeneratorError::NotEnoughWords`] when the default amount exceeds
	/// the usable pool range (the pool length minus one).
	pub async fn generate(&self) -> Result<Vec<String>, GeneratorError> {
		self.generate_words(self.num_words, true).await
	}

	/// Generates `num_words` random words.
	///
	/// # Parameters
	/// - `num_words`: amount of words to draw; must not exceed the pool
	///   length minus one.
	/// - `unique`: whether an index may repeat within this call.
	///
	/// # Errors
	/// [`GeneratorError::NotEnoughWords`] carrying the requested and
	/// available counts.
	pub async fn generate_words(
		&self,
		num_words: usize,
		unique: bool,
	) -> Result<Vec<String>, GeneratorError> {
		self.core.wait_ready().await;
		self.core.words.lock().sample(num_words, unique)
	}

	/// Queues words for addition, fire-and-forget.
	///
	/// Each word becomes an independent deferred unit applying case
	/// folding, the filter, and an exact-match duplicate check atomically
	/// with respect to itself. Rejected words are dropped silently. Units
	/// are unordered relative to each other and to queued operations.
	pub fn add<I, S>(&self, words: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for word in words {
			let core = Arc::clone(&self.core);
			let word: String = word.into();
			tokio::spawn(async move {
				core.admit_unique(word);
			});
		}
	}

	/// Deletes words from the pool.
	///
	/// Queues behind the ready signal and never fails as a whole: the
	/// outcome carries the removed count and one error per target that
	/// matched nothing. Matching is exact; targets are not case folded.
	pub async fn delete<S: AsRef<str>>(&self, targets: &[S]) -> DeleteOutcome {
		self.core.wait_ready().await;
		let targets: Vec<String> = targets.iter().map(|t| t.as_ref().to_owned()).collect();
		self.core.words.lock().delete(&targets)
	}
}
