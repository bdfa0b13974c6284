use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, warn};
use parking_lot::Mutex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;

use super::options::WordFilter;
use super::word_list::WordList;
use crate::io;

/// An already-open line-based input stream usable as a word source.
pub type LineReader = Box<dyn AsyncBufRead + Send + Unpin>;

/// Bundled default word list, one candidate word per line. Loaded through
/// the normal filtered line path when no source is configured.
const BUILTIN_WORDS: &str = include_str!("../../data/wordlist.txt");

/// A single origin of candidate words.
///
/// Every source yields newline-delimited UTF-8 candidate words; each
/// registered source is drained by its own task.
pub enum WordSource {
	/// Plain newline-delimited text file.
	File(PathBuf),
	/// Gzip-compressed newline-delimited text file.
	GzFile(PathBuf),
	/// Arbitrary line-based input stream.
	Reader(LineReader),
}

impl WordSource {
	/// The bundled default source, used when nothing else is configured.
	pub(crate) fn builtin() -> Self {
		WordSource::Reader(Box::new(BUILTIN_WORDS.as_bytes()))
	}

	/// Short label used to attribute per-source log lines.
	fn describe(&self) -> String {
		match self {
			WordSource::File(path) => format!("word file {}", path.display()),
			WordSource::GzFile(path) => format!("gzip word file {}", path.display()),
			WordSource::Reader(_) => "input stream".to_owned(),
		}
	}
}

/// Shared loading and pool state behind every `PhraseGenerator`.
///
/// ## Responsibilities
/// - Own the word pool and its admission rule (case folding + filter)
/// - Track in-flight sources and fire the ready signal exactly once
///
/// ## Invariants
/// - `pending` is set to the full source count before any source task runs,
///   so a source that drains instantly can never trigger a premature signal
/// - the ready flag transitions false -> true at most once
pub(crate) struct GeneratorCore {
	pub(crate) words: Mutex<WordList>,
	filter: WordFilter,
	case_sensitive: bool,
	pending: AtomicUsize,
	ready_tx: watch::Sender<bool>,
}

impl GeneratorCore {
	/// Creates the core, optionally seeded with literal words.
	///
	/// A seeded core is born ready; an unseeded one stays in the loading
	/// state until the last source drains.
	pub(crate) fn new(seed: Option<Vec<String>>, filter: WordFilter, case_sensitive: bool) -> Self {
		let ready = seed.is_some();
		Self {
			words: Mutex::new(WordList::from_words(seed.unwrap_or_default())),
			filter,
			case_sensitive,
			pending: AtomicUsize::new(0),
			ready_tx: watch::channel(ready).0,
		}
	}

	/// Whether the ready signal has fired.
	pub(crate) fn is_ready(&self) -> bool {
		*self.ready_tx.borrow()
	}

	/// Resolves once the ready signal has fired, immediately if it already
	/// has. Any number of callers may wait, before or after the transition.
	pub(crate) async fn wait_ready(&self) {
		let mut ready_rx = self.ready_tx.subscribe();
		// The sender lives as long as self, so this cannot fail
		let _ = ready_rx.wait_for(|ready| *ready).await;
	}

	/// Admission rule for loaded lines: case folding, then the filter.
	/// Returns whether the word entered the pool.
	pub(crate) fn admit(&self, line: String) -> bool {
		let word = if self.case_sensitive { line } else { line.to_lowercase() };
		if !(self.filter)(&word) {
			return false;
		}
		self.words.lock().push(word);
		true
	}

	/// Admission rule for deferred `add` units: case folding, the filter,
	/// then an exact-match duplicate check, all under one lock hold.
	pub(crate) fn admit_unique(&self, word: String) -> bool {
		let word = if self.case_sensitive { word } else { word.to_lowercase() };
		if !(self.filter)(&word) {
			return false;
		}
		self.words.lock().push_unique(word)
	}

	/// Starts one draining task per source.
	///
	/// The pending count is set to the full source total before the first
	/// task is spawned. With no sources at all the ready signal fires here,
	/// once, with the pending count already at zero.
	pub(crate) fn spawn_load(self: Arc<Self>, sources: Vec<WordSource>) {
		if sources.is_empty() {
			self.mark_ready();
			return;
		}

		self.pending.store(sources.len(), Ordering::Release);
		for source in sources {
			let core = Arc::clone(&self);
			tokio::spawn(async move {
				let label = source.describe();
				// A failing source is non-fatal: it is logged with its
				// label and still counts as completed.
				match ingest(&core, source).await {
					Ok(admitted) => debug!("{} drained, {} words admitted", label, admitted),
					Err(e) => warn!("{} failed: {}", label, e),
				}
				core.source_done();
			});
		}
	}

	/// Records one source completion; the last one fires the ready signal.
	fn source_done(&self) {
		if self.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
			self.mark_ready();
		}
	}

	fn mark_ready(&self) {
		self.ready_tx.send_replace(true);
	}
}

/// Drains one source through the admission rule.
///
/// File sources are read whole; reader sources are consumed line by line.
/// Returns the number of admitted words.
async fn ingest(core: &GeneratorCore, source: WordSource) -> std::io::Result<usize> {
	let mut admitted = 0;
	match source {
		WordSource::File(path) => {
			for line in io::read_lines(&path).await? {
				if core.admit(line) {
					admitted += 1;
				}
			}
		}
		WordSource::GzFile(path) => {
			for line in io::read_gz_lines(&path).await? {
				if core.admit(line) {
					admitted += 1;
				}
			}
		}
		WordSource::Reader(reader) => {
			let mut lines = reader.lines();
			while let Some(line) = lines.next_line().await? {
				if core.admit(line) {
					admitted += 1;
				}
			}
		}
	}
	Ok(admitted)
}
