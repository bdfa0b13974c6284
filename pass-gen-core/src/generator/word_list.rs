use std::collections::HashSet;

use log::debug;
use rand::Rng;
use rand::seq::index;

use crate::error::{DeleteError, GeneratorError};

/// Outcome of a `delete` call.
///
/// Deletion never fails as a whole; per-target misses are collected here,
/// uniformly across both removal strategies.
#[derive(Debug, Default)]
pub struct DeleteOutcome {
	/// Number of pool entries removed.
	pub removed: usize,
	/// One entry per target that matched nothing.
	pub errors: Vec<DeleteError>,
}

/// The mutable pool of candidate words available for sampling.
///
/// Insertion order is preserved so every entry stays addressable by index;
/// duplicates are allowed on the load path.
///
/// ## Responsibilities
/// - Append words during loading and mutation
/// - Sample uniform random index sets, unique or repeatable
/// - Remove words through a cost-adaptive strategy choice
#[derive(Debug, Default)]
pub(crate) struct WordList {
	words: Vec<String>,
}

impl WordList {
	pub(crate) fn from_words(words: Vec<String>) -> Self {
		Self { words }
	}

	pub(crate) fn len(&self) -> usize {
		self.words.len()
	}

	/// Appends a word. Duplicates are allowed here; the load path admits
	/// every line that passes the filter.
	pub(crate) fn push(&mut self, word: String) {
		self.words.push(word);
	}

	/// Appends a word only if it is not already present (exact match).
	/// Returns whether the word was appended.
	pub(crate) fn push_unique(&mut self, word: String) -> bool {
		if self.words.iter().any(|existing| *existing == word) {
			return false;
		}
		self.words.push(word);
		true
	}

	/// Samples `num_words` entries by uniform random index.
	///
	/// # Parameters
	/// - `num_words`: amount of words to draw; must not exceed the usable
	///   range, which is the pool length minus one.
	/// - `unique`: when true, indices never repeat within this call.
	///
	/// # Errors
	/// [`GeneratorError::NotEnoughWords`] carrying the requested and
	/// available counts when `num_words` exceeds the usable range.
	///
	/// # Notes
	/// - Words come back in the order their indices were produced, never
	///   sorted or deduplicated beyond index uniqueness.
	pub(crate) fn sample(&self, num_words: usize, unique: bool) -> Result<Vec<String>, GeneratorError> {
		let available = self.words.len().saturating_sub(1);
		if num_words > available {
			return Err(GeneratorError::NotEnoughWords {
				requested: num_words,
				available,
			});
		}

		let mut rng = rand::rng();
		let picked = if unique {
			index::sample(&mut rng, self.words.len(), num_words)
				.into_iter()
				.map(|i| self.words[i].clone())
				.collect()
		} else {
			(0..num_words)
				.map(|_| self.words[rng.random_range(0..self.words.len())].clone())
				.collect()
		};
		Ok(picked)
	}

	/// Removes the given targets, choosing a strategy by estimated cost.
	///
	/// With `f` targets over `n` entries, the per-target indexed lookup is
	/// taken when `log2(n) * f < n / f`, a single filtering rebuild
	/// otherwise. Both strategies report one [`DeleteError::NotFound`] per
	/// target that matched nothing.
	pub(crate) fn delete(&mut self, targets: &[String]) -> DeleteOutcome {
		if targets.is_empty() {
			return DeleteOutcome::default();
		}

		if Self::indexed_is_cheaper(self.words.len(), targets.len()) {
			self.delete_indexed(targets)
		} else {
			self.delete_rebuild(targets)
		}
	}

	/// Cost estimate driving the strategy switch.
	fn indexed_is_cheaper(n: usize, f: usize) -> bool {
		(n as f64).log2() * (f as f64) < n as f64 / f as f64
	}

	/// Indexed strategy: linear-search the first occurrence of each target
	/// and remove that slot, compacting the pool.
	fn delete_indexed(&mut self, targets: &[String]) -> DeleteOutcome {
		debug!(
			"delete: indexed strategy ({} targets over {} words)",
			targets.len(),
			self.words.len()
		);

		let mut outcome = DeleteOutcome::default();
		for target in targets {
			match self.words.iter().position(|word| word == target) {
				Some(idx) => {
					debug!("found {} at {}", target, idx);
					self.words.remove(idx);
					outcome.removed += 1;
				}
				None => outcome.errors.push(DeleteError::NotFound(target.clone())),
			}
		}
		outcome
	}

	/// Rebuild strategy: retain every word not in the target set, in one
	/// pass. All occurrences of a target are removed in this path.
	fn delete_rebuild(&mut self, targets: &[String]) -> DeleteOutcome {
		debug!(
			"delete: rebuild strategy ({} targets over {} words)",
			targets.len(),
			self.words.len()
		);

		let target_set: HashSet<&str> = targets.iter().map(String::as_str).collect();
		let mut matched: HashSet<&str> = HashSet::new();
		let mut outcome = DeleteOutcome::default();

		self.words.retain(|word| {
			if let Some(target) = target_set.get(word.as_str()) {
				matched.insert(*target);
				outcome.removed += 1;
				false
			} else {
				true
			}
		});

		for target in targets {
			if !matched.contains(target.as_str()) {
				outcome.errors.push(DeleteError::NotFound(target.clone()));
			}
		}
		outcome
	}
}
