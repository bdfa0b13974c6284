use thiserror::Error;

/// Failures surfaced by generator construction and sampling.
#[derive(Error, Debug)]
pub enum GeneratorError {
	/// More words requested than the pool can provide. The usable range is
	/// the pool length minus one; both counts are carried in the message.
	#[error("cannot generate {requested}, only {available} available")]
	NotEnoughWords { requested: usize, available: usize },

	/// Construction-time option validation failure.
	#[error("invalid length bounds: min {min} is greater than max {max}")]
	InvalidBounds { min: usize, max: usize },
}

/// Per-target failures collected by `delete`.
///
/// These never fail the call as a whole; they are bundled inside the
/// delete outcome payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeleteError {
	/// The target word was not present in the pool.
	#[error("unable to find word {0}")]
	NotFound(String),
}
