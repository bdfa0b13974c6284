use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) async fn read_lines<P: AsRef<Path>>(filename: P) -> std::io::Result<Vec<String>> {
	let contents = tokio::fs::read_to_string(filename).await?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Reads a gzip-compressed text file and returns its decoded lines.
///
/// The compressed file is read whole and inflated in memory; a corrupt or
/// non-gzip payload surfaces as an `InvalidData` I/O error.
pub(crate) async fn read_gz_lines<P: AsRef<Path>>(filename: P) -> std::io::Result<Vec<String>> {
	let compressed = tokio::fs::read(filename).await?;
	let mut contents = String::new();
	GzDecoder::new(compressed.as_slice()).read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}
