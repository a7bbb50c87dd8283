//! JSON catalog source: one array of movie records.
//!
//! The bundled interchange format. The whole catalog is a single JSON
//! array, read once at startup from a trusted file. Any unreadable,
//! unparsable, or invariant-violating record aborts the entire load;
//! the fallback-to-empty policy lives in [`crate::catalog::Catalog`],
//! not here.

use crate::movie::{InvalidRecord, Movie};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read movie records from a JSON array reader.
pub fn read_movies(mut reader: impl Read) -> Result<Vec<Movie>, LoadError> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|e| LoadError::Io(e.to_string()))?;
    parse_movies(&raw)
}

/// Read movie records from a JSON array file path.
pub fn read_movies_from_path(path: impl AsRef<Path>) -> Result<Vec<Movie>, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("{}: {e}", path.display())))?;
    parse_movies(&raw)
}

fn parse_movies(raw: &str) -> Result<Vec<Movie>, LoadError> {
    let movies: Vec<Movie> =
        serde_json::from_str(raw).map_err(|e| LoadError::Parse(e.to_string()))?;
    for (index, movie) in movies.iter().enumerate() {
        movie
            .validate()
            .map_err(|reason| LoadError::Invalid { index, reason })?;
    }
    Ok(movies)
}

/// Errors from reading the catalog source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("source unreadable: {0}")]
    Io(String),

    #[error("source malformed: {0}")]
    Parse(String),

    #[error("record {index}: {reason}")]
    Invalid { index: usize, reason: InvalidRecord },
}
