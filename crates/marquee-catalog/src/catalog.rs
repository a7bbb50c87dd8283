//! The immutable catalog: ordered records plus the identifier index.
//!
//! Built exactly once at startup, read-only for the life of the process.
//! Queries share the catalog freely across threads; there is no interior
//! mutability and nothing to lock.

use crate::json::{LoadError, read_movies_from_path};
use crate::movie::Movie;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// The loaded movie collection.
///
/// Holds three views of the same data: the insertion-ordered sequence
/// (the default iteration and display order), an identifier index for
/// O(1) exact lookup, and the cached distinct genre list. All three are
/// frozen at construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    index: BTreeMap<i64, usize>,
    genres: Vec<String>,
}

impl Catalog {
    /// Build a catalog from fully-validated movies.
    ///
    /// Duplicate identifiers are not rejected here: both records stay in
    /// the ordered sequence while the later one wins in the index, so
    /// iteration order and `get` can diverge for that id. Each duplicate
    /// is logged.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut index = BTreeMap::new();
        for (pos, movie) in movies.iter().enumerate() {
            if let Some(prev) = index.insert(movie.id, pos) {
                tracing::warn!(
                    id = movie.id,
                    earlier_position = prev,
                    later_position = pos,
                    "duplicate identifier: index lookup now resolves to the later record"
                );
            }
        }

        let genres: Vec<String> = movies
            .iter()
            .map(|movie| movie.genre.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            movies,
            index,
            genres,
        }
    }

    /// Load a catalog from a JSON source file, failing fast.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let movies = read_movies_from_path(path)?;
        Ok(Self::from_movies(movies))
    }

    /// Load a catalog from a JSON source file, falling back to an empty
    /// catalog on any failure.
    ///
    /// The reference policy: a total load failure is logged and the
    /// service starts with zero results instead of crashing. Callers
    /// that want startup to be fatal use [`Catalog::load_json`].
    pub fn load_json_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_json(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                tracing::error!(
                    path = %path.display(),
                    %error,
                    "catalog load failed, serving an empty catalog"
                );
                Self::default()
            }
        }
    }

    /// All movies in insertion order.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Total number of records, duplicates included.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog holds zero records.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Exact identifier lookup.
    ///
    /// Identifiers are strictly positive, so a non-positive `id` can
    /// never match and returns `None` without touching the index.
    pub fn get(&self, id: i64) -> Option<&Movie> {
        if id <= 0 {
            return None;
        }
        self.index.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Distinct genres, deduplicated case-sensitively, sorted ascending.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }
}
