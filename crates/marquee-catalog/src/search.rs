//! The query engine: single-field searches and the composite AND search.
//!
//! Every operation is a pure read of the immutable [`Catalog`]. Matching
//! is a whitespace-trimmed, case-insensitive `contains` test; results
//! always keep catalog insertion order, never a relevance order.

use crate::catalog::Catalog;
use crate::movie::Movie;

/// Criteria for the composite search.
///
/// Each field is independent and optional; the engine ANDs together
/// whichever criteria are present and non-blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Title substring, case-insensitive.
    pub name: Option<String>,
    /// Exact identifier. Values <= 0 are not a usable criterion.
    pub id: Option<i64>,
    /// Genre substring, case-insensitive.
    pub genre: Option<String>,
}

impl SearchQuery {
    /// Whether no usable criterion was supplied.
    ///
    /// Blank patterns count as absent. A non-positive id also counts as
    /// absent here: the engine skips it, so the composite search behaves
    /// as if it was never given.
    pub fn is_empty(&self) -> bool {
        normalized(self.name.as_deref()).is_none()
            && !self.id.is_some_and(|id| id > 0)
            && normalized(self.genre.as_deref()).is_none()
    }
}

/// Trim a pattern and fold its case; blank input becomes `None`.
fn normalized(pattern: Option<&str>) -> Option<String> {
    let trimmed = pattern?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

fn contains_folded(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

impl Catalog {
    /// Title substring search.
    ///
    /// A blank pattern returns no results: the single-field form treats
    /// "no criteria" as "match nothing", unlike [`Catalog::search`].
    pub fn search_by_name(&self, name: &str) -> Vec<&Movie> {
        let Some(needle) = normalized(Some(name)) else {
            tracing::warn!("blank name pattern, returning no results");
            return Vec::new();
        };

        let results: Vec<&Movie> = self
            .all()
            .iter()
            .filter(|movie| contains_folded(&movie.title, &needle))
            .collect();
        tracing::info!(pattern = name, count = results.len(), "name search");
        results
    }

    /// Genre substring search; same blank-input contract as
    /// [`Catalog::search_by_name`].
    pub fn search_by_genre(&self, genre: &str) -> Vec<&Movie> {
        let Some(needle) = normalized(Some(genre)) else {
            tracing::warn!("blank genre pattern, returning no results");
            return Vec::new();
        };

        let results: Vec<&Movie> = self
            .all()
            .iter()
            .filter(|movie| contains_folded(&movie.genre, &needle))
            .collect();
        tracing::info!(pattern = genre, count = results.len(), "genre search");
        results
    }

    /// Composite AND search over identifier, title, and genre.
    ///
    /// Criteria apply in a fixed order regardless of how the caller
    /// supplied them:
    ///
    /// 1. A positive `id` narrows the working set to at most the indexed
    ///    record before anything else; a present but non-positive id is
    ///    skipped as a criterion.
    /// 2. A non-blank name pattern narrows by title substring.
    /// 3. A non-blank genre pattern narrows by genre substring.
    ///
    /// With no usable criteria at all the full catalog comes back — the
    /// composite form treats "no criteria" as "match everything", the
    /// opposite of the single-field forms.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Movie> {
        tracing::info!(?query, "composite search");

        let mut results: Vec<&Movie> = self.all().iter().collect();

        if let Some(id) = query.id
            && id > 0
        {
            results = self.get(id).into_iter().collect();
            tracing::info!(id, count = results.len(), "narrowed by id");
        }

        if let Some(needle) = normalized(query.name.as_deref()) {
            results.retain(|movie| contains_folded(&movie.title, &needle));
            tracing::info!(count = results.len(), "narrowed by name");
        }

        if let Some(needle) = normalized(query.genre.as_deref()) {
            results.retain(|movie| contains_folded(&movie.genre, &needle));
            tracing::info!(count = results.len(), "narrowed by genre");
        }

        results
    }
}
