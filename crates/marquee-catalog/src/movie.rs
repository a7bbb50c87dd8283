//! Movie record: the single entity type in the catalog.

use serde::{Deserialize, Serialize};

/// One movie record as loaded from the catalog source.
///
/// All eight fields are required in the source; a record missing any of
/// them fails the whole load rather than defaulting. Records are never
/// mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Strictly positive and unique across the catalog.
    pub id: i64,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    pub description: String,
    /// Runtime in minutes.
    pub duration: i32,
    /// Nominal 0.0–10.0 scale; not enforced at load time.
    pub rating: f64,
}

/// A load-time invariant violation on a single record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRecord {
    #[error("identifier must be positive, got {0}")]
    NonPositiveId(i64),

    #[error("title must not be blank")]
    BlankTitle,

    #[error("genre must not be blank")]
    BlankGenre,
}

impl Movie {
    /// Check the load-time invariants: positive identifier, non-blank
    /// title and genre. The remaining fields carry no constraints.
    pub fn validate(&self) -> Result<(), InvalidRecord> {
        if self.id <= 0 {
            return Err(InvalidRecord::NonPositiveId(self.id));
        }
        if self.title.trim().is_empty() {
            return Err(InvalidRecord::BlankTitle);
        }
        if self.genre.trim().is_empty() {
            return Err(InvalidRecord::BlankGenre);
        }
        Ok(())
    }
}
