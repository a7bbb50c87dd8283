//! # marquee-catalog
//!
//! In-memory movie catalog: load-time indexing plus the query engine.
//!
//! This crate provides:
//! - `Movie` (the record type) with load-time validation
//! - JSON source reading (the trusted bundled catalog file)
//! - `Catalog` (insertion-ordered records, identifier index, genre list)
//! - `SearchQuery` and the AND-composed search operations
//!
//! It intentionally does not serve HTTP, render pages, or parse request
//! parameters. Those concerns live in the presentation layer
//! (`marquee-cli`), which only calls the contract exposed here.
//!
//! ## Data model
//!
//! ```text
//! JSON array (on disk, trusted, read once)
//!     ↓  load / validate
//! Catalog (immutable: ordered records + id index + genre list)
//!     ↓  pure reads, lock-free under any concurrency
//! search / get / genres
//! ```

pub mod catalog;
pub mod json;
pub mod movie;
pub mod search;

pub use catalog::Catalog;
pub use json::{LoadError, read_movies, read_movies_from_path};
pub use movie::{InvalidRecord, Movie};
pub use search::SearchQuery;
