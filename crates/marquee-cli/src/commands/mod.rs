pub mod genres;
pub mod get;
pub mod list;
pub mod search;
