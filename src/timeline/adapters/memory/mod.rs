//! In-memory adapters for tests and embedding.

mod source;

pub use source::InMemoryProjectSource;
