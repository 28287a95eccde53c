//! In-memory backend for the Campus resource stores.
//!
//! Each [`MemoryStore`] owns one identifier-keyed collection behind an async
//! read/write lock. Nothing is persisted; state is lost when the process exits.

mod store;

pub use store::MemoryStore;

#[cfg(test)]
mod tests;
