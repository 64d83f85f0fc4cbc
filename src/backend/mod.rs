//! Paging backends
//!
//! Ready-made [`PageBackend`](crate::pagination::PageBackend) implementations:
//!
//! - [`MemoryBackend`] - pages over an in-memory slice
//! - [`DuckDbBackend`] - pages over SQL queries run by DuckDB

mod database;
mod memory;

pub use database::DuckDbBackend;
pub use memory::MemoryBackend;

#[cfg(test)]
mod tests;
