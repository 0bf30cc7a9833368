//! The in-memory graph store.

mod core;
mod mutations;
mod queries;
mod relations;

#[cfg(test)]
mod tests;

pub use self::core::GraphStore;
