//! Quill: an in-memory graph store for a small blog domain.
//!
//! The store owns three ordered record collections (users, posts, comments)
//! and answers list queries by linear scan, creation mutations by
//! check-then-append, and relationship lookups by resolving reference
//! fields. There is no persistence and no deletion; an external
//! schema-driven dispatch layer is expected to sit on top of the public
//! operations exposed here.

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod seed;
pub mod shared;
pub mod store;

pub use error::{RecordKind, Result, StoreError};
pub use model::{Comment, CommentId, Post, PostId, User, UserId};
pub use shared::{shared, SharedStore};
pub use store::GraphStore;
