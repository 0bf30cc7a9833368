//! Record types and identifier newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

/// Unique identifier of a [`Post`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

/// Unique identifier of a [`Comment`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl UserId {
    /// Generates a fresh collision-resistant identifier.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl PostId {
    /// Generates a fresh collision-resistant identifier.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl CommentId {
    /// Generates a fresh collision-resistant identifier.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A registered author. Never deleted or mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name; the user list query filters on it.
    pub name: String,
    /// Unique across all users.
    pub email: String,
    /// Optional age in years.
    pub age: Option<u32>,
}

/// A blog post referencing its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier.
    pub id: PostId,
    /// Post title; the post list query filters on it.
    pub title: String,
    /// Post body; the post list query filters on it.
    pub body: String,
    /// Whether the post is published.
    pub published: bool,
    /// Reference to an extant user, checked at creation.
    pub author: UserId,
}

/// A comment referencing both its author and its post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier.
    pub id: CommentId,
    /// Comment text.
    pub text: String,
    /// Reference to an extant user, checked at creation.
    pub author: UserId,
    /// Reference to an extant post, checked at creation.
    pub post: PostId,
}
