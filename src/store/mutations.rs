use super::core::GraphStore;
use crate::error::{RecordKind, Result, StoreError};
use crate::model::{Comment, CommentId, Post, PostId, User, UserId};
use tracing::debug;

impl GraphStore {
    /// Creates a user with a fresh identifier and appends it.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if any existing user has
    /// that exact email; the store is left unchanged on failure.
    pub fn create_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        age: Option<u32>,
    ) -> Result<&User> {
        let email = email.into();
        if self.users.iter().any(|user| user.email == email) {
            return Err(StoreError::DuplicateEmail { email });
        }

        let user = User {
            id: UserId::fresh(),
            name: name.into(),
            email,
            age,
        };
        debug!(id = %user.id, "Created user");
        Ok(self.insert_user(user))
    }

    /// Creates a post with a fresh identifier and appends it.
    ///
    /// Fails with [`StoreError::NotFound`] if `author` does not resolve to
    /// an existing user; the store is left unchanged on failure.
    pub fn create_post(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        published: bool,
        author: UserId,
    ) -> Result<&Post> {
        if self.user(&author).is_none() {
            return Err(StoreError::NotFound {
                record: RecordKind::User,
                id: author.0,
            });
        }

        let post = Post {
            id: PostId::fresh(),
            title: title.into(),
            body: body.into(),
            published,
            author,
        };
        debug!(id = %post.id, author = %post.author, "Created post");
        Ok(self.insert_post(post))
    }

    /// Creates a comment with a fresh identifier and appends it.
    ///
    /// Fails with [`StoreError::NotFound`] if either reference does not
    /// resolve; the store is left unchanged on failure. The author is
    /// checked first, so a comment missing both references reports the
    /// author.
    pub fn create_comment(
        &mut self,
        text: impl Into<String>,
        author: UserId,
        post: PostId,
    ) -> Result<&Comment> {
        if self.user(&author).is_none() {
            return Err(StoreError::NotFound {
                record: RecordKind::User,
                id: author.0,
            });
        }
        if self.post(&post).is_none() {
            return Err(StoreError::NotFound {
                record: RecordKind::Post,
                id: post.0,
            });
        }

        let comment = Comment {
            id: CommentId::fresh(),
            text: text.into(),
            author,
            post,
        };
        debug!(id = %comment.id, post = %comment.post, "Created comment");
        Ok(self.insert_comment(comment))
    }
}
