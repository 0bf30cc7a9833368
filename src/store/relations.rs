use super::core::GraphStore;
use crate::model::{Comment, Post, User};

impl GraphStore {
    /// Resolves a post's author reference.
    ///
    /// Returns `None` only for posts that were never accepted by this
    /// store; creation checks make the reference resolvable otherwise.
    pub fn post_author(&self, post: &Post) -> Option<&User> {
        self.user(&post.author)
    }

    /// All comments on the given post, in insertion order.
    pub fn post_comments(&self, post: &Post) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|comment| comment.post == post.id)
            .collect()
    }

    /// All posts written by the given user, in insertion order.
    pub fn user_posts(&self, user: &User) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.author == user.id)
            .collect()
    }

    /// All comments written by the given user, in insertion order.
    pub fn user_comments(&self, user: &User) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|comment| comment.author == user.id)
            .collect()
    }

    /// Resolves a comment's author reference.
    pub fn comment_author(&self, comment: &Comment) -> Option<&User> {
        self.user(&comment.author)
    }

    /// Resolves a comment's post reference.
    pub fn comment_post(&self, comment: &Comment) -> Option<&Post> {
        self.post(&comment.post)
    }
}
