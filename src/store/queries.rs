use super::core::GraphStore;
use crate::model::{Comment, Post, User};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl GraphStore {
    /// Lists users in insertion order.
    ///
    /// With a filter, keeps only users whose name contains the filter text
    /// case-insensitively (unanchored substring match).
    pub fn users(&self, filter: Option<&str>) -> Vec<&User> {
        match filter {
            None => self.users.iter().collect(),
            Some(query) => self
                .users
                .iter()
                .filter(|user| contains_ignore_case(&user.name, query))
                .collect(),
        }
    }

    /// Lists posts in insertion order.
    ///
    /// With a filter, keeps only posts whose title or body contains the
    /// filter text case-insensitively.
    pub fn posts(&self, filter: Option<&str>) -> Vec<&Post> {
        match filter {
            None => self.posts.iter().collect(),
            Some(query) => self
                .posts
                .iter()
                .filter(|post| {
                    contains_ignore_case(&post.title, query)
                        || contains_ignore_case(&post.body, query)
                })
                .collect(),
        }
    }

    /// Lists every comment in insertion order. No filter is supported.
    pub fn comments(&self) -> Vec<&Comment> {
        self.comments.iter().collect()
    }
}
