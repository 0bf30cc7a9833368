//! Demo dataset preloaded by [`GraphStore::with_seed_data`].
//!
//! Fixed short identifiers coexist with generated UUIDs; a v4 UUID never
//! collides with them.
//!
//! [`GraphStore::with_seed_data`]: crate::GraphStore::with_seed_data

use crate::model::{Comment, Post, User};

/// The three demo users.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "Jeff".into(),
            email: "jeff@example.com".into(),
            age: None,
        },
        User {
            id: "2".into(),
            name: "Sarah".into(),
            email: "sarah@example.com".into(),
            age: Some(22),
        },
        User {
            id: "3".into(),
            name: "Lenny".into(),
            email: "lenny@example.com".into(),
            age: Some(25),
        },
    ]
}

/// The three demo posts; authors reference [`users`].
pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".into(),
            title: "Post Number 1".into(),
            body: "This is the first post.".into(),
            published: true,
            author: "1".into(),
        },
        Post {
            id: "2".into(),
            title: "Post Number 2".into(),
            body: "This is the second post.".into(),
            published: true,
            author: "1".into(),
        },
        Post {
            id: "3".into(),
            title: "Post Number 3".into(),
            body: "This is the third post.".into(),
            published: true,
            author: "2".into(),
        },
    ]
}

/// The four demo comments; references resolve against [`users`] and
/// [`posts`].
pub fn comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "101".into(),
            text: "First comment".into(),
            author: "3".into(),
            post: "1".into(),
        },
        Comment {
            id: "102".into(),
            text: "Second comment".into(),
            author: "3".into(),
            post: "2".into(),
        },
        Comment {
            id: "103".into(),
            text: "Third comment".into(),
            author: "2".into(),
            post: "2".into(),
        },
        Comment {
            id: "104".into(),
            text: "Fourth comment".into(),
            author: "1".into(),
            post: "3".into(),
        },
    ]
}
