use crate::model::{Comment, CommentId, Post, PostId, User, UserId};
use crate::seed;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Exclusive owner of the three record collections.
///
/// Records live in insertion-ordered vectors; identifier lookups go through
/// per-collection position indexes. The index is an optimization over the
/// linear scan, not a semantic change: iteration order stays insertion
/// order everywhere.
pub struct GraphStore {
    pub(crate) users: Vec<User>,
    pub(crate) posts: Vec<Post>,
    pub(crate) comments: Vec<Comment>,
    pub(crate) user_index: FxHashMap<UserId, usize>,
    pub(crate) post_index: FxHashMap<PostId, usize>,
    pub(crate) comment_index: FxHashMap<CommentId, usize>,
}

impl GraphStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            posts: Vec::new(),
            comments: Vec::new(),
            user_index: FxHashMap::default(),
            post_index: FxHashMap::default(),
            comment_index: FxHashMap::default(),
        }
    }

    /// Creates a store preloaded with the demo dataset.
    pub fn with_seed_data() -> Self {
        let mut store = Self::new();
        for user in seed::users() {
            store.insert_user(user);
        }
        for post in seed::posts() {
            store.insert_post(post);
        }
        for comment in seed::comments() {
            store.insert_comment(comment);
        }
        debug!(
            users = store.users.len(),
            posts = store.posts.len(),
            comments = store.comments.len(),
            "Seeded store"
        );
        store
    }

    /// Looks up a user by identifier.
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.user_index.get(id).map(|&pos| &self.users[pos])
    }

    /// Looks up a post by identifier.
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.post_index.get(id).map(|&pos| &self.posts[pos])
    }

    /// Looks up a comment by identifier.
    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comment_index.get(id).map(|&pos| &self.comments[pos])
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of stored posts.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Number of stored comments.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub(crate) fn insert_user(&mut self, user: User) -> &User {
        let pos = self.users.len();
        self.user_index.insert(user.id.clone(), pos);
        self.users.push(user);
        &self.users[pos]
    }

    pub(crate) fn insert_post(&mut self, post: Post) -> &Post {
        let pos = self.posts.len();
        self.post_index.insert(post.id.clone(), pos);
        self.posts.push(post);
        &self.posts[pos]
    }

    pub(crate) fn insert_comment(&mut self, comment: Comment) -> &Comment {
        let pos = self.comments.len();
        self.comment_index.insert(comment.id.clone(), pos);
        self.comments.push(comment);
        &self.comments[pos]
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
