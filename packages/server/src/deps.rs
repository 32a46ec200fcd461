//! Shared dependency container.
//!
//! All external collaborators sit behind traits so actions can be exercised
//! against the in-memory store in tests. Constructed once at startup and
//! cloned into every request context.

use std::sync::Arc;

use crate::domains::auth::TokenService;
use crate::store::{BaseCommentStore, BasePostStore, BaseUserStore, MemoryStore};

#[derive(Clone)]
pub struct Deps {
    pub users: Arc<dyn BaseUserStore>,
    pub posts: Arc<dyn BasePostStore>,
    pub comments: Arc<dyn BaseCommentStore>,
    pub tokens: Arc<TokenService>,
}

impl Deps {
    pub fn new(
        users: Arc<dyn BaseUserStore>,
        posts: Arc<dyn BasePostStore>,
        comments: Arc<dyn BaseCommentStore>,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            posts,
            comments,
            tokens: Arc::new(tokens),
        }
    }

    /// Wire all three collections to one shared in-memory store.
    pub fn in_memory(tokens: TokenService) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            posts: store.clone(),
            comments: store,
            tokens: Arc::new(tokens),
        }
    }
}
