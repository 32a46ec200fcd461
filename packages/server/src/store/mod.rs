// Document store collaborator traits
//
// These are INFRASTRUCTURE traits only - no business logic. The store offers
// per-record CRUD with single-record atomicity; authorization and
// consistency rules live in the domain actions that call these.
//
// Naming convention: Base* for trait names (e.g. BaseUserStore)

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::common::{CommentId, PostId, UserId, ValidatedPaginationArgs};
use crate::domains::posts::models::{Comment, Post};
use crate::domains::users::models::User;

pub use memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint was violated; the payload names the field.
    #[error("{0} already exists")]
    UniqueViolation(&'static str),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait BaseUserStore: Send + Sync {
    /// Insert a new user. Fails with `UniqueViolation("email")` when the
    /// email is already registered.
    async fn insert(&self, user: User) -> StoreResult<User>;

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Page of users in id (creation) order, plus whether more exist in the
    /// direction of travel.
    async fn find_paginated(
        &self,
        args: &ValidatedPaginationArgs,
    ) -> StoreResult<(Vec<User>, bool)>;

    async fn count(&self) -> StoreResult<i64>;
}

#[async_trait]
pub trait BasePostStore: Send + Sync {
    async fn insert(&self, post: Post) -> StoreResult<Post>;

    async fn find_by_id(&self, id: PostId) -> StoreResult<Option<Post>>;

    /// Replace the stored record wholesale (last write wins).
    async fn save(&self, post: Post) -> StoreResult<Post>;

    /// Remove the record outright. Returns whether it existed.
    async fn delete(&self, id: PostId) -> StoreResult<bool>;

    async fn find_paginated(
        &self,
        args: &ValidatedPaginationArgs,
    ) -> StoreResult<(Vec<Post>, bool)>;

    async fn count(&self) -> StoreResult<i64>;
}

#[async_trait]
pub trait BaseCommentStore: Send + Sync {
    async fn insert(&self, comment: Comment) -> StoreResult<Comment>;

    async fn find_by_id(&self, id: CommentId) -> StoreResult<Option<Comment>>;

    /// Fetch the given comments, in the order of `ids`. Missing ids are
    /// skipped rather than erroring.
    async fn find_many(&self, ids: &[CommentId]) -> StoreResult<Vec<Comment>>;

    async fn count(&self) -> StoreResult<i64>;
}
