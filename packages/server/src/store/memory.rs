//! Bundled in-memory document store.
//!
//! Each collection is a `BTreeMap` keyed by the raw UUID, so iteration order
//! is id order (v7 ids sort chronologically) and cursor pagination works the
//! same way a real store's id index would. The mutex is held only for the
//! duration of one operation, which mirrors the single-record atomicity the
//! external store contract guarantees.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::common::{CommentId, PaginationDirection, PostId, UserId, ValidatedPaginationArgs};
use crate::domains::posts::models::{Comment, Post};
use crate::domains::users::models::User;

use super::{BaseCommentStore, BasePostStore, BaseUserStore, StoreError, StoreResult};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<BTreeMap<Uuid, User>>,
    posts: Mutex<BTreeMap<Uuid, Post>>,
    comments: Mutex<BTreeMap<Uuid, Comment>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Cursor-paginate a collection in ascending id order.
fn paginate<T: Clone>(map: &BTreeMap<Uuid, T>, args: &ValidatedPaginationArgs) -> (Vec<T>, bool) {
    let limit = args.limit as usize;
    match args.direction {
        PaginationDirection::Forward => {
            let mut page: Vec<T> = map
                .iter()
                .filter(|(id, _)| args.cursor.is_none_or(|c| **id > c))
                .take(limit + 1)
                .map(|(_, v)| v.clone())
                .collect();
            let has_more = page.len() > limit;
            page.truncate(limit);
            (page, has_more)
        }
        PaginationDirection::Backward => {
            let before_cursor: Vec<T> = map
                .iter()
                .filter(|(id, _)| args.cursor.is_none_or(|c| **id < c))
                .map(|(_, v)| v.clone())
                .collect();
            let has_more = before_cursor.len() > limit;
            let skip = before_cursor.len().saturating_sub(limit);
            (before_cursor.into_iter().skip(skip).collect(), has_more)
        }
    }
}

#[async_trait]
impl BaseUserStore for MemoryStore {
    async fn insert(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation("email"));
        }
        users.insert(user.id.into_uuid(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_paginated(
        &self,
        args: &ValidatedPaginationArgs,
    ) -> StoreResult<(Vec<User>, bool)> {
        Ok(paginate(&self.users.lock().unwrap(), args))
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(self.users.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl BasePostStore for MemoryStore {
    async fn insert(&self, post: Post) -> StoreResult<Post> {
        self.posts
            .lock()
            .unwrap()
            .insert(post.id.into_uuid(), post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> StoreResult<Option<Post>> {
        Ok(self.posts.lock().unwrap().get(id.as_uuid()).cloned())
    }

    async fn save(&self, post: Post) -> StoreResult<Post> {
        self.posts
            .lock()
            .unwrap()
            .insert(post.id.into_uuid(), post.clone());
        Ok(post)
    }

    async fn delete(&self, id: PostId) -> StoreResult<bool> {
        Ok(self.posts.lock().unwrap().remove(id.as_uuid()).is_some())
    }

    async fn find_paginated(
        &self,
        args: &ValidatedPaginationArgs,
    ) -> StoreResult<(Vec<Post>, bool)> {
        Ok(paginate(&self.posts.lock().unwrap(), args))
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(self.posts.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl BaseCommentStore for MemoryStore {
    async fn insert(&self, comment: Comment) -> StoreResult<Comment> {
        self.comments
            .lock()
            .unwrap()
            .insert(comment.id.into_uuid(), comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: CommentId) -> StoreResult<Option<Comment>> {
        Ok(self.comments.lock().unwrap().get(id.as_uuid()).cloned())
    }

    async fn find_many(&self, ids: &[CommentId]) -> StoreResult<Vec<Comment>> {
        let comments = self.comments.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| comments.get(id.as_uuid()).cloned())
            .collect())
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(self.comments.lock().unwrap().len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PaginationArgs;
    use chrono::Utc;

    fn user(email: &str) -> User {
        User {
            id: UserId::new(),
            first_name: None,
            last_name: None,
            email: email.to_string(),
            password_digest: "digest".to_string(),
            created_at: Utc::now(),
        }
    }

    fn post(author: UserId, title: &str) -> Post {
        Post::new(author, title.to_string(), "body".to_string(), vec![])
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        BaseUserStore::insert(&store, user("a@x.com")).await.unwrap();

        let err = BaseUserStore::insert(&store, user("a@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation("email")));
    }

    #[tokio::test]
    async fn delete_reports_whether_record_existed() {
        let store = MemoryStore::new();
        let p = BasePostStore::insert(&store, post(UserId::new(), "one"))
            .await
            .unwrap();

        assert!(store.delete(p.id).await.unwrap());
        assert!(!store.delete(p.id).await.unwrap());
        assert!(BasePostStore::find_by_id(&store, p.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn forward_pagination_walks_in_creation_order() {
        let store = MemoryStore::new();
        let author = UserId::new();
        let mut titles = Vec::new();
        for i in 0..5 {
            let p = post(author, &format!("post-{i}"));
            titles.push(p.title.clone());
            BasePostStore::insert(&store, p).await.unwrap();
        }

        let args = PaginationArgs {
            first: Some(2),
            ..Default::default()
        }
        .validate()
        .unwrap();
        let (page, has_more) = BasePostStore::find_paginated(&store, &args).await.unwrap();
        assert_eq!(
            page.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
            &titles[..2]
        );
        assert!(has_more);

        // Resume from the last cursor
        let args = PaginationArgs {
            first: Some(10),
            after: Some(crate::common::Cursor::encode_uuid(
                page.last().unwrap().id.into_uuid(),
            )),
            ..Default::default()
        }
        .validate()
        .unwrap();
        let (rest, has_more) = BasePostStore::find_paginated(&store, &args).await.unwrap();
        assert_eq!(
            rest.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
            &titles[2..]
        );
        assert!(!has_more);
    }

    #[tokio::test]
    async fn backward_pagination_returns_newest_page() {
        let store = MemoryStore::new();
        let author = UserId::new();
        for i in 0..4 {
            BasePostStore::insert(&store, post(author, &format!("post-{i}")))
                .await
                .unwrap();
        }

        let args = PaginationArgs {
            last: Some(2),
            ..Default::default()
        }
        .validate()
        .unwrap();
        let (page, has_more) = BasePostStore::find_paginated(&store, &args).await.unwrap();
        assert_eq!(
            page.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
            vec!["post-2", "post-3"]
        );
        assert!(has_more);
    }

    #[tokio::test]
    async fn find_many_preserves_requested_order_and_skips_missing() {
        let store = MemoryStore::new();
        let commenter = UserId::new();
        let c1 = BaseCommentStore::insert(&store, Comment::new(commenter, "first".to_string()))
            .await
            .unwrap();
        let c2 = BaseCommentStore::insert(&store, Comment::new(commenter, "second".to_string()))
            .await
            .unwrap();

        let found = store
            .find_many(&[c2.id, CommentId::new(), c1.id])
            .await
            .unwrap();
        assert_eq!(
            found.iter().map(|c| c.body.as_str()).collect::<Vec<_>>(),
            vec!["second", "first"]
        );
    }
}
