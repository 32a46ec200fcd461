use tracing::info;

use crate::common::{build_page_info, Actor, Cursor, PostId, ValidatedPaginationArgs};
use crate::deps::Deps;
use crate::domains::auth::rules;
use crate::domains::posts::data::{PostConnection, PostEdge};
use crate::domains::posts::models::{Comment, Post, PostChanges};
use crate::error::ApiError;

/// Creates a post owned by the authenticated actor.
pub async fn create_post(
    actor: &Actor,
    title: String,
    body: String,
    tags: Vec<String>,
    deps: &Deps,
) -> Result<Post, ApiError> {
    let author = rules::require_authenticated(actor)?;

    if title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".into()));
    }

    let post = deps.posts.insert(Post::new(author, title, body, tags)).await?;
    info!(post_id = %post.id, author = %post.author, "Created post");
    Ok(post)
}

/// Applies a partial update to a post the actor owns.
///
/// Checks run in order: authentication, existence, ownership. An anonymous
/// actor is told nothing about whether the post exists.
pub async fn update_post(
    actor: &Actor,
    id: PostId,
    changes: PostChanges,
    deps: &Deps,
) -> Result<Post, ApiError> {
    let actor_id = rules::require_authenticated(actor)?;

    if changes.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(ApiError::Validation("title must not be empty".into()));
    }

    let mut post = deps
        .posts
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;
    rules::require_post_owner(actor_id, &post)?;

    post.apply_changes(changes);
    let post = deps.posts.save(post).await?;
    info!(post_id = %post.id, "Updated post");
    Ok(post)
}

/// Deletes a post the actor owns. Comments are left in place; they become
/// unreachable once the post referencing them is gone.
pub async fn delete_post(actor: &Actor, id: PostId, deps: &Deps) -> Result<(), ApiError> {
    let actor_id = rules::require_authenticated(actor)?;

    let post = deps
        .posts
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;
    rules::require_post_owner(actor_id, &post)?;

    deps.posts.delete(id).await?;
    info!(post_id = %id, "Deleted post");
    Ok(())
}

/// Attaches a comment to an existing post. Any authenticated user may
/// comment; ownership is not required.
pub async fn create_comment(
    actor: &Actor,
    post_id: PostId,
    body: String,
    deps: &Deps,
) -> Result<Comment, ApiError> {
    let commenter = rules::require_authenticated(actor)?;

    if body.trim().is_empty() {
        return Err(ApiError::Validation("comment must not be empty".into()));
    }

    let mut post = deps
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    let comment = deps.comments.insert(Comment::new(commenter, body)).await?;
    post.comment_ids.push(comment.id);
    deps.posts.save(post).await?;

    info!(comment_id = %comment.id, post_id = %post_id, "Created comment");
    Ok(comment)
}

/// Fetches a single post; public.
pub async fn get_post(id: PostId, deps: &Deps) -> Result<Post, ApiError> {
    deps.posts
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Post"))
}

/// Paginated listing of all posts; public.
pub async fn list_posts(
    args: &ValidatedPaginationArgs,
    deps: &Deps,
) -> Result<PostConnection, ApiError> {
    let (posts, has_more) = deps.posts.find_paginated(args).await?;
    let total_count = i32::try_from(deps.posts.count().await?).unwrap_or(i32::MAX);

    let edges: Vec<PostEdge> = posts
        .into_iter()
        .map(|post| PostEdge {
            cursor: Cursor::encode_uuid(post.id.into_uuid()),
            node: post.into(),
        })
        .collect();

    let page_info = build_page_info(
        has_more,
        args,
        edges.first().map(|e| e.cursor.clone()),
        edges.last().map(|e| e.cursor.clone()),
    );

    Ok(PostConnection {
        edges,
        page_info,
        total_count,
    })
}
