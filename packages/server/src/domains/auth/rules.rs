//! Authorization rules.
//!
//! Pure decision functions over (actor, target, operation). Resolvers call
//! these before touching the store, so every denial happens in one place
//! and with one vocabulary:
//!
//! - `Unauthorized`: no authenticated actor where one is required.
//! - `PermissionDenied`: authenticated, but not the owner of the target.
//!
//! The two are distinct failure kinds on purpose; callers and clients can
//! tell "log in first" apart from "this isn't yours".
//!
//! Ownership comparison is exact typed-id equality. There is no loose or
//! cross-type comparison anywhere in the decision path.

use crate::common::{Actor, UserId};
use crate::domains::posts::models::Post;
use crate::error::ApiError;

/// Require an authenticated actor, returning its id.
///
/// Applies to: `users`, `me`, `createPost`, `updatePost`, `deletePost`,
/// `createComment`. Public reads (`posts`, `post`) and `register`/`login`
/// never call this.
pub fn require_authenticated(actor: &Actor) -> Result<UserId, ApiError> {
    actor.user_id().ok_or(ApiError::Unauthorized)
}

/// Require that `actor_id` owns `post`.
///
/// Applies to `updatePost` and `deletePost`. Commenting deliberately has no
/// ownership restriction.
pub fn require_post_owner(actor_id: UserId, post: &Post) -> Result<(), ApiError> {
    if actor_id == post.author {
        Ok(())
    } else {
        Err(ApiError::PermissionDenied(
            "only the author may modify this post".to_string(),
        ))
    }
}
