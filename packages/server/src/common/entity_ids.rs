//! Entity ID aliases.
//!
//! Marker types are zero-sized and exist only to parameterize `Id<T>`.

use super::id::Id;

pub struct UserEntity;
pub struct PostEntity;
pub struct CommentEntity;

pub type UserId = Id<UserEntity>;
pub type PostId = Id<PostEntity>;
pub type CommentId = Id<CommentEntity>;
