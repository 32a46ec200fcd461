use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::common::PageInfo;
use crate::domains::posts::models::{Comment, Post};
use crate::domains::users::data::UserData;
use crate::error::ApiError;
use crate::server::graphql::context::GraphQLContext;

/// GraphQL view of a post. Author and comments resolve lazily against the
/// stores so list queries stay cheap when those fields are not selected.
#[derive(Debug, Clone)]
pub struct PostData {
    post: Post,
}

impl From<Post> for PostData {
    fn from(post: Post) -> Self {
        Self { post }
    }
}

#[juniper::graphql_object(context = GraphQLContext, description = "A blog post")]
impl PostData {
    fn id(&self) -> Uuid {
        self.post.id.into_uuid()
    }

    fn title(&self) -> &str {
        &self.post.title
    }

    /// The body text of the post.
    fn post(&self) -> &str {
        &self.post.body
    }

    fn tags(&self) -> &[String] {
        &self.post.tags
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.post.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.post.updated_at
    }

    /// The user who wrote the post, if their account still exists.
    async fn author(&self, ctx: &GraphQLContext) -> Result<Option<UserData>, ApiError> {
        let user = ctx
            .deps
            .users
            .find_by_id(self.post.author)
            .await?;
        Ok(user.map(UserData::from))
    }

    /// Comments on this post, oldest first.
    async fn comments(&self, ctx: &GraphQLContext) -> Result<Vec<CommentData>, ApiError> {
        let comments = ctx
            .deps
            .comments
            .find_many(&self.post.comment_ids)
            .await?;
        Ok(comments.into_iter().map(CommentData::from).collect())
    }
}

#[derive(Debug, Clone)]
pub struct CommentData {
    comment: Comment,
}

impl From<Comment> for CommentData {
    fn from(comment: Comment) -> Self {
        Self { comment }
    }
}

#[juniper::graphql_object(context = GraphQLContext, description = "A comment on a post")]
impl CommentData {
    fn id(&self) -> Uuid {
        self.comment.id.into_uuid()
    }

    /// The comment text.
    fn comment(&self) -> &str {
        &self.comment.body
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.comment.created_at
    }

    /// The user who left the comment, if their account still exists.
    async fn commenter(&self, ctx: &GraphQLContext) -> Result<Option<UserData>, ApiError> {
        let user = ctx
            .deps
            .users
            .find_by_id(self.comment.commenter)
            .await?;
        Ok(user.map(UserData::from))
    }
}

#[derive(Debug, Clone)]
pub struct PostEdge {
    pub node: PostData,
    pub cursor: String,
}

#[juniper::graphql_object(context = GraphQLContext, description = "A post within a paginated listing")]
impl PostEdge {
    fn node(&self) -> &PostData {
        &self.node
    }

    fn cursor(&self) -> &str {
        &self.cursor
    }
}

#[derive(Debug, Clone)]
pub struct PostConnection {
    pub edges: Vec<PostEdge>,
    pub page_info: PageInfo,
    pub total_count: i32,
}

#[juniper::graphql_object(context = GraphQLContext, description = "A page of posts")]
impl PostConnection {
    fn edges(&self) -> &[PostEdge] {
        &self.edges
    }

    fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    fn total_count(&self) -> i32 {
        self.total_count
    }
}
