use juniper::{EmptySubscription, RootNode};
use uuid::Uuid;

use crate::common::{PaginationArgs, PostId};
use crate::domains::posts::actions as post_actions;
use crate::domains::posts::data::{CommentData, PostConnection, PostData};
use crate::domains::posts::models::PostChanges;
use crate::domains::users::actions as user_actions;
use crate::domains::users::actions::RegisterInput;
use crate::domains::users::data::{UserConnection, UserData};
use crate::error::ApiError;
use crate::server::graphql::context::GraphQLContext;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// All users, paginated. Requires authentication.
    async fn users(
        ctx: &GraphQLContext,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<UserConnection, ApiError> {
        let args = PaginationArgs {
            first,
            after,
            last,
            before,
        }
        .validate()?;
        Ok(user_actions::list_users(&ctx.actor, &args, &ctx.deps).await?)
    }

    /// The currently authenticated user.
    async fn me(ctx: &GraphQLContext) -> Result<UserData, ApiError> {
        Ok(user_actions::current_user(&ctx.actor, &ctx.deps).await?.into())
    }

    /// All posts, paginated. Public.
    async fn posts(
        ctx: &GraphQLContext,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<PostConnection, ApiError> {
        let args = PaginationArgs {
            first,
            after,
            last,
            before,
        }
        .validate()?;
        Ok(post_actions::list_posts(&args, &ctx.deps).await?)
    }

    /// A single post by id. Public.
    async fn post(ctx: &GraphQLContext, id: Uuid) -> Result<PostData, ApiError> {
        Ok(post_actions::get_post(PostId::from_uuid(id), &ctx.deps).await?.into())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Creates a user account.
    async fn register(
        ctx: &GraphQLContext,
        first_name: Option<String>,
        last_name: Option<String>,
        email: String,
        password: String,
    ) -> Result<UserData, ApiError> {
        let user = user_actions::register(
            RegisterInput {
                first_name,
                last_name,
                email,
                password,
            },
            &ctx.deps,
        )
        .await?;
        Ok(user.into())
    }

    /// Verifies credentials and returns a session token.
    async fn login(
        ctx: &GraphQLContext,
        email: String,
        password: String,
    ) -> Result<String, ApiError> {
        Ok(user_actions::login(&email, &password, &ctx.deps).await?)
    }

    /// Creates a post owned by the authenticated user.
    async fn create_post(
        ctx: &GraphQLContext,
        title: String,
        post: String,
        tags: Option<Vec<String>>,
    ) -> Result<PostData, ApiError> {
        let created = post_actions::create_post(
            &ctx.actor,
            title,
            post,
            tags.unwrap_or_default(),
            &ctx.deps,
        )
        .await?;
        Ok(created.into())
    }

    /// Partially updates a post; omitted fields are left unchanged.
    async fn update_post(
        ctx: &GraphQLContext,
        id: Uuid,
        title: Option<String>,
        post: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<PostData, ApiError> {
        let updated = post_actions::update_post(
            &ctx.actor,
            PostId::from_uuid(id),
            PostChanges {
                title,
                body: post,
                tags,
            },
            &ctx.deps,
        )
        .await?;
        Ok(updated.into())
    }

    /// Deletes a post owned by the authenticated user.
    async fn delete_post(ctx: &GraphQLContext, id: Uuid) -> Result<String, ApiError> {
        post_actions::delete_post(&ctx.actor, PostId::from_uuid(id), &ctx.deps).await?;
        Ok("Post deleted successfully".to_string())
    }

    /// Adds a comment to the post with the given id.
    async fn create_comment(
        ctx: &GraphQLContext,
        id: Uuid,
        comment: String,
    ) -> Result<CommentData, ApiError> {
        let created =
            post_actions::create_comment(&ctx.actor, PostId::from_uuid(id), comment, &ctx.deps)
                .await?;
        Ok(created.into())
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
