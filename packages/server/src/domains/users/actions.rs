use chrono::Utc;
use tracing::info;

use crate::common::{build_page_info, Actor, Cursor, UserId, ValidatedPaginationArgs};
use crate::deps::Deps;
use crate::domains::auth::{password, rules};
use crate::domains::users::data::{UserConnection, UserData, UserEdge};
use crate::domains::users::models::User;
use crate::error::ApiError;

pub struct RegisterInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Creates a user account. The password is digested before anything is
/// persisted; the plaintext is dropped here.
pub async fn register(input: RegisterInput, deps: &Deps) -> Result<User, ApiError> {
    let email = input.email.trim().to_string();
    if email.is_empty() {
        return Err(ApiError::Validation("email must not be empty".into()));
    }
    if input.password.is_empty() {
        return Err(ApiError::Validation("password must not be empty".into()));
    }

    let digest = password::hash_password(&input.password)?;
    let user = deps
        .users
        .insert(User {
            id: UserId::new(),
            first_name: input.first_name,
            last_name: input.last_name,
            email,
            password_digest: digest,
            created_at: Utc::now(),
        })
        .await?;

    info!(user_id = %user.id, "Registered user");
    Ok(user)
}

/// Verifies credentials and returns a signed session token.
///
/// An unknown email and a wrong password both map to `InvalidCredentials`
/// so the response does not reveal which accounts exist.
pub async fn login(email: &str, password_plain: &str, deps: &Deps) -> Result<String, ApiError> {
    let user = deps
        .users
        .find_by_email(email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify_password(password_plain, &user.password_digest)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = deps.tokens.issue(user.id)?;
    info!(user_id = %user.id, "User logged in");
    Ok(token)
}

/// The authenticated actor's own record.
pub async fn current_user(actor: &Actor, deps: &Deps) -> Result<User, ApiError> {
    let user_id = rules::require_authenticated(actor)?;
    deps.users
        .find_by_id(user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))
}

/// Paginated listing of all users; requires an authenticated actor.
pub async fn list_users(
    actor: &Actor,
    args: &ValidatedPaginationArgs,
    deps: &Deps,
) -> Result<UserConnection, ApiError> {
    rules::require_authenticated(actor)?;

    let (users, has_more) = deps.users.find_paginated(args).await?;
    let total_count = i32::try_from(deps.users.count().await?).unwrap_or(i32::MAX);

    let edges: Vec<UserEdge> = users
        .into_iter()
        .map(|user| UserEdge {
            cursor: Cursor::encode_uuid(user.id.into_uuid()),
            node: user.into(),
        })
        .collect();

    let page_info = build_page_info(
        has_more,
        args,
        edges.first().map(|e| e.cursor.clone()),
        edges.last().map(|e| e.cursor.clone()),
    );

    Ok(UserConnection {
        edges,
        page_info,
        total_count,
    })
}
