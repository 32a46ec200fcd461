//! Shared fixtures for integration tests.

pub mod graphql;

use std::sync::Arc;

use blog_core::deps::Deps;
use blog_core::domains::auth::TokenService;
use blog_core::domains::users::actions::{register, RegisterInput};
use blog_core::domains::users::models::User;

pub use graphql::{GraphQLClient, GraphQLResult};

/// Fresh in-memory dependencies for one test.
pub fn test_deps() -> Arc<Deps> {
    Arc::new(Deps::in_memory(TokenService::new(
        "test_secret",
        "test_issuer".to_string(),
    )))
}

/// Registers a user through the domain layer so tests can log in as them.
pub async fn register_user(deps: &Deps, email: &str, password: &str) -> User {
    register(
        RegisterInput {
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            email: email.to_string(),
            password: password.to_string(),
        },
        deps,
    )
    .await
    .expect("failed to register test user")
}
