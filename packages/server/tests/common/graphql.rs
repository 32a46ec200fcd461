//! GraphQL client for integration testing.
//!
//! Executes queries directly against the schema, skipping HTTP.

use std::sync::Arc;

use juniper::Variables;
use serde_json::Value;

use blog_core::common::{Actor, UserId};
use blog_core::deps::Deps;
use blog_core::server::graphql::{create_schema, GraphQLContext, Schema};

/// GraphQL client for executing queries and mutations in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<String>,
    /// The `code` extension of each error, in the same order as `errors`.
    pub error_codes: Vec<Option<String>>,
}

impl GraphQLResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// Gets a value at the given dotted JSON path, e.g. `"post.title"` or
    /// `"posts.edges.0.cursor"`.
    pub fn get(&self, path: &str) -> Value {
        let data = self.data.as_ref().expect("No data returned");
        let mut current = data;
        for key in path.split('.') {
            current = match key.parse::<usize>() {
                Ok(index) => &current[index],
                Err(_) => &current[key],
            };
        }
        current.clone()
    }
}

impl GraphQLClient {
    /// Client acting as an unauthenticated visitor.
    pub fn anonymous(deps: Arc<Deps>) -> Self {
        Self::with_actor(deps, Actor::anonymous())
    }

    /// Client acting as the given user.
    pub fn authenticated(deps: Arc<Deps>, user_id: UserId) -> Self {
        Self::with_actor(deps, Actor::authenticated(user_id))
    }

    pub fn with_actor(deps: Arc<Deps>, actor: Actor) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::new(deps, actor),
        }
    }

    /// Execute a GraphQL query/mutation.
    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    /// Execute a GraphQL query/mutation with variables.
    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        let (result, errors) =
            juniper::execute(query, None, &self.schema, &variables, &self.context)
                .await
                .expect("GraphQL execution failed");

        let data = Some(serde_json::to_value(&result).expect("Failed to serialize GraphQL result"));

        let error_messages: Vec<String> = errors
            .iter()
            .map(|e| e.error().message().to_string())
            .collect();

        let error_codes: Vec<Option<String>> = errors
            .iter()
            .map(|e| {
                serde_json::to_value(e.error().extensions())
                    .ok()
                    .and_then(|v| v.get("code")?.as_str().map(String::from))
            })
            .collect();

        GraphQLResult {
            data,
            errors: error_messages,
            error_codes,
        }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }
}
