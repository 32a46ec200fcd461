//! Application setup and router wiring.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::common::Actor;
use crate::deps::Deps;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{token_auth_middleware, AuthUser};
use crate::server::routes::{
    graphql_batch_handler, graphql_handler, graphql_playground, health_handler,
};

/// Builds the per-request GraphQL context from the identity the auth
/// middleware attached, or an anonymous actor when it attached none.
async fn create_graphql_context(
    Extension(deps): Extension<Arc<Deps>>,
    mut request: Request,
    next: Next,
) -> Response {
    let actor = match request.extensions().get::<AuthUser>() {
        Some(user) => Actor::authenticated(user.user_id),
        None => Actor::anonymous(),
    };

    request
        .extensions_mut()
        .insert(GraphQLContext::new(deps.clone(), actor));

    next.run(request).await
}

/// Builds the Axum application router.
pub fn build_app(deps: Arc<Deps>) -> Router {
    let schema = Arc::new(create_schema());
    let tokens = deps.tokens.clone();

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let mut router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphiQL only in debug builds
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(graphql_playground));
    }

    router
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(move |req, next| {
            token_auth_middleware(tokens.clone(), req, next)
        }))
        .layer(Extension(deps))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
