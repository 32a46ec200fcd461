use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::{GraphQLBatchRequest, GraphQLRequest};

use crate::server::graphql::{GraphQLContext, Schema};

/// GraphQL POST endpoint
pub async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    let response = request.execute(&schema, &context).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}

/// GraphQL batch POST endpoint
pub async fn graphql_batch_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(batch): Json<GraphQLBatchRequest>,
) -> Response {
    let response = batch.execute(&schema, &context).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}

/// GraphiQL explorer, served only in debug builds.
pub async fn graphql_playground() -> Html<String> {
    Html(juniper::http::graphiql::graphiql_source("/graphql", None))
}
