use std::sync::Arc;

use crate::common::Actor;
use crate::deps::Deps;

/// GraphQL request context
///
/// Shared dependencies plus the per-request actor resolved by the identity
/// middleware. Rebuilt for every request; the deps are shared.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: Arc<Deps>,
    pub actor: Actor,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: Arc<Deps>, actor: Actor) -> Self {
        Self { deps, actor }
    }
}
