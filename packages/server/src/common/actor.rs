//! Request-scoped identity.

use crate::common::UserId;

/// The identity attached to an incoming request after token verification.
///
/// An `Actor` is either authenticated (carrying the token's subject) or
/// anonymous. It is attached by the identity middleware and threaded into
/// every resolver via the GraphQL context; resolvers never read headers
/// themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Actor {
    user_id: Option<UserId>,
}

impl Actor {
    /// Actor for a request carrying a valid session token.
    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Actor for an unauthenticated request.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The authenticated subject, if any.
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}
