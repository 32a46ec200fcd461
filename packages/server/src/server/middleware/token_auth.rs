use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::common::UserId;
use crate::domains::auth::TokenService;

/// Authenticated identity extracted from a session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: UserId,
}

/// Attaches an `AuthUser` to the request when a valid session token is
/// present.
///
/// A missing header, a malformed value, or a token that fails verification
/// downgrades the request to anonymous rather than rejecting it; each
/// operation then enforces its own authentication requirement. The token
/// subject is not re-checked against the user store here.
pub async fn token_auth_middleware(
    tokens: Arc<TokenService>,
    mut request: Request,
    next: Next,
) -> Response {
    match extract_auth_user(&request, &tokens) {
        Some(user) => {
            debug!(user_id = %user.user_id, "Authenticated request");
            request.extensions_mut().insert(user);
        }
        None => {
            debug!("No valid session token; continuing anonymously");
        }
    }
    next.run(request).await
}

fn extract_auth_user(request: &Request, tokens: &TokenService) -> Option<AuthUser> {
    let header = request.headers().get(axum::http::header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    // The header carries the raw token; a `Bearer ` prefix is also accepted.
    let token = value.strip_prefix("Bearer ").unwrap_or(value);
    let claims = tokens.verify(token).ok()?;
    Some(AuthUser {
        user_id: claims.subject(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn service() -> TokenService {
        TokenService::new("test_secret", "test_issuer".to_string())
    }

    fn request_with_auth(value: &str) -> Request {
        axum::http::Request::builder()
            .header(axum::http::header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn raw_token_is_accepted() {
        let tokens = service();
        let user_id = UserId::new();
        let token = tokens.issue(user_id).unwrap();

        let user = extract_auth_user(&request_with_auth(&token), &tokens).unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[test]
    fn bearer_prefixed_token_is_accepted() {
        let tokens = service();
        let user_id = UserId::new();
        let token = tokens.issue(user_id).unwrap();

        let user =
            extract_auth_user(&request_with_auth(&format!("Bearer {token}")), &tokens).unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[test]
    fn missing_header_yields_no_identity() {
        let tokens = service();
        let request = axum::http::Request::builder().body(Body::empty()).unwrap();
        assert!(extract_auth_user(&request, &tokens).is_none());
    }

    #[test]
    fn garbage_token_yields_no_identity() {
        let tokens = service();
        assert!(extract_auth_user(&request_with_auth("not-a-token"), &tokens).is_none());
    }

    #[test]
    fn token_signed_with_another_secret_yields_no_identity() {
        let other = TokenService::new("other_secret", "test_issuer".to_string());
        let token = other.issue(UserId::new()).unwrap();

        let tokens = service();
        assert!(extract_auth_user(&request_with_auth(&token), &tokens).is_none());
    }
}
