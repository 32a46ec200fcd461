//! Resolver-level error taxonomy.
//!
//! Every failure a resolver can produce maps to one of these variants and is
//! surfaced as a GraphQL error entry (with a `code` extension) in an
//! otherwise successful HTTP response. Nothing here ever rejects the request
//! at the transport level or crashes the process.

use juniper::{graphql_value, FieldError, IntoFieldError, ScalarValue};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No authenticated actor where one is required.
    #[error("Authentication required")]
    Unauthorized,

    /// Authenticated, but not allowed to touch the target entity.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// A referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Login email/password mismatch. Deliberately does not say which.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Request payload or store constraint violation (e.g. duplicate email).
    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Stable machine-readable code, attached as a GraphQL error extension.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::PermissionDenied(_) => "PERMISSION_DENIED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::Validation(_) => "VALIDATION_FAILURE",
            ApiError::Internal(_) => "INTERNAL",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UniqueViolation(what) => {
                ApiError::Validation(format!("{what} already exists"))
            }
            StoreError::Backend(e) => ApiError::Internal(e),
        }
    }
}

// Resolvers return `Result<_, ApiError>` directly; juniper converts through
// this impl, so the `code` extension survives the `?` path. A plain
// `From<ApiError> for FieldError` would collide with juniper's blanket
// `From<T: Display>` impl and lose the extension besides.
impl<S: ScalarValue> IntoFieldError<S> for ApiError {
    fn into_field_error(self) -> FieldError<S> {
        let code = self.code();
        FieldError::new(self.to_string(), graphql_value!({ "code": code }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_and_permission_denied_are_distinguishable() {
        let unauth = ApiError::Unauthorized;
        let denied = ApiError::PermissionDenied("not the author".to_string());
        assert_ne!(unauth.code(), denied.code());
        assert_ne!(unauth.to_string(), denied.to_string());
    }

    #[test]
    fn duplicate_email_maps_to_validation() {
        let err = ApiError::from(StoreError::UniqueViolation("email"));
        assert_eq!(err.code(), "VALIDATION_FAILURE");
    }

    #[test]
    fn field_error_carries_the_code_extension() {
        let field_error: FieldError = ApiError::Unauthorized.into_field_error();
        assert_eq!(
            field_error.extensions(),
            &graphql_value!({ "code": "UNAUTHORIZED" }),
        );

        let field_error: FieldError =
            ApiError::PermissionDenied("not yours".to_string()).into_field_error();
        assert_eq!(
            field_error.extensions(),
            &graphql_value!({ "code": "PERMISSION_DENIED" }),
        );
    }
}
