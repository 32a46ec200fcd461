//! Relay-style cursor pagination.
//!
//! List queries (`users`, `posts`) take `first`/`after` or `last`/`before`
//! arguments instead of returning the whole collection. A cursor is the
//! base64url-encoded UUID of an item; since IDs are v7 UUIDs, cursor order
//! is creation order.

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use juniper::GraphQLObject;
use uuid::Uuid;

use crate::error::ApiError;

/// Default page size when neither `first` nor `last` is given.
const DEFAULT_PAGE_SIZE: i32 = 25;
/// Hard cap on page size.
const MAX_PAGE_SIZE: i32 = 100;

/// Opaque pagination cursor (base64url-encoded UUID).
#[derive(Debug, Clone)]
pub struct Cursor(Uuid);

impl Cursor {
    pub fn new(id: Uuid) -> Self {
        Cursor(id)
    }

    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0.as_bytes())
    }

    /// Encode a UUID directly to a cursor string.
    pub fn encode_uuid(id: Uuid) -> String {
        Cursor::new(id).encode()
    }

    pub fn decode(s: &str) -> Result<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(s)
            .context("Invalid cursor: not valid base64")?;
        let uuid = Uuid::from_slice(&bytes).context("Invalid cursor: not a valid UUID")?;
        Ok(Cursor(uuid))
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

/// Page information for cursor-based pagination.
#[derive(Debug, Clone, Default, GraphQLObject)]
#[graphql(description = "Information about pagination in a connection")]
pub struct PageInfo {
    /// When paginating forwards, are there more items?
    pub has_next_page: bool,
    /// When paginating backwards, are there more items?
    pub has_previous_page: bool,
    /// Cursor of the first edge in the page.
    pub start_cursor: Option<String>,
    /// Cursor of the last edge in the page.
    pub end_cursor: Option<String>,
}

/// Direction of pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationDirection {
    Forward,
    Backward,
}

/// Raw pagination arguments as they arrive from a GraphQL query.
///
/// Use either `first`/`after` (forward) or `last`/`before` (backward),
/// never both.
#[derive(Debug, Clone, Default)]
pub struct PaginationArgs {
    pub first: Option<i32>,
    pub after: Option<String>,
    pub last: Option<i32>,
    pub before: Option<String>,
}

impl PaginationArgs {
    /// Validate and normalize, decoding the cursor and applying defaults.
    pub fn validate(&self) -> Result<ValidatedPaginationArgs, ApiError> {
        if (self.first.is_some() || self.after.is_some())
            && (self.last.is_some() || self.before.is_some())
        {
            return Err(ApiError::Validation(
                "Cannot combine first/after with last/before".to_string(),
            ));
        }

        let direction = if self.last.is_some() || self.before.is_some() {
            PaginationDirection::Backward
        } else {
            PaginationDirection::Forward
        };

        let limit = self
            .first
            .or(self.last)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let cursor_str = match direction {
            PaginationDirection::Forward => self.after.as_ref(),
            PaginationDirection::Backward => self.before.as_ref(),
        };
        let cursor = cursor_str
            .map(|c| Cursor::decode(c))
            .transpose()
            .map_err(|_| ApiError::Validation("Invalid cursor".to_string()))?
            .map(Cursor::into_uuid);

        Ok(ValidatedPaginationArgs {
            limit,
            cursor,
            direction,
        })
    }
}

/// Normalized pagination arguments ready for a store query.
#[derive(Debug, Clone)]
pub struct ValidatedPaginationArgs {
    /// Page size (1..=100, default 25).
    pub limit: i32,
    /// Decoded cursor, if one was supplied.
    pub cursor: Option<Uuid>,
    pub direction: PaginationDirection,
}

/// Build `PageInfo` from a store page result.
///
/// `has_more` means there were items beyond the fetched page in the
/// direction of travel.
pub fn build_page_info(
    has_more: bool,
    args: &ValidatedPaginationArgs,
    start_cursor: Option<String>,
    end_cursor: Option<String>,
) -> PageInfo {
    match args.direction {
        PaginationDirection::Forward => PageInfo {
            has_next_page: has_more,
            has_previous_page: args.cursor.is_some(),
            start_cursor,
            end_cursor,
        },
        PaginationDirection::Backward => PageInfo {
            has_next_page: args.cursor.is_some(),
            has_previous_page: has_more,
            start_cursor,
            end_cursor,
        },
    }
}
