// Common types and utilities shared across the application

pub mod actor;
pub mod entity_ids;
pub mod id;
pub mod pagination;

pub use actor::Actor;
pub use entity_ids::*;
pub use id::Id;
pub use pagination::{
    build_page_info, Cursor, PageInfo, PaginationArgs, PaginationDirection,
    ValidatedPaginationArgs,
};
