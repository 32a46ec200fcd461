// Blog backend - API core
//
// A GraphQL API for user registration/authentication and CRUD on posts and
// comments. Domain logic lives under domains/, persistence behind the store
// traits, HTTP plumbing under server/.

pub mod common;
pub mod config;
pub mod deps;
pub mod domains;
pub mod error;
pub mod server;
pub mod store;

pub use config::*;
