pub mod app;
pub mod graphql;
pub mod middleware;
pub mod routes;

pub use app::build_app;
