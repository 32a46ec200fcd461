pub mod password;
pub mod rules;
pub mod token;

pub use token::{Claims, TokenService};
