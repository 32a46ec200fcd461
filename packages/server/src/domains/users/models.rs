use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::UserId;

/// A registered user.
///
/// `email` is unique across the store. `password_digest` is the argon2id
/// PHC string; the plaintext password never leaves the register/login
/// actions. Users are never deleted by this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}
