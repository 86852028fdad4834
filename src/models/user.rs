use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::deserialize_text;

/// Row from `usuarios`. `password` holds an Argon2 encoded hash.
#[derive(Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub rol: Option<String>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("rol", &self.rol)
            .finish_non_exhaustive()
    }
}

/// The user as returned to a client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub rol: Option<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            rol: user.rol,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Both fields, when present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.is_empty())?;
        Some((username, password))
    }
}
