use crate::models::User;
use sqlx::PgPool;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every row with this username, oldest first. Duplicates are not
    /// expected but are tolerated.
    pub async fn find_all_by_username(&self, username: &str) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, password, rol FROM usuarios WHERE username = $1 ORDER BY id"
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
    }
}
