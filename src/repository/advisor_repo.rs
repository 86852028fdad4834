use crate::models::{Advisor, AdvisorPayload};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AdvisorRepository {
    pool: PgPool,
}

impl AdvisorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Advisor>, sqlx::Error> {
        sqlx::query_as::<_, Advisor>(
            "SELECT id, nombre, ciudad, whatsapp FROM asesoras ORDER BY nombre ASC"
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(&self, advisor: &AdvisorPayload) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "INSERT INTO asesoras (nombre, ciudad, whatsapp) VALUES ($1, $2, $3) RETURNING id"
        )
        .bind(&advisor.nombre)
        .bind(&advisor.ciudad)
        .bind(&advisor.whatsapp)
        .fetch_one(&self.pool)
        .await
    }

    /// Returns the number of rows touched; an unknown id touches none.
    pub async fn update(&self, advisor: &AdvisorPayload) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE asesoras SET nombre = $1, ciudad = $2, whatsapp = $3 WHERE id = $4"
        )
        .bind(&advisor.nombre)
        .bind(&advisor.ciudad)
        .bind(&advisor.whatsapp)
        .bind(advisor.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: Option<i32>) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM asesoras WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
