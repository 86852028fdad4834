use crate::models::listing::{STATUS_ACTIVE, STATUS_SCHEDULED};
use crate::models::{ListingPayload, ListingView};
use sqlx::PgPool;

const SELECT_WITH_ADVISOR: &str = "
    SELECT
        a.id, a.nombre, a.foto_url, a.tipo, a.estado, a.video_reel, a.asesora_id,
        to_char(a.fecha_inicio, 'DD/MM/YYYY') AS fecha_inicio,
        to_char(a.fecha_inicio, 'YYYY-MM-DD') AS fecha_inicio_iso,
        aser.nombre AS asesora_nombre, aser.ciudad, aser.whatsapp
    FROM anuncios a
    JOIN asesoras aser ON a.asesora_id = aser.id
    ORDER BY
        CASE a.estado WHEN $1 THEN 1 WHEN $2 THEN 2 ELSE 3 END,
        a.fecha_inicio DESC";

#[derive(Clone)]
pub struct ListingRepository {
    pool: PgPool,
}

impl ListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active listings first, then scheduled, then the rest; newest start
    /// date first within each group.
    pub async fn find_all_with_advisor(&self) -> Result<Vec<ListingView>, sqlx::Error> {
        sqlx::query_as::<_, ListingView>(SELECT_WITH_ADVISOR)
            .bind(STATUS_ACTIVE)
            .bind(STATUS_SCHEDULED)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create(&self, listing: &ListingPayload) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "INSERT INTO anuncios (nombre, foto_url, tipo, asesora_id, estado, fecha_inicio, video_reel)
             VALUES ($1, $2, $3, $4, $5, $6::date, $7)
             RETURNING id"
        )
        .bind(&listing.nombre)
        .bind(&listing.foto_url)
        .bind(&listing.tipo)
        .bind(listing.asesora_id)
        .bind(&listing.estado)
        .bind(&listing.fecha_inicio)
        .bind(&listing.video_reel)
        .fetch_one(&self.pool)
        .await
    }

    /// Returns the number of rows touched; an unknown id touches none.
    pub async fn update(&self, listing: &ListingPayload) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE anuncios
             SET nombre = $1, foto_url = $2, tipo = $3, asesora_id = $4, estado = $5,
                 fecha_inicio = $6::date, video_reel = $7
             WHERE id = $8"
        )
        .bind(&listing.nombre)
        .bind(&listing.foto_url)
        .bind(&listing.tipo)
        .bind(listing.asesora_id)
        .bind(&listing.estado)
        .bind(&listing.fecha_inicio)
        .bind(&listing.video_reel)
        .bind(listing.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: Option<i32>) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM anuncios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
