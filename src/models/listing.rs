use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::deserialize_id;

/// Listings in this state sort first.
pub const STATUS_ACTIVE: &str = "Activo";
/// Listings in this state sort right after active ones.
pub const STATUS_SCHEDULED: &str = "Programado";

/// A listing joined with the advisor it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ListingView {
    pub id: i32,
    pub nombre: String,
    pub foto_url: Option<String>,
    pub tipo: Option<String>,
    pub estado: Option<String>,
    pub video_reel: Option<String>,
    pub asesora_id: i32,
    /// `DD/MM/YYYY`, as shown in the admin table.
    pub fecha_inicio: Option<String>,
    /// `YYYY-MM-DD`, suitable for date inputs.
    pub fecha_inicio_iso: Option<String>,
    pub asesora_nombre: String,
    pub ciudad: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingPayload {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<i32>,
    pub nombre: Option<String>,
    pub foto_url: Option<String>,
    pub tipo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub asesora_id: Option<i32>,
    pub estado: Option<String>,
    /// Passed through as text; the store parses it as a date.
    pub fecha_inicio: Option<String>,
    pub video_reel: Option<String>,
}
