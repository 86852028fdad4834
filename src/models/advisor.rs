use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::deserialize_id;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Advisor {
    pub id: i32,
    pub nombre: String,
    pub ciudad: Option<String>,
    pub whatsapp: Option<String>,
}

/// Insert/update body for `asesoras`. Fields stay optional so that a missing
/// value reaches the store as NULL and fails on its constraints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisorPayload {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<i32>,
    pub nombre: Option<String>,
    pub ciudad: Option<String>,
    pub whatsapp: Option<String>,
}
