pub mod advisor;
pub mod listing;
pub mod user;

pub use advisor::{Advisor, AdvisorPayload};
pub use listing::{ListingPayload, ListingView};
pub use user::{LoginRequest, User, UserSummary};

use serde::{Deserialize, Deserializer};

/// Body carrying only the row id, used by DELETE.
#[derive(Debug, Clone, Deserialize)]
pub struct IdPayload {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<i32>,
}

// Admin forms post ids either as JSON numbers or as numeric strings.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("Id out of range: {}", n))),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("Invalid id: {}", s))),
    }
}

// Login forms may send numeric PINs as JSON numbers; they are compared as text.
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        None => None,
        Some(TextOrNumber::Text(s)) => Some(s),
        Some(TextOrNumber::Number(n)) => Some(n.to_string()),
    })
}
