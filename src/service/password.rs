use crate::constants::API_NAME;
use std::sync::OnceLock;
use tokio::task;

const SALT_LEN: usize = 16;

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Produces an Argon2 encoded hash with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::Error> {
    let salt: [u8; SALT_LEN] = rand::random();
    argon2::hash_encoded(password.as_bytes(), &salt, &argon2::Config::default())
}

/// Checks `password` against an encoded hash on the blocking pool.
///
/// A stored value that cannot be decoded as an Argon2 hash (for instance a
/// leftover plaintext password) never matches.
pub async fn verify_password(encoded: &str, password: &str) -> anyhow::Result<bool> {
    let encoded = encoded.to_owned();
    let pwd = password.as_bytes().to_vec();

    match task::spawn_blocking(move || argon2::verify_encoded(&encoded, &pwd)).await? {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!("{} Stored credential is not a usable Argon2 hash: {}", API_NAME, e);
            Ok(false)
        }
    }
}

/// Runs one verification against a throwaway hash and discards the result.
pub async fn verify_dummy(password: &str) -> anyhow::Result<()> {
    let pwd = password.as_bytes().to_vec();

    task::spawn_blocking(move || {
        let dummy = DUMMY_HASH.get_or_init(|| hash_password("dummy-credential").ok());
        if let Some(encoded) = dummy {
            let _ = argon2::verify_encoded(encoded, &pwd);
        }
    })
    .await?;
    Ok(())
}
