use crate::constants::API_NAME;
use crate::models::UserSummary;
use crate::repository::UserRepository;
use crate::service::password::{verify_dummy, verify_password};
use anyhow::Context;

#[derive(Clone)]
pub struct LoginService {
    user_repo: UserRepository,
}

impl LoginService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// The first user (by id) with this username whose hash accepts `password`.
    /// `Ok(None)` covers both an unknown username and a wrong password.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> anyhow::Result<Option<UserSummary>> {
        let candidates = self
            .user_repo
            .find_all_by_username(username)
            .await
            .context("Failed to look up user")?;

        if candidates.is_empty() {
            // Unknown names cost one verification, like known ones.
            verify_dummy(password).await?;
            tracing::info!("{} Login failed: unknown user {}", API_NAME, username);
            return Ok(None);
        }

        let mut matched = None;
        for candidate in candidates {
            if verify_password(&candidate.password, password).await? {
                matched = Some(candidate);
                break;
            }
        }

        let Some(user) = matched else {
            tracing::info!("{} Login failed: wrong password for {}", API_NAME, username);
            return Ok(None);
        };

        tracing::info!("{} User {} logged in", API_NAME, user.username);
        Ok(Some(user.into()))
    }
}
