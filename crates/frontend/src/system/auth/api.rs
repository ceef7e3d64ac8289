use contracts::domain::a003_registration::RegistrationPayload;
use contracts::domain::a004_profile::user_endpoint;
use contracts::domain::common::ClientResult;
use contracts::system::auth::{GetUserResponse, LoginData, UserInfo};
use serde::Deserialize;

use super::context::SessionStore;
use crate::shared::http::{get_with_auth, post};

/// Answer of `POST /auth/register`
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// Create an account
pub async fn register(payload: &RegistrationPayload) -> ClientResult<RegisterResponse> {
    log::info!("Registering {}", payload.email());
    post("/auth/register", payload).await
}

/// Re-read the signed-in user after a profile change
pub async fn refresh_user(session: SessionStore, user_id: &str) -> ClientResult<LoginData> {
    let response: GetUserResponse = get_with_auth(session, &user_endpoint(user_id)).await?;
    Ok(response.into_login_data())
}
