use contracts::domain::a004_profile::{section_endpoint, ProfileSection};
use contracts::domain::common::ClientResult;
use contracts::system::auth::{AccountRole, LoginData};

use crate::shared::http::put_with_auth;
use crate::system::auth::api;
use crate::system::auth::context::SessionStore;

/// PUT one section to the resource that owns it
pub async fn save_section<T: ProfileSection>(
    session: SessionStore,
    role: AccountRole,
    user_id: &str,
    section: &T,
) -> ClientResult<()> {
    let path = section_endpoint(T::KIND, role, user_id);
    log::debug!("PUT {} ({})", path, T::KIND.title());
    put_with_auth(session, &path, &section.to_payload()).await
}

/// Fresh user + profile after a save
pub async fn refresh_login(session: SessionStore, user_id: &str) -> ClientResult<LoginData> {
    api::refresh_user(session, user_id).await
}
