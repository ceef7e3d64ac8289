use contracts::domain::common::ClientResult;
use contracts::shared::storage_keys::{authorization, LOGIN_DATA, PROFILE_DATA};
use contracts::system::auth::{LoginData, UserInfo};
use leptos::prelude::*;

use super::storage;

/// Reactive view of the persisted session.
///
/// Signals are the source of truth for components; every write goes
/// through to local storage so a reload restores the same state.
#[derive(Clone, Copy)]
pub struct SessionStore {
    token: RwSignal<Option<String>>,
    login_data: RwSignal<Option<LoginData>>,
}

impl SessionStore {
    /// Load whatever the previous page session left behind
    pub fn restore() -> Self {
        let token = storage::get_auth_token();
        let login_data = storage::get_json::<LoginData>(LOGIN_DATA);
        log::debug!(
            "Session restored: token={}, user={}",
            token.is_some(),
            login_data.as_ref().map(|d| d.user.id.as_str()).unwrap_or("-")
        );
        Self {
            token: RwSignal::new(token),
            login_data: RwSignal::new(login_data),
        }
    }

    pub fn has_session(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Bearer header for protected calls; every request reads the token here
    pub fn authorization(&self) -> ClientResult<String> {
        self.token.with_untracked(|t| authorization(t.as_deref()))
    }

    pub fn login_data(&self) -> Option<LoginData> {
        self.login_data.get()
    }

    pub fn login_data_untracked(&self) -> Option<LoginData> {
        self.login_data.get_untracked()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.login_data.with(|d| d.as_ref().map(|d| d.user.clone()))
    }

    pub fn user_untracked(&self) -> Option<UserInfo> {
        self.login_data
            .with_untracked(|d| d.as_ref().map(|d| d.user.clone()))
    }

    pub fn set_login_data(&self, data: LoginData) {
        storage::set_json(LOGIN_DATA, &data);
        storage::set_json(PROFILE_DATA, &data.profile);
        self.login_data.set(Some(data));
    }

    /// Apply a change to the cached login data and persist it
    pub fn update_login_data(&self, change: impl FnOnce(&mut LoginData)) {
        let Some(mut data) = self.login_data.get_untracked() else {
            return;
        };
        change(&mut data);
        self.set_login_data(data);
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.token.set(None);
        self.login_data.set(None);
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionStore::restore());
    children()
}

/// Hook to access the session store
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionProvider not found in component tree")
}
