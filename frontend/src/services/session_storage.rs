//! Session persistence in the browser's local storage.
//!
//! The token is stored as a bare string and the user as JSON, under the keys
//! the rest of the GoBarber web client already uses.

use gloo::storage::{LocalStorage, Storage};
use shared::session::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use shared::{Session, User};
use tracing::warn;

pub fn load_session() -> Option<Session> {
    let token = LocalStorage::raw().get_item(TOKEN_STORAGE_KEY).ok().flatten()?;

    match LocalStorage::get::<User>(USER_STORAGE_KEY) {
        Ok(user) => Some(Session::new(token, user)),
        Err(e) => {
            warn!(error = %e, "stored session has no readable user");
            None
        }
    }
}

pub fn store_user(user: &User) {
    if let Err(e) = LocalStorage::set(USER_STORAGE_KEY, user) {
        warn!(error = %e, "failed to persist user");
    }
}

pub fn clear_session() {
    LocalStorage::delete(TOKEN_STORAGE_KEY);
    LocalStorage::delete(USER_STORAGE_KEY);
}
