use shared::{Session, User};
use yew::prelude::*;

use crate::services::session_storage;

pub struct UseSessionResult {
    pub session: Option<Session>,
    pub actions: UseSessionActions,
}

#[derive(Clone)]
pub struct UseSessionActions {
    /// Replace the signed-in user (after a profile or avatar update)
    pub update_user: Callback<User>,
    pub sign_out: Callback<()>,
}

/// Session restored from local storage and kept in sync with it
#[hook]
pub fn use_session() -> UseSessionResult {
    let session = use_state(session_storage::load_session);

    let update_user = {
        let session = session.clone();
        Callback::from(move |user: User| {
            if let Some(current) = session.as_ref() {
                session_storage::store_user(&user);
                session.set(Some(current.with_user(user)));
            }
        })
    };

    let sign_out = {
        let session = session.clone();
        Callback::from(move |_| {
            session_storage::clear_session();
            session.set(None);
        })
    };

    UseSessionResult {
        session: (*session).clone(),
        actions: UseSessionActions { update_user, sign_out },
    }
}
