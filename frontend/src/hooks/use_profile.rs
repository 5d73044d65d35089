use shared::profile::{
    submit_profile, FieldErrors, ProfileField, ProfileForm, ProfileSubmitError, Toast,
};
use shared::User;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct ProfileState {
    pub form: ProfileForm,
    pub errors: FieldErrors,
    pub saving: bool,
}

pub struct UseProfileResult {
    pub state: ProfileState,
    pub actions: UseProfileActions,
}

#[derive(Clone)]
pub struct UseProfileActions {
    pub on_field_change: Callback<(ProfileField, String)>,
    pub submit: Callback<()>,
    pub change_avatar: Callback<File>,
}

/// Callbacks the profile flow reports back through
#[derive(Clone, PartialEq)]
pub struct ProfileEvents {
    /// Backend accepted a change; the payload is the stored user
    pub on_user_updated: Callback<User>,
    /// Profile form saved; the page should be left
    pub on_saved: Callback<()>,
    pub on_toast: Callback<Toast>,
}

#[hook]
pub fn use_profile(
    api_client: &ApiClient,
    user: &User,
    events: &ProfileEvents,
) -> UseProfileResult {
    let form = {
        let user = user.clone();
        use_state(move || ProfileForm::from_user(&user))
    };
    let errors = use_state(FieldErrors::default);
    let saving = use_state(|| false);

    let on_field_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (ProfileField, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let form = form.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let events = events.clone();
        Callback::from(move |_| {
            if *saving {
                return;
            }
            let api_client = api_client.clone();
            let snapshot = (*form).clone();
            let errors = errors.clone();
            let saving = saving.clone();
            let events = events.clone();

            errors.set(FieldErrors::default());
            saving.set(true);
            spawn_local(async move {
                match submit_profile(&api_client, &snapshot).await {
                    Ok(user) => {
                        events.on_user_updated.emit(user);
                        events.on_toast.emit(Toast::profile_updated());
                        events.on_saved.emit(());
                    }
                    Err(ProfileSubmitError::Validation(field_errors)) => {
                        errors.set(field_errors);
                    }
                    Err(ProfileSubmitError::Api(e)) => {
                        gloo::console::error!("Profile update failed:", e.to_string());
                        events.on_toast.emit(Toast::profile_update_failed());
                    }
                }
                saving.set(false);
            });
        })
    };

    let change_avatar = {
        let api_client = api_client.clone();
        let events = events.clone();
        Callback::from(move |file: File| {
            let api_client = api_client.clone();
            let events = events.clone();
            spawn_local(async move {
                match api_client.update_avatar(file).await {
                    Ok(user) => {
                        events.on_user_updated.emit(user);
                        events.on_toast.emit(Toast::avatar_updated());
                    }
                    Err(e) => {
                        gloo::console::error!("Avatar upload failed:", e.to_string());
                    }
                }
            });
        })
    };

    UseProfileResult {
        state: ProfileState {
            form: (*form).clone(),
            errors: (*errors).clone(),
            saving: *saving,
        },
        actions: UseProfileActions {
            on_field_change,
            submit,
            change_avatar,
        },
    }
}
