use shared::profile::{ProfileField, Toast};
use shared::{ClientConfig, Session, User};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{Avatar, Button, Input};
use crate::hooks::{use_profile, ProfileEvents};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub config: ClientConfig,
    pub session: Session,
    pub on_user_updated: Callback<User>,
    pub on_back: Callback<()>,
    pub on_toast: Callback<Toast>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let api_client = use_memo((props.config.clone(), props.session.clone()), |(config, session)| {
        ApiClient::new(config.clone(), session.clone())
    });
    let events = ProfileEvents {
        on_user_updated: props.on_user_updated.clone(),
        on_saved: props.on_back.clone(),
        on_toast: props.on_toast.clone(),
    };
    let profile = use_profile(&api_client, &props.session.user, &events);
    let state = &profile.state;
    let form = &state.form;

    let onsubmit = {
        let submit = profile.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_avatar_change = {
        let change_avatar = profile.actions.change_avatar.clone();
        Callback::from(move |e: Event| {
            let file = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                change_avatar.emit(file);
            }
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    // (field, value, placeholder, input type)
    let fields = [
        (ProfileField::Name, form.name.as_str(), "Nome", "text"),
        (ProfileField::Email, form.email.as_str(), "E-mail", "email"),
        (ProfileField::OldPassword, form.old_password.as_str(), "Senha atual", "password"),
        (ProfileField::Password, form.password.as_str(), "Nova senha", "password"),
        (
            ProfileField::ConfirmPassword,
            form.confirm_password.as_str(),
            "Confirmar senha",
            "password",
        ),
    ];
    let inputs = fields.into_iter().map(|(field, value, placeholder, input_type)| {
        let on_field_change = profile.actions.on_field_change.clone();
        let on_change = Callback::from(move |value: String| on_field_change.emit((field, value)));
        let first_password = field == ProfileField::OldPassword;
        html! {
            <Input
                key={field.name()}
                name={field.name()}
                {input_type}
                {placeholder}
                value={value.to_string()}
                error={state.errors.get(field).map(AttrValue::from)}
                container_class={classes!(first_password.then_some("section-start"))}
                {on_change}
            />
        }
    });

    html! {
        <div class="profile-page">
            <header>
                <button class="back" onclick={on_back}>{"←"}</button>
            </header>
            <main class="content">
                <form {onsubmit}>
                    <div class="avatar-profile">
                        <Avatar
                            avatar_url={props.session.user.avatar_url.clone()}
                            name={props.session.user.name.clone()}
                            size={186}
                        />
                        <label for="avatar">
                            <input
                                type="file"
                                id="avatar"
                                accept="image/*"
                                onchange={on_avatar_change}
                            />
                        </label>
                    </div>

                    <h1>{"Meu perfil"}</h1>

                    { for inputs }

                    <Button loading={state.saving} button_type="submit">
                        {"Atualizar perfil"}
                    </Button>
                </form>
            </main>
        </div>
    }
}
