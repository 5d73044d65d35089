use shared::User;
use yew::prelude::*;

use super::avatar::Avatar;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: User,
    pub on_open_profile: Callback<()>,
    pub on_sign_out: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_profile = {
        let on_open_profile = props.on_open_profile.clone();
        Callback::from(move |_: MouseEvent| on_open_profile.emit(()))
    };
    let on_sign_out = {
        let on_sign_out = props.on_sign_out.clone();
        Callback::from(move |_: MouseEvent| on_sign_out.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <span class="logo">{"GoBarber"}</span>
                <div class="profile" onclick={on_profile}>
                    <Avatar
                        avatar_url={props.user.avatar_url.clone()}
                        name={props.user.name.clone()}
                    />
                    <div class="profile-greeting">
                        <span>{"Bem-vindo,"}</span>
                        <strong>{ &props.user.name }</strong>
                    </div>
                </div>
                <button class="sign-out" onclick={on_sign_out}>{"Sair"}</button>
            </div>
        </header>
    }
}
