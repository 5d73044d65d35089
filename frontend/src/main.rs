use gloo::timers::callback::Timeout;
use shared::profile::Toast;
use shared::ClientConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::ToastMessage;
use hooks::use_session;
use pages::{DashboardPage, ProfilePage};

const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Dashboard,
    Profile,
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| ClientConfig::from_build_env());
    let session = use_session();
    let page = use_state(|| Page::Dashboard);
    let toast = use_state(|| Option::<(u32, Toast)>::None);
    let toast_counter = use_mut_ref(|| 0u32);

    let show_toast = {
        let toast = toast.clone();
        let toast_counter = toast_counter.clone();
        Callback::from(move |message: Toast| {
            let id = {
                let mut counter = toast_counter.borrow_mut();
                *counter += 1;
                *counter
            };
            toast.set(Some((id, message)));

            // Only the newest toast clears itself
            let toast = toast.clone();
            let toast_counter = toast_counter.clone();
            Timeout::new(TOAST_DURATION_MS, move || {
                if *toast_counter.borrow() == id {
                    toast.set(None);
                }
            })
            .forget();
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let go_to = |target: Page| {
        let page = page.clone();
        Callback::from(move |_: ()| page.set(target))
    };

    let content = match (&session.session, *page) {
        (None, _) => html! {
            <div class="signed-out">
                <h1>{"GoBarber"}</h1>
                <p>{"Faça seu logon para ver seus agendamentos."}</p>
            </div>
        },
        (Some(current), Page::Dashboard) => html! {
            <DashboardPage
                config={(*config).clone()}
                session={current.clone()}
                on_open_profile={go_to(Page::Profile)}
                on_sign_out={session.actions.sign_out.clone()}
            />
        },
        (Some(current), Page::Profile) => html! {
            <ProfilePage
                config={(*config).clone()}
                session={current.clone()}
                on_user_updated={session.actions.update_user.clone()}
                on_back={go_to(Page::Dashboard)}
                on_toast={show_toast.clone()}
            />
        },
    };

    html! {
        <>
            { content }
            if let Some((_, message)) = &*toast {
                <ToastMessage toast={message.clone()} on_close={dismiss_toast} />
            }
        </>
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}
