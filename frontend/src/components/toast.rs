use shared::profile::{Toast, ToastKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastMessageProps {
    pub toast: Toast,
    pub on_close: Callback<()>,
}

#[function_component(ToastMessage)]
pub fn toast_message(props: &ToastMessageProps) -> Html {
    let kind_class = match props.toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <div class="toast-body">
                <strong>{ props.toast.title }</strong>
                if let Some(description) = props.toast.description {
                    <p>{ description }</p>
                }
            </div>
            <button class="toast-close" onclick={on_close}>{"×"}</button>
        </div>
    }
}
