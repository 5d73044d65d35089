use yew::prelude::*;

use super::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub loading: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Html,
}

/// Primary action button; while `loading` it is disabled and shows a spinner
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            class="button"
            type={props.button_type.clone()}
            disabled={props.loading}
            onclick={props.onclick.clone()}
        >
            if props.loading {
                <Loading color="#fff" width={24} height={24} />
            } else {
                { props.children.clone() }
            }
        </button>
    }
}
