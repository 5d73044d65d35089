use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::tooltip::Tooltip;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    /// Validation message for this field, if any
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub container_class: Classes,
    pub on_change: Callback<String>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let is_focused = use_state(|| false);

    let onfocus = {
        let is_focused = is_focused.clone();
        Callback::from(move |_: FocusEvent| is_focused.set(true))
    };
    let onblur = {
        let is_focused = is_focused.clone();
        Callback::from(move |_: FocusEvent| is_focused.set(false))
    };
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let class = classes!(
        "input-container",
        props.container_class.clone(),
        (*is_focused).then_some("focused"),
        (!props.value.is_empty()).then_some("filled"),
        props.error.is_some().then_some("errored"),
    );

    html! {
        <div class={class}>
            <input
                name={props.name.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {onfocus}
                {onblur}
                {oninput}
            />
            if let Some(error) = &props.error {
                <Tooltip title={error.clone()} class={classes!("input-error")}>
                    <span class="input-error-icon">{"!"}</span>
                </Tooltip>
            }
        </div>
    }
}
