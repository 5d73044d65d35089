use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    html! {
        <div class={classes!("tooltip", props.class.clone())}>
            { props.children.clone() }
            <span class="tooltip-title">{ props.title.clone() }</span>
        </div>
    }
}
