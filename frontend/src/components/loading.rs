use yew::prelude::*;

pub const DEFAULT_LOADING_COLOR: &str = "#312e38";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingKind {
    Blank,
    Balls,
    Bars,
    Bubbles,
    Cubes,
    Cylon,
    Spin,
    SpinningBubbles,
    #[default]
    Spokes,
}

impl LoadingKind {
    fn class_name(&self) -> &'static str {
        match self {
            LoadingKind::Blank => "blank",
            LoadingKind::Balls => "balls",
            LoadingKind::Bars => "bars",
            LoadingKind::Bubbles => "bubbles",
            LoadingKind::Cubes => "cubes",
            LoadingKind::Cylon => "cylon",
            LoadingKind::Spin => "spin",
            LoadingKind::SpinningBubbles => "spinning-bubbles",
            LoadingKind::Spokes => "spokes",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub kind: LoadingKind,
    #[prop_or(AttrValue::Static(DEFAULT_LOADING_COLOR))]
    pub color: AttrValue,
    #[prop_or(32)]
    pub width: u32,
    #[prop_or(32)]
    pub height: u32,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let style = format!(
        "width: {}px; height: {}px; color: {};",
        props.width, props.height, props.color
    );

    html! {
        <div
            class={classes!("loading", format!("loading-{}", props.kind.class_name()))}
            style={style}
            role="progressbar"
            aria-busy="true"
        />
    }
}
