use yew::prelude::*;

/// Placeholder shown for users that never uploaded an avatar
pub const DEFAULT_AVATAR: &str = "https://api.adorable.io/avatars/56/gobarber.png";

pub fn avatar_src(avatar_url: Option<&str>) -> String {
    match avatar_url {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => DEFAULT_AVATAR.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub avatar_url: Option<String>,
    pub name: AttrValue,
    #[prop_or(56)]
    pub size: u32,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    html! {
        <img
            class="avatar"
            src={avatar_src(props.avatar_url.as_deref())}
            alt={props.name.clone()}
            width={props.size.to_string()}
            height={props.size.to_string()}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_src_falls_back_to_default() {
        assert_eq!(avatar_src(None), DEFAULT_AVATAR);
        assert_eq!(avatar_src(Some("  ")), DEFAULT_AVATAR);
        assert_eq!(avatar_src(Some("http://cdn/a.png")), "http://cdn/a.png");
    }
}
