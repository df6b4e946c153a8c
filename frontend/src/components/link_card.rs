use web_sys::window;
use yew::prelude::*;

/// Class the landing stylesheet hangs card looks and the entry animation on.
pub const LINK_CARD_CLASS: &str = "link-card";

#[derive(Properties, PartialEq)]
pub struct LinkCardProps {
    pub link: String,
    #[prop_or_default]
    pub children: Children,
}

/// Opens `link` in a new browsing context.
pub fn open_in_new_tab(link: &str) {
    if link.is_empty() {
        gloo_console::warn!("Card has no link to open");
        return;
    }
    let Some(window) = window() else { return };
    if let Err(e) = window.open_with_url_and_target(link, "_blank") {
        gloo_console::error!("Failed to open link:", e);
    }
}

#[function_component(LinkCard)]
pub fn link_card(props: &LinkCardProps) -> Html {
    let onclick = {
        let link = props.link.clone();
        Callback::from(move |_: MouseEvent| open_in_new_tab(&link))
    };

    html! {
        <div onclick={onclick} class={LINK_CARD_CLASS}>
            { for props.children.iter() }
        </div>
    }
}
