use dioxus::prelude::*;

use crate::common::dom::{HEADER_ID, scroll_to_anchor, scroll_y, use_window_listener};
use site::{
    config::SiteConfig,
    nav::{HeaderShadow, MenuState, anchor_target, is_same_page_anchor},
};

#[derive(Clone, PartialEq, Props)]
pub struct AnchorLinkProps {
    #[props(into)]
    href: String,
    #[props(into, default)]
    class: String,
    #[props(default)]
    onfollow: Option<EventHandler<()>>,
    children: Element,
}

// AnchorLink
//
// same-page anchors scroll smoothly below the fixed header instead of jumping;
// everything else is a plain link
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let href = props.href.clone();
    let onfollow = props.onfollow;

    rsx! {
        a {
            href: "{props.href}",
            class: "{props.class}",
            onclick: move |evt| {
                if is_same_page_anchor(&href) {
                    evt.prevent_default();
                    if let Some(id) = anchor_target(&href) {
                        scroll_to_anchor(id);
                    }
                }
                if let Some(onfollow) = onfollow {
                    onfollow.call(());
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SiteHeaderProps {
    config: &'static SiteConfig,
}

#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    let config = props.config;
    let threshold = config.scroll.shadow_offset;

    let mut menu = use_signal(MenuState::default);
    let mut shadow = use_signal(|| HeaderShadow::for_offset(scroll_y(), threshold));

    use_window_listener("scroll", move |_| {
        let next = HeaderShadow::for_offset(scroll_y(), threshold);
        if *shadow.peek() != next {
            shadow.set(next);
        }
    });

    let open = menu().is_open();

    rsx! {
        header { id: HEADER_ID, box_shadow: shadow().box_shadow(),
            div { class: "container nav-container",
                AnchorLink { href: "#", class: "logo", "{config.title}" }

                div {
                    id: "mobile-menu",
                    class: if open { "menu-toggle active" } else { "menu-toggle" },
                    onclick: move |_| menu.with_mut(MenuState::toggle),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }

                ul {
                    id: "nav-links",
                    class: if open { "nav-links active" } else { "nav-links" },
                    for link in config.nav.iter() {
                        li { key: "{link.href}",
                            AnchorLink {
                                href: link.href.clone(),
                                onfollow: move |_| menu.with_mut(MenuState::close),
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
