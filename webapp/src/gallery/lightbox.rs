use dioxus::prelude::*;

use crate::common::dom::{LIGHTBOX_MEDIA_ID, PageHost, key_name, use_window_listener};
use api::media::MediaKind;
use site::lightbox::{CloseTrigger, Lightbox};

#[derive(Clone, PartialEq, Props)]
pub struct LightboxBoxProps {
    lightbox: Signal<Lightbox>,
}

// LightboxBox
//
// overlay for the gallery.  every way out (button, backdrop, escape) goes
// through Lightbox::close, which pauses video and gives the page its scroll
// back
#[component]
pub fn LightboxBox(props: LightboxBoxProps) -> Element {
    let mut lightbox = props.lightbox;

    let mut close = move |trigger: CloseTrigger| {
        lightbox.with_mut(|lb| lb.close(trigger, &mut PageHost::lightbox()));
    };

    use_window_listener("keydown", move |event| {
        let Some(key) = key_name(&event) else {
            return;
        };

        if lightbox.peek().is_open() {
            lightbox.with_mut(|lb| lb.handle_key(&key, &mut PageHost::lightbox()));
        }
    });

    let state = lightbox.read();
    let caption = state.item().map(|item| item.caption.clone()).unwrap_or_default();

    rsx! {
        div {
            class: "lightbox",
            display: if state.is_open() { "flex" } else { "none" },
            onclick: move |_| close(CloseTrigger::Backdrop),

            div {
                class: "lightbox-content",
                onclick: move |evt| evt.stop_propagation(),

                span {
                    class: "close-lightbox",
                    onclick: move |_| close(CloseTrigger::Button),
                    "×"
                }

                div { id: LIGHTBOX_MEDIA_ID, class: "lightbox-media-container",
                    match state.item() {
                        // a keyed list of one: a new key per open rebuilds the
                        // element, so autoplay starts over even for the same file
                        Some(item) if item.kind == MediaKind::Video => rsx! {
                            for opens in std::iter::once(state.opens()) {
                                video {
                                    key: "{opens}",
                                    src: "{item.src}",
                                    controls: true,
                                    autoplay: true,
                                    max_width: "100%",
                                }
                            }
                        },
                        Some(item) => rsx! {
                            img {
                                src: "{item.src}",
                                alt: "{item.caption}",
                                max_width: "100%",
                            }
                        },
                        None => rsx! {},
                    }
                }

                div { class: "lightbox-caption", "{caption}" }
            }
        }
    }
}
