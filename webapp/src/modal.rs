use dioxus::prelude::*;

use crate::common::dom::{key_name, use_window_listener};
use site::registry::ImageModal;

#[derive(Clone, PartialEq, Props)]
pub struct ImageModalBoxProps {
    modal: Signal<ImageModal>,
}

// ImageModalBox
//
// full-screen viewer over every slider image on the page.  prev/next and the
// arrow keys walk the whole registry, not just the slider that was clicked
#[component]
pub fn ImageModalBox(props: ImageModalBoxProps) -> Element {
    let mut modal = props.modal;

    use_window_listener("keydown", move |event| {
        let Some(key) = key_name(&event) else {
            return;
        };

        if modal.peek().is_open() {
            modal.with_mut(|m| m.handle_key(&key));
        }
    });

    let state = modal.read();
    if state.registry().is_empty() {
        return rsx! {};
    }

    let (src, alt) = match state.current() {
        Some(entry) => (entry.src.clone(), entry.alt.clone()),
        None => (String::new(), String::new()),
    };

    rsx! {
        div {
            id: "image-modal",
            class: "modal",
            display: if state.is_open() { "block" } else { "none" },
            onclick: move |_| modal.with_mut(ImageModal::close),

            span {
                class: "close-modal",
                onclick: move |evt| {
                    evt.stop_propagation();
                    modal.with_mut(ImageModal::close);
                },
                "×"
            }

            // the wrapper around the image counts as background
            div {
                class: "modal-content",
                img {
                    id: "modal-image",
                    src: "{src}",
                    alt: "{alt}",
                    onclick: move |evt| evt.stop_propagation(),
                }
            }

            div {
                class: "modal-caption",
                onclick: move |evt| evt.stop_propagation(),
                "{alt}"
            }

            button {
                class: "modal-nav modal-prev",
                onclick: move |evt| {
                    evt.stop_propagation();
                    modal.with_mut(ImageModal::prev);
                },
                i { class: "fas fa-chevron-left" }
            }
            button {
                class: "modal-nav modal-next",
                onclick: move |evt| {
                    evt.stop_propagation();
                    modal.with_mut(ImageModal::next);
                },
                i { class: "fas fa-chevron-right" }
            }
        }
    }
}
