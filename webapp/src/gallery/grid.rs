use dioxus::prelude::*;

use api::media::{MediaFile, MediaKind};
use site::lightbox::LightboxItem;

#[derive(Clone, PartialEq, Props)]
pub struct GalleryTileProps {
    file: MediaFile,
    onopen: EventHandler<LightboxItem>,
}

// one thumbnail.  the tile carries everything the lightbox needs, so opening
// it never goes back to the gallery state
#[component]
pub fn GalleryTile(props: GalleryTileProps) -> Element {
    let onopen = props.onopen;
    let file = props.file;
    let item = LightboxItem::from(&file);
    let open_item = item.clone();

    rsx! {
        div {
            class: "gallery-item",
            "data-src": "{item.src}",
            "data-type": item.kind.as_str(),
            "data-caption": "{item.caption}",
            onclick: move |_| onopen.call(open_item.clone()),

            div { class: "thumbnail",
                match item.kind {
                    MediaKind::Video => rsx! {
                        video { muted: true, r#loop: true, playsinline: true,
                            source { src: "{item.src}", r#type: "video/{file.extension}" }
                        }
                        div { class: "play-icon",
                            i { class: "fas fa-play" }
                        }
                    },
                    MediaKind::Image => rsx! {
                        img {
                            src: "{item.src}",
                            alt: "{item.caption}",
                            "loading": "lazy",
                        }
                    },
                }
            }
        }
    }
}
