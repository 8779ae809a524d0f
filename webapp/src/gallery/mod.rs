use dioxus::prelude::*;

use crate::common::dom::PageHost;
use site::{
    config::GalleryConfig,
    gallery::{GalleryState, GalleryStore, GridView, HttpListing, load_gallery, retry_gallery},
    lightbox::Lightbox,
};

pub mod grid;
use grid::GalleryTile;

mod lightbox;
use lightbox::LightboxBox;

// the gallery state lives in a signal; the loader borrows it only between
// awaits, through this store
struct SignalStore(Signal<GalleryState>);

impl GalleryStore for SignalStore {
    fn with_state<R>(&mut self, f: impl FnOnce(&mut GalleryState) -> R) -> R {
        self.0.with_mut(f)
    }
}

fn spawn_load(state: Signal<GalleryState>, config: &'static GalleryConfig, page: usize) {
    spawn(async move {
        let fetcher = HttpListing::new(config.source());
        load_gallery(&mut SignalStore(state), &fetcher, page).await;
    });
}

fn spawn_retry(state: Signal<GalleryState>, config: &'static GalleryConfig) {
    spawn(async move {
        let fetcher = HttpListing::new(config.source());
        retry_gallery(&mut SignalStore(state), &fetcher).await;
    });
}

#[derive(Clone, PartialEq, Props)]
pub struct GalleryProps {
    config: &'static GalleryConfig,
}

// Gallery
//
// grid of the remote folder's media, a page at a time, with the lightbox
// attached.  the first page is requested as soon as the grid mounts
#[component]
pub fn Gallery(props: GalleryProps) -> Element {
    let config = props.config;
    let labels = &config.labels;

    let state = use_signal(|| GalleryState::new(config.page_size, config.formats.clone()));
    let mut lightbox = use_signal(Lightbox::default);

    use_hook(move || spawn_load(state, config, 1));

    let gallery = state.read();
    let load_more = gallery.load_more();

    rsx! {
        div { id: "galleryGrid", class: "gallery-grid",
            match gallery.view() {
                GridView::Loading => rsx! {
                    div { class: "loading",
                        i { class: "fas fa-spinner fa-spin" }
                        " {labels.loading}"
                    }
                },
                GridView::Error(message) => rsx! {
                    div { class: "error",
                        i { class: "fas fa-exclamation-triangle" }
                        p { "{message}" }
                        button {
                            class: "retry-button",
                            onclick: move |_| spawn_retry(state, config),
                            "{labels.retry}"
                        }
                    }
                },
                GridView::Items(items) => rsx! {
                    // dioxus delegates tile clicks from the root, so pages
                    // appended by load-more need no extra wiring
                    for (index, file) in items.iter().enumerate() {
                        GalleryTile {
                            key: "{index}",
                            file: file.clone(),
                            onopen: move |item| {
                                lightbox.with_mut(|lb| lb.open(item, &mut PageHost::lightbox()));
                            },
                        }
                    }
                },
            }
        }

        div { class: "load-more-container",
            button {
                class: "load-more-btn",
                display: if load_more.visible { "inline-block" } else { "none" },
                disabled: !load_more.enabled,
                onclick: move |_| {
                    let next = state.peek().current_page() + 1;
                    spawn_load(state, config, next);
                },
                if load_more.loading {
                    "{labels.loading_more}"
                } else {
                    "{labels.load_more}"
                }
            }
        }

        LightboxBox { lightbox }
    }
}
