use chrono::{Datelike, Local};
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::{
    Route,
    carousel::{ProductSlider, SlideClick},
    common::dom::resolve_url,
    gallery::Gallery,
    modal::ImageModalBox,
    nav::{AnchorLink, SiteHeader},
    reveal::{Reveal, use_reveal_root},
    site_config,
    tabs::AdvantageTabs,
};
use site::{
    config::{ProductConfig, SiteConfig},
    registry::{ImageModal, ImageRegistry, RegistryEntry, SlideRef},
};

#[component]
pub fn Home() -> Element {
    match site_config() {
        Ok(config) => rsx! {
            Storefront { config }
        },
        Err(err) => rsx! {
            div { class: "container config-error",
                h1 { "Site configuration error" }
                pre { "{err}" }
            }
        },
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "container",
            h1 { "Halaman tidak ditemukan" }
            p { "/{path}" }
            Link { to: Route::Home {}, "Kembali ke beranda" }
        }
    }
}

// every slide image across every slider, in page order
fn build_registry(products: &[ProductConfig]) -> ImageRegistry {
    ImageRegistry::build(products.iter().enumerate().flat_map(|(slider, product)| {
        product
            .slides
            .iter()
            .enumerate()
            .map(move |(slide, config)| RegistryEntry {
                src: resolve_url(&config.src),
                alt: config.alt.clone(),
                source: SlideRef { slider, slide },
            })
    }))
}

#[derive(Clone, PartialEq, Props)]
struct StorefrontProps {
    config: &'static SiteConfig,
}

#[component]
fn Storefront(props: StorefrontProps) -> Element {
    let config = props.config;

    use_reveal_root(config.scroll.reveal_margin);

    let mut modal = use_signal(|| ImageModal::new(build_registry(&config.products)));

    let year = Local::now().year();

    let open_image = move |click: SlideClick| {
        modal.with_mut(|m| {
            m.open_for(click.source, &click.src);
        });
    };

    rsx! {
        SiteHeader { config }

        main {
            if let Some(hero) = &config.hero {
                section { id: "home", class: "hero",
                    div { class: "container",
                        h1 { "{hero.heading}" }
                        p { "{hero.text}" }
                        if let (Some(label), Some(href)) = (&hero.cta_label, &hero.cta_href) {
                            AnchorLink { href: href.clone(), class: "btn", "{label}" }
                        }
                    }
                }
            }

            if !config.products.is_empty() {
                section { id: "products", class: "products",
                    div { class: "container",
                        Reveal { class: "section-title",
                            h2 { "{config.headings.products}" }
                        }
                        div { class: "product-grid",
                            for (index, product) in config.products.iter().enumerate() {
                                Reveal { key: "{index}", class: "product-card",
                                    if !product.slides.is_empty() {
                                        ProductSlider {
                                            slider_index: index,
                                            product,
                                            settings: &config.slider,
                                            on_image_click: open_image,
                                        }
                                    }
                                    h3 { "{product.name}" }
                                    p { "{product.description}" }
                                }
                            }
                        }
                    }
                }
            }

            if !config.advantages.is_empty() {
                section { id: "advantages", class: "advantages",
                    div { class: "container",
                        Reveal { class: "section-title",
                            h2 { "{config.headings.advantages}" }
                        }
                        AdvantageTabs { tabs: config.advantages.as_slice() }
                    }
                }
            }

            if !config.testimonials.is_empty() {
                section { id: "testimonials",
                    div { class: "container",
                        Reveal { class: "section-title",
                            h2 { "{config.headings.testimonials}" }
                        }
                        Reveal { class: "testimonials",
                            div { class: "testimonial-grid",
                                for (index, testimonial) in config.testimonials.iter().enumerate() {
                                    blockquote { key: "{index}", class: "testimonial",
                                        p { "“{testimonial.quote}”" }
                                        cite { "{testimonial.author}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            match &config.gallery {
                Some(gallery) => rsx! {
                    section { id: "gallery",
                        div { class: "container",
                            Reveal { class: "section-title",
                                h2 { "{config.headings.gallery}" }
                            }
                            Reveal { class: "gallery",
                                Gallery { config: gallery }
                            }
                        }
                    }
                },
                None => {
                    debug!("no gallery configured");
                    rsx! {}
                }
            }

            if let Some(contact) = &config.contact {
                section { id: "contact", class: "contact",
                    div { class: "container",
                        Reveal { class: "section-title",
                            h2 { "{config.headings.contact}" }
                        }
                        p { "{contact.address}" }
                        p { "{contact.phone}" }
                        p { "{contact.email}" }
                    }
                }
            }
        }

        footer {
            div { class: "container",
                p { "© {year} {config.title}. {config.tagline}" }
            }
        }

        ImageModalBox { modal }
    }
}
