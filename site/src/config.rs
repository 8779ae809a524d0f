use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::{
    listing::{DEFAULT_API_HOST, ListingSource},
    media::SUPPORTED_FORMATS,
};

// site configuration
//
// everything the page renders or tunes comes from here.  optional sections
// double as capability checks: a component whose section is missing (or empty)
// renders nothing at all
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub hero: Option<HeroConfig>,
    #[serde(default)]
    pub headings: SectionHeadings,

    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub products: Vec<ProductConfig>,
    #[serde(default)]
    pub advantages: Vec<AdvantageTab>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub gallery: Option<GalleryConfig>,
    #[serde(default)]
    pub contact: Option<ContactConfig>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HeroConfig {
    pub heading: String,
    #[serde(default)]
    pub text: String,
    pub cta_label: Option<String>,
    pub cta_href: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SectionHeadings {
    pub products: String,
    pub advantages: String,
    pub testimonials: String,
    pub gallery: String,
    pub contact: String,
}

impl Default for SectionHeadings {
    fn default() -> Self {
        SectionHeadings {
            products: String::from("Produk Kami"),
            advantages: String::from("Keunggulan Kami"),
            testimonials: String::from("Apa Kata Mereka"),
            gallery: String::from("Galeri"),
            contact: String::from("Hubungi Kami"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SliderConfig {
    #[serde(default = "default_autoplay_ms")]
    pub autoplay_ms: u32,
    // horizontal travel, in css pixels, before a touch counts as a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        SliderConfig {
            autoplay_ms: default_autoplay_ms(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ScrollConfig {
    #[serde(default = "default_shadow_offset")]
    pub shadow_offset: f64,
    #[serde(default = "default_reveal_margin")]
    pub reveal_margin: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            shadow_offset: default_shadow_offset(),
            reveal_margin: default_reveal_margin(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProductConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slides: Vec<SlideConfig>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SlideConfig {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

// the panel for a tab is looked up as "{id}-advantages"
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AdvantageTab {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub cards: Vec<AdvantageCard>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AdvantageCard {
    pub title: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GalleryConfig {
    #[serde(default = "default_api_host")]
    pub api_host: String,
    pub owner: String,
    pub repo: String,
    pub folder: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    #[serde(default)]
    pub labels: GalleryLabels,
}

impl GalleryConfig {
    pub fn source(&self) -> ListingSource {
        ListingSource {
            api_host: self.api_host.clone(),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            folder: self.folder.clone(),
            branch: self.branch.clone(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GalleryLabels {
    #[serde(default = "default_load_more")]
    pub load_more: String,
    #[serde(default = "default_loading_more")]
    pub loading_more: String,
    #[serde(default = "default_loading")]
    pub loading: String,
    #[serde(default = "default_retry")]
    pub retry: String,
}

impl Default for GalleryLabels {
    fn default() -> Self {
        GalleryLabels {
            load_more: default_load_more(),
            loading_more: default_loading_more(),
            loading: default_loading(),
            retry: default_retry(),
        }
    }
}

fn default_autoplay_ms() -> u32 {
    5000
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn default_shadow_offset() -> f64 {
    50.0
}

fn default_reveal_margin() -> f64 {
    100.0
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_owned()
}

fn default_branch() -> String {
    String::from("main")
}

fn default_page_size() -> usize {
    9
}

fn default_formats() -> Vec<String> {
    SUPPORTED_FORMATS.iter().map(|f| f.to_string()).collect()
}

fn default_load_more() -> String {
    String::from("Lihat Selengkapnya")
}

fn default_loading_more() -> String {
    String::from("Memuat...")
}

fn default_loading() -> String {
    String::from("Memuat galeri...")
}

fn default_retry() -> String {
    String::from("Coba Lagi")
}

// the site table is a subtable of the root node so that the file can carry
// other tables (build tooling, notes) without confusing the parser
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    site: SiteConfig,
}

#[instrument(level = Level::DEBUG, skip_all)]
pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;
    let config = data.site;

    if let Some(gallery) = &config.gallery {
        if gallery.page_size == 0 {
            bail!("gallery page_size must be at least 1");
        }
    }

    if config.slider.autoplay_ms == 0 {
        bail!("slider autoplay_ms must be at least 1");
    }

    debug!("successfully parsed site config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_takes_defaults() {
        let config = parse_config("[site]\ntitle = \"Toko\"\n").unwrap();

        assert_eq!(config.title, "Toko");
        assert_eq!(config.gallery, None);
        assert_eq!(config.slider.autoplay_ms, 5000);
        assert_eq!(config.slider.swipe_threshold, 50.0);
        assert_eq!(config.scroll.shadow_offset, 50.0);
        assert_eq!(config.scroll.reveal_margin, 100.0);
        assert!(config.products.is_empty());
        assert_eq!(config.headings.gallery, "Galeri");
    }

    #[test]
    fn gallery_section_fills_defaults() {
        let doc = r#"
            [site]
            title = "Toko"

            [site.gallery]
            owner = "amgeekz"
            repo = "megahjayapvc"
            folder = "galeri"
        "#;

        let gallery = parse_config(doc).unwrap().gallery.unwrap();

        assert_eq!(gallery.page_size, 9);
        assert_eq!(gallery.branch, "main");
        assert_eq!(gallery.formats, vec!["jpg", "jpeg", "png", "gif", "mp4", "webm"]);
        assert_eq!(gallery.labels.retry, "Coba Lagi");
        assert_eq!(
            gallery.source().url(),
            "https://api.github.com/repos/amgeekz/megahjayapvc/contents/galeri?ref=main"
        );
    }

    #[test]
    fn products_and_tabs_parse() {
        let doc = r#"
            [site]
            title = "Toko"

            [[site.products]]
            name = "Pipa"
            slides = [{ src = "img/pipa1.jpg", alt = "Pipa 1" }, { src = "img/pipa2.jpg" }]

            [[site.advantages]]
            id = "quality"
            label = "Kualitas"
            cards = [{ title = "Tahan lama" }]
        "#;

        let config = parse_config(doc).unwrap();

        assert_eq!(config.products[0].slides.len(), 2);
        assert_eq!(config.products[0].slides[1].alt, "");
        assert_eq!(config.advantages[0].cards[0].title, "Tahan lama");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let doc = r#"
            [site]
            title = "Toko"

            [site.gallery]
            owner = "o"
            repo = "r"
            folder = "f"
            page_size = 0
        "#;

        assert!(parse_config(doc).is_err());
    }

    #[test]
    fn missing_site_table_is_an_error() {
        assert!(parse_config("title = \"Toko\"").is_err());
    }
}
